//! Profiling primitives for understanding how states are shared among taxa.

mod frequency;

pub use frequency::{profile_states, StateFrequency, StateFrequencyProfile};
