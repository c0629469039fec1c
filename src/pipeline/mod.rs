//! Configuration and execution of a character analysis.

mod runner;

pub use runner::{score_character, Analysis, AnalysisConfig, CharacterScore};
