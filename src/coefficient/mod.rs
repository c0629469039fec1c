//! Best-character coefficients.

pub mod information;
pub mod pairwise;
mod round;

pub use information::{
    coef_information, weighted_log_sum, DegeneratePolicy, InformationCoefficients,
    InformationScore, InformationTerm, LogBase,
};
pub use pairwise::{coef_pairwise, compare_taxa, PairComparison, PairwiseCoefficients};
pub use round::Rounded;
