//! Best-character coefficients for categorical taxonomic data
//!
//! This library scores how well a single categorical character discriminates
//! between taxa. Taxa may be polymorphic, allowing several states at once.
//!
//! # Overview
//!
//! - **data**: Taxa, their state lists, and the single-column input format
//! - **profile**: State frequencies (`k{i}`, `SIG{i}`)
//! - **coefficient**: Information, separation and Jaccard coefficients,
//!   plus two-decimal rounding
//! - **pipeline**: Configuration and execution of an analysis
//! - **report**: Summary and detail text reports
//!
//! # Example
//!
//! ```
//! use bestchar::prelude::*;
//!
//! let taxa = TaxonStateSet::from_labels(vec![
//!     vec!["red"],
//!     vec!["white", "red"],
//!     vec!["white"],
//!     vec!["white"],
//! ])
//! .unwrap();
//! let character = CharacterData::new("Petal colour", taxa);
//!
//! let score = Analysis::new().run(&character).unwrap();
//! assert_eq!(score.information.intkey.rounded.to_string(), "0.63");
//! assert_eq!(score.pairwise.separation_rounded.to_string(), "0.33");
//! ```

pub mod coefficient;
pub mod data;
pub mod error;
pub mod pipeline;
pub mod profile;
pub mod report;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::coefficient::{
        coef_information, coef_pairwise, compare_taxa, DegeneratePolicy,
        InformationCoefficients, InformationScore, LogBase, PairComparison,
        PairwiseCoefficients, Rounded,
    };
    pub use crate::data::{CharacterData, Taxon, TaxonStateSet, DEFAULT_SEPARATOR};
    pub use crate::error::{BestcharError, Result};
    pub use crate::pipeline::{score_character, Analysis, AnalysisConfig, CharacterScore};
    pub use crate::profile::{profile_states, StateFrequency, StateFrequencyProfile};
    pub use crate::report::{
        write_details, write_details_file, write_summary, write_summary_file, DETAILS_FILE,
        SUMMARY_FILE,
    };
}
