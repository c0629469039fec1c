//! Error types for the bestchar library.

use thiserror::Error;

/// Main error type for the library.
#[derive(Error, Debug)]
pub enum BestcharError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed input at line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    #[error("Empty data: {0}")]
    EmptyData(String),

    #[error("Degenerate character: only {n_states} distinct state observed, logarithm base is undefined")]
    DegenerateCharacter { n_states: usize },

    #[error("Degenerate taxon count: {n_taxa} taxa, at least 2 are required")]
    DegenerateTaxonCount { n_taxa: usize },

    #[error("Numerical error: {0}")]
    Numerical(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, BestcharError>;
