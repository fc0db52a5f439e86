//! Error types for the portfolio motion core

use thiserror::Error;

/// Main error type for motion state machines
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PortfolioError {
    /// The typewriter was given no phrases to cycle through
    #[error("Phrase list is empty")]
    EmptyPhrases,

    /// Cursor catch-up rate outside (0, 1]
    #[error("Invalid catch-up rate: {0} (expected 0 < rate <= 1)")]
    InvalidCatchUp(f64),

    /// Reveal threshold outside [0, 1]
    #[error("Invalid visibility threshold: {0} (expected 0 <= threshold <= 1)")]
    InvalidThreshold(f64),

    /// Element geometry could not be measured
    #[error("Visibility probe failed: {0}")]
    Probe(String),
}

/// Result type alias for motion operations
pub type Result<T> = std::result::Result<T, PortfolioError>;
