//! Error types for the fortnight library

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the fortnight library
#[derive(Error, Debug)]
pub enum Error {
    /// Input matched no date grammar, or named a date that does not exist
    #[error("Invalid date: {0} (please enter a valid date, e.g. 9/1 or 9月1日)")]
    Parse(String),

    /// Anchor date cannot start a full two-week list
    #[error("Invalid date: {0}")]
    InvalidAnchor(String),

    /// Week arithmetic produced a result that breaks the Monday invariant
    #[error("Calendar arithmetic inconsistency: {0}")]
    CalendarInconsistency(String),

    /// A single clipboard tier failed
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Every clipboard tier failed
    #[error("Copy failed on every clipboard tier, please copy the list manually")]
    ClipboardExhausted,

    /// Copy requested before any list was generated
    #[error("No date list generated yet")]
    NothingGenerated,

    /// Configuration file could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
