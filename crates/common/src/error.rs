//! Error types shared across the suite

use thiserror::Error;

/// Result type alias using the common Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors for domain-value parsing and shared plumbing
#[derive(Error, Debug)]
pub enum Error {
    #[error("Cannot parse monetary amount from {text:?}: {reason}")]
    MoneyParse { text: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
