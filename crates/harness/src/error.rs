//! Error types for the interaction layer

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("Browser launch failed: {0}")]
    BrowserLaunch(String),

    #[error("Fixture failed to start: {0}")]
    FixtureStartup(String),

    #[error("Fixture health check failed after {0} attempts")]
    FixtureHealthCheck(usize),

    #[error("Element not found: {0}")]
    ElementNotFound(String),

    #[error("Malformed UI state at {selector}: {reason}")]
    MalformedUiState { selector: String, reason: String },

    #[error("Timeout after {timeout_ms} ms waiting for: {condition}")]
    WaitTimeout { condition: String, timeout_ms: u64 },

    #[error("Dialog mismatch: expected {expected} dialog(s), saw {actual}")]
    DialogMismatch { expected: usize, actual: usize },

    #[error("Dialog #{index} out of order: expected message containing {expected:?}, got {actual:?}")]
    DialogOrder {
        index: usize,
        expected: String,
        actual: String,
    },

    #[error("Script evaluation failed: {0}")]
    Evaluate(String),

    #[error("Domain value error: {0}")]
    Domain(#[from] demobank_common::Error),

    #[error("CDP error: {0}")]
    Cdp(#[from] chromiumoxide::error::CdpError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type HarnessResult<T> = Result<T, HarnessError>;
