//! Structured outcomes for deposit/debit attempts.
//!
//! The fixture reports transaction results through a free-text status line.
//! Rather than scattering substring checks through scenarios, the status
//! text is classified once into an explicit outcome tag; assertions compare
//! tags and only fall back to the raw message when they need to.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome tag classified from the fixture's status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TxnStatus {
    /// Funds were added to the account.
    Deposited,
    /// Funds were withdrawn from the account.
    Debited,
    /// Business-rule rejection: the account cannot cover the debit.
    InsufficientFunds,
    /// Business-rule rejection: non-positive or unparsable amount.
    InvalidAmount,
    /// Status text matched no known message.
    Unknown,
}

impl fmt::Display for TxnStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TxnStatus::Deposited => "deposited",
            TxnStatus::Debited => "debited",
            TxnStatus::InsufficientFunds => "insufficient_funds",
            TxnStatus::InvalidAmount => "invalid_amount",
            TxnStatus::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// The result of one deposit or debit attempt: an outcome tag plus the raw
/// status message it was classified from.
///
/// Business-rule rejections are values, not errors; the interaction layer
/// only returns `Err` for malformed or missing UI state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TxnOutcome {
    pub status: TxnStatus,
    pub message: String,
}

impl TxnOutcome {
    /// Classify a raw status message.
    pub fn classify(message: &str) -> Self {
        let status = if message.contains("Deposited") {
            TxnStatus::Deposited
        } else if message.contains("Debited") {
            TxnStatus::Debited
        } else if message.contains("Insufficient funds") {
            TxnStatus::InsufficientFunds
        } else if message.contains("Invalid amount") {
            TxnStatus::InvalidAmount
        } else {
            TxnStatus::Unknown
        };

        Self {
            status,
            message: message.to_string(),
        }
    }

    /// Whether the attempt moved money.
    pub fn is_success(&self) -> bool {
        matches!(self.status, TxnStatus::Deposited | TxnStatus::Debited)
    }
}
