//! Shared domain types for the DemoBank e2e suite.
//!
//! Everything here models state as *observed* through the banking UI:
//! currency-formatted amounts, rendered transaction rows, beneficiary rows
//! addressed by their `data-beneficiary-id` attribute, and the structured
//! outcome of a deposit/debit attempt. Nothing in this crate talks to a
//! browser; it is the vocabulary the harness and the scenarios share.

pub mod error;
pub mod money;
pub mod outcome;
pub mod records;

pub use error::{Error, Result};
pub use money::Money;
pub use outcome::{TxnOutcome, TxnStatus};
pub use records::{BeneficiaryRecord, Credentials, NewBeneficiary, TransactionRecord};
