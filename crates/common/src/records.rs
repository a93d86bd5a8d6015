//! Records as observed through the UI, not owned by this suite.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::money::Money;

/// Login credentials for the fixture's demo account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// A transaction row as rendered: description plus signed amount text.
///
/// Listings are newest-first; after a successful deposit or debit a new
/// record with matching description and signed amount appears at the head.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub description: String,
    pub amount_text: String,
}

impl TransactionRecord {
    /// Parse the signed amount text (`+$500.00` / `-$120.00`).
    pub fn signed_amount(&self) -> Result<Money> {
        Money::parse(&self.amount_text)
    }
}

/// A beneficiary row as rendered. `id` is the row's `data-beneficiary-id`
/// attribute and addresses the row's update/delete controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeneficiaryRecord {
    pub id: String,
    pub name: String,
    pub account_number: String,
    pub bank_name: String,
}

/// Fields for creating or updating a beneficiary via the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBeneficiary {
    pub name: String,
    pub account_number: String,
    pub bank_name: String,
}

impl BeneficiaryRecord {
    /// Whether this row matches the submitted fields.
    pub fn matches(&self, fields: &NewBeneficiary) -> bool {
        self.name == fields.name
            && self.account_number == fields.account_number
            && self.bank_name == fields.bank_name
    }
}
