//! Element identifiers for the DemoBank UI.
//!
//! The fixture exposes a fixed set of ids and classes; beneficiary rows are
//! additionally addressed through their `data-beneficiary-id` attribute.
//! Keeping every selector here means a fixture markup change touches one
//! module.

// Login page
pub const LOGIN_USERNAME: &str = "#username";
pub const LOGIN_PASSWORD: &str = "#password";
pub const LOGIN_SUBMIT: &str = "#login-button";
pub const LOGIN_ERROR: &str = "#login-error";
pub const LOGOUT_LINK: &str = "#logout-link";

// Account dashboard
pub const ACCOUNT_BALANCE: &str = "#account-balance";
pub const AMOUNT_INPUT: &str = "#transaction-amount";
pub const DEPOSIT_BUTTON: &str = "#deposit-button";
pub const DEBIT_BUTTON: &str = "#debit-button";
pub const CHECK_BALANCE_BUTTON: &str = "#check-balance-button";
pub const STATUS_MESSAGE: &str = "#transaction-status";

// Transaction listing (rendered newest-first)
pub const TRANSACTION_ROWS: &str = "#transactions .transaction";
pub const TRANSACTION_DESCRIPTION: &str = ".transaction-description";
pub const TRANSACTION_AMOUNT: &str = ".transaction-amount";

// Beneficiary page
pub const BENEFICIARY_NAME_INPUT: &str = "#beneficiary-name";
pub const BENEFICIARY_ACCOUNT_INPUT: &str = "#beneficiary-account";
pub const BENEFICIARY_BANK_INPUT: &str = "#beneficiary-bank";
pub const BENEFICIARY_ADD_BUTTON: &str = "#add-beneficiary-button";
pub const BENEFICIARY_ROWS: &str = "#beneficiaries .beneficiary";
pub const BENEFICIARY_NAME: &str = ".beneficiary-name";
pub const BENEFICIARY_ACCOUNT: &str = ".beneficiary-account";
pub const BENEFICIARY_BANK: &str = ".beneficiary-bank";

/// Row for one beneficiary, keyed on its data-id attribute.
pub fn beneficiary_row(id: &str) -> String {
    format!(r#"[data-beneficiary-id="{id}"]"#)
}

/// Edit control inside a beneficiary row.
pub fn beneficiary_edit(id: &str) -> String {
    format!(r#"[data-beneficiary-id="{id}"] .edit-beneficiary"#)
}

/// Delete control inside a beneficiary row.
pub fn beneficiary_delete(id: &str) -> String {
    format!(r#"[data-beneficiary-id="{id}"] .delete-beneficiary"#)
}
