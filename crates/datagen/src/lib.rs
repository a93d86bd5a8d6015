//! Constrained-random test data for DemoBank scenarios.
//!
//! Every generator is a pure function over `rand::thread_rng()`: each call
//! returns a fresh value matching a fixed format grammar, with no shared
//! state and no uniqueness guarantee beyond statistical improbability of
//! collision. Generation is total over the declared ranges; out-of-range or
//! malformed output is a defect.

pub mod amounts;
pub mod ids;
pub mod person;

pub use amounts::{amount_between, debit_amount, deposit_amount};
pub use ids::{account_number, ifsc_code, routing_number, transaction_id};
pub use person::{bank_name, beneficiary, email, first_name, full_name, last_name};
