//! Page-interaction layer for the DemoBank e2e suite.
//!
//! This crate translates semantic banking operations into concrete UI
//! actions against a fixed set of element identifiers, and extracts textual
//! results back into typed values:
//!
//! - [`BrowserSession`] owns a headless Chrome page (chromiumoxide) bound to
//!   the fixture's base URL
//! - [`wait`] provides condition-polling primitives; no fixed-duration
//!   sleeps anywhere in the layer
//! - [`DialogQueue`] answers `prompt`/`confirm` dialogs from a declarative
//!   response queue and hard-fails on count or order mismatches
//! - [`pages`] holds the page objects: login, account, beneficiaries
//! - [`FixtureHandle`] spawns and health-checks the demo-bank server process
//!
//! Business-rule rejections (insufficient funds, invalid amount) come back
//! as classified [`demobank_common::TxnOutcome`] values; only malformed or
//! missing UI state produces an `Err`.

pub mod browser;
pub mod dialog;
pub mod error;
pub mod pages;
pub mod selectors;
pub mod server;
pub mod wait;

pub use browser::{BrowserSession, SessionConfig};
pub use dialog::{DialogQueue, DialogReplay};
pub use error::{HarnessError, HarnessResult};
pub use pages::{AccountPage, BeneficiariesPage, LoginPage};
pub use server::{FixtureConfig, FixtureHandle};
pub use wait::{poll_until, WaitConfig};
