//! DemoBank scenario suite
//!
//! This crate turns declarative YAML scenarios into browser runs against the
//! demo banking fixture:
//! - Parses scenario specs (login, deposits, debits, beneficiary CRUD)
//! - Drives each scenario through a fresh browser session
//! - Collects structured step results and writes JSON + HTML reports
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                  ScenarioRunner                            │
//! │    ├── ensure_fixture() -> base URL                        │
//! │    ├── run_spec(spec) -> ScenarioResult                    │
//! │    └── write_results() / report::write()                   │
//! ├────────────────────────────────────────────────────────────┤
//! │  ScenarioSpec (YAML)                                       │
//! │    ├── name, description, tags                             │
//! │    └── steps: [ScenarioStep]                               │
//! │          ├── login { username, password }                  │
//! │          ├── deposit / debit { amount }                    │
//! │          ├── expect_outcome { status, message_contains? }  │
//! │          ├── expect_balance / expect_transaction           │
//! │          └── create/update/delete/expect_beneficiary       │
//! └────────────────────────────────────────────────────────────┘
//! ```

pub mod error;
pub mod report;
pub mod runner;
pub mod spec;

pub use error::{E2eError, E2eResult};
pub use runner::{RunnerConfig, ScenarioResult, ScenarioRunner, StepResult, SuiteResult};
pub use spec::{ScenarioSpec, ScenarioStep};
