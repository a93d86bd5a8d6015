//! Declarative YAML scenario specification

use serde::{Deserialize, Serialize};
use std::path::Path;

use demobank_common::TxnStatus;

use crate::error::{E2eError, E2eResult};

/// A complete scenario parsed from YAML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioSpec {
    /// Unique name for this scenario
    pub name: String,

    /// Human-readable description
    #[serde(default)]
    pub description: String,

    /// Tags for filtering scenarios
    #[serde(default)]
    pub tags: Vec<String>,

    /// Steps to execute in order
    pub steps: Vec<ScenarioStep>,
}

/// A single step in a scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScenarioStep {
    /// Open the login form and submit credentials
    Login {
        username: String,
        password: String,
    },

    /// Assert that the authenticated dashboard is shown
    ExpectLoggedIn,

    /// Assert that an inline login error is shown
    ExpectLoginError {
        #[serde(default)]
        message_contains: Option<String>,
    },

    /// End the session
    Logout,

    /// Deposit a positive amount
    Deposit {
        amount: f64,
    },

    /// Debit a positive amount
    Debit {
        amount: f64,
    },

    /// Deposit with raw input text, for exercising invalid amounts
    DepositRaw {
        input: String,
    },

    /// Debit with raw input text
    DebitRaw {
        input: String,
    },

    /// Trigger a balance refresh
    CheckBalance,

    /// Assert the outcome of the most recent deposit or debit
    ExpectOutcome {
        status: TxnStatus,
        #[serde(default)]
        message_contains: Option<String>,
    },

    /// Assert the displayed balance
    ExpectBalance {
        amount: f64,
    },

    /// Assert a transaction record at a position in the list (0 = newest)
    ExpectTransaction {
        description: String,
        amount_text: String,
        #[serde(default)]
        position: usize,
    },

    /// Assert the number of transaction records
    ExpectTransactionCount {
        count: usize,
    },

    /// Create a beneficiary through the form
    CreateBeneficiary {
        name: String,
        account_number: String,
        bank_name: String,
    },

    /// Rewrite a beneficiary found by name through its edit prompts
    UpdateBeneficiary {
        name: String,
        new_name: String,
        new_account_number: String,
        new_bank_name: String,
    },

    /// Delete a beneficiary found by name, accepting the confirmation
    DeleteBeneficiary {
        name: String,
    },

    /// Assert a beneficiary exists, optionally checking its fields
    ExpectBeneficiary {
        name: String,
        #[serde(default)]
        account_number: Option<String>,
        #[serde(default)]
        bank_name: Option<String>,
    },

    /// Assert the number of beneficiary rows
    ExpectBeneficiaryCount {
        count: usize,
    },
}

impl ScenarioStep {
    /// Short label used in step results and logs
    pub fn label(&self) -> String {
        match self {
            Self::Login { username, .. } => format!("login as {}", username),
            Self::ExpectLoggedIn => "expect logged in".to_string(),
            Self::ExpectLoginError { .. } => "expect login error".to_string(),
            Self::Logout => "logout".to_string(),
            Self::Deposit { amount } => format!("deposit {:.2}", amount),
            Self::Debit { amount } => format!("debit {:.2}", amount),
            Self::DepositRaw { input } => format!("deposit raw {:?}", input),
            Self::DebitRaw { input } => format!("debit raw {:?}", input),
            Self::CheckBalance => "check balance".to_string(),
            Self::ExpectOutcome { status, .. } => format!("expect outcome {}", status),
            Self::ExpectBalance { amount } => format!("expect balance {:.2}", amount),
            Self::ExpectTransaction { description, .. } => {
                format!("expect transaction {:?}", description)
            }
            Self::ExpectTransactionCount { count } => {
                format!("expect {} transaction(s)", count)
            }
            Self::CreateBeneficiary { name, .. } => format!("create beneficiary {:?}", name),
            Self::UpdateBeneficiary { name, .. } => format!("update beneficiary {:?}", name),
            Self::DeleteBeneficiary { name } => format!("delete beneficiary {:?}", name),
            Self::ExpectBeneficiary { name, .. } => format!("expect beneficiary {:?}", name),
            Self::ExpectBeneficiaryCount { count } => {
                format!("expect {} beneficiary(ies)", count)
            }
        }
    }
}

impl ScenarioSpec {
    /// Parse a scenario from a YAML string
    pub fn from_yaml(yaml: &str) -> E2eResult<Self> {
        serde_yaml::from_str(yaml).map_err(E2eError::from)
    }

    /// Parse a scenario from a YAML file
    pub fn from_file(path: &Path) -> E2eResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content).map_err(|e| match e {
            E2eError::Yaml(inner) => {
                E2eError::SpecParse(format!("{}: {}", path.display(), inner))
            }
            other => other,
        })
    }

    /// Load all scenarios from a directory, sorted by file name
    pub fn load_all(dir: &Path) -> E2eResult<Vec<Self>> {
        let entries = walkdir::WalkDir::new(dir)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| {
                e.path()
                    .extension()
                    .map(|ext| ext == "yaml" || ext == "yml")
                    .unwrap_or(false)
            });

        let mut specs = Vec::new();
        for entry in entries {
            let spec = Self::from_file(entry.path())?;
            specs.push(spec);
        }

        Ok(specs)
    }

    /// Filter specs by tag
    pub fn filter_by_tag<'a>(specs: &'a [Self], tag: &str) -> Vec<&'a Self> {
        specs
            .iter()
            .filter(|s| s.tags.contains(&tag.to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_auth_scenario() {
        let yaml = r#"
name: login-happy-path
description: Sign in with seeded credentials
tags:
  - auth
  - smoke
steps:
  - action: login
    username: testuser
    password: testpass
  - action: expect_logged_in
  - action: logout
"#;
        let spec = ScenarioSpec::from_yaml(yaml).unwrap();
        assert_eq!(spec.name, "login-happy-path");
        assert_eq!(spec.tags, vec!["auth", "smoke"]);
        assert_eq!(spec.steps.len(), 3);
        assert!(matches!(
            spec.steps[0],
            ScenarioStep::Login { ref username, .. } if username == "testuser"
        ));
    }

    #[test]
    fn parses_transaction_outcome_statuses() {
        let yaml = r#"
name: insufficient-funds
steps:
  - action: debit
    amount: 99999.0
  - action: expect_outcome
    status: insufficient_funds
    message_contains: Insufficient
"#;
        let spec = ScenarioSpec::from_yaml(yaml).unwrap();
        match &spec.steps[1] {
            ScenarioStep::ExpectOutcome {
                status,
                message_contains,
            } => {
                assert_eq!(*status, TxnStatus::InsufficientFunds);
                assert_eq!(message_contains.as_deref(), Some("Insufficient"));
            }
            other => panic!("unexpected step: {:?}", other),
        }
    }

    #[test]
    fn parses_beneficiary_steps() {
        let yaml = r#"
name: beneficiary-crud
steps:
  - action: create_beneficiary
    name: Alice Johnson
    account_number: "1111111111"
    bank_name: Chase Bank
  - action: update_beneficiary
    name: Alice Johnson
    new_name: Alice Smith
    new_account_number: "2222222222"
    new_bank_name: Wells Fargo
  - action: delete_beneficiary
    name: Alice Smith
  - action: expect_beneficiary_count
    count: 0
"#;
        let spec = ScenarioSpec::from_yaml(yaml).unwrap();
        assert_eq!(spec.steps.len(), 4);
        assert!(matches!(
            spec.steps[2],
            ScenarioStep::DeleteBeneficiary { ref name } if name == "Alice Smith"
        ));
    }

    #[test]
    fn filter_by_tag_selects_matching_specs() {
        let tagged = |name: &str, tags: &[&str]| ScenarioSpec {
            name: name.to_string(),
            description: String::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            steps: vec![ScenarioStep::ExpectLoggedIn],
        };
        let specs = vec![
            tagged("auth-login", &["auth", "smoke"]),
            tagged("overdraft", &["transactions"]),
            tagged("deposit", &["transactions", "smoke"]),
        ];

        let smoke = ScenarioSpec::filter_by_tag(&specs, "smoke");
        let names: Vec<&str> = smoke.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["auth-login", "deposit"]);

        assert!(ScenarioSpec::filter_by_tag(&specs, "beneficiaries").is_empty());
    }

    #[test]
    fn rejects_unknown_action() {
        let yaml = r#"
name: bad
steps:
  - action: teleport
"#;
        assert!(ScenarioSpec::from_yaml(yaml).is_err());
    }

    #[test]
    fn transaction_position_defaults_to_newest() {
        let yaml = r#"
name: latest-record
steps:
  - action: expect_transaction
    description: Deposit
    amount_text: "+$500.00"
"#;
        let spec = ScenarioSpec::from_yaml(yaml).unwrap();
        match &spec.steps[0] {
            ScenarioStep::ExpectTransaction { position, .. } => assert_eq!(*position, 0),
            other => panic!("unexpected step: {:?}", other),
        }
    }

    #[test]
    fn step_labels_are_stable() {
        let step = ScenarioStep::Deposit { amount: 750.5 };
        assert_eq!(step.label(), "deposit 750.50");
        let step = ScenarioStep::ExpectOutcome {
            status: TxnStatus::Deposited,
            message_contains: None,
        };
        assert_eq!(step.label(), "expect outcome deposited");
    }
}
