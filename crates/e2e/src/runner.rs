//! Scenario runner that orchestrates the fixture and browser sessions.
//!
//! Each scenario gets a fresh browser session so state carried in cookies or
//! injected scripts cannot leak between scenarios. The fixture is shared
//! across the suite; scenarios that need pristine server state say so with
//! their opening steps.

use std::path::PathBuf;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use demobank_common::{Credentials, Money, NewBeneficiary, TxnOutcome};
use demobank_harness::{
    AccountPage, BeneficiariesPage, BrowserSession, FixtureConfig, FixtureHandle, LoginPage,
    SessionConfig,
};

use crate::error::{E2eError, E2eResult};
use crate::spec::{ScenarioSpec, ScenarioStep};

/// Result of a single executed step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepResult {
    pub label: String,
    pub success: bool,
    pub duration_ms: u64,
    pub error: Option<String>,
}

/// Result of running a single scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub name: String,
    pub success: bool,
    pub duration_ms: u64,
    pub steps: Vec<StepResult>,
    pub error: Option<String>,
}

/// Result of running a set of scenarios
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteResult {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub duration_ms: u64,
    pub results: Vec<ScenarioResult>,
}

/// Configuration for the scenario runner
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Fixture to spawn (None = attach to `base_url`)
    pub fixture: Option<FixtureConfig>,

    /// Base URL of an externally managed fixture
    pub base_url: Option<String>,

    /// Browser session settings
    pub session: SessionConfig,

    /// Scenario YAML directory
    pub scenarios_dir: PathBuf,

    /// Output directory for results
    pub output_dir: PathBuf,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            fixture: Some(FixtureConfig::default()),
            base_url: None,
            session: SessionConfig::default(),
            scenarios_dir: PathBuf::from("scenarios"),
            output_dir: PathBuf::from("test-results"),
        }
    }
}

/// Drives scenarios against a running fixture
pub struct ScenarioRunner {
    fixture_config: Option<FixtureConfig>,
    base_url: Option<String>,
    session_config: SessionConfig,
    scenarios_dir: PathBuf,
    output_dir: PathBuf,
    fixture: Option<FixtureHandle>,
}

impl ScenarioRunner {
    pub fn new() -> Self {
        Self::with_config(RunnerConfig::default())
    }

    pub fn with_config(config: RunnerConfig) -> Self {
        Self {
            fixture_config: config.fixture,
            base_url: config.base_url,
            session_config: config.session,
            scenarios_dir: config.scenarios_dir,
            output_dir: config.output_dir,
            fixture: None,
        }
    }

    /// Ensure the fixture is reachable, spawning it when configured to.
    /// Returns the base URL scenarios should target.
    pub async fn ensure_fixture(&mut self) -> E2eResult<String> {
        if let Some(url) = &self.base_url {
            return Ok(url.clone());
        }
        if let Some(fixture) = &self.fixture {
            return Ok(fixture.base_url().to_string());
        }
        let config = self.fixture_config.clone().ok_or(E2eError::NoFixture)?;
        let fixture = FixtureHandle::spawn(config).await?;
        let url = fixture.base_url().to_string();
        self.fixture = Some(fixture);
        Ok(url)
    }

    /// Stop the fixture if this runner spawned it
    pub fn stop_fixture(&mut self) -> E2eResult<()> {
        if let Some(mut fixture) = self.fixture.take() {
            fixture.stop()?;
        }
        Ok(())
    }

    /// Run every scenario in the scenarios directory
    pub async fn run_all(&mut self) -> E2eResult<SuiteResult> {
        let specs = ScenarioSpec::load_all(&self.scenarios_dir)?;
        self.run_specs(&specs).await
    }

    /// Run scenarios matching a tag
    pub async fn run_tagged(&mut self, tag: &str) -> E2eResult<SuiteResult> {
        let specs = ScenarioSpec::load_all(&self.scenarios_dir)?;
        let filtered: Vec<ScenarioSpec> = ScenarioSpec::filter_by_tag(&specs, tag)
            .into_iter()
            .cloned()
            .collect();
        self.run_specs(&filtered).await
    }

    /// Run a specific scenario by name
    pub async fn run_scenario(&mut self, name: &str) -> E2eResult<ScenarioResult> {
        let specs = ScenarioSpec::load_all(&self.scenarios_dir)?;
        let spec = specs
            .into_iter()
            .find(|s| s.name == name)
            .ok_or_else(|| E2eError::ScenarioNotFound(name.to_string()))?;
        self.run_spec(&spec).await
    }

    /// Run a list of scenarios, continuing past failures
    pub async fn run_specs(&mut self, specs: &[ScenarioSpec]) -> E2eResult<SuiteResult> {
        let start = Instant::now();
        let mut results = Vec::new();
        let mut passed = 0;
        let mut failed = 0;

        self.ensure_fixture().await?;

        info!("Running {} scenario(s)...", specs.len());

        for spec in specs {
            match self.run_spec(spec).await {
                Ok(result) => {
                    if result.success {
                        passed += 1;
                        info!("✓ {} ({} ms)", result.name, result.duration_ms);
                    } else {
                        failed += 1;
                        error!(
                            "✗ {} - {}",
                            result.name,
                            result.error.as_deref().unwrap_or("unknown error")
                        );
                    }
                    results.push(result);
                }
                Err(e) => {
                    failed += 1;
                    error!("✗ {} - {}", spec.name, e);
                    results.push(ScenarioResult {
                        name: spec.name.clone(),
                        success: false,
                        duration_ms: 0,
                        steps: vec![],
                        error: Some(e.to_string()),
                    });
                }
            }
        }

        let duration_ms = start.elapsed().as_millis() as u64;

        info!("");
        info!(
            "Scenario results: {} passed, {} failed ({} ms)",
            passed, failed, duration_ms
        );

        Ok(SuiteResult {
            total: specs.len(),
            passed,
            failed,
            duration_ms,
            results,
        })
    }

    /// Run a single scenario in a fresh browser session.
    ///
    /// Step errors are recorded in the result, not propagated; `Err` here
    /// means the session itself could not be set up or torn down.
    pub async fn run_spec(&mut self, spec: &ScenarioSpec) -> E2eResult<ScenarioResult> {
        let start = Instant::now();
        debug!("Running scenario: {}", spec.name);

        let base_url = self.ensure_fixture().await?;
        let mut session_config = self.session_config.clone();
        session_config.base_url = base_url;

        let session = BrowserSession::launch(session_config).await?;
        let mut executor = StepExecutor::new(&session);

        let mut step_results = Vec::new();
        let mut scenario_error: Option<String> = None;

        for step in &spec.steps {
            let step_start = Instant::now();
            let label = step.label();
            debug!("  step: {}", label);

            match executor.execute(step).await {
                Ok(()) => {
                    step_results.push(StepResult {
                        label,
                        success: true,
                        duration_ms: step_start.elapsed().as_millis() as u64,
                        error: None,
                    });
                }
                Err(e) => {
                    let message = e.to_string();
                    step_results.push(StepResult {
                        label,
                        success: false,
                        duration_ms: step_start.elapsed().as_millis() as u64,
                        error: Some(message.clone()),
                    });
                    scenario_error = Some(message);
                    break; // Stop on first failure
                }
            }
        }

        session.close().await;

        let duration_ms = start.elapsed().as_millis() as u64;
        let success = scenario_error.is_none();

        Ok(ScenarioResult {
            name: spec.name.clone(),
            success,
            duration_ms,
            steps: step_results,
            error: scenario_error,
        })
    }

    /// Write suite results to a JSON file
    pub fn write_results(&self, results: &SuiteResult) -> E2eResult<PathBuf> {
        std::fs::create_dir_all(&self.output_dir)?;

        let path = self.output_dir.join("results.json");
        let json = serde_json::to_string_pretty(results)?;
        std::fs::write(&path, json)?;

        info!("Results written to: {}", path.display());
        Ok(path)
    }

    pub fn output_dir(&self) -> &PathBuf {
        &self.output_dir
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ScenarioRunner {
    fn drop(&mut self) {
        let _ = self.stop_fixture();
    }
}

/// Executes individual steps against one browser session, carrying the
/// outcome of the most recent deposit or debit for `expect_outcome`.
pub struct StepExecutor<'a> {
    session: &'a BrowserSession,
    last_outcome: Option<TxnOutcome>,
}

impl<'a> StepExecutor<'a> {
    pub fn new(session: &'a BrowserSession) -> Self {
        Self {
            session,
            last_outcome: None,
        }
    }

    pub async fn execute(&mut self, step: &ScenarioStep) -> E2eResult<()> {
        match step {
            ScenarioStep::Login { username, password } => {
                let login = LoginPage::new(self.session);
                login.open().await?;
                login
                    .sign_in(&Credentials::new(username, password))
                    .await?;
                Ok(())
            }
            ScenarioStep::ExpectLoggedIn => {
                let login = LoginPage::new(self.session);
                if login.is_authenticated().await? {
                    Ok(())
                } else {
                    Err(E2eError::Assertion(
                        "expected the authenticated dashboard".to_string(),
                    ))
                }
            }
            ScenarioStep::ExpectLoginError { message_contains } => {
                let login = LoginPage::new(self.session);
                let message = login.error_message().await?.ok_or_else(|| {
                    E2eError::Assertion("expected an inline login error".to_string())
                })?;
                if let Some(needle) = message_contains {
                    if !message.contains(needle) {
                        return Err(E2eError::Assertion(format!(
                            "login error {:?} does not contain {:?}",
                            message, needle
                        )));
                    }
                }
                Ok(())
            }
            ScenarioStep::Logout => {
                LoginPage::new(self.session).log_out().await?;
                Ok(())
            }
            ScenarioStep::Deposit { amount } => {
                let outcome = AccountPage::new(self.session)
                    .deposit(Money::new(*amount))
                    .await?;
                self.last_outcome = Some(outcome);
                Ok(())
            }
            ScenarioStep::Debit { amount } => {
                let outcome = AccountPage::new(self.session)
                    .debit(Money::new(*amount))
                    .await?;
                self.last_outcome = Some(outcome);
                Ok(())
            }
            ScenarioStep::DepositRaw { input } => {
                let outcome = AccountPage::new(self.session).deposit_raw(input).await?;
                self.last_outcome = Some(outcome);
                Ok(())
            }
            ScenarioStep::DebitRaw { input } => {
                let outcome = AccountPage::new(self.session).debit_raw(input).await?;
                self.last_outcome = Some(outcome);
                Ok(())
            }
            ScenarioStep::CheckBalance => {
                AccountPage::new(self.session).check_balance().await?;
                Ok(())
            }
            ScenarioStep::ExpectOutcome {
                status,
                message_contains,
            } => {
                let outcome = self.last_outcome.as_ref().ok_or_else(|| {
                    E2eError::Assertion(
                        "expect_outcome requires a prior deposit or debit".to_string(),
                    )
                })?;
                if outcome.status != *status {
                    return Err(E2eError::Assertion(format!(
                        "expected outcome {}, got {} ({:?})",
                        status, outcome.status, outcome.message
                    )));
                }
                if let Some(needle) = message_contains {
                    if !outcome.message.contains(needle) {
                        return Err(E2eError::Assertion(format!(
                            "status message {:?} does not contain {:?}",
                            outcome.message, needle
                        )));
                    }
                }
                Ok(())
            }
            ScenarioStep::ExpectBalance { amount } => {
                let balance = AccountPage::new(self.session).current_balance().await?;
                let expected = Money::new(*amount);
                if balance.approx_eq(expected) {
                    Ok(())
                } else {
                    Err(E2eError::Assertion(format!(
                        "expected balance {}, got {}",
                        expected, balance
                    )))
                }
            }
            ScenarioStep::ExpectTransaction {
                description,
                amount_text,
                position,
            } => {
                let records = AccountPage::new(self.session).transactions().await?;
                let record = records.get(*position).ok_or_else(|| {
                    E2eError::Assertion(format!(
                        "no transaction at position {} ({} present)",
                        position,
                        records.len()
                    ))
                })?;
                if record.description != *description || record.amount_text != *amount_text {
                    return Err(E2eError::Assertion(format!(
                        "transaction at position {}: expected {:?}/{:?}, got {:?}/{:?}",
                        position, description, amount_text, record.description, record.amount_text
                    )));
                }
                Ok(())
            }
            ScenarioStep::ExpectTransactionCount { count } => {
                let actual = AccountPage::new(self.session).transaction_count().await?;
                if actual == *count {
                    Ok(())
                } else {
                    Err(E2eError::Assertion(format!(
                        "expected {} transaction(s), got {}",
                        count, actual
                    )))
                }
            }
            ScenarioStep::CreateBeneficiary {
                name,
                account_number,
                bank_name,
            } => {
                let page = BeneficiariesPage::new(self.session);
                page.open().await?;
                page.create(&NewBeneficiary {
                    name: name.clone(),
                    account_number: account_number.clone(),
                    bank_name: bank_name.clone(),
                })
                .await?;
                Ok(())
            }
            ScenarioStep::UpdateBeneficiary {
                name,
                new_name,
                new_account_number,
                new_bank_name,
            } => {
                let page = BeneficiariesPage::new(self.session);
                page.open().await?;
                let existing = self.require_beneficiary(&page, name).await?;
                page.update(
                    &existing.id,
                    &NewBeneficiary {
                        name: new_name.clone(),
                        account_number: new_account_number.clone(),
                        bank_name: new_bank_name.clone(),
                    },
                )
                .await?;
                Ok(())
            }
            ScenarioStep::DeleteBeneficiary { name } => {
                let page = BeneficiariesPage::new(self.session);
                page.open().await?;
                let existing = self.require_beneficiary(&page, name).await?;
                page.delete(&existing.id).await?;
                Ok(())
            }
            ScenarioStep::ExpectBeneficiary {
                name,
                account_number,
                bank_name,
            } => {
                let page = BeneficiariesPage::new(self.session);
                page.open().await?;
                let record = self.require_beneficiary(&page, name).await?;
                if let Some(expected) = account_number {
                    if record.account_number != *expected {
                        return Err(E2eError::Assertion(format!(
                            "beneficiary {:?}: expected account {:?}, got {:?}",
                            name, expected, record.account_number
                        )));
                    }
                }
                if let Some(expected) = bank_name {
                    if record.bank_name != *expected {
                        return Err(E2eError::Assertion(format!(
                            "beneficiary {:?}: expected bank {:?}, got {:?}",
                            name, expected, record.bank_name
                        )));
                    }
                }
                Ok(())
            }
            ScenarioStep::ExpectBeneficiaryCount { count } => {
                let page = BeneficiariesPage::new(self.session);
                page.open().await?;
                let actual = page.count().await?;
                if actual == *count {
                    Ok(())
                } else {
                    Err(E2eError::Assertion(format!(
                        "expected {} beneficiary(ies), got {}",
                        count, actual
                    )))
                }
            }
        }
    }

    async fn require_beneficiary(
        &self,
        page: &BeneficiariesPage<'_>,
        name: &str,
    ) -> E2eResult<demobank_common::BeneficiaryRecord> {
        page.find_by_name(name).await?.ok_or_else(|| {
            E2eError::Assertion(format!("no beneficiary named {:?} in the list", name))
        })
    }
}
