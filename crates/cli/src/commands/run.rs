//! `demobank run` - execute scenarios against the fixture

use std::path::PathBuf;

use clap::Args;

use demobank_e2e::runner::RunnerConfig;
use demobank_e2e::{report, ScenarioResult, ScenarioRunner, SuiteResult};
use demobank_harness::{FixtureConfig, SessionConfig};

use crate::output::{self, OutputFormat, TableDisplay};

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Path to the scenario YAML directory
    #[arg(short, long, default_value = "crates/e2e/scenarios")]
    scenarios: PathBuf,

    /// Run only scenarios matching this tag
    #[arg(short, long)]
    tag: Option<String>,

    /// Run only a specific scenario by name
    #[arg(short, long)]
    name: Option<String>,

    /// Command that starts the fixture (default: $DEMOBANK_FIXTURE_CMD)
    #[arg(long)]
    fixture_cmd: Option<PathBuf>,

    /// Attach to an already-running fixture instead of spawning one
    #[arg(long, env = "DEMOBANK_E2E_BASE_URL")]
    base_url: Option<String>,

    /// Run the browser with a visible window
    #[arg(long)]
    headed: bool,

    /// Output directory for results and reports
    #[arg(short, long, default_value = "test-results")]
    output: PathBuf,
}

impl TableDisplay for ScenarioResult {
    fn headers() -> Vec<&'static str> {
        vec!["Scenario", "Result", "Steps", "Duration (ms)", "Error"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            if self.success { "pass" } else { "fail" }.to_string(),
            self.steps.len().to_string(),
            self.duration_ms.to_string(),
            self.error.clone().unwrap_or_default(),
        ]
    }
}

pub async fn execute(args: RunArgs, format: OutputFormat) -> anyhow::Result<bool> {
    let fixture = if args.base_url.is_some() {
        None
    } else {
        let mut config = FixtureConfig::default();
        if let Some(cmd) = args.fixture_cmd {
            config.command = cmd;
        }
        Some(config)
    };

    let config = RunnerConfig {
        fixture,
        base_url: args.base_url,
        session: SessionConfig {
            headless: !args.headed,
            ..SessionConfig::default()
        },
        scenarios_dir: args.scenarios,
        output_dir: args.output,
    };

    let mut runner = ScenarioRunner::with_config(config);

    let suite: SuiteResult = if let Some(name) = args.name {
        let result = runner.run_scenario(&name).await?;
        SuiteResult {
            total: 1,
            passed: if result.success { 1 } else { 0 },
            failed: if result.success { 0 } else { 1 },
            duration_ms: result.duration_ms,
            results: vec![result],
        }
    } else if let Some(tag) = args.tag {
        runner.run_tagged(&tag).await?
    } else {
        runner.run_all().await?
    };

    runner.write_results(&suite)?;
    report::write(&suite, runner.output_dir())?;

    output::print_list(&suite.results, format);
    if suite.failed == 0 {
        output::print_success(&format!(
            "{} scenario(s) passed in {} ms",
            suite.passed, suite.duration_ms
        ));
    } else {
        output::print_error(&format!(
            "{} of {} scenario(s) failed",
            suite.failed, suite.total
        ));
    }

    Ok(suite.failed == 0)
}
