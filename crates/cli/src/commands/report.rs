//! `demobank report` - regenerate and serve suite reports

use std::path::PathBuf;

use clap::Subcommand;

use demobank_e2e::{report, SuiteResult};

use crate::output;

#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Render report.html from an existing results.json
    Generate {
        /// Path to results.json
        #[arg(short, long, default_value = "test-results/results.json")]
        results: PathBuf,

        /// Directory to write report.html into
        #[arg(short, long, default_value = "test-results")]
        output: PathBuf,
    },

    /// Serve a results directory over HTTP
    Serve {
        /// Results directory
        #[arg(short, long, default_value = "test-results")]
        dir: PathBuf,

        /// Port to listen on
        #[arg(short, long, default_value = "8000")]
        port: u16,
    },
}

pub async fn execute(cmd: ReportCommands) -> anyhow::Result<()> {
    match cmd {
        ReportCommands::Generate { results, output } => {
            let json = std::fs::read_to_string(&results)?;
            let suite: SuiteResult = serde_json::from_str(&json)?;
            let path = report::write(&suite, &output)?;
            output::print_success(&format!("Report written to {}", path.display()));
        }
        ReportCommands::Serve { dir, port } => {
            report::serve(dir, port).await?;
        }
    }
    Ok(())
}
