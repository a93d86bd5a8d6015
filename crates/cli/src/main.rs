//! DemoBank CLI - Main Entry Point
//!
//! Runs YAML scenarios against the demo banking fixture and serves the
//! resulting reports.

use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{report, run, scenarios};

/// DemoBank scenario suite
#[derive(Parser)]
#[command(name = "demobank")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: output::OutputFormat,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run scenarios against the fixture
    Run(run::RunArgs),

    /// List available scenarios
    Scenarios(scenarios::ScenariosArgs),

    /// Generate or serve suite reports
    #[command(subcommand)]
    Report(report::ReportCommands),

    /// Show version information
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Run(args) => {
            let all_passed = run::execute(args, cli.format).await?;
            if !all_passed {
                std::process::exit(1);
            }
        }
        Commands::Scenarios(args) => scenarios::execute(args, cli.format)?,
        Commands::Report(cmd) => report::execute(cmd).await?,
        Commands::Version => {
            println!("DemoBank CLI v{}", env!("CARGO_PKG_VERSION"));
            println!("Browser-driven scenario suite for the demo banking UI");
        }
    }

    Ok(())
}
