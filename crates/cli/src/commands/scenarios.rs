//! `demobank scenarios` - list available scenario specs

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use demobank_e2e::ScenarioSpec;

use crate::output::{self, OutputFormat, TableDisplay};

#[derive(Args, Debug)]
pub struct ScenariosArgs {
    /// Path to the scenario YAML directory
    #[arg(short, long, default_value = "crates/e2e/scenarios")]
    scenarios: PathBuf,

    /// List only scenarios matching this tag
    #[arg(short, long)]
    tag: Option<String>,
}

#[derive(Serialize)]
struct ScenarioRow {
    name: String,
    tags: Vec<String>,
    steps: usize,
    description: String,
}

impl TableDisplay for ScenarioRow {
    fn headers() -> Vec<&'static str> {
        vec!["Name", "Tags", "Steps", "Description"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.tags.join(", "),
            self.steps.to_string(),
            self.description.clone(),
        ]
    }
}

pub fn execute(args: ScenariosArgs, format: OutputFormat) -> anyhow::Result<()> {
    let specs = ScenarioSpec::load_all(&args.scenarios)?;
    let rows: Vec<ScenarioRow> = specs
        .iter()
        .filter(|s| match &args.tag {
            Some(tag) => s.tags.contains(tag),
            None => true,
        })
        .map(|s| ScenarioRow {
            name: s.name.clone(),
            tags: s.tags.clone(),
            steps: s.steps.len(),
            description: s.description.clone(),
        })
        .collect();

    output::print_list(&rows, format);
    Ok(())
}
