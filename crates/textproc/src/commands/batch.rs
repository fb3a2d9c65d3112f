use anyhow::Result;
use textproc_config as cli;
use textproc_core::Engine;
use tracing::info;

use crate::input::read_input;
use crate::output;

pub(crate) fn handle(
    args: cli::InputArgs,
    global: &cli::GlobalArgs,
    engine: &Engine,
) -> Result<()> {
    let input = read_input(&args)?;
    let docs: Vec<&str> = input.lines().collect();
    info!(documents = docs.len(), "batch input read");
    let report = engine.batch_analyze_sentiment(&docs)?;
    match global.format {
        cli::OutputFormat::Json => output::print_json(&report)?,
        cli::OutputFormat::Md => print!("{}", output::batch_md(&report)),
    }
    Ok(())
}
