use anyhow::Result;
use textproc_config as cli;
use textproc_core::Engine;

use crate::input::read_input;
use crate::output;

pub(crate) fn handle(
    args: cli::InputArgs,
    global: &cli::GlobalArgs,
    engine: &Engine,
) -> Result<()> {
    let text = read_input(&args)?;
    let report = engine.analyze_sentiment(&text)?;
    match global.format {
        cli::OutputFormat::Json => output::print_json(&report)?,
        cli::OutputFormat::Md => print!("{}", output::sentiment_md(&report)),
    }
    Ok(())
}
