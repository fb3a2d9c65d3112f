pub(crate) mod batch;
pub(crate) mod clean;
pub(crate) mod emails;
pub(crate) mod sentiment;
pub(crate) mod version;
pub(crate) mod words;

use anyhow::Result;
use textproc_config as cli;
use textproc_core::Engine;

use crate::config::resolve_settings;

pub(crate) fn dispatch(cli: cli::Cli) -> Result<()> {
    let global = &cli.global;
    match cli.command {
        cli::Commands::Words(args) => words::handle(args, global, &engine(global)?),
        cli::Commands::Emails(args) => emails::handle(args, global, &engine(global)?),
        cli::Commands::Clean(args) => clean::handle(args, global, &engine(global)?),
        cli::Commands::Sentiment(args) => sentiment::handle(args, global, &engine(global)?),
        cli::Commands::Batch(args) => batch::handle(args, global, &engine(global)?),
        cli::Commands::Version => version::handle(global),
    }
}

/// Settings are only loaded for commands that analyze text.
fn engine(global: &cli::GlobalArgs) -> Result<Engine> {
    let settings = resolve_settings(global)?;
    Ok(Engine::from_settings(&settings)?)
}
