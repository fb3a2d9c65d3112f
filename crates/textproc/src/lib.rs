//! # textproc
//!
//! **CLI Binary**
//!
//! This is the entry point for the `textproc` command-line application.
//! It orchestrates the other crates to perform the requested actions.
//!
//! ## Responsibilities
//! * Parse command line arguments
//! * Install logging
//! * Load settings and read input
//! * Dispatch commands to appropriate handlers
//! * Handle errors and exit codes
//!
//! This crate should contain minimal business logic.

mod commands;
mod config;
mod input;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use textproc_config::Cli;

/// Entry point used by the `textproc` binary.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.global.verbose);
    commands::dispatch(cli)
}

/// Render an error and its causes for stderr.
pub fn format_error(err: &anyhow::Error) -> String {
    let mut out = format!("Error: {err}");
    for cause in err.chain().skip(1) {
        out.push_str(&format!("\n  caused by: {cause}"));
    }
    out
}

/// Logs go to stderr. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn format_error_lists_causes() {
        let err = std::fs::read_to_string("/definitely/not/here")
            .context("Failed to read input file")
            .unwrap_err();
        let rendered = format_error(&err);
        assert!(rendered.starts_with("Error: Failed to read input file"));
        assert!(rendered.contains("caused by:"));
    }
}
