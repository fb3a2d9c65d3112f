//! # textproc-config
//!
//! **Tier 3 (Configuration)**
//!
//! This crate defines the CLI arguments for `textproc`.
//!
//! ## What belongs here
//! * Clap `Parser`, `Args`, `Subcommand` structs
//! * Folding CLI flags over loaded [`Settings`]
//!
//! ## What does NOT belong here
//! * Business logic
//! * Reading input or config files (the CLI crate does that)

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use textproc_settings::Settings;

/// `textproc`: word counts, email extraction, text cleaning and
/// English/Chinese sentiment analysis.
#[derive(Parser, Debug)]
#[command(name = "textproc", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Settings file (TOML). Defaults to `textproc.toml` in the working
    /// directory when present.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Md)]
    pub format: OutputFormat,

    /// Maximum sentiment input length, in characters.
    #[arg(long, global = true, value_name = "N")]
    pub max_chars: Option<usize>,

    /// Tokens searched backwards for a negator.
    #[arg(long, global = true, value_name = "N")]
    pub negation_window: Option<usize>,

    /// Verbose output (repeat for more detail).
    #[arg(short = 'v', long = "verbose", global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl GlobalArgs {
    /// Apply flag overrides on top of file settings.
    pub fn apply_overrides(&self, mut settings: Settings) -> Settings {
        if let Some(max) = self.max_chars {
            settings.sentiment.max_input_chars = max;
        }
        if let Some(window) = self.negation_window {
            settings.sentiment.negation_window = window;
        }
        settings
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Markdown summary.
    #[default]
    Md,
    /// Pretty-printed JSON report.
    Json,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Count case-folded word frequencies.
    Words(InputArgs),

    /// Extract email addresses.
    Emails(InputArgs),

    /// Remove characters outside the allow-list.
    Clean(InputArgs),

    /// Analyze the sentiment of one document.
    Sentiment(InputArgs),

    /// Analyze one document per input line.
    Batch(InputArgs),

    /// Print version information.
    Version,
}

/// Where the input text comes from.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct InputArgs {
    /// Literal input text.
    #[arg(long, short = 't', conflicts_with = "file")]
    pub text: Option<String>,

    /// Input file; stdin is read when neither this nor `--text` is given.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}
