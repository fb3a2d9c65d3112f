//! # textproc-sentiment
//!
//! **Tier 2 (Scoring Engine)**
//!
//! Walks the token stream of a text, resolves negation and intensifier scope,
//! checks override phrases before single-token lookup, and aggregates a
//! signed score, a confidence and the matched words.
//!
//! ## What belongs here
//! * The scoring state machine
//! * Score, label and confidence aggregation
//!
//! ## What does NOT belong here
//! * Word lists (see `textproc-lexicon`)
//! * Input length limits and timing (see `textproc-core`)

#![forbid(unsafe_code)]

mod analyzer;
mod error;
mod matcher;
mod window;

pub use analyzer::{ScoringOptions, SentimentAnalyzer};
pub use error::SentimentError;
pub use matcher::MatchResult;
pub use window::MAX_NEGATION_WINDOW;

use textproc_lexicon::Lexicon;
use textproc_types::SentimentResult;

/// Analyze `text` with the built-in lexicon and default options.
pub fn analyze(text: &str) -> Result<SentimentResult, SentimentError> {
    SentimentAnalyzer::new(Lexicon::builtin()).analyze(text)
}
