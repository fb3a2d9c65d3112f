//! # textproc-core
//!
//! **Tier 3 (Façade)**
//!
//! This crate is the **primary library interface** for `textproc`. It wires
//! the text utilities and the sentiment engine to settings, adds timing
//! receipts, batch analysis and structured errors, and exposes the JSON
//! entrypoint used by language bindings.
//!
//! ## Example
//!
//! ```rust
//! use textproc_core::{analyze_sentiment, count_words};
//!
//! let words = count_words("Hello HELLO hello");
//! assert_eq!(words.word_count["hello"], 3);
//!
//! let report = analyze_sentiment("Extremely fantastic! I very love it!").unwrap();
//! assert!(report.result.score > 0.3);
//! ```

#![forbid(unsafe_code)]

mod engine;
pub mod error;
pub mod ffi;

pub use engine::Engine;
pub use error::{ErrorCode, ResponseEnvelope, TextprocError};

// Re-export types for convenience
pub use textproc_settings as settings;
pub use textproc_types as types;

use textproc_types::{
    BatchSentimentReport, CleanTextReport, EmailReport, SentimentReport, WordCountReport,
};

/// Case-folded word frequencies with totals.
pub fn count_words(text: &str) -> WordCountReport {
    Engine::default().count_words(text)
}

/// Every email address in `text`, in order.
pub fn extract_emails(text: &str) -> EmailReport {
    Engine::default().extract_emails(text)
}

/// `text` with everything outside the allow-list removed.
pub fn clean_text(text: &str) -> CleanTextReport {
    Engine::default().clean_text(text)
}

/// Sentiment with the built-in lexicon and default settings.
pub fn analyze_sentiment(text: &str) -> Result<SentimentReport, TextprocError> {
    Engine::default().analyze_sentiment(text)
}

/// Sentiment for many documents, in input order.
pub fn batch_analyze_sentiment<S>(texts: &[S]) -> Result<BatchSentimentReport, TextprocError>
where
    S: AsRef<str> + Sync,
{
    Engine::default().batch_analyze_sentiment(texts)
}
