//! # textproc-text
//!
//! **Tier 1 (Text Utilities)**
//!
//! The three non-sentiment operations: case-folded word frequencies, email
//! extraction and allow-list text cleaning. All are total functions over
//! UTF-8 text.
//!
//! ## What belongs here
//! * Word frequency folding
//! * Email grammar matching
//! * Character allow-list filtering
//!
//! ## What does NOT belong here
//! * Sentiment (see `textproc-sentiment`)
//! * Timing receipts (see `textproc-core`)

#![forbid(unsafe_code)]

mod clean;
mod email;
mod words;

pub use clean::{KEPT_PUNCTUATION, clean_text, is_kept};
pub use email::extract_emails;
pub use words::{count_words, total_words};
