//! # textproc-types
//!
//! **Tier 0 (Core Types)**
//!
//! This crate defines the data model and serialization contract shared by
//! every textproc crate and every binding. Field names and value ranges here
//! are the wire contract: the JSON produced by `textproc-core::ffi` and the
//! Python bindings is exactly the serde form of these structs.
//!
//! ## Stability Policy
//!
//! - **JSON consumers**: Stable. Renaming or removing a field requires a
//!   bump of `SCHEMA_VERSION`.
//! - **Rust library consumers**: Semi-stable. New fields may be added in
//!   minor versions.
//!
//! ## What belongs here
//! * Pure data structs (results, receipts)
//! * Serialization/deserialization logic
//! * Stability markers (SCHEMA_VERSION)
//!
//! ## What does NOT belong here
//! * Tokenization or scoring logic
//! * File I/O
//! * CLI argument parsing

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The current schema version for all receipt types.
pub const SCHEMA_VERSION: u32 = 1;

/// Word frequency table keyed by canonical (lowercased) token.
///
/// A `BTreeMap` keeps serialized output deterministic; key order carries no
/// meaning.
pub type WordFrequency = BTreeMap<String, usize>;

/// Dominant language of an analyzed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "zh")]
    Chinese,
    #[serde(rename = "mixed")]
    Mixed,
}

impl Language {
    /// Short code used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Chinese => "zh",
            Language::Mixed => "mixed",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Polarity bucket derived from a sentiment score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentLabel {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of analyzing a single document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    /// Signed score in `[-1.0, 1.0]`.
    pub score: f64,
    pub label: SentimentLabel,
    /// Confidence in `[0.0, 1.0]`.
    pub confidence: f64,
    /// Number of tokens the text was segmented into.
    pub word_count: usize,
    /// Tokens that contributed positively, in document order.
    pub positive_words: Vec<String>,
    /// Tokens that contributed negatively, in document order.
    pub negative_words: Vec<String>,
    pub language: Language,
}

impl SentimentResult {
    /// The result for a text with no tokens at all.
    pub fn empty(language: Language) -> Self {
        Self {
            score: 0.0,
            label: SentimentLabel::Neutral,
            confidence: 0.0,
            word_count: 0,
            positive_words: Vec::new(),
            negative_words: Vec::new(),
            language,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

impl ToolInfo {
    pub fn current() -> Self {
        Self {
            name: "textproc".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

// -------------------------
// Receipts
// -------------------------

/// Word frequency receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordCountReport {
    pub word_count: WordFrequency,
    /// Sum of all counts.
    pub total_words: usize,
    /// Number of distinct keys.
    pub unique_words: usize,
    pub processing_time_ms: f64,
}

/// Email extraction receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailReport {
    pub emails: Vec<String>,
    pub email_count: usize,
    pub processing_time_ms: f64,
}

/// Text cleaning receipt. Lengths are counted in characters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanTextReport {
    pub cleaned_text: String,
    pub original_length: usize,
    pub cleaned_length: usize,
    pub processing_time_ms: f64,
}

/// Sentiment receipt: the result fields plus timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentReport {
    #[serde(flatten)]
    pub result: SentimentResult,
    pub processing_time_ms: f64,
}

/// Batch sentiment receipt. `results[i]` belongs to input document `i`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSentimentReport {
    pub results: Vec<SentimentResult>,
    pub count: usize,
    pub processing_time_ms: f64,
}
