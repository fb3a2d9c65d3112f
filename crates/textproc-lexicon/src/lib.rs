//! # textproc-lexicon
//!
//! **Tier 1 (Lexicon Store)**
//!
//! Positive and negative word sets for English and Chinese, negation markers,
//! intensifiers with weight multipliers, and override phrases with fixed
//! contributions. A [`Lexicon`] is immutable once built; the built-in one is
//! constructed once per process and shared by reference.
//!
//! ## What belongs here
//! * Word lists and their roles
//! * Entry normalization and validation
//! * The [`PhraseLookup`] view used by CJK segmentation
//!
//! ## What does NOT belong here
//! * Tokenization (see `textproc-tokenize`)
//! * Scoring (see `textproc-sentiment`)
//! * Loading entries from config files (see `textproc-settings`)

#![forbid(unsafe_code)]

mod builder;
mod builtin;
mod error;

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

pub use builder::{LexiconBuilder, MAX_OVERRIDE_WORDS};
pub use error::LexiconError;
pub use textproc_tokenize::PhraseLookup;

static BUILTIN: LazyLock<Lexicon> = LazyLock::new(|| LexiconBuilder::defaults().assemble());

/// Sentiment polarity of a lexicon word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    Positive,
    Negative,
}

impl Polarity {
    pub fn sign(self) -> f64 {
        match self {
            Polarity::Positive => 1.0,
            Polarity::Negative => -1.0,
        }
    }
}

/// What a single token means to the scoring engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WordRole {
    Sentiment(Polarity),
    Negator,
    /// Magnitude multiplier applied to the next sentiment word.
    Intensifier(f64),
    Plain,
}

/// Immutable word/phrase store.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    positive: HashSet<String>,
    negative: HashSet<String>,
    negators: HashSet<String>,
    intensifiers: HashMap<String, f64>,
    overrides: HashMap<String, f64>,
    cjk_phrases: HashSet<String>,
    max_override_words: usize,
}

impl Lexicon {
    /// The built-in English/Chinese lexicon.
    pub fn builtin() -> &'static Lexicon {
        &BUILTIN
    }

    pub fn polarity(&self, word: &str) -> Option<Polarity> {
        if self.positive.contains(word) {
            Some(Polarity::Positive)
        } else if self.negative.contains(word) {
            Some(Polarity::Negative)
        } else {
            None
        }
    }

    pub fn is_negator(&self, word: &str) -> bool {
        self.negators.contains(word)
    }

    pub fn intensifier(&self, word: &str) -> Option<f64> {
        self.intensifiers.get(word).copied()
    }

    /// Fixed contribution of an override phrase. Latin phrases are keyed by
    /// their lowercase words joined with single spaces.
    pub fn override_for(&self, phrase: &str) -> Option<f64> {
        self.overrides.get(phrase).copied()
    }

    /// Role of a canonical token. Sentiment wins over modifier roles.
    pub fn classify(&self, word: &str) -> WordRole {
        if let Some(polarity) = self.polarity(word) {
            WordRole::Sentiment(polarity)
        } else if self.is_negator(word) {
            WordRole::Negator
        } else if let Some(weight) = self.intensifier(word) {
            WordRole::Intensifier(weight)
        } else {
            WordRole::Plain
        }
    }

    /// Word count of the longest Latin override phrase (0 when there is none).
    pub fn max_override_words(&self) -> usize {
        self.max_override_words
    }

    pub fn positive_len(&self) -> usize {
        self.positive.len()
    }

    pub fn negative_len(&self) -> usize {
        self.negative.len()
    }

    pub fn override_len(&self) -> usize {
        self.overrides.len()
    }

    pub fn positive_words(&self) -> impl Iterator<Item = &str> {
        self.positive.iter().map(String::as_str)
    }

    pub fn negative_words(&self) -> impl Iterator<Item = &str> {
        self.negative.iter().map(String::as_str)
    }
}

impl PhraseLookup for Lexicon {
    fn contains_phrase(&self, phrase: &str) -> bool {
        self.cjk_phrases.contains(phrase)
    }
}
