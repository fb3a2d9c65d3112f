//! # textproc-tokenize
//!
//! **Tier 0.5 (Text Primitives)**
//!
//! Character classification, language classification and script-aware
//! tokenization. Latin runs split on anything that is not a letter, digit or
//! underscore; CJK runs are segmented by longest phrase match against a
//! [`PhraseLookup`] dictionary, falling back to single characters.
//!
//! ## What belongs here
//! * Script/character classes
//! * `en` / `zh` / `mixed` language classification
//! * Token spans and segmentation strategies
//!
//! ## What does NOT belong here
//! * Lexicon contents (see `textproc-lexicon`)
//! * Scoring (see `textproc-sentiment`)

#![forbid(unsafe_code)]

mod script;
mod segment;

pub use script::{
    LanguageProfile, detect_language, is_cjk_ideograph, is_latin_letter, is_word_char,
};
pub use segment::{
    MAX_PHRASE_CHARS, NoPhrases, PhraseLookup, Script, Token, split_words, tokenize,
};
