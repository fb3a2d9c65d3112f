use thiserror::Error;

/// Errors raised while building a [`crate::Lexicon`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LexiconError {
    #[error("Lexicon entry is empty")]
    EmptyEntry,

    #[error("Word '{word}' is registered as both positive and negative")]
    ConflictingPolarity { word: String },

    #[error("Intensifier '{word}' has invalid weight {weight}: expected a finite value > 0")]
    InvalidWeight { word: String, weight: f64 },

    #[error("Override '{phrase}' has non-finite contribution {value}")]
    InvalidContribution { phrase: String, value: f64 },

    #[error("Phrase '{phrase}' is longer than {max} units")]
    PhraseTooLong { phrase: String, max: usize },

    #[error("Entry '{word}' is not a single word of one script")]
    InvalidWord { word: String },
}
