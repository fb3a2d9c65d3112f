//! Validated construction of a [`Lexicon`].

use textproc_tokenize::{MAX_PHRASE_CHARS, is_cjk_ideograph, is_word_char};

use crate::builtin;
use crate::{Lexicon, LexiconError};

/// Longest Latin override phrase, in words.
pub const MAX_OVERRIDE_WORDS: usize = 5;

/// Collects entries, then validates them into an immutable [`Lexicon`].
///
/// Later intensifier weights and override contributions replace earlier ones
/// for the same key, so user entries can retune built-in ones.
#[derive(Debug, Clone, Default)]
pub struct LexiconBuilder {
    positive: Vec<String>,
    negative: Vec<String>,
    negators: Vec<String>,
    intensifiers: Vec<(String, f64)>,
    overrides: Vec<(String, f64)>,
}

impl LexiconBuilder {
    /// An empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// A builder preloaded with the built-in lists.
    pub fn defaults() -> Self {
        Self::new()
            .positive(builtin::POSITIVE_EN.iter().chain(builtin::POSITIVE_ZH).copied())
            .negative(builtin::NEGATIVE_EN.iter().chain(builtin::NEGATIVE_ZH).copied())
            .negators(builtin::NEGATORS_EN.iter().chain(builtin::NEGATORS_ZH).copied())
            .intensifiers(builtin::INTENSIFIERS.iter().copied())
            .overrides(builtin::OVERRIDES.iter().copied())
    }

    pub fn positive<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.positive.extend(words.into_iter().map(Into::into));
        self
    }

    pub fn negative<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.negative.extend(words.into_iter().map(Into::into));
        self
    }

    pub fn negators<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.negators.extend(words.into_iter().map(Into::into));
        self
    }

    pub fn intensifier(mut self, word: impl Into<String>, weight: f64) -> Self {
        self.intensifiers.push((word.into(), weight));
        self
    }

    pub fn intensifiers<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        self.intensifiers
            .extend(entries.into_iter().map(|(w, v)| (w.into(), v)));
        self
    }

    pub fn override_phrase(mut self, phrase: impl Into<String>, contribution: f64) -> Self {
        self.overrides.push((phrase.into(), contribution));
        self
    }

    pub fn overrides<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        self.overrides
            .extend(entries.into_iter().map(|(p, v)| (p.into(), v)));
        self
    }

    /// Normalize and validate every entry.
    pub fn build(self) -> Result<Lexicon, LexiconError> {
        let normalized = LexiconBuilder {
            positive: normalize_all(&self.positive)?,
            negative: normalize_all(&self.negative)?,
            negators: normalize_all(&self.negators)?,
            intensifiers: self
                .intensifiers
                .iter()
                .map(|(word, weight)| {
                    let word = normalize_word(word)?;
                    if !weight.is_finite() || *weight <= 0.0 {
                        return Err(LexiconError::InvalidWeight {
                            word,
                            weight: *weight,
                        });
                    }
                    Ok((word, *weight))
                })
                .collect::<Result<_, _>>()?,
            overrides: self
                .overrides
                .iter()
                .map(|(phrase, value)| {
                    let phrase = normalize_phrase(phrase)?;
                    if !value.is_finite() {
                        return Err(LexiconError::InvalidContribution {
                            phrase,
                            value: *value,
                        });
                    }
                    Ok((phrase, *value))
                })
                .collect::<Result<_, _>>()?,
        };

        let lexicon = normalized.assemble();
        if let Some(word) = lexicon
            .positive
            .iter()
            .filter(|w| lexicon.negative.contains(*w))
            .min()
        {
            return Err(LexiconError::ConflictingPolarity { word: word.clone() });
        }
        Ok(lexicon)
    }

    /// Build without validation. Only for entries already in canonical form.
    pub(crate) fn assemble(self) -> Lexicon {
        let mut lexicon = Lexicon {
            positive: self.positive.into_iter().collect(),
            negative: self.negative.into_iter().collect(),
            negators: self.negators.into_iter().collect(),
            intensifiers: self.intensifiers.into_iter().collect(),
            overrides: self.overrides.into_iter().collect(),
            ..Lexicon::default()
        };

        let keys = lexicon
            .positive
            .iter()
            .chain(&lexicon.negative)
            .chain(&lexicon.negators)
            .chain(lexicon.intensifiers.keys())
            .chain(lexicon.overrides.keys());
        lexicon.cjk_phrases = keys
            .filter(|k| k.chars().count() > 1 && k.chars().all(is_cjk_ideograph))
            .cloned()
            .collect();
        lexicon.max_override_words = lexicon
            .overrides
            .keys()
            .filter(|k| !k.chars().all(is_cjk_ideograph))
            .map(|k| k.split(' ').count())
            .max()
            .unwrap_or(0);
        lexicon
    }
}

fn normalize_all(words: &[String]) -> Result<Vec<String>, LexiconError> {
    words.iter().map(|w| normalize_word(w)).collect()
}

/// Trim and lowercase a single-token entry.
fn normalize_word(raw: &str) -> Result<String, LexiconError> {
    let word = raw.trim().to_lowercase();
    if word.is_empty() {
        return Err(LexiconError::EmptyEntry);
    }
    if word.chars().all(is_cjk_ideograph) {
        if word.chars().count() > MAX_PHRASE_CHARS {
            return Err(LexiconError::PhraseTooLong {
                phrase: word,
                max: MAX_PHRASE_CHARS,
            });
        }
        return Ok(word);
    }
    if is_latin_token(&word) {
        Ok(word)
    } else {
        Err(LexiconError::InvalidWord { word })
    }
}

/// Normalize an override: one CJK phrase, or up to [`MAX_OVERRIDE_WORDS`]
/// Latin words joined by single spaces.
fn normalize_phrase(raw: &str) -> Result<String, LexiconError> {
    let phrase = raw.trim().to_lowercase();
    if phrase.is_empty() {
        return Err(LexiconError::EmptyEntry);
    }
    if phrase.chars().all(is_cjk_ideograph) {
        return normalize_word(&phrase);
    }

    let words: Vec<&str> = phrase.split_whitespace().collect();
    if !words.iter().all(|w| is_latin_token(w)) {
        return Err(LexiconError::InvalidWord { word: phrase });
    }
    if words.len() > MAX_OVERRIDE_WORDS {
        return Err(LexiconError::PhraseTooLong {
            phrase,
            max: MAX_OVERRIDE_WORDS,
        });
    }
    Ok(words.join(" "))
}

fn is_latin_token(word: &str) -> bool {
    word.chars().all(|c| is_word_char(c) && !is_cjk_ideograph(c))
}
