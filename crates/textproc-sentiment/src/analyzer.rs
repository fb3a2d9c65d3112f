use textproc_lexicon::{Lexicon, WordRole};
use textproc_tokenize::{detect_language, tokenize};
use textproc_types::{SentimentLabel, SentimentResult};
use tracing::debug;

use crate::SentimentError;
use crate::matcher::{MatchResult, match_at};
use crate::window::{LookBack, Slot};

/// Tunables for scoring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringOptions {
    /// How many preceding tokens are searched for a negator.
    pub negation_window: usize,
    /// Scale applied to the per-token density before squashing.
    pub normalization: f64,
    pub positive_threshold: f64,
    pub negative_threshold: f64,
}

impl Default for ScoringOptions {
    fn default() -> Self {
        Self {
            negation_window: 3,
            normalization: 2.0,
            positive_threshold: 0.1,
            negative_threshold: -0.1,
        }
    }
}

/// Scores texts against a borrowed lexicon.
#[derive(Debug, Clone, Copy)]
pub struct SentimentAnalyzer<'a> {
    lexicon: &'a Lexicon,
    options: ScoringOptions,
}

/// Running totals for one pass over the tokens.
#[derive(Debug, Default)]
struct Tally {
    raw: f64,
    content_tokens: usize,
    matched: usize,
    positive_words: Vec<String>,
    negative_words: Vec<String>,
}

impl Tally {
    fn record(&mut self, surface: &str, contribution: f64) {
        if contribution == 0.0 {
            return;
        }
        self.raw += contribution;
        self.matched += 1;
        if contribution > 0.0 {
            self.positive_words.push(surface.to_string());
        } else {
            self.negative_words.push(surface.to_string());
        }
    }
}

impl<'a> SentimentAnalyzer<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self::with_options(lexicon, ScoringOptions::default())
    }

    pub fn with_options(lexicon: &'a Lexicon, options: ScoringOptions) -> Self {
        Self { lexicon, options }
    }

    pub fn options(&self) -> &ScoringOptions {
        &self.options
    }

    pub fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    /// Score `text`. Total over valid UTF-8; the only error is a non-finite
    /// aggregate, which means the options or lexicon are unusable.
    pub fn analyze(&self, text: &str) -> Result<SentimentResult, SentimentError> {
        let language = detect_language(text);
        let tokens = tokenize(text, self.lexicon);
        if tokens.is_empty() {
            return Ok(SentimentResult::empty(language));
        }

        let mut tally = Tally::default();
        let mut window = LookBack::new(self.options.negation_window);
        let mut intensifier: Option<f64> = None;
        let mut i = 0;

        while i < tokens.len() {
            match match_at(self.lexicon, &tokens, i) {
                MatchResult::Override { len, contribution } => {
                    let surface = &text[tokens[i].start..tokens[i + len - 1].end];
                    tally.record(surface, contribution);
                    tally.content_tokens += len;
                    for _ in 0..len {
                        window.push(Slot::Other);
                    }
                    intensifier = None;
                    i += len;
                    continue;
                }
                MatchResult::LexiconHit(polarity) => {
                    let mut contribution = polarity.sign();
                    if window.take_negations() % 2 == 1 {
                        contribution = -contribution;
                    }
                    if let Some(weight) = intensifier.take() {
                        contribution *= weight;
                    }
                    tally.record(&text[tokens[i].span()], contribution);
                    tally.content_tokens += 1;
                    window.push(Slot::Other);
                }
                MatchResult::NoMatch(WordRole::Negator) => {
                    window.push(Slot::Negator);
                    intensifier = None;
                }
                MatchResult::NoMatch(WordRole::Intensifier(weight)) => {
                    window.push(Slot::Other);
                    // Consecutive intensifiers stack.
                    intensifier = Some(intensifier.unwrap_or(1.0) * weight);
                }
                MatchResult::NoMatch(_) => {
                    tally.content_tokens += 1;
                    window.push(Slot::Other);
                    intensifier = None;
                }
            }
            i += 1;
        }

        let density = tally.raw / tally.content_tokens.max(1) as f64;
        let score = (density * self.options.normalization).tanh();
        if !score.is_finite() {
            return Err(SentimentError::Analysis {
                message: format!(
                    "non-finite score from raw {} over {} tokens",
                    tally.raw, tally.content_tokens
                ),
            });
        }

        let confidence = if tally.matched == 0 {
            0.0
        } else {
            let coverage = tally.matched as f64 / tally.content_tokens.max(1) as f64;
            (0.2 + score.abs() + 0.3 * coverage).min(1.0)
        };

        debug!(
            tokens = tokens.len(),
            content = tally.content_tokens,
            matched = tally.matched,
            score,
            "sentiment scored"
        );

        Ok(SentimentResult {
            score,
            label: self.label(score),
            confidence,
            word_count: tokens.len(),
            positive_words: tally.positive_words,
            negative_words: tally.negative_words,
            language,
        })
    }

    fn label(&self, score: f64) -> SentimentLabel {
        if score > self.options.positive_threshold {
            SentimentLabel::Positive
        } else if score < self.options.negative_threshold {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use textproc_types::Language;

    fn score(text: &str) -> f64 {
        SentimentAnalyzer::new(Lexicon::builtin())
            .analyze(text)
            .unwrap()
            .score
    }

    #[test]
    fn empty_text_is_neutral_with_zero_confidence() {
        let r = SentimentAnalyzer::new(Lexicon::builtin()).analyze("").unwrap();
        assert_eq!(r.score, 0.0);
        assert_eq!(r.confidence, 0.0);
        assert_eq!(r.label, SentimentLabel::Neutral);
        assert_eq!(r.word_count, 0);
        assert_eq!(r.language, Language::English);
    }

    #[test]
    fn negated_word_is_recorded_by_post_negation_sign() {
        let r = SentimentAnalyzer::new(Lexicon::builtin())
            .analyze("This is not good")
            .unwrap();
        assert!(r.positive_words.is_empty());
        assert_eq!(r.negative_words, vec!["good"]);
        assert_eq!(r.label, SentimentLabel::Negative);
    }

    #[test]
    fn negation_is_consumed_by_first_hit() {
        let r = SentimentAnalyzer::new(Lexicon::builtin())
            .analyze("not good great")
            .unwrap();
        assert_eq!(r.negative_words, vec!["good"]);
        assert_eq!(r.positive_words, vec!["great"]);
    }

    #[test]
    fn negator_outside_window_is_ignored() {
        let r = SentimentAnalyzer::new(Lexicon::builtin())
            .analyze("not the one thing good")
            .unwrap();
        assert_eq!(r.positive_words, vec!["good"]);
    }

    #[test]
    fn double_negation_cancels() {
        assert!(score("not never good") > 0.0);
    }

    #[test]
    fn intensifier_applies_to_next_token_only() {
        assert!(score("very good") > score("good"));
        assert_eq!(score("very table good"), score("table good"));
    }

    #[test]
    fn stacked_intensifiers_multiply() {
        assert!(score("very extremely good") > score("extremely good"));
        assert!(score("非常很好") > score("很好"));
        assert_eq!(score("very table extremely good"), score("table extremely good"));
    }

    #[test]
    fn modifiers_do_not_dilute_density() {
        let plain = score("good");
        let intensified = score("extremely good");
        assert!(intensified > plain);
    }

    #[test]
    fn zero_override_blocks_compositional_reading() {
        let r = SentimentAnalyzer::new(Lexicon::builtin())
            .analyze("好不容易")
            .unwrap();
        assert_eq!(r.score, 0.0);
        assert!(r.positive_words.is_empty());
        assert_eq!(r.confidence, 0.0);
    }

    #[test]
    fn override_surface_is_original_text() {
        let r = SentimentAnalyzer::new(Lexicon::builtin())
            .analyze("A total Waste  of Time.")
            .unwrap();
        assert_eq!(r.negative_words, vec!["Waste  of Time"]);
    }

    #[test]
    fn thresholds_are_configurable() {
        let options = ScoringOptions {
            positive_threshold: 0.99,
            ..ScoringOptions::default()
        };
        let r = SentimentAnalyzer::with_options(Lexicon::builtin(), options)
            .analyze("good")
            .unwrap();
        assert_eq!(r.label, SentimentLabel::Neutral);
    }

    #[test]
    fn non_finite_normalization_is_an_analysis_error() {
        let options = ScoringOptions {
            normalization: f64::NAN,
            ..ScoringOptions::default()
        };
        let err = SentimentAnalyzer::with_options(Lexicon::builtin(), options)
            .analyze("good")
            .unwrap_err();
        assert!(matches!(err, SentimentError::Analysis { .. }));
    }
}
