//! Configured engine: lexicon, scoring options and input limits.

use std::borrow::Cow;
use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, warn};

use textproc_lexicon::{Lexicon, LexiconBuilder};
use textproc_sentiment::{ScoringOptions, SentimentAnalyzer};
use textproc_settings::{LexiconSettings, SentimentSettings, Settings};
use textproc_types::{
    BatchSentimentReport, CleanTextReport, EmailReport, SentimentReport, SentimentResult,
    WordCountReport,
};

use crate::error::TextprocError;

/// Immutable, shareable analysis engine. Cheap to build with the built-in
/// lexicon; safe to use from many threads at once.
#[derive(Debug, Clone)]
pub struct Engine {
    lexicon: Cow<'static, Lexicon>,
    options: ScoringOptions,
    max_input_chars: usize,
}

impl Default for Engine {
    fn default() -> Self {
        let sentiment = SentimentSettings::default();
        Self {
            lexicon: Cow::Borrowed(Lexicon::builtin()),
            options: scoring_options(&sentiment),
            max_input_chars: sentiment.max_input_chars,
        }
    }
}

impl Engine {
    /// Validate `settings` and build an engine from them.
    pub fn from_settings(settings: &Settings) -> Result<Self, TextprocError> {
        settings.validate()?;
        let lexicon = if settings.lexicon.is_empty() {
            Cow::Borrowed(Lexicon::builtin())
        } else {
            Cow::Owned(custom_lexicon(&settings.lexicon)?)
        };
        Ok(Self {
            lexicon,
            options: scoring_options(&settings.sentiment),
            max_input_chars: settings.sentiment.max_input_chars,
        })
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn max_input_chars(&self) -> usize {
        self.max_input_chars
    }

    pub fn analyzer(&self) -> SentimentAnalyzer<'_> {
        SentimentAnalyzer::with_options(&self.lexicon, self.options)
    }

    pub fn count_words(&self, text: &str) -> WordCountReport {
        let start = Instant::now();
        let word_count = textproc_text::count_words(text);
        let report = WordCountReport {
            total_words: textproc_text::total_words(&word_count),
            unique_words: word_count.len(),
            word_count,
            processing_time_ms: elapsed_ms(start),
        };
        debug!(
            total = report.total_words,
            unique = report.unique_words,
            ms = report.processing_time_ms,
            "words counted"
        );
        report
    }

    pub fn extract_emails(&self, text: &str) -> EmailReport {
        let start = Instant::now();
        let emails = textproc_text::extract_emails(text);
        let report = EmailReport {
            email_count: emails.len(),
            emails,
            processing_time_ms: elapsed_ms(start),
        };
        debug!(count = report.email_count, ms = report.processing_time_ms, "emails extracted");
        report
    }

    pub fn clean_text(&self, text: &str) -> CleanTextReport {
        let start = Instant::now();
        let cleaned_text = textproc_text::clean_text(text);
        let report = CleanTextReport {
            original_length: text.chars().count(),
            cleaned_length: cleaned_text.chars().count(),
            cleaned_text,
            processing_time_ms: elapsed_ms(start),
        };
        debug!(
            original = report.original_length,
            cleaned = report.cleaned_length,
            ms = report.processing_time_ms,
            "text cleaned"
        );
        report
    }

    /// Length-checked sentiment analysis without timing.
    pub fn sentiment(&self, text: &str) -> Result<SentimentResult, TextprocError> {
        let chars = text.chars().count();
        if chars > self.max_input_chars {
            warn!(chars, max = self.max_input_chars, "sentiment input rejected");
            return Err(TextprocError::input_too_long(chars, self.max_input_chars));
        }
        Ok(self.analyzer().analyze(text)?)
    }

    pub fn analyze_sentiment(&self, text: &str) -> Result<SentimentReport, TextprocError> {
        let start = Instant::now();
        let result = self.sentiment(text)?;
        let report = SentimentReport {
            result,
            processing_time_ms: elapsed_ms(start),
        };
        debug!(
            score = report.result.score,
            label = %report.result.label,
            ms = report.processing_time_ms,
            "sentiment analyzed"
        );
        Ok(report)
    }

    /// Analyze documents in parallel. Results keep input order; the first
    /// failing document (by index) fails the whole batch.
    pub fn batch_analyze_sentiment<S>(
        &self,
        texts: &[S],
    ) -> Result<BatchSentimentReport, TextprocError>
    where
        S: AsRef<str> + Sync,
    {
        let start = Instant::now();
        let outcomes: Vec<Result<SentimentResult, TextprocError>> = texts
            .par_iter()
            .map(|text| self.sentiment(text.as_ref()))
            .collect();

        let mut results = Vec::with_capacity(outcomes.len());
        for (index, outcome) in outcomes.into_iter().enumerate() {
            results.push(outcome.map_err(|err| err.at_index(index))?);
        }

        let report = BatchSentimentReport {
            count: results.len(),
            results,
            processing_time_ms: elapsed_ms(start),
        };
        debug!(count = report.count, ms = report.processing_time_ms, "batch analyzed");
        Ok(report)
    }
}

fn scoring_options(settings: &SentimentSettings) -> ScoringOptions {
    ScoringOptions {
        negation_window: settings.negation_window,
        normalization: settings.normalization,
        positive_threshold: settings.positive_threshold,
        negative_threshold: settings.negative_threshold,
    }
}

fn custom_lexicon(settings: &LexiconSettings) -> Result<Lexicon, TextprocError> {
    let lexicon = LexiconBuilder::defaults()
        .positive(settings.positive.iter().map(String::as_str))
        .negative(settings.negative.iter().map(String::as_str))
        .negators(settings.negators.iter().map(String::as_str))
        .intensifiers(settings.intensifiers.iter().map(|(w, v)| (w.as_str(), *v)))
        .overrides(settings.overrides.iter().map(|(p, v)| (p.as_str(), *v)))
        .build()?;
    debug!(
        positive = lexicon.positive_len(),
        negative = lexicon.negative_len(),
        "custom lexicon built"
    );
    Ok(lexicon)
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
