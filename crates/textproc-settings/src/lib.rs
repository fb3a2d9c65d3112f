//! # textproc-settings
//!
//! **Tier 0 (Pure Settings)**
//!
//! Clap-free settings for the scoring engine and lexicon. These types mirror
//! the CLI flags and config file without any Clap dependency, so the JSON
//! FFI, Python bindings and CLI all share one shape.
//!
//! ## What belongs here
//! * Serde data types with documented defaults
//! * TOML loading and range validation
//!
//! ## What does NOT belong here
//! * Clap parsing (use textproc-config)
//! * Building a lexicon or analyzer from settings (use textproc-core)

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest accepted negation window.
pub const MAX_NEGATION_WINDOW: usize = 8;

/// File name looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "textproc.toml";

/// Errors from loading or validating settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse settings TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid setting '{field}': {message}")]
    Invalid {
        field: &'static str,
        message: String,
    },
}

/// Scoring engine tunables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentSettings {
    /// Preceding tokens searched for a negator.
    #[serde(default = "default_negation_window")]
    pub negation_window: usize,

    /// Density scale applied before squashing into `[-1, 1]`.
    #[serde(default = "default_normalization")]
    pub normalization: f64,

    /// Scores above this are labelled positive.
    #[serde(default = "default_positive_threshold")]
    pub positive_threshold: f64,

    /// Scores below this are labelled negative.
    #[serde(default = "default_negative_threshold")]
    pub negative_threshold: f64,

    /// Longest accepted sentiment input, in characters.
    #[serde(default = "default_max_input_chars")]
    pub max_input_chars: usize,
}

fn default_negation_window() -> usize {
    3
}

fn default_normalization() -> f64 {
    2.0
}

fn default_positive_threshold() -> f64 {
    0.1
}

fn default_negative_threshold() -> f64 {
    -0.1
}

fn default_max_input_chars() -> usize {
    10_000
}

impl Default for SentimentSettings {
    fn default() -> Self {
        Self {
            negation_window: default_negation_window(),
            normalization: default_normalization(),
            positive_threshold: default_positive_threshold(),
            negative_threshold: default_negative_threshold(),
            max_input_chars: default_max_input_chars(),
        }
    }
}

impl SentimentSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.negation_window > MAX_NEGATION_WINDOW {
            return Err(invalid(
                "negation_window",
                format!("{} exceeds maximum {MAX_NEGATION_WINDOW}", self.negation_window),
            ));
        }
        if !self.normalization.is_finite() || self.normalization <= 0.0 {
            return Err(invalid(
                "normalization",
                format!("{} must be finite and > 0", self.normalization),
            ));
        }
        for (field, value) in [
            ("positive_threshold", self.positive_threshold),
            ("negative_threshold", self.negative_threshold),
        ] {
            if !value.is_finite() || !(-1.0..=1.0).contains(&value) {
                return Err(invalid(field, format!("{value} must lie in [-1, 1]")));
            }
        }
        if self.negative_threshold > self.positive_threshold {
            return Err(invalid(
                "negative_threshold",
                format!(
                    "{} is above positive_threshold {}",
                    self.negative_threshold, self.positive_threshold
                ),
            ));
        }
        if self.max_input_chars == 0 {
            return Err(invalid("max_input_chars", "must be > 0".to_string()));
        }
        Ok(())
    }
}

/// User entries merged over the built-in lexicon.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LexiconSettings {
    #[serde(default)]
    pub positive: Vec<String>,

    #[serde(default)]
    pub negative: Vec<String>,

    #[serde(default)]
    pub negators: Vec<String>,

    /// Word → magnitude multiplier.
    #[serde(default)]
    pub intensifiers: BTreeMap<String, f64>,

    /// Phrase → fixed contribution.
    #[serde(default)]
    pub overrides: BTreeMap<String, f64>,
}

impl LexiconSettings {
    /// True when nothing is added to the built-in lexicon.
    pub fn is_empty(&self) -> bool {
        self.positive.is_empty()
            && self.negative.is_empty()
            && self.negators.is_empty()
            && self.intensifiers.is_empty()
            && self.overrides.is_empty()
    }
}

/// Complete settings document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub sentiment: SentimentSettings,

    #[serde(default)]
    pub lexicon: LexiconSettings,
}

impl Settings {
    /// Parse settings from a TOML string. Values are not validated.
    pub fn from_toml(s: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(s)?)
    }

    /// Load and validate settings from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        let settings = Self::from_toml(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        self.sentiment.validate()
    }
}

fn invalid(field: &'static str, message: String) -> SettingsError {
    SettingsError::Invalid { field, message }
}
