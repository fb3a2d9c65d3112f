//! Structured error types for binding-friendly API.
//!
//! These error types are designed to be easily converted to JSON
//! for FFI boundaries while providing rich error information.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use textproc_lexicon::LexiconError;
use textproc_sentiment::SentimentError;
use textproc_settings::SettingsError;

/// Error codes for textproc operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Sentiment input exceeds the configured character limit.
    InputTooLong,
    /// Analysis operation failed.
    AnalysisError,
    /// Invalid JSON input.
    InvalidJson,
    /// A request field has the wrong type or is missing.
    InvalidField,
    /// Unknown operation mode.
    UnknownMode,
    /// Invalid settings or lexicon entries.
    InvalidSettings,
    /// I/O error during operation.
    IoError,
    /// Internal error (unexpected state).
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::InputTooLong => write!(f, "input_too_long"),
            ErrorCode::AnalysisError => write!(f, "analysis_error"),
            ErrorCode::InvalidJson => write!(f, "invalid_json"),
            ErrorCode::InvalidField => write!(f, "invalid_field"),
            ErrorCode::UnknownMode => write!(f, "unknown_mode"),
            ErrorCode::InvalidSettings => write!(f, "invalid_settings"),
            ErrorCode::IoError => write!(f, "io_error"),
            ErrorCode::InternalError => write!(f, "internal_error"),
        }
    }
}

impl ErrorCode {
    /// Whether the caller, rather than the engine, is at fault.
    pub fn is_client_error(self) -> bool {
        !matches!(
            self,
            ErrorCode::AnalysisError | ErrorCode::IoError | ErrorCode::InternalError
        )
    }
}

/// Structured error for FFI-friendly error reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextprocError {
    /// Error code for programmatic handling.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl TextprocError {
    /// Create a new error with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Create an error with additional details.
    pub fn with_details(
        code: ErrorCode,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Create an input-too-long error. Lengths are in characters.
    pub fn input_too_long(actual: usize, max: usize) -> Self {
        Self::new(
            ErrorCode::InputTooLong,
            format!("Text too long: {actual} characters (max {max})"),
        )
    }

    /// Create an invalid JSON error.
    pub fn invalid_json(err: impl fmt::Display) -> Self {
        Self::new(ErrorCode::InvalidJson, format!("Invalid JSON: {}", err))
    }

    /// Create an invalid field error naming the expected type.
    pub fn invalid_field(field: &str, expected: &str) -> Self {
        Self::new(
            ErrorCode::InvalidField,
            format!("Invalid value for '{}': expected {}", field, expected),
        )
    }

    /// Create an unknown mode error.
    pub fn unknown_mode(mode: &str) -> Self {
        Self::new(ErrorCode::UnknownMode, format!("Unknown mode: {}", mode))
    }

    /// Create an analysis error.
    pub fn analysis_error(err: impl fmt::Display) -> Self {
        Self::new(ErrorCode::AnalysisError, format!("Analysis failed: {}", err))
    }

    /// Create an invalid settings error.
    pub fn invalid_settings(err: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::InvalidSettings,
            format!("Invalid settings: {}", err),
        )
    }

    /// Create an I/O error.
    pub fn io_error(err: impl fmt::Display) -> Self {
        Self::new(ErrorCode::IoError, format!("I/O error: {}", err))
    }

    /// Create an internal error.
    pub fn internal(err: impl fmt::Display) -> Self {
        Self::new(ErrorCode::InternalError, format!("Internal error: {}", err))
    }

    /// Attach the position of the failing document in a batch.
    pub fn at_index(mut self, index: usize) -> Self {
        self.details = Some(format!("index {index}"));
        self
    }

    /// Convert to JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            format!(
                r#"{{"code":"{}","message":"{}"}}"#,
                self.code, self.message
            )
        })
    }
}

impl fmt::Display for TextprocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(details) = &self.details {
            write!(f, "[{}] {}: {}", self.code, self.message, details)
        } else {
            write!(f, "[{}] {}", self.code, self.message)
        }
    }
}

impl std::error::Error for TextprocError {}

impl From<serde_json::Error> for TextprocError {
    fn from(err: serde_json::Error) -> Self {
        Self::invalid_json(err)
    }
}

impl From<std::io::Error> for TextprocError {
    fn from(err: std::io::Error) -> Self {
        Self::io_error(err)
    }
}

impl From<SentimentError> for TextprocError {
    fn from(err: SentimentError) -> Self {
        Self::analysis_error(err)
    }
}

impl From<SettingsError> for TextprocError {
    fn from(err: SettingsError) -> Self {
        match err {
            SettingsError::Io(e) => Self::io_error(e),
            other => Self::invalid_settings(other),
        }
    }
}

impl From<LexiconError> for TextprocError {
    fn from(err: LexiconError) -> Self {
        Self::invalid_settings(err)
    }
}

/// Envelope wrapping every FFI response.
///
/// - Success: `{"ok": true, "data": ...}`
/// - Error: `{"ok": false, "error": {"code": "...", "message": "...", "details": ...}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<TextprocError>,
}

impl ResponseEnvelope {
    pub fn success(data: Value) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(err: &TextprocError) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(err.clone()),
        }
    }

    /// Convert to JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| match &self.error {
            Some(err) => format!(r#"{{"ok":false,"error":{}}}"#, err.to_json()),
            None => r#"{"ok":false,"error":{"code":"internal_error","message":"Failed to serialize response"}}"#.to_string(),
        })
    }
}
