//! FFI-friendly JSON entrypoint for language bindings.
//!
//! This module provides a single `run_json` function that accepts
//! a mode string and JSON arguments, returning a JSON result.
//! This is the primary interface for the Python bindings.
//!
//! ## Response Envelope
//!
//! All responses use a consistent envelope format:
//! - Success: `{"ok": true, "data": {...report...}}`
//! - Error: `{"ok": false, "error": {"code": "...", "message": "...", "details": ...}}`
//!
//! ## Strict Parsing
//!
//! - `text` / `texts` are required and must be strings
//! - A missing or null `settings` object uses defaults
//! - Invalid values return errors (no silent fallback to defaults)

use serde::Serialize;
use serde_json::Value;

use textproc_settings::Settings;

use crate::engine::Engine;
use crate::error::{ResponseEnvelope, TextprocError};

/// Run a textproc operation with JSON arguments, returning JSON output.
///
/// # Arguments
///
/// * `mode` - One of `count_words`, `extract_emails`, `clean_text`,
///   `analyze_sentiment`, `batch_analyze_sentiment`, `version`
/// * `args_json` - JSON object with `text` (or `texts` for batch) and an
///   optional `settings` object
///
/// # Example
///
/// ```
/// use textproc_core::ffi::run_json;
///
/// let out = run_json("count_words", r#"{"text": "Hello HELLO hello"}"#);
/// let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
/// assert_eq!(parsed["ok"], true);
/// assert_eq!(parsed["data"]["word_count"]["hello"], 3);
/// ```
pub fn run_json(mode: &str, args_json: &str) -> String {
    match run_json_inner(mode, args_json) {
        Ok(data) => ResponseEnvelope::success(data).to_json(),
        Err(err) => ResponseEnvelope::error(&err).to_json(),
    }
}

fn run_json_inner(mode: &str, args_json: &str) -> Result<Value, TextprocError> {
    let args: Value = serde_json::from_str(args_json)?;

    if mode == "version" {
        return Ok(serde_json::json!({
            "version": version(),
            "schema_version": schema_version(),
        }));
    }

    let settings = parse_settings(&args)?;
    let engine = Engine::from_settings(&settings)?;

    match mode {
        "count_words" => {
            let text = parse_text(&args)?;
            to_data(&engine.count_words(&text))
        }
        "extract_emails" => {
            let text = parse_text(&args)?;
            to_data(&engine.extract_emails(&text))
        }
        "clean_text" => {
            let text = parse_text(&args)?;
            to_data(&engine.clean_text(&text))
        }
        "analyze_sentiment" => {
            let text = parse_text(&args)?;
            to_data(&engine.analyze_sentiment(&text)?)
        }
        "batch_analyze_sentiment" => {
            let texts = parse_string_array(&args, "texts")?;
            to_data(&engine.batch_analyze_sentiment(&texts)?)
        }
        _ => Err(TextprocError::unknown_mode(mode)),
    }
}

/// A report that cannot be serialized is our fault, not the caller's.
fn to_data<T: Serialize>(report: &T) -> Result<Value, TextprocError> {
    serde_json::to_value(report).map_err(TextprocError::internal)
}

// ============================================================================
// Strict parsing helpers
// ============================================================================

fn parse_text(args: &Value) -> Result<String, TextprocError> {
    parse_string(args, "text")
}

/// Parse a required string field: missing, null or non-string -> error.
fn parse_string(args: &Value, field: &str) -> Result<String, TextprocError> {
    args.get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| TextprocError::invalid_field(field, "a string"))
}

/// Parse a required string array field: missing or invalid -> error.
fn parse_string_array(args: &Value, field: &str) -> Result<Vec<String>, TextprocError> {
    match args.get(field) {
        Some(v @ Value::Array(_)) => serde_json::from_value::<Vec<String>>(v.clone())
            .map_err(|_| TextprocError::invalid_field(field, "an array of strings")),
        _ => Err(TextprocError::invalid_field(field, "an array of strings")),
    }
}

/// Parse the optional settings object: missing/null -> defaults.
fn parse_settings(args: &Value) -> Result<Settings, TextprocError> {
    match args.get("settings") {
        None | Some(Value::Null) => Ok(Settings::default()),
        Some(v @ Value::Object(_)) => {
            serde_json::from_value(v.clone()).map_err(TextprocError::invalid_settings)
        }
        Some(_) => Err(TextprocError::invalid_field("settings", "an object")),
    }
}

/// Get the textproc version string.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Get the schema version.
pub fn schema_version() -> u32 {
    textproc_types::SCHEMA_VERSION
}
