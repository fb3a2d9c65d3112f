//! Python bindings for textproc.
//!
//! This module provides PyO3-based Python bindings for the textproc text
//! analysis library. It exposes both a low-level JSON API and convenience
//! functions that return Python dicts.

use pyo3::prelude::*;
use pyo3::types::PyDict;

// Custom exception for textproc errors.
pyo3::create_exception!(textproc, TextprocError, pyo3::exceptions::PyException);

/// Get the textproc version string.
///
/// Example:
///     >>> import textproc
///     >>> textproc.version()
///     '1.0.0'
#[pyfunction]
fn version() -> &'static str {
    textproc_core::ffi::version()
}

/// Get the JSON schema version of the reports.
#[pyfunction]
fn schema_version() -> u32 {
    textproc_core::ffi::schema_version()
}

/// Run a textproc operation with JSON arguments, returning a JSON string.
///
/// This is the low-level API that accepts and returns JSON strings.
/// For most use cases, prefer the convenience functions like
/// `analyze_sentiment()`.
///
/// Args:
///     mode: "count_words", "extract_emails", "clean_text",
///         "analyze_sentiment", "batch_analyze_sentiment" or "version"
///     args_json: JSON string containing the arguments
///
/// Returns:
///     str: JSON envelope containing the result or error
#[pyfunction]
fn run_json(py: Python<'_>, mode: &str, args_json: &str) -> PyResult<String> {
    // Release the GIL while the engine runs
    py.allow_threads(|| Ok(textproc_core::ffi::run_json(mode, args_json)))
}

/// Run a textproc operation and return the result as a Python dict.
///
/// Args:
///     mode: The operation mode (see `run_json`)
///     args: Python dict containing the arguments (will be converted to JSON)
///
/// Returns:
///     dict: The `data` field from the response envelope
///
/// Raises:
///     TextprocError: If the operation fails
#[pyfunction]
fn run(py: Python<'_>, mode: &str, args: &Bound<'_, PyDict>) -> PyResult<PyObject> {
    let json_module = py.import("json")?;
    let args_json: String = json_module.call_method1("dumps", (args,))?.extract()?;

    let result_json = py.allow_threads(|| textproc_core::ffi::run_json(mode, &args_json));

    let envelope: PyObject = json_module
        .call_method1("loads", (result_json,))?
        .extract()?;

    // Envelope: {"ok": bool, "data": ..., "error": ...}
    if let Ok(dict) = envelope.downcast_bound::<PyDict>(py) {
        let ok = dict
            .get_item("ok")?
            .and_then(|v| v.extract::<bool>().ok())
            .unwrap_or(false);

        if ok {
            if let Some(data) = dict.get_item("data")? {
                return Ok(data.into_pyobject(py)?.unbind().into_any());
            }
            return Ok(envelope);
        }

        let message = match dict.get_item("error")? {
            Some(err) => match err.downcast::<PyDict>() {
                Ok(err_dict) => {
                    let code = err_dict
                        .get_item("code")?
                        .map(|c| c.to_string())
                        .unwrap_or_else(|| "unknown".to_string());
                    let msg = err_dict
                        .get_item("message")?
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| "Unknown error".to_string());
                    match err_dict.get_item("details")? {
                        Some(details) => format!("[{}] {}: {}", code, msg, details),
                        None => format!("[{}] {}", code, msg),
                    }
                }
                Err(_) => "Unknown error".to_string(),
            },
            None => "Unknown error".to_string(),
        };
        return Err(TextprocError::new_err(message));
    }

    Err(TextprocError::new_err("Invalid response format"))
}

fn text_args<'py>(
    py: Python<'py>,
    key: &str,
    value: impl IntoPyObject<'py>,
    settings: Option<&Bound<'py, PyDict>>,
) -> PyResult<Bound<'py, PyDict>> {
    let args = PyDict::new(py);
    args.set_item(key, value)?;
    if let Some(s) = settings {
        args.set_item("settings", s)?;
    }
    Ok(args)
}

/// Count case-folded word frequencies.
///
/// Returns:
///     dict: ``word_count``, ``total_words``, ``unique_words``,
///     ``processing_time_ms``
///
/// Example:
///     >>> textproc.count_words("Hello HELLO hello")["word_count"]
///     {'hello': 3}
#[pyfunction]
fn count_words(py: Python<'_>, text: &str) -> PyResult<PyObject> {
    let args = text_args(py, "text", text, None)?;
    run(py, "count_words", &args)
}

/// Extract every email address, in order.
#[pyfunction]
fn extract_emails(py: Python<'_>, text: &str) -> PyResult<PyObject> {
    let args = text_args(py, "text", text, None)?;
    run(py, "extract_emails", &args)
}

/// Remove characters outside letters, digits, whitespace and ``, ! ? .``.
#[pyfunction]
fn clean_text(py: Python<'_>, text: &str) -> PyResult<PyObject> {
    let args = text_args(py, "text", text, None)?;
    run(py, "clean_text", &args)
}

/// Analyze the sentiment of English, Chinese or mixed text.
///
/// Args:
///     text: Input text (at most ``max_input_chars`` characters)
///     settings: Optional dict with ``sentiment`` and ``lexicon`` sections
///
/// Raises:
///     TextprocError: ``input_too_long`` or ``invalid_settings``
///
/// Example:
///     >>> r = textproc.analyze_sentiment("很好！超级完美！")
///     >>> r["label"], r["language"]
///     ('positive', 'zh')
#[pyfunction]
#[pyo3(signature = (text, settings=None))]
fn analyze_sentiment(
    py: Python<'_>,
    text: &str,
    settings: Option<&Bound<'_, PyDict>>,
) -> PyResult<PyObject> {
    let args = text_args(py, "text", text, settings)?;
    run(py, "analyze_sentiment", &args)
}

/// Analyze many documents in parallel; results keep input order.
#[pyfunction]
#[pyo3(signature = (texts, settings=None))]
fn batch_analyze_sentiment(
    py: Python<'_>,
    texts: Vec<String>,
    settings: Option<&Bound<'_, PyDict>>,
) -> PyResult<PyObject> {
    let args = text_args(py, "texts", texts, settings)?;
    run(py, "batch_analyze_sentiment", &args)
}

/// The textproc Python module.
///
/// Quick Start:
///     >>> import textproc
///     >>> textproc.analyze_sentiment("Extremely fantastic! I very love it!")["label"]
///     'positive'
///     >>> textproc.extract_emails("mail a@example.com")["emails"]
///     ['a@example.com']
#[pymodule]
fn _textproc(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("TextprocError", m.py().get_type::<TextprocError>())?;
    m.add("__version__", version())?;
    m.add("SCHEMA_VERSION", schema_version())?;

    m.add_function(wrap_pyfunction!(version, m)?)?;
    m.add_function(wrap_pyfunction!(schema_version, m)?)?;
    m.add_function(wrap_pyfunction!(run_json, m)?)?;
    m.add_function(wrap_pyfunction!(run, m)?)?;
    m.add_function(wrap_pyfunction!(count_words, m)?)?;
    m.add_function(wrap_pyfunction!(extract_emails, m)?)?;
    m.add_function(wrap_pyfunction!(clean_text, m)?)?;
    m.add_function(wrap_pyfunction!(analyze_sentiment, m)?)?;
    m.add_function(wrap_pyfunction!(batch_analyze_sentiment, m)?)?;

    Ok(())
}
