//! Fuzz target for the FFI `run_json` entrypoint.
//!
//! The first byte selects a mode; the rest is passed as the JSON args.
//! Every call must return a well-formed envelope.

#![no_main]
use libfuzzer_sys::fuzz_target;
use textproc_core::ffi::run_json;

const MAX_INPUT_SIZE: usize = 16 * 1024;

const MODES: &[&str] = &[
    "count_words",
    "extract_emails",
    "clean_text",
    "analyze_sentiment",
    "batch_analyze_sentiment",
    "version",
    "bogus",
];

fuzz_target!(|data: &[u8]| {
    if data.is_empty() || data.len() > MAX_INPUT_SIZE {
        return;
    }
    let mode = MODES[data[0] as usize % MODES.len()];
    let Ok(args) = std::str::from_utf8(&data[1..]) else {
        return;
    };

    let out = run_json(mode, args);
    let envelope: serde_json::Value =
        serde_json::from_str(&out).expect("run_json always returns JSON");
    let ok = envelope["ok"].as_bool().expect("envelope has boolean ok");
    if ok {
        assert!(envelope.get("data").is_some());
        assert!(envelope.get("error").is_none());
    } else {
        assert!(envelope["error"]["code"].is_string());
        assert!(envelope["error"]["message"].is_string());
    }
});
