use proptest::prelude::*;
use serde_json::{Value, json};
use textproc_core::ffi::run_json;
use textproc_core::{clean_text, count_words};

proptest! {
    #[test]
    fn run_json_always_returns_an_envelope(mode in "[a-z_]{0,24}", text in "\\PC{0,80}") {
        let out = run_json(&mode, &json!({ "text": text }).to_string());
        let parsed: Value = serde_json::from_str(&out).unwrap();
        prop_assert!(parsed["ok"].is_boolean());
    }

    #[test]
    fn run_json_never_panics_on_garbage(args in "\\PC{0,80}") {
        let out = run_json("analyze_sentiment", &args);
        prop_assert!(serde_json::from_str::<Value>(&out).is_ok());
    }

    #[test]
    fn word_report_totals_agree(text in "\\PC{0,200}") {
        let report = count_words(&text);
        prop_assert_eq!(report.total_words, report.word_count.values().sum::<usize>());
        prop_assert_eq!(report.unique_words, report.word_count.len());
    }

    #[test]
    fn clean_report_lengths_agree(text in "\\PC{0,200}") {
        let report = clean_text(&text);
        prop_assert_eq!(report.original_length, text.chars().count());
        prop_assert_eq!(report.cleaned_length, report.cleaned_text.chars().count());
        prop_assert!(report.cleaned_length <= report.original_length);
    }
}
