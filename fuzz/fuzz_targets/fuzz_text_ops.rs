//! Fuzz target for the plain text utilities.
//!
//! Tests `count_words()`, `extract_emails()` and `clean_text()` with
//! arbitrary input.

#![no_main]
use libfuzzer_sys::fuzz_target;
use textproc_text::{clean_text, count_words, extract_emails, is_kept, total_words};

const MAX_INPUT_SIZE: usize = 64 * 1024;

fuzz_target!(|data: &[u8]| {
    if data.len() > MAX_INPUT_SIZE {
        return;
    }
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let counts = count_words(text);
    assert!(counts.values().all(|&n| n > 0));
    assert!(total_words(&counts) >= counts.len());
    for word in counts.keys() {
        assert!(!word.is_empty());
        assert_eq!(word, &word.to_lowercase());
    }

    for email in extract_emails(text) {
        assert_eq!(email.matches('@').count(), 1, "{email}");
        assert!(text.contains(&email));
    }

    let cleaned = clean_text(text);
    assert!(cleaned.chars().all(is_kept));
    assert_eq!(clean_text(&cleaned), cleaned, "cleaning is idempotent");
});
