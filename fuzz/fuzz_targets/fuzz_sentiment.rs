//! Fuzz target for sentiment scoring.
//!
//! Tests `analyze()` with arbitrary UTF-8 to find panics or out-of-range
//! scores.

#![no_main]
use libfuzzer_sys::fuzz_target;
use textproc_sentiment::analyze;

const MAX_INPUT_SIZE: usize = 64 * 1024;

fuzz_target!(|data: &[u8]| {
    if data.len() > MAX_INPUT_SIZE {
        return;
    }
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(result) = analyze(text) else {
        return;
    };

    assert!((-1.0..=1.0).contains(&result.score), "score out of range");
    assert!(
        (0.0..=1.0).contains(&result.confidence),
        "confidence out of range"
    );
    assert!(
        result.positive_words.len() + result.negative_words.len() <= result.word_count,
        "more contributing words than tokens"
    );
    if result.word_count == 0 {
        assert_eq!(result.score, 0.0);
        assert_eq!(result.confidence, 0.0);
    }

    // Deterministic
    let again = analyze(text).expect("second run succeeds");
    assert_eq!(result, again);
});
