use proptest::prelude::*;
use textproc_settings::{MAX_NEGATION_WINDOW, SentimentSettings};

proptest! {
    #[test]
    fn windows_up_to_max_are_valid(window in 0usize..=MAX_NEGATION_WINDOW) {
        let s = SentimentSettings { negation_window: window, ..SentimentSettings::default() };
        prop_assert!(s.validate().is_ok());
    }

    #[test]
    fn windows_above_max_are_rejected(window in (MAX_NEGATION_WINDOW + 1)..1000) {
        let s = SentimentSettings { negation_window: window, ..SentimentSettings::default() };
        prop_assert!(s.validate().is_err());
    }

    #[test]
    fn positive_normalization_is_valid(normalization in 0.001f64..100.0) {
        let s = SentimentSettings { normalization, ..SentimentSettings::default() };
        prop_assert!(s.validate().is_ok());
    }

    #[test]
    fn ordered_thresholds_are_valid(lo in -1.0f64..=0.0, hi in 0.0f64..=1.0) {
        let s = SentimentSettings {
            negative_threshold: lo,
            positive_threshold: hi,
            ..SentimentSettings::default()
        };
        prop_assert!(s.validate().is_ok());
    }
}
