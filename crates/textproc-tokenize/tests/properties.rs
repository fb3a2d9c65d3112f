use proptest::prelude::*;
use textproc_tokenize::{
    NoPhrases, PhraseLookup, Script, detect_language, is_word_char, split_words, tokenize,
};
use textproc_types::Language;

struct AllPairs;

impl PhraseLookup for AllPairs {
    fn contains_phrase(&self, phrase: &str) -> bool {
        phrase.chars().count() == 2
    }
}

fn mixed_text() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9_ ,.!?'\u{4e00}-\u{4e2f}，。]{0,60}").unwrap()
}

proptest! {
    #[test]
    fn spans_are_ordered_and_disjoint(text in mixed_text()) {
        let tokens = tokenize(&text, &AllPairs);
        let mut last_end = 0;
        for token in &tokens {
            prop_assert!(token.start >= last_end);
            prop_assert!(token.end > token.start);
            last_end = token.end;
        }
    }

    #[test]
    fn tokens_contain_only_word_chars(text in mixed_text()) {
        for token in tokenize(&text, &NoPhrases) {
            prop_assert!(text[token.span()].chars().all(is_word_char));
        }
    }

    #[test]
    fn token_count_is_bounded_by_char_count(text in mixed_text()) {
        let tokens = tokenize(&text, &AllPairs);
        prop_assert!(tokens.len() <= text.chars().count());
    }

    #[test]
    fn cjk_tokens_respect_phrase_window(text in mixed_text()) {
        for token in tokenize(&text, &AllPairs) {
            if token.script == Script::Cjk {
                let n = token.text.chars().count();
                prop_assert!((1..=2).contains(&n));
            }
        }
    }

    #[test]
    fn latin_tokens_are_lowercase(text in "[a-zA-Z ]{0,40}") {
        for token in tokenize(&text, &NoPhrases) {
            prop_assert_eq!(token.text.clone(), token.text.to_lowercase());
        }
    }

    #[test]
    fn ascii_letters_only_is_english(text in "[a-zA-Z]{1,30}") {
        prop_assert_eq!(detect_language(&text), Language::English);
    }

    #[test]
    fn split_words_never_yields_empty(text in mixed_text()) {
        for word in split_words(&text) {
            prop_assert!(!word.is_empty());
        }
    }
}
