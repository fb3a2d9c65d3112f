use textproc_tokenize::split_words;
use textproc_types::WordFrequency;

/// Case-folded frequency of every word in `text`.
///
/// Words are maximal runs of letters, digits and underscores in any script;
/// detected language plays no part.
pub fn count_words(text: &str) -> WordFrequency {
    let mut counts = WordFrequency::new();
    for word in split_words(text) {
        *counts.entry(word.to_lowercase()).or_insert(0) += 1;
    }
    counts
}

/// Sum of all counts.
pub fn total_words(counts: &WordFrequency) -> usize {
    counts.values().sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_has_no_words() {
        let counts = count_words("");
        assert!(counts.is_empty());
        assert_eq!(total_words(&counts), 0);
    }

    #[test]
    fn counting_is_case_insensitive() {
        let counts = count_words("Hello HELLO hello");
        assert_eq!(counts.len(), 1);
        assert_eq!(counts["hello"], 3);
    }

    #[test]
    fn punctuation_and_apostrophes_split_words() {
        let counts = count_words("it's a test, a TEST!");
        assert_eq!(counts["it"], 1);
        assert_eq!(counts["s"], 1);
        assert_eq!(counts["a"], 2);
        assert_eq!(counts["test"], 2);
        assert_eq!(total_words(&counts), 6);
    }

    #[test]
    fn underscores_and_digits_are_word_chars() {
        let counts = count_words("snake_case 42 v2");
        assert_eq!(counts.keys().collect::<Vec<_>>(), vec!["42", "snake_case", "v2"]);
    }

    #[test]
    fn cjk_runs_count_as_words() {
        let counts = count_words("你好 世界 你好");
        assert_eq!(counts["你好"], 2);
        assert_eq!(counts["世界"], 1);
    }
}
