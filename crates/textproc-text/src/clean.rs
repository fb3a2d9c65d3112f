/// Punctuation that survives cleaning.
pub const KEPT_PUNCTUATION: [char; 4] = [',', '!', '?', '.'];

/// Whether `c` survives [`clean_text`].
pub fn is_kept(c: char) -> bool {
    c.is_alphanumeric() || c.is_whitespace() || KEPT_PUNCTUATION.contains(&c)
}

/// Drop every character that is not a letter, digit, whitespace or one of
/// [`KEPT_PUNCTUATION`]. Idempotent; never lengthens the text.
pub fn clean_text(text: &str) -> String {
    text.chars().filter(|&c| is_kept(c)).collect()
}
