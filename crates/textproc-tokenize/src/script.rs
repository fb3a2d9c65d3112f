//! Character classes and language classification.

use textproc_types::Language;

/// True for CJK unified and compatibility ideographs.
pub fn is_cjk_ideograph(c: char) -> bool {
    matches!(c as u32,
        0x4E00..=0x9FFF |     // CJK Unified Ideographs
        0x3400..=0x4DBF |     // Extension A
        0x20000..=0x2A6DF |   // Extension B
        0x2A700..=0x2B73F |   // Extension C
        0x2B740..=0x2B81F |   // Extension D
        0xF900..=0xFAFF |     // Compatibility Ideographs
        0x2F800..=0x2FA1F     // Compatibility Ideographs Supplement
    )
}

/// True for letters in the ASCII and extended Latin blocks.
pub fn is_latin_letter(c: char) -> bool {
    if c.is_ascii_alphabetic() {
        return true;
    }
    matches!(c as u32,
        0x00C0..=0x00D6 |
        0x00D8..=0x00F6 |
        0x00F8..=0x024F |     // Latin-1 letters, Extended-A, Extended-B
        0x1E00..=0x1EFF       // Latin Extended Additional
    )
}

/// Characters that belong to a word: letters, digits and underscore.
pub fn is_word_char(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

/// Character counts driving language classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LanguageProfile {
    pub cjk_chars: usize,
    pub latin_chars: usize,
}

impl LanguageProfile {
    /// Count CJK ideographs and Latin letters; everything else is ignored.
    pub fn of(text: &str) -> Self {
        let mut profile = Self::default();
        for c in text.chars() {
            if is_cjk_ideograph(c) {
                profile.cjk_chars += 1;
            } else if is_latin_letter(c) {
                profile.latin_chars += 1;
            }
        }
        profile
    }

    pub fn language(&self) -> Language {
        match (self.cjk_chars > 0, self.latin_chars > 0) {
            (true, true) => Language::Mixed,
            (true, false) => Language::Chinese,
            // Latin only, or nothing recognizable at all.
            (false, _) => Language::English,
        }
    }
}

/// Classify `text` as `en`, `zh` or `mixed`.
///
/// Text with neither script (empty, digits, punctuation) is `en`.
pub fn detect_language(text: &str) -> Language {
    LanguageProfile::of(text).language()
}
