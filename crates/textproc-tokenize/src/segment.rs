//! Token spans and the two segmentation strategies.

use std::ops::Range;

use crate::script::{is_cjk_ideograph, is_word_char};

/// Longest CJK phrase, in characters, tried at each position.
pub const MAX_PHRASE_CHARS: usize = 4;

/// Dictionary of multi-character CJK phrases consulted during segmentation.
pub trait PhraseLookup {
    /// Whether `phrase` (two or more CJK characters) is a known entry.
    fn contains_phrase(&self, phrase: &str) -> bool;

    /// Upper bound on phrase length in characters.
    fn max_phrase_chars(&self) -> usize {
        MAX_PHRASE_CHARS
    }
}

/// A dictionary with no phrases: every CJK character becomes its own token.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPhrases;

impl PhraseLookup for NoPhrases {
    fn contains_phrase(&self, _phrase: &str) -> bool {
        false
    }
}

/// Script of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Script {
    Latin,
    Cjk,
}

/// A lexical unit with its byte span in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Canonical lookup form: lowercased for Latin, raw for CJK.
    pub text: String,
    pub start: usize,
    pub end: usize,
    pub script: Script,
}

impl Token {
    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Cjk,
    Word,
    Separator,
}

fn char_class(c: char) -> CharClass {
    if is_cjk_ideograph(c) {
        CharClass::Cjk
    } else if is_word_char(c) {
        CharClass::Word
    } else {
        CharClass::Separator
    }
}

/// Segmentation strategy, chosen once per script run.
enum Segmenter<'a> {
    Latin,
    Cjk(&'a dyn PhraseLookup),
}

impl Segmenter<'_> {
    /// Segment `run`, which starts at byte `offset` of the source.
    fn segment(&self, run: &str, offset: usize, out: &mut Vec<Token>) {
        match self {
            Segmenter::Latin => out.push(Token {
                text: run.to_lowercase(),
                start: offset,
                end: offset + run.len(),
                script: Script::Latin,
            }),
            Segmenter::Cjk(phrases) => segment_cjk(run, offset, *phrases, out),
        }
    }
}

fn segment_cjk(run: &str, offset: usize, phrases: &dyn PhraseLookup, out: &mut Vec<Token>) {
    // Byte boundaries of every char, plus the end of the run.
    let mut bounds: Vec<usize> = run.char_indices().map(|(i, _)| i).collect();
    bounds.push(run.len());
    let char_count = bounds.len() - 1;
    let max_len = phrases.max_phrase_chars().max(1);

    let mut i = 0;
    while i < char_count {
        let longest = max_len.min(char_count - i);
        let mut taken = 1;
        for len in (2..=longest).rev() {
            if phrases.contains_phrase(&run[bounds[i]..bounds[i + len]]) {
                taken = len;
                break;
            }
        }
        let (start, end) = (bounds[i], bounds[i + taken]);
        out.push(Token {
            text: run[start..end].to_string(),
            start: offset + start,
            end: offset + end,
            script: Script::Cjk,
        });
        i += taken;
    }
}

/// Tokenize `text` into script runs, each segmented by its own rule.
///
/// Separators (whitespace, punctuation, symbols) never appear in tokens.
/// Output order follows the source.
pub fn tokenize(text: &str, phrases: &dyn PhraseLookup) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut run_start: Option<(usize, CharClass)> = None;

    for (idx, c) in text.char_indices() {
        let class = char_class(c);
        match run_start {
            Some((_, current)) if current == class => {}
            Some((start, current)) => {
                flush(text, start, idx, current, phrases, &mut tokens);
                run_start = (class != CharClass::Separator).then_some((idx, class));
            }
            None if class != CharClass::Separator => run_start = Some((idx, class)),
            None => {}
        }
    }
    if let Some((start, class)) = run_start {
        flush(text, start, text.len(), class, phrases, &mut tokens);
    }
    tokens
}

fn flush(
    text: &str,
    start: usize,
    end: usize,
    class: CharClass,
    phrases: &dyn PhraseLookup,
    out: &mut Vec<Token>,
) {
    let segmenter = match class {
        CharClass::Word => Segmenter::Latin,
        CharClass::Cjk => Segmenter::Cjk(phrases),
        CharClass::Separator => return,
    };
    segmenter.segment(&text[start..end], start, out);
}

/// Split on every non-word character, script-agnostic.
///
/// CJK ideographs count as word characters here, so a run of Chinese text is
/// a single word. Empty pieces are dropped; casing is preserved.
pub fn split_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !is_word_char(c))
        .filter(|w| !w.is_empty())
}
