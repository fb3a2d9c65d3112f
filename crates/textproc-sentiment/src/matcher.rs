//! Longest-match lookup at one token position.

use std::borrow::Cow;

use textproc_lexicon::{Lexicon, Polarity, WordRole};
use textproc_tokenize::{Script, Token};

/// Outcome of matching the lexicon at a token position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatchResult {
    /// An override phrase spanning `len` tokens with a fixed contribution.
    Override { len: usize, contribution: f64 },
    /// A single sentiment word.
    LexiconHit(Polarity),
    /// No sentiment; the token may still be a modifier.
    NoMatch(WordRole),
}

/// Match at `tokens[i]`. Overrides are tried longest first and short-circuit
/// ordinary lookup.
pub(crate) fn match_at(lexicon: &Lexicon, tokens: &[Token], i: usize) -> MatchResult {
    let token = &tokens[i];
    let longest = match token.script {
        Script::Latin => lexicon.max_override_words().min(tokens.len() - i),
        Script::Cjk => 1,
    };

    for len in (1..=longest).rev() {
        let span = &tokens[i..i + len];
        if len > 1 && span.iter().any(|t| t.script != Script::Latin) {
            continue;
        }
        let key: Cow<'_, str> = if len == 1 {
            Cow::Borrowed(token.text.as_str())
        } else {
            Cow::Owned(
                span.iter()
                    .map(|t| t.text.as_str())
                    .collect::<Vec<_>>()
                    .join(" "),
            )
        };
        if let Some(contribution) = lexicon.override_for(&key) {
            return MatchResult::Override { len, contribution };
        }
    }

    match lexicon.classify(&token.text) {
        WordRole::Sentiment(polarity) => MatchResult::LexiconHit(polarity),
        role => MatchResult::NoMatch(role),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use textproc_tokenize::tokenize;

    fn first_match(text: &str) -> MatchResult {
        let lex = Lexicon::builtin();
        let tokens = tokenize(text, lex);
        match_at(lex, &tokens, 0)
    }

    #[test]
    fn cjk_override_wins() {
        assert_eq!(
            first_match("不错"),
            MatchResult::Override {
                len: 1,
                contribution: 1.0
            }
        );
    }

    #[test]
    fn latin_override_spans_tokens() {
        assert_eq!(
            first_match("Waste of time!"),
            MatchResult::Override {
                len: 3,
                contribution: -1.0
            }
        );
        assert_eq!(
            first_match("waste"),
            MatchResult::LexiconHit(Polarity::Negative)
        );
    }

    #[test]
    fn modifiers_are_no_match() {
        assert_eq!(first_match("not"), MatchResult::NoMatch(WordRole::Negator));
        assert_eq!(
            first_match("very"),
            MatchResult::NoMatch(WordRole::Intensifier(1.5))
        );
        assert_eq!(first_match("table"), MatchResult::NoMatch(WordRole::Plain));
    }

    #[test]
    fn override_does_not_cross_scripts() {
        let lex = Lexicon::builtin();
        let tokens = tokenize("could 好 better", lex);
        assert_eq!(match_at(lex, &tokens, 0), MatchResult::NoMatch(WordRole::Plain));
    }
}
