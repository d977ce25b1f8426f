//! Lexing of BMF source text into glyph markers and numeric terms.

use crate::error::BmfError;

/// The two shapes a whitespace-delimited BMF token can take.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum TokenKind {
    /// `|` or `|<code>`: begins a new glyph. `None` continues from the previous code.
    Marker(Option<i64>),
    /// A row of pixel data for the current glyph.
    Term(i64),
}

/// A lexed token and the line it was found on.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Token {
    /// The shape and value of the token.
    pub kind: TokenKind,
    /// The 1-based line number of the token.
    pub line: usize,
}

impl Token {
    /// Lexes a single whitespace-free `word` found on `line`.
    ///
    /// # Errors
    ///
    /// Returns [`BmfError::MalformedTerm`] if `word` holds a number that cannot be parsed.
    pub fn lex(word: &str, line: usize) -> Result<Self, BmfError> {
        let kind = match word.strip_prefix('|') {
            Some("") => TokenKind::Marker(None),
            Some(code) => TokenKind::Marker(Some(
                char_literal(code)
                    .or_else(|| parse_term(code))
                    .ok_or_else(|| malformed(word, line))?,
            )),
            None => TokenKind::Term(parse_term(word).ok_or_else(|| malformed(word, line))?),
        };

        Ok(Self { kind, line })
    }
}

/// Returns an [`Iterator`] over the [`Token`]s of `source`.
pub fn tokenize(source: &str) -> Tokens<'_> {
    Tokens {
        lines: source.lines().enumerate(),
        words: "".split_whitespace(),
        line: 0,
    }
}

/// An [`Iterator`] over the [`Token`]s of BMF source text.
#[derive(Clone, Debug)]
pub struct Tokens<'source> {
    /// The lines that have not been split yet.
    lines: core::iter::Enumerate<core::str::Lines<'source>>,
    /// The remaining words of the current line.
    words: core::str::SplitWhitespace<'source>,
    /// The 1-based number of the current line.
    line: usize,
}

impl Iterator for Tokens<'_> {
    type Item = Result<Token, BmfError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(word) = self.words.next() {
                return Some(Token::lex(word, self.line));
            }

            let (index, line) = self.lines.next()?;
            self.line = index + 1;
            self.words = line.split_whitespace();
        }
    }
}

/// Parses a decimal term, or a hexadecimal one if prefixed with `$`.
pub fn parse_term(term: &str) -> Option<i64> {
    match term.strip_prefix('$') {
        Some(hex) => i64::from_str_radix(hex, 16).ok(),
        None => term.parse().ok(),
    }
}

/// Interprets a lone non-numeric character as its own character code, so `|A` names 65.
fn char_literal(code: &str) -> Option<i64> {
    let mut chars = code.chars();
    let c = chars.next()?;
    if chars.next().is_some() || c.is_ascii_digit() || matches!(c, '$' | '+' | '-') {
        return None;
    }

    Some(i64::from(u32::from(c)))
}

/// Creates a [`BmfError::MalformedTerm`] for `word`.
fn malformed(word: &str, line: usize) -> BmfError {
    BmfError::MalformedTerm {
        token: word.to_owned(),
        line,
    }
}

#[cfg(test)]
mod test {
    use super::{Token, TokenKind, parse_term, tokenize};
    use crate::error::BmfError;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source)
            .map(|token| token.unwrap().kind)
            .collect()
    }

    #[test]
    fn terms() {
        assert_eq!(parse_term("128"), Some(128));
        assert_eq!(parse_term("$80"), Some(128));
        assert_eq!(parse_term("$fF"), Some(255));
        assert_eq!(parse_term("-3"), Some(-3));
        assert_eq!(parse_term("$"), None);
        assert_eq!(parse_term("0x80"), None);
        assert_eq!(parse_term("$G1"), None);
        assert_eq!(parse_term(""), None);
    }

    #[test]
    fn markers_and_terms() {
        assert_eq!(
            kinds("|65 $80 64\n| 32\n|$43"),
            [
                TokenKind::Marker(Some(65)),
                TokenKind::Term(128),
                TokenKind::Term(64),
                TokenKind::Marker(None),
                TokenKind::Term(32),
                TokenKind::Marker(Some(0x43)),
            ]
        );
    }

    #[test]
    fn character_literal_markers() {
        assert_eq!(
            kinds("|A |z |~ |7"),
            [
                TokenKind::Marker(Some(65)),
                TokenKind::Marker(Some(122)),
                TokenKind::Marker(Some(126)),
                TokenKind::Marker(Some(7)),
            ]
        );
    }

    #[test]
    fn line_numbers() {
        let lines = tokenize("|65\n\n  128\r\n\t64 |")
            .map(|token| token.unwrap().line)
            .collect::<Vec<_>>();

        assert_eq!(lines, [1, 3, 4, 4]);
    }

    #[test]
    fn malformed_tokens() {
        assert_eq!(
            Token::lex("12x", 7),
            Err(BmfError::MalformedTerm {
                token: "12x".to_owned(),
                line: 7
            })
        );
        assert!(Token::lex("|AB", 1).is_err());
        assert!(Token::lex("|$", 1).is_err());
        assert!(Token::lex("A", 1).is_err());
    }

    #[test]
    fn empty_source() {
        assert!(tokenize("").next().is_none());
        assert!(tokenize(" \n\t\n").next().is_none());
    }
}
