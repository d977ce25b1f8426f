//! Parsing of BMF source text into a [`BmfFont`].

use std::collections::BTreeMap;

use anyhow::Result;

use crate::{
    error::BmfError,
    token::{Token, TokenKind, tokenize},
};

/// The glyphs defined by a BMF description, keyed by character code.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct BmfFont {
    /// The row bytes of every defined glyph, one byte per pixel row.
    glyphs: BTreeMap<u16, Vec<u8>>,
    /// The smallest character code defined.
    first: u16,
    /// The largest character code defined.
    last: u16,
}

impl BmfFont {
    /// Returns the row bytes of `code`'s glyph, or `None` if `code` has no glyph.
    pub fn glyph(&self, code: u16) -> Option<&[u8]> {
        self.glyphs.get(&code).map(Vec::as_slice)
    }

    /// Returns an [`Iterator`] over every defined glyph in ascending code order.
    pub fn glyphs(&self) -> impl Iterator<Item = (u16, &[u8])> {
        self.glyphs.iter().map(|(&code, rows)| (code, rows.as_slice()))
    }

    /// Returns the number of defined glyphs.
    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    /// Returns the smallest character code defined.
    pub const fn first(&self) -> u16 {
        self.first
    }

    /// Returns the largest character code defined.
    pub const fn last(&self) -> u16 {
        self.last
    }
}

/// Parses `source` as a BMF font description.
///
/// # Errors
///
/// Returns [`BmfError::MalformedTerm`] for unparsable numbers, [`BmfError::DuplicateGlyph`] when
/// a character code is defined twice, [`BmfError::UninitializedGlyph`] when data precedes the
/// first marker, [`BmfError::CodeOutOfRange`] for codes that do not fit in 16 bits, and
/// [`BmfError::EmptyFont`] if no glyph is defined.
pub fn parse(source: &str) -> Result<BmfFont> {
    let state = tokenize(source).try_fold(ParserState::default(), |state, token| {
        state.apply(token?)
    })?;
    let font = state.finish()?;

    log::info!(
        "parsed {} glyphs covering characters {}..={}",
        font.glyph_count(),
        font.first,
        font.last
    );
    Ok(font)
}

/// The state carried between tokens. `current` is `None` until the first marker.
#[derive(Clone, Debug, Default)]
struct ParserState {
    /// The character code that data terms are appended to.
    current: Option<u16>,
    /// The row bytes collected so far.
    glyphs: BTreeMap<u16, Vec<u8>>,
    /// The smallest and largest character codes seen so far.
    range: Option<(u16, u16)>,
}

impl ParserState {
    /// Advances the state past `token`.
    fn apply(mut self, token: Token) -> Result<Self, BmfError> {
        let line = token.line;
        match token.kind {
            TokenKind::Marker(code) => {
                let code = match code {
                    Some(value) => u16::try_from(value)
                        .map_err(|_| BmfError::CodeOutOfRange { value, line })?,
                    None => {
                        let previous = self
                            .current
                            .ok_or(BmfError::UninitializedGlyph { line })?;
                        previous
                            .checked_add(1)
                            .ok_or(BmfError::CodeOutOfRange {
                                value: i64::from(previous) + 1,
                                line,
                            })?
                    }
                };

                if self.glyphs.contains_key(&code) {
                    return Err(BmfError::DuplicateGlyph { code, line });
                }

                log::debug!("line {line}: defining character {code}");
                self.glyphs.insert(code, Vec::new());
                self.range = Some(match self.range {
                    Some((first, last)) => (first.min(code), last.max(code)),
                    None => (code, code),
                });
                self.current = Some(code);
            }
            TokenKind::Term(value) => {
                let code = self.current.ok_or(BmfError::UninitializedGlyph { line })?;
                self.glyphs.entry(code).or_default().push(row_byte(value));
            }
        }

        Ok(self)
    }

    /// Completes parsing, producing the [`BmfFont`].
    fn finish(self) -> Result<BmfFont, BmfError> {
        let (first, last) = self.range.ok_or(BmfError::EmptyFont)?;

        Ok(BmfFont {
            glyphs: self.glyphs,
            first,
            last,
        })
    }
}

/// Returns the low eight bits of `value`, the only bits a pixel row can occupy.
fn row_byte(value: i64) -> u8 {
    value.to_le_bytes()[0]
}
