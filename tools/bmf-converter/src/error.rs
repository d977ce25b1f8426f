//! Errors raised while converting a BMF font description.

use core::{error, fmt};

/// Violations of the BMF format or of the limits of the generated font tables.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub enum BmfError {
    /// A glyph marker named a character code that was already defined.
    DuplicateGlyph {
        /// The repeated character code.
        code: u16,
        /// The line the repeated marker appears on.
        line: usize,
    },
    /// Row data, or a bare `|`, appeared before any character code was established.
    UninitializedGlyph {
        /// The line the offending token appears on.
        line: usize,
    },
    /// A token was neither a decimal nor a `$`-prefixed hexadecimal integer.
    MalformedTerm {
        /// The offending token.
        token: String,
        /// The line the offending token appears on.
        line: usize,
    },
    /// A glyph marker named a character code that does not fit in 16 bits.
    CodeOutOfRange {
        /// The requested character code.
        value: i64,
        /// The line the offending marker appears on.
        line: usize,
    },
    /// The description did not define a single glyph.
    EmptyFont,
    /// A glyph would start at an offset the 16-bit offset table cannot hold.
    OffsetOverflow {
        /// The character code of the glyph.
        code: u16,
        /// The offset the glyph would start at.
        offset: usize,
    },
}

impl fmt::Display for BmfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateGlyph { code, line } => {
                write!(f, "line {line}: duplicate definition of character {code}")
            }
            Self::UninitializedGlyph { line } => {
                write!(f, "line {line}: no current character is set")
            }
            Self::MalformedTerm { token, line } => {
                write!(f, "line {line}: malformed term {token:?}")
            }
            Self::CodeOutOfRange { value, line } => write!(
                f,
                "line {line}: character code {value} is outside of 0..={}",
                u16::MAX
            ),
            Self::EmptyFont => write!(f, "font does not define any characters"),
            Self::OffsetOverflow { code, offset } => write!(
                f,
                "bitmap data for character {code} starts at offset {offset}, which does not fit \
                 below the missing glyph marker {:#06X}",
                font::offset_table::MISSING_OFFSET
            ),
        }
    }
}

impl error::Error for BmfError {}
