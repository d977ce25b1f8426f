//! Glyph placement records and the font descriptor that ties a packed bitmap stream together.

use core::fmt;

use crate::{glyph::Glyph, offset_table::MISSING_OFFSET};

/// Returns the horizontal distance to the next glyph's origin for glyphs `width` pixels wide.
///
/// Fonts eight pixels wide have no spacing column.
pub const fn x_advance(width: u8) -> u16 {
    if width == 8 { 8 } else { width as u16 + 1 }
}

/// Returns the vertical distance between lines for glyphs `height` pixels tall.
///
/// Fonts eight pixels tall have no spacing row.
pub const fn y_advance(height: u8) -> u16 {
    if height == 8 { 8 } else { height as u16 + 1 }
}

/// The placement of a single glyph, laid out like the C `FONTGlyph` structure.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct GlyphRecord {
    /// Offset of the glyph's data in the packed bitmap stream, or [`MISSING_OFFSET`].
    pub bitmap_offset: u16,
    /// Width of the glyph in pixels.
    pub width: u8,
    /// Height of the glyph in pixels.
    pub height: u8,
    /// Distance to advance the cursor along the x axis.
    pub x_advance: u16,
    /// Distance from the cursor to the glyph's left edge.
    pub x_offset: i16,
    /// Distance from the cursor to the glyph's top edge.
    pub y_offset: i16,
}

impl GlyphRecord {
    /// Creates a [`GlyphRecord`] for a fixed-size glyph whose data begins at `bitmap_offset`.
    ///
    /// The glyph sits on the cursor's baseline, with its top edge `height` pixels above it.
    pub fn new(bitmap_offset: u16, width: u8, height: u8) -> Self {
        Self {
            bitmap_offset,
            width,
            height,
            x_advance: x_advance(width),
            x_offset: 0,
            y_offset: -i16::from(height),
        }
    }

    /// Creates a [`GlyphRecord`] for a character code without a glyph.
    pub fn missing(width: u8, height: u8) -> Self {
        Self::new(MISSING_OFFSET, width, height)
    }

    /// Returns `true` if the record marks a character code without a glyph.
    pub const fn is_missing(&self) -> bool {
        self.bitmap_offset == MISSING_OFFSET
    }
}

/// Formats the record as a C aggregate initializer.
impl fmt::Display for GlyphRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{},{},{},{},{},{}}}",
            self.bitmap_offset,
            self.width,
            self.height,
            self.x_advance,
            self.x_offset,
            self.y_offset
        )
    }
}

/// A complete font, laid out like the C `FONTInfo` structure.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct FontInfo<'font> {
    /// The packed bitmap stream holding every glyph.
    pub bitmap: &'font [u8],
    /// One [`GlyphRecord`] per character code in `first..=last`.
    pub glyphs: &'font [GlyphRecord],
    /// The first character code covered by the font.
    pub first: u16,
    /// The last character code covered by the font.
    pub last: u16,
    /// Distance between lines along the y axis.
    pub y_advance: u16,
}

impl<'font> FontInfo<'font> {
    /// Returns the [`GlyphRecord`] of `code`, or `None` if `code` is outside `first..=last`.
    pub fn record(&self, code: u16) -> Option<&'font GlyphRecord> {
        if code > self.last {
            return None;
        }

        let index = usize::from(code.checked_sub(self.first)?);
        self.glyphs.get(index)
    }

    /// Returns the [`Glyph`] of `code`, or `None` if the font has no glyph for it.
    pub fn glyph(&self, code: u16) -> Option<Glyph<'font>> {
        let record = self.record(code)?;
        if record.is_missing() {
            return None;
        }

        let buffer = self.bitmap.get(usize::from(record.bitmap_offset)..)?;
        Glyph::new(buffer, record.width, record.height)
    }
}
