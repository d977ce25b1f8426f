//! Packing of parsed glyphs into a bitmap stream and offset table.

use anyhow::Result;
use font::{
    glyph::BitmapBuilder,
    info::{FontInfo, GlyphRecord, y_advance},
    offset_table::{MISSING_OFFSET, OffsetTable},
};

use crate::{error::BmfError, parse::BmfFont};

/// A font whose glyphs have been packed into a single bitmap stream.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct PackedFont {
    /// The packed bitmap stream.
    bitmap: Vec<u8>,
    /// One offset per character code in `first..=last`.
    offsets: Vec<u16>,
    /// The first character code covered.
    first: u16,
    /// The width of every glyph.
    width: u8,
    /// The height of every glyph.
    height: u8,
}

impl PackedFont {
    /// Returns the packed bitmap stream.
    pub fn bitmap(&self) -> &[u8] {
        &self.bitmap
    }

    /// Returns the [`OffsetTable`] of the font.
    pub fn offset_table(&self) -> OffsetTable<'_> {
        OffsetTable::new(self.first, &self.offsets)
    }

    /// Returns the first character code covered.
    pub const fn first(&self) -> u16 {
        self.first
    }

    /// Returns the last character code covered.
    pub fn last(&self) -> u16 {
        self.offset_table().last().unwrap_or(self.first)
    }

    /// Returns the width of every glyph.
    pub const fn width(&self) -> u8 {
        self.width
    }

    /// Returns the height of every glyph.
    pub const fn height(&self) -> u8 {
        self.height
    }

    /// Returns one [`GlyphRecord`] per character code in `first..=last`.
    pub fn glyph_records(&self) -> Vec<GlyphRecord> {
        self.offsets
            .iter()
            .map(|&offset| GlyphRecord::new(offset, self.width, self.height))
            .collect()
    }

    /// Returns the [`FontInfo`] describing the font, using `glyphs` from
    /// [`PackedFont::glyph_records`].
    pub fn font_info<'font>(&'font self, glyphs: &'font [GlyphRecord]) -> FontInfo<'font> {
        FontInfo {
            bitmap: &self.bitmap,
            glyphs,
            first: self.first,
            last: self.last(),
            y_advance: y_advance(self.height),
        }
    }
}

/// Packs every glyph of `font` as a `width` by `height` bitmap.
///
/// # Errors
///
/// Returns [`BmfError::OffsetOverflow`] if a glyph would start at an offset that cannot be
/// stored in the offset table.
pub fn pack(font: &BmfFont, width: u8, height: u8) -> Result<PackedFont> {
    let mut builder = BitmapBuilder::new();
    let mut offsets = Vec::with_capacity(usize::from(font.last() - font.first()) + 1);

    for code in font.first()..=font.last() {
        let Some(rows) = font.glyph(code) else {
            offsets.push(MISSING_OFFSET);
            continue;
        };

        if rows.len() < usize::from(height) {
            log::warn!(
                "character {code} has {} of {height} rows, padding with blank rows",
                rows.len()
            );
        } else if rows.len() > usize::from(height) {
            log::warn!(
                "character {code} has {} rows, ignoring all past the first {height}",
                rows.len()
            );
        }

        let offset = builder.len();
        let offset = u16::try_from(offset)
            .ok()
            .filter(|&offset| offset != MISSING_OFFSET)
            .ok_or(BmfError::OffsetOverflow { code, offset })?;

        builder.push_glyph(rows, width, height);
        offsets.push(offset);
    }

    let missing = offsets.iter().filter(|&&offset| offset == MISSING_OFFSET).count();
    log::info!(
        "packed {} glyphs into {} bytes, {missing} characters missing",
        font.glyph_count(),
        builder.len()
    );

    Ok(PackedFont {
        bitmap: builder.into_inner(),
        offsets,
        first: font.first(),
        width,
        height,
    })
}
