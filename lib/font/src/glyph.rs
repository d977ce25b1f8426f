//! Interface for interacting with glyphs stored in a packed bitmap stream.
//!
//! Every glyph begins on a byte boundary, but its pixels are packed MSB-first without any
//! padding between rows, so a row may start in the middle of a byte.

/// Returns the number of bytes a `width` by `height` glyph occupies in a packed bitmap stream.
pub const fn packed_len(width: u8, height: u8) -> usize {
    let bit_count = (width as usize) * (height as usize);
    bit_count.div_ceil(8)
}

/// Returns whether column `x` of `row` is set, treating columns past the eighth as unset.
pub const fn row_pixel(row: u8, x: u8) -> bool {
    match 0x80u8.checked_shr(x as u32) {
        Some(mask) => row & mask != 0,
        None => false,
    }
}

/// Stores the on/off layout of a specific glyph in a packed bitmap stream.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Glyph<'buffer> {
    /// The buffer utilized to store the glyph, starting at the glyph's first byte.
    buffer: &'buffer [u8],
    /// The width of the glyph.
    width: u8,
    /// The height of the glyph.
    height: u8,
}

impl<'buffer> Glyph<'buffer> {
    /// Creates a new [`Glyph`] whose packed pixels begin at the start of `buffer`.
    ///
    /// Returns `None` if `buffer` is too short to hold a `width` by `height` glyph.
    pub const fn new(buffer: &'buffer [u8], width: u8, height: u8) -> Option<Self> {
        if buffer.len() < packed_len(width, height) {
            return None;
        }

        Some(Self {
            buffer,
            width,
            height,
        })
    }

    /// Returns the width of the [`Glyph`] in pixels.
    pub const fn width(&self) -> u8 {
        self.width
    }

    /// Returns the height of the [`Glyph`] in pixels.
    pub const fn height(&self) -> u8 {
        self.height
    }

    /// Returns the value of the pixel at (`x`, `y`), or `None` if it lies outside the glyph.
    pub fn pixel(&self, x: u8, y: u8) -> Option<bool> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let bit = usize::from(y) * usize::from(self.width) + usize::from(x);
        Some(bit_at(self.buffer, bit))
    }
}

impl<'buffer> IntoIterator for Glyph<'buffer> {
    type IntoIter = GlyphRowsIter<'buffer>;
    type Item = GlyphRow<'buffer>;

    fn into_iter(self) -> Self::IntoIter {
        GlyphRowsIter {
            buffer: self.buffer,
            width: self.width,
            height: self.height,
            index: 0,
        }
    }
}

/// An [`Iterator`] over the rows of a [`Glyph`].
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct GlyphRowsIter<'buffer> {
    /// The buffer utilized to store the glyph.
    buffer: &'buffer [u8],
    /// The width of the glyph.
    width: u8,
    /// The height of the glyph.
    height: u8,
    /// The index of the row that will be returned next.
    index: u8,
}

impl<'buffer> Iterator for GlyphRowsIter<'buffer> {
    type Item = GlyphRow<'buffer>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.height {
            return None;
        }

        let first_bit = usize::from(self.index) * usize::from(self.width);

        self.index += 1;
        let row = GlyphRow {
            buffer: self.buffer,
            first_bit,
            width: self.width,
        };
        Some(row)
    }
}

/// A row in the [`Glyph`].
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct GlyphRow<'buffer> {
    /// The buffer utilized to store the glyph.
    buffer: &'buffer [u8],
    /// The index of the bit holding the row's leftmost pixel.
    first_bit: usize,
    /// The width of the row.
    width: u8,
}

impl GlyphRow<'_> {
    /// Packs the first eight pixels of the row back into a source row byte, leftmost pixel in
    /// the most significant bit.
    pub fn to_row_byte(self) -> u8 {
        self.into_iter()
            .take(8)
            .zip((0..8u8).rev())
            .filter(|(set, _)| *set)
            .fold(0u8, |byte, (_, shift)| byte | (1u8 << shift))
    }
}

impl<'buffer> IntoIterator for GlyphRow<'buffer> {
    type Item = bool;
    type IntoIter = GlyphRowIter<'buffer>;

    fn into_iter(self) -> Self::IntoIter {
        GlyphRowIter {
            buffer: self.buffer,
            first_bit: self.first_bit,
            width: self.width,
            index: 0,
        }
    }
}

/// An [`Iterator`] over the pixels in a [`GlyphRow`].
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct GlyphRowIter<'buffer> {
    /// The buffer used to store the glyph.
    buffer: &'buffer [u8],
    /// The index of the bit holding the row's leftmost pixel.
    first_bit: usize,
    /// The width of the row.
    width: u8,
    /// The index of the pixel value to be returned.
    index: u8,
}

impl Iterator for GlyphRowIter<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.width {
            return None;
        }

        let bit = self.first_bit + usize::from(self.index);

        self.index += 1;
        Some(bit_at(self.buffer, bit))
    }
}

/// Returns the value of bit `bit` of `buffer`, counting from the most significant bit of the
/// first byte.
fn bit_at(buffer: &[u8], bit: usize) -> bool {
    let mask = 0x80u8 >> (bit % 8);
    buffer.get(bit / 8).is_some_and(|byte| byte & mask != 0)
}

/// Builder for a packed bitmap stream.
///
/// Pixels are appended MSB-first. A new byte is only started once the current one is full and
/// another pixel arrives, so a glyph never leaves an empty trailing byte behind.
#[cfg(feature = "std")]
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
pub struct BitmapBuilder {
    /// The packed stream.
    buffer: Vec<u8>,
    /// The bit of the last byte that the next pixel lands in. Zero when a new byte is needed.
    mask: u8,
}

#[cfg(feature = "std")]
impl BitmapBuilder {
    /// Creates a new, empty [`BitmapBuilder`].
    pub const fn new() -> Self {
        Self {
            buffer: Vec::new(),
            mask: 0,
        }
    }

    /// Returns the number of bytes in the stream.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns `true` if no pixels have been written.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Starts a new glyph on a fresh byte and returns the offset its data will begin at.
    pub fn begin_glyph(&mut self) -> usize {
        self.mask = 0;
        self.buffer.len()
    }

    /// Appends a single pixel to the stream.
    pub fn push_pixel(&mut self, set: bool) {
        if self.mask == 0 {
            self.buffer.push(0);
            self.mask = 0x80;
        }

        if set {
            if let Some(byte) = self.buffer.last_mut() {
                *byte |= self.mask;
            }
        }
        self.mask >>= 1;
    }

    /// Appends the leftmost `width` pixels of `row`.
    pub fn push_row(&mut self, row: u8, width: u8) {
        for x in 0..width {
            self.push_pixel(row_pixel(row, x));
        }
    }

    /// Appends a complete glyph and returns its offset.
    ///
    /// `rows` holds one byte per pixel row. Missing rows are treated as blank and rows past
    /// `height` are ignored.
    pub fn push_glyph(&mut self, rows: &[u8], width: u8, height: u8) -> usize {
        let offset = self.begin_glyph();
        for y in 0..usize::from(height) {
            self.push_row(rows.get(y).copied().unwrap_or(0), width);
        }

        offset
    }

    /// Returns the packed stream built so far.
    pub fn as_slice(&self) -> &[u8] {
        &self.buffer
    }

    /// Consumes the [`BitmapBuilder`], returning the packed stream.
    pub fn into_inner(self) -> Vec<u8> {
        self.buffer
    }
}
