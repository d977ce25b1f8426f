//! Interface for mapping character codes to offsets into a packed bitmap stream.

/// The offset recorded for a character code in range that has no glyph.
pub const MISSING_OFFSET: u16 = 0xFFFF;

/// A mapping from each character code in `first..=last` to the offset of its glyph in a packed
/// bitmap stream.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct OffsetTable<'buffer> {
    /// The character code associated with the first entry.
    first: u16,
    /// One entry per character code, [`MISSING_OFFSET`] marking codes without a glyph.
    offsets: &'buffer [u16],
}

impl<'buffer> OffsetTable<'buffer> {
    /// Creates a new [`OffsetTable`] whose first entry belongs to `first`.
    pub const fn new(first: u16, offsets: &'buffer [u16]) -> Self {
        Self { first, offsets }
    }

    /// Returns the first character code covered by the [`OffsetTable`].
    pub const fn first(&self) -> u16 {
        self.first
    }

    /// Returns the last character code covered by the [`OffsetTable`], or `None` if it is
    /// empty or would extend past `u16::MAX`.
    pub fn last(&self) -> Option<u16> {
        let span = u16::try_from(self.offsets.len().checked_sub(1)?).ok()?;
        self.first.checked_add(span)
    }

    /// Returns the number of character codes covered.
    pub const fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Returns `true` if no character codes are covered.
    pub const fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Returns the offset of the glyph associated with `code`. If `code` lies outside the
    /// table or has no glyph, then `None` is returned.
    pub fn get(&self, code: u16) -> Option<u16> {
        let index = usize::from(code.checked_sub(self.first)?);
        self.offsets
            .get(index)
            .copied()
            .filter(|&offset| offset != MISSING_OFFSET)
    }

    /// Returns the raw entry for `code`, which is [`MISSING_OFFSET`] for codes without a glyph.
    pub fn raw(&self, code: u16) -> Option<u16> {
        let index = usize::from(code.checked_sub(self.first)?);
        self.offsets.get(index).copied()
    }

    /// Returns an [`Iterator`] over every `(code, raw offset)` pair in ascending code order.
    pub fn iter(self) -> impl Iterator<Item = (u16, u16)> + 'buffer {
        (self.first..=u16::MAX).zip(self.offsets.iter().copied())
    }
}

#[cfg(test)]
mod test {
    use super::{MISSING_OFFSET, OffsetTable};

    const OFFSETS: [u16; 4] = [0, MISSING_OFFSET, 1, 3];

    #[test]
    fn lookup() {
        let table = OffsetTable::new(65, &OFFSETS);

        assert_eq!(table.get(65), Some(0));
        assert_eq!(table.get(66), None);
        assert_eq!(table.get(67), Some(1));
        assert_eq!(table.get(68), Some(3));
    }

    #[test]
    fn out_of_range() {
        let table = OffsetTable::new(65, &OFFSETS);

        assert_eq!(table.get(64), None);
        assert_eq!(table.get(69), None);
        assert_eq!(table.raw(66), Some(MISSING_OFFSET));
        assert_eq!(table.raw(0), None);
    }

    #[test]
    fn bounds() {
        let table = OffsetTable::new(65, &OFFSETS);
        assert_eq!(table.first(), 65);
        assert_eq!(table.last(), Some(68));
        assert_eq!(table.len(), 4);

        assert_eq!(OffsetTable::new(10, &[]).last(), None);
        assert_eq!(OffsetTable::new(u16::MAX, &[0]).last(), Some(u16::MAX));
    }

    #[test]
    fn iteration_covers_every_code() {
        let table = OffsetTable::new(65, &OFFSETS);
        let entries = table.iter().collect::<Vec<_>>();

        assert_eq!(entries, [(65, 0), (66, MISSING_OFFSET), (67, 1), (68, 3)]);
    }
}
