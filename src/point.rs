use std::fmt;

use crate::{
    error::{Error, Result},
    record::Record,
};

/// The critical bit a branch node tests: a byte offset and a single bit within that byte.
///
/// Packed as `(offset << 8) | mask`, where `mask` has every bit set except the critical one. A
/// more significant critical bit gives a smaller mask, so comparing packed values orders points
/// from the most to the least significant bit of a key.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point(u32);

impl Point {
    /// The largest byte offset a point can address.
    pub const MAX_OFFSET: usize = (1 << 24) - 1;

    /// Creates the point for the bit `!mask` of the byte at `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyTooLong`] if `offset` exceeds [`Point::MAX_OFFSET`].
    ///
    /// # Panics
    ///
    /// Panics if `mask` does not leave exactly one bit clear.
    #[allow(clippy::cast_possible_truncation)]
    pub fn new(offset: usize, mask: u8) -> Result<Self> {
        assert_eq!((!mask).count_ones(), 1, "mask must clear exactly one bit");
        if offset > Self::MAX_OFFSET {
            return Err(Error::KeyTooLong { offset });
        }
        Ok(Self(((offset as u32) << 8) | u32::from(mask)))
    }

    /// Finds the critical bit between two records, given `diff = compare(a, b)` with `diff > 0`.
    ///
    /// The critical bit is the most significant bit that differs in the first differing byte.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyTooLong`] if the records diverge past [`Point::MAX_OFFSET`].
    pub fn critical(a: Record<'_>, b: Record<'_>, diff: usize) -> Result<Self> {
        debug_assert!(diff > 0, "identical records have no critical bit");
        let offset = diff - 1;
        let differing = a.as_bytes()[offset] ^ b.as_bytes()[offset];
        debug_assert_ne!(differing, 0, "records must differ at the reported offset");
        let bit = 0x80_u8 >> differing.leading_zeros();
        Self::new(offset, !bit)
    }

    /// Byte offset of the critical bit.
    #[must_use]
    pub const fn offset(self) -> usize {
        (self.0 >> 8) as usize
    }

    /// The mask with every bit set except the critical one.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn mask(self) -> u8 {
        self.0 as u8
    }

    /// Which child a record belongs to: 1 if its critical bit is set, 0 otherwise.
    ///
    /// Offsets at or past the record's size read as a zero byte.
    #[must_use]
    pub fn direction(self, record: Record<'_>) -> usize {
        usize::from((self.mask() | record.byte(self.offset())) == u8::MAX)
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({}:{:08b})", self.offset(), !self.mask())
    }
}
