use crate::word::{Word, zero};

/// Bitmask with the low `length` bits set.
///
/// Lengths of `W::BIT_LEN` or more saturate to the all-ones pattern rather
/// than failing.
#[inline]
#[must_use]
pub fn mask<W: Word>(length: usize) -> W {
    if length >= W::BIT_LEN {
        return !zero::<W>();
    }
    if length == 0 {
        return zero::<W>();
    }
    !zero::<W>() >> (W::BIT_LEN - length)
}

/// Subfield extraction and insertion inside a fixed-width unsigned integer.
///
/// Offsets count in bits from the least significant bit. Lengths saturate the
/// same way [`mask`] does, and an offset at or past the top of the word reads
/// as zero and writes as a no-op. Overlapping windows are not detected: a
/// later `set_at` silently clobbers whatever earlier writes covered, and the
/// layout of windows is entirely the caller's responsibility.
pub trait BitPack: Word {
    /// The low `length` bits of the field.
    #[inline]
    #[must_use]
    fn get(self, length: usize) -> Self {
        self & mask::<Self>(length)
    }

    /// The `length` bits of the field starting at `offset`.
    #[inline]
    #[must_use]
    fn get_at(self, length: usize, offset: usize) -> Self {
        if offset >= Self::BIT_LEN {
            return zero::<Self>();
        }
        (self >> offset) & mask::<Self>(length)
    }

    /// Overwrites the low `length` bits of the field with the low `length`
    /// bits of `value`, preserving all higher bits. High bits of `value`
    /// beyond `length` are discarded.
    #[inline]
    #[must_use]
    fn set(self, value: Self, length: usize) -> Self {
        let mask = mask::<Self>(length);
        (self & !mask) | (value & mask)
    }

    /// Overwrites the `length`-bit window starting at `offset` with the low
    /// `length` bits of `value`, preserving all bits outside the window.
    #[inline]
    #[must_use]
    fn set_at(self, value: Self, length: usize, offset: usize) -> Self {
        if offset >= Self::BIT_LEN {
            return self;
        }
        let mask = mask::<Self>(length);
        (self & !(mask << offset)) | ((value & mask) << offset)
    }
}

impl<W: Word> BitPack for W {}
