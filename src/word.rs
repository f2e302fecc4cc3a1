use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, Shr};

/// A fixed-width unsigned integer treated as an opaque bit container.
///
/// Implemented for `u8` through `u64`; all packing and swapping operations are
/// generic over this trait so each width shares one set of mask/shift logic.
pub trait Word
where
    Self: From<bool>
        + Copy
        + Default
        + Eq
        + Not<Output = Self>
        + BitAnd<Self, Output = Self>
        + BitOr<Self, Output = Self>
        + BitXor<Self, Output = Self>
        + BitAndAssign
        + BitOrAssign
        + BitXorAssign
        + Shl<usize, Output = Self>
        + Shr<usize, Output = Self>,
{
    const BIT_LEN: usize;
}

#[inline]
pub(crate) fn one<W: Word>() -> W {
    W::from(true)
}

#[inline]
pub(crate) fn zero<W: Word>() -> W {
    W::default()
}

pub trait IntoBitIterator {
    type BitIterator: Iterator<Item = bool>;
    fn iter_bits(self) -> Self::BitIterator;
}

macro_rules! implement_word {
    ($word_type:ty) => {
        impl Word for $word_type {
            const BIT_LEN: usize = <$word_type>::BITS as usize;
        }

        impl IntoBitIterator for $word_type {
            type BitIterator = BitIterator<$word_type>;
            fn iter_bits(self) -> Self::BitIterator {
                BitIterator::from_word(self)
            }
        }

        impl IntoBitIterator for &$word_type {
            type BitIterator = BitIterator<$word_type>;
            fn iter_bits(self) -> Self::BitIterator {
                BitIterator::from_word(*self)
            }
        }
    };
}

implement_word!(u8);
implement_word!(u16);
implement_word!(u32);
implement_word!(u64);

/// Yields every bit of a word as a `bool`, least significant bit first.
pub struct BitIterator<W: Word> {
    word: W,
    bit_index: usize,
}

impl<W: Word> BitIterator<W> {
    #[must_use]
    pub fn from_word(word: W) -> BitIterator<W> {
        BitIterator { word, bit_index: 0 }
    }
}

impl<W: Word> Iterator for BitIterator<W> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if self.bit_index == W::BIT_LEN {
            return None;
        }
        let value = (self.word >> self.bit_index) & one::<W>() == one::<W>();
        self.bit_index += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = W::BIT_LEN - self.bit_index;
        (remaining, Some(remaining))
    }
}

impl<W: Word> ExactSizeIterator for BitIterator<W> {
    fn len(&self) -> usize {
        W::BIT_LEN - self.bit_index
    }
}
