use crate::pack::mask;
use crate::word::{Word, one};

/// XOR swap of bit runs inside a word, after
/// <http://graphics.stanford.edu/~seander/bithacks.html#SwappingBitsXOR>.
///
/// Both positions must lie inside the word (debug-asserted). If the runs
/// overlap the result follows the XOR formula, which is generally not an
/// intuitive swap; non-overlapping runs is a caller responsibility.
pub trait BitSwap: Word {
    /// Exchanges the bits at positions `i` and `j`, leaving all other bits
    /// unchanged. A no-op when the two bits are already equal.
    #[inline]
    #[must_use]
    fn swap_bit(self, i: usize, j: usize) -> Self {
        debug_assert!(i < Self::BIT_LEN && j < Self::BIT_LEN);
        let x = ((self >> i) ^ (self >> j)) & one::<Self>();
        self ^ ((x << i) | (x << j))
    }

    /// Exchanges the `n`-bit run starting at `i` with the `n`-bit run
    /// starting at `j` as a single combined XOR swap.
    #[inline]
    #[must_use]
    fn swap_bits(self, i: usize, j: usize, n: usize) -> Self {
        debug_assert!(i < Self::BIT_LEN && j < Self::BIT_LEN);
        let x = ((self >> i) ^ (self >> j)) & mask::<Self>(n);
        self ^ ((x << i) | (x << j))
    }
}

impl<W: Word> BitSwap for W {}
