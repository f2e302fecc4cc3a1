use std::fmt::Debug;

use bitpack::BitSwap;
use proptest::prelude::*;

// Half-word exchange done three ways: single-bit swaps, one batched swap, and
// two quarter-width swaps. All must land on the same pattern.
pub fn test_half_word_swap<W: BitSwap + Debug>(before: W, after: W) {
    let half = W::BIT_LEN / 2;

    let mut word = before;
    for index in 0..half {
        word = word.swap_bit(index, index + half);
    }
    assert_eq!(word, after);

    assert_eq!(before.swap_bits(0, half, half), after);
    assert_eq!(after.swap_bits(0, half, half), before);

    let quarter = half / 2;
    let word = before
        .swap_bits(0, half, quarter)
        .swap_bits(quarter, half + quarter, quarter);
    assert_eq!(word, after);
}

pub fn test_swap_noop<W: BitSwap + Debug>() {
    // Same position, or positions holding equal bits, change nothing.
    let word = W::from(true);
    assert_eq!(word.swap_bit(3, 3), word);
    assert_eq!(word.swap_bits(2, 2, 4), word);

    let equal_bits = (!W::default()).swap_bit(0, W::BIT_LEN - 1);
    assert_eq!(equal_bits, !W::default());
}

macro_rules! call_test {
    ($function:ident $(, $args:expr)*) => {
        $function::<u8>($($args),*);
        $function::<u16>($($args),*);
        $function::<u32>($($args),*);
        $function::<u64>($($args),*);
    };
}

#[test]
fn half_word_swap() {
    test_half_word_swap(0x0Fu8, 0xF0u8);
    test_half_word_swap(0x00FFu16, 0xFF00u16);
    test_half_word_swap(0x0000_FFFFu32, 0xFFFF_0000u32);
    test_half_word_swap(0x0000_0000_FFFF_FFFFu64, 0xFFFF_FFFF_0000_0000u64);
}

#[test]
fn swap_noop() {
    call_test!(test_swap_noop);
}

#[test]
fn single_bit_swap_moves_one_bit() {
    assert_eq!(0b0000_0001u8.swap_bit(0, 7), 0b1000_0000);
    assert_eq!(0b1000_0000u8.swap_bit(0, 7), 0b0000_0001);
    assert_eq!(0xDEAD_BEEFu32.swap_bit(4, 4), 0xDEAD_BEEF);
}

proptest! {
    #[test]
    fn swap_involution(
        word in any::<u64>(),
        i in 0usize..64,
        j in 0usize..64,
        n in 1usize..=32,
    ) {
        prop_assume!(i + n <= 64 && j + n <= 64);
        prop_assume!(i + n <= j || j + n <= i);
        let swapped = word.swap_bits(i, j, n);
        prop_assert_eq!(swapped.swap_bits(i, j, n), word);
    }

    #[test]
    fn batched_swap_equals_sequential(
        word in any::<u64>(),
        i in 0usize..64,
        j in 0usize..64,
        n in 1usize..=32,
    ) {
        prop_assume!(i + n <= 64 && j + n <= 64);
        prop_assume!(i + n <= j || j + n <= i);
        let batched = word.swap_bits(i, j, n);
        let mut sequential = word;
        for k in 0..n {
            sequential = sequential.swap_bit(i + k, j + k);
        }
        prop_assert_eq!(batched, sequential);
    }

    #[test]
    fn other_bits_untouched(
        word in any::<u32>(),
        i in 0usize..32,
        j in 0usize..32,
        n in 1usize..=16,
    ) {
        prop_assume!(i + n <= 32 && j + n <= 32);
        prop_assume!(i + n <= j || j + n <= i);
        let swapped = word.swap_bits(i, j, n);
        for index in 0..32 {
            let inside = (index >= i && index < i + n) || (index >= j && index < j + n);
            if !inside {
                prop_assert_eq!((swapped >> index) & 1, (word >> index) & 1);
            }
        }
    }
}
