use derive_more::{From, Into};

use crate::word::IntoBitIterator;

/// A byte decomposed to booleans: two columns of four bits each, bit 0 in the
/// first slot of the first column.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, From, Into)]
pub struct Bool4x2(pub [[bool; 4]; 2]);

/// A 16-bit word decomposed to booleans: the low byte fills the first two
/// columns, the high byte the last two.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, From, Into)]
pub struct Bool4x4(pub [[bool; 4]; 4]);

/// Four columns of four integers, the elementwise counterpart of [`Bool4x4`]
/// for [`select`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, From, Into)]
pub struct Int4x4(pub [[i32; 4]; 4]);

impl From<u8> for Bool4x2 {
    fn from(byte: u8) -> Self {
        let mut columns = [[false; 4]; 2];
        for (index, bit) in byte.iter_bits().enumerate() {
            columns[index / 4][index % 4] = bit;
        }
        Bool4x2(columns)
    }
}

impl From<u16> for Bool4x4 {
    fn from(word: u16) -> Self {
        let low = Bool4x2::from(word as u8);
        let high = Bool4x2::from((word >> 8) as u8);
        Bool4x4([low.0[0], low.0[1], high.0[0], high.0[1]])
    }
}

impl Bool4x2 {
    #[must_use]
    pub const fn splat(value: bool) -> Self {
        Bool4x2([[value; 4]; 2])
    }
}

impl Bool4x4 {
    #[must_use]
    pub const fn splat(value: bool) -> Self {
        Bool4x4([[value; 4]; 4])
    }
}

impl Int4x4 {
    pub const ZERO: Int4x4 = Int4x4([[0; 4]; 4]);

    #[must_use]
    pub const fn splat(value: i32) -> Self {
        Int4x4([[value; 4]; 4])
    }

    #[must_use]
    pub fn identity() -> Self {
        let mut columns = [[0; 4]; 4];
        for (index, column) in columns.iter_mut().enumerate() {
            column[index] = 1;
        }
        Int4x4(columns)
    }
}

/// Elementwise choice between two integer grids: `b`'s element wherever
/// `choose` is set, `a`'s otherwise.
#[must_use]
pub fn select(a: Int4x4, b: Int4x4, choose: Bool4x4) -> Int4x4 {
    let mut out = [[0; 4]; 4];
    for column in 0..4 {
        for slot in 0..4 {
            out[column][slot] = if choose.0[column][slot] {
                b.0[column][slot]
            } else {
                a.0[column][slot]
            };
        }
    }
    Int4x4(out)
}
