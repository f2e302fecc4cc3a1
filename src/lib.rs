pub mod grid;
pub mod pack;
pub mod swap;
pub mod word;

pub use grid::{Bool4x2, Bool4x4, Int4x4, select};
pub use pack::{BitPack, mask};
pub use swap::BitSwap;
pub use word::{BitIterator, IntoBitIterator, Word};
