//! Bit-packed storage for composite flags.

mod packed_bitset;

pub use packed_bitset::*;
