use crate::{bits::PackedBitSet, error::BoundError};

use super::index_map::{to_index, to_number};

/// The finished sieve: bit `to_index(n)` is set iff the odd number `n` is
/// composite.
///
/// Built once by [`SieveBuilder`](super::SieveBuilder) and read-only
/// afterwards. Covers `max_number / 2` tracked odd numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeTable {
    max_number: u64,
    bits: PackedBitSet,
}

impl CompositeTable {
    pub(crate) fn new(max_number: u64, bits: PackedBitSet) -> Self {
        debug_assert_eq!(Ok(bits.capacity()), table_size(max_number));
        CompositeTable { max_number, bits }
    }

    pub fn max_number(&self) -> u64 {
        self.max_number
    }

    /// Number of tracked odd numbers.
    pub fn size(&self) -> usize {
        self.bits.capacity()
    }

    pub fn bits(&self) -> &PackedBitSet {
        &self.bits
    }

    /// Whether the tracked odd `number` is flagged composite.
    ///
    /// # Panics
    ///
    /// Panics if `number` is not tracked by this table.
    pub fn is_marked(&self, number: u64) -> bool {
        self.bits.get(to_index(number))
    }

    /// Odd numbers in `[3, max_number]` whose composite bit is clear.
    pub fn odd_primes(&self) -> impl Iterator<Item = u64> + '_ {
        self.bits
            .iter()
            .enumerate()
            .filter(|&(_, composite)| !composite)
            .map(|(i, _)| to_number(i))
            .take_while(move |&n| n <= self.max_number)
    }
}

/// Count of tracked odd numbers for a bound.
///
/// # Errors
///
/// Returns [`BoundError`] if the count does not fit in `usize`.
pub fn table_size(max_number: u64) -> Result<usize, BoundError> {
    usize::try_from(max_number / 2).map_err(|_| BoundError { max_number })
}
