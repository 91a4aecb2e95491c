use tracing::{debug, trace};

use crate::{bits::PackedBitSet, error::BoundError, statistics::SieveStats};

use super::{
    composite_table::{CompositeTable, table_size},
    factor_marker::mark,
    index_map::to_index,
    merger::merge_into,
};

/// Builds the [`CompositeTable`] for a fixed bound.
///
/// Odd candidate factors are walked from 3 up to `max_number`. A candidate
/// already flagged by a smaller factor is composite and every one of its
/// multiples is flagged too, so it costs a single lookup; a prime candidate
/// gets exactly one marking pass merged into the accumulated table.
///
/// # Examples
/// ```
/// use primetable::sieve::SieveBuilder;
///
/// let table = SieveBuilder::new(71).unwrap().build();
/// assert!(table.is_marked(33));
/// assert!(!table.is_marked(29));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SieveBuilder {
    max_number: u64,
    size: usize,
}

impl SieveBuilder {
    /// # Errors
    ///
    /// Returns [`BoundError`] if the table for `max_number` cannot be
    /// indexed on this platform.
    pub fn new(max_number: u64) -> Result<Self, BoundError> {
        Ok(SieveBuilder {
            max_number,
            size: table_size(max_number)?,
        })
    }

    /// For bounds already checked to fit, such as compile-time constants.
    pub(crate) const fn from_parts(max_number: u64, size: usize) -> Self {
        SieveBuilder { max_number, size }
    }

    pub fn max_number(&self) -> u64 {
        self.max_number
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn build(&self) -> CompositeTable {
        self.build_with_stats().0
    }

    pub fn build_with_stats(&self) -> (CompositeTable, SieveStats) {
        let mut stats = SieveStats::new();
        let mut factors = (3..=self.max_number).step_by(2);

        let mut table = match factors.next() {
            Some(first) => {
                stats.bump_marking_passes();
                mark(first, self.size)
            }
            None => PackedBitSet::new(self.size),
        };

        for factor in factors {
            if table.get(to_index(factor)) {
                trace!(factor, "composite factor skipped");
                stats.bump_skipped();
                continue;
            }

            let marks = mark(factor, self.size);
            debug!(factor, flagged = marks.count_ones(), "marking pass");
            merge_into(&mut table, &marks);
            stats.bump_marking_passes();
        }

        stats.dump(self.max_number);
        (CompositeTable::new(self.max_number, table), stats)
    }
}
