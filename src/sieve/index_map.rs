//! Mapping between tracked odd numbers (`3, 5, 7, ...`) and dense table
//! indices (`0, 1, 2, ...`).
//!
//! 0, 1, 2 and the even numbers are never stored; their primality is known
//! without a lookup.

/// Index of the tracked odd number `number` (`number >= 3`).
///
/// # Examples
/// ```
/// use primetable::sieve::to_index;
///
/// assert_eq!(to_index(3), 0);
/// assert_eq!(to_index(9), 3);
/// ```
#[inline]
pub fn to_index(number: u64) -> usize {
    debug_assert!(number >= 3 && number % 2 == 1, "{number} is not tracked");
    ((number - 3) / 2) as usize
}

/// Tracked odd number stored at `index`. Inverse of [`to_index`].
#[inline]
pub fn to_number(index: usize) -> u64 {
    index as u64 * 2 + 3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_entries() {
        assert_eq!(to_number(0), 3);
        assert_eq!(to_number(1), 5);
        assert_eq!(to_number(34), 71);
        assert_eq!(to_index(71), 34);
    }

    #[test]
    fn round_trip_over_tracked_range() {
        for n in (3u64..=10_001).step_by(2) {
            assert_eq!(to_number(to_index(n)), n);
        }
        for i in 0..5_000 {
            assert_eq!(to_index(to_number(i)), i);
        }
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn even_numbers_are_rejected_in_debug() {
        to_index(10);
    }
}
