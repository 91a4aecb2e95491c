use std::sync::OnceLock;

use crate::{error::RangeError, sieve::SieveBuilder};

use super::PrimalityOracle;

/// Bound of the process-wide table behind [`is_prime`].
pub const DEFAULT_MAX_NUMBER: u64 = 101;

const DEFAULT_BUILDER: SieveBuilder = {
    assert!(DEFAULT_MAX_NUMBER / 2 <= usize::MAX as u64);
    SieveBuilder::from_parts(DEFAULT_MAX_NUMBER, (DEFAULT_MAX_NUMBER / 2) as usize)
};

static ORACLE: OnceLock<PrimalityOracle> = OnceLock::new();

fn build_default() -> PrimalityOracle {
    PrimalityOracle::from_table(DEFAULT_BUILDER.build())
}

/// Process-wide oracle for [`DEFAULT_MAX_NUMBER`], built on first use.
///
/// Concurrent first callers block until the single construction finishes
/// and then share the same table.
pub fn oracle() -> &'static PrimalityOracle {
    ORACLE.get_or_init(build_default)
}

/// Whether `number` is prime, for `0 <= number <= DEFAULT_MAX_NUMBER`.
///
/// # Examples
/// ```
/// use primetable::is_prime;
///
/// assert_eq!(is_prime(97), Ok(true));
/// assert_eq!(is_prime(91), Ok(false));
/// assert!(is_prime(1_000).is_err());
/// ```
pub fn is_prime(number: u64) -> Result<bool, RangeError> {
    oracle().check(number)
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc, Barrier,
        atomic::{AtomicUsize, Ordering},
    };
    use std::thread;

    use super::*;

    #[test]
    fn default_bound_answers() {
        assert_eq!(is_prime(2), Ok(true));
        assert_eq!(is_prime(101), Ok(true));
        assert_eq!(is_prime(100), Ok(false));
        assert_eq!(
            is_prime(102),
            Err(RangeError {
                number: 102,
                max_number: DEFAULT_MAX_NUMBER
            })
        );
    }

    #[test]
    fn default_builder_matches_checked_constructor() {
        let checked = SieveBuilder::new(DEFAULT_MAX_NUMBER).unwrap();
        assert_eq!(DEFAULT_BUILDER.size(), checked.size());
        assert_eq!(DEFAULT_BUILDER.build(), checked.build());
    }

    #[test]
    fn concurrent_first_use_builds_exactly_once() {
        let cell: Arc<OnceLock<PrimalityOracle>> = Arc::new(OnceLock::new());
        let builds = Arc::new(AtomicUsize::new(0));
        let start = Arc::new(Barrier::new(8));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cell = Arc::clone(&cell);
                let builds = Arc::clone(&builds);
                let start = Arc::clone(&start);
                thread::spawn(move || {
                    start.wait();
                    let oracle = cell.get_or_init(|| {
                        builds.fetch_add(1, Ordering::SeqCst);
                        build_default()
                    });
                    oracle as *const PrimalityOracle as usize
                })
            })
            .collect();

        let addresses: Vec<usize> = handles
            .into_iter()
            .map(|h| h.join().expect("Thread panicked"))
            .collect();

        assert_eq!(builds.load(Ordering::SeqCst), 1);
        assert!(addresses.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(cell.get().map(PrimalityOracle::max_number), Some(DEFAULT_MAX_NUMBER));
    }
}
