use crate::{
    error::{BoundError, RangeError},
    sieve::{CompositeTable, SieveBuilder},
};

/// Answers primality queries for every integer in `[0, max_number]` by a
/// single lookup into a prebuilt [`CompositeTable`].
///
/// # Examples
///
/// ```
/// use primetable::oracle::PrimalityOracle;
///
/// let oracle = PrimalityOracle::new(71).unwrap();
/// assert_eq!(oracle.check(29), Ok(true));
/// assert_eq!(oracle.check(33), Ok(false));
/// assert!(oracle.check(72).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct PrimalityOracle {
    table: CompositeTable,
}

impl PrimalityOracle {
    /// Builds the table for `max_number` eagerly.
    pub fn new(max_number: u64) -> Result<Self, BoundError> {
        Ok(PrimalityOracle {
            table: SieveBuilder::new(max_number)?.build(),
        })
    }

    pub fn from_table(table: CompositeTable) -> Self {
        PrimalityOracle { table }
    }

    pub fn max_number(&self) -> u64 {
        self.table.max_number()
    }

    pub fn table(&self) -> &CompositeTable {
        &self.table
    }

    /// Whether `num` is prime.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError`] for any `num > max_number`, odd or even.
    pub fn check(&self, num: u64) -> Result<bool, RangeError> {
        if num > self.max_number() {
            return Err(RangeError {
                number: num,
                max_number: self.max_number(),
            });
        }

        Ok(match num {
            0 | 1 => false,
            2 => true,
            n if n % 2 == 0 => false,
            n => !self.table.is_marked(n),
        })
    }

    /// Every prime in `[2, max_number]`, ascending.
    pub fn primes(&self) -> impl Iterator<Item = u64> + '_ {
        let two = (self.max_number() >= 2).then_some(2);
        two.into_iter().chain(self.table.odd_primes())
    }

    pub fn prime_count(&self) -> usize {
        self.primes().count()
    }
}
