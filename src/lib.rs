//! Precomputed primality table built with a bit-packed sieve of
//! Eratosthenes over the odd numbers.
//!
//! The table for a bound is constructed once by [`sieve::SieveBuilder`] and
//! then queried through [`oracle::PrimalityOracle`], or through the
//! process-wide [`is_prime`] for the default bound.

pub mod bits;
pub mod config;
pub mod error;
pub mod oracle;
pub mod sieve;
pub mod statistics;

pub use error::{BoundError, ConstructionError, Error, RangeError};
pub use oracle::{DEFAULT_MAX_NUMBER, PrimalityOracle, is_prime};
