//! Construction statistics for the sieve.
//!
//! Tracks how many candidate factors were visited, how many of them were
//! prime and triggered a marking pass, and how many were skipped because an
//! earlier factor had already flagged them composite.

mod stats;
pub use stats::*;
