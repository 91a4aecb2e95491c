//! Build-time parameters for the sieve.

mod sieve_config;

pub use sieve_config::*;
