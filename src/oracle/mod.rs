//! Read-only primality queries over a finished composite table.

mod global;
mod primality_oracle;

pub use global::*;
pub use primality_oracle::*;
