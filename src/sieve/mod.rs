//! Construction of the composite table.
//!
//! # Submodules
//!
//! - `index_map`: odd number ↔ table index bijection
//! - `factor_marker`: flags the proper odd multiples of one factor
//! - `merger`: bitwise OR of partial tables
//! - `builder`: walks the candidate factors and accumulates the table

mod builder;
mod composite_table;
mod factor_marker;
mod index_map;
mod merger;

pub use builder::*;
pub use composite_table::*;
pub use factor_marker::*;
pub use index_map::*;
pub use merger::merge;
