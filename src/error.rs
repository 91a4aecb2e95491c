//! Error types surfaced by table construction, queries and configuration.

use std::path::PathBuf;

use thiserror::Error;

/// An explicit bit sequence did not fit in the declared capacity of a
/// [`PackedBitSet`](crate::bits::PackedBitSet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("bit sequence is longer than capacity {capacity}")]
pub struct ConstructionError {
    pub capacity: usize,
}

/// A primality query asked about a number beyond the bound the table was
/// built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{number} is outside the sieved range [0, {max_number}]")]
pub struct RangeError {
    pub number: u64,
    pub max_number: u64,
}

/// A bound whose table would need more entries than `usize` can index on
/// this platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("bound {max_number} is too large for a table on this platform")]
pub struct BoundError {
    pub max_number: u64,
}

/// Crate-level error, used by the configuration layer and the binary.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Construction(#[from] ConstructionError),

    #[error(transparent)]
    Range(#[from] RangeError),

    #[error(transparent)]
    Bound(#[from] BoundError),

    #[error("could not read config file {path}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config file {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not serialize report")]
    Report(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_error_message_names_the_bound() {
        let err = RangeError {
            number: 18,
            max_number: 17,
        };
        assert_eq!(err.to_string(), "18 is outside the sieved range [0, 17]");
    }

    #[test]
    fn report_failures_convert_from_serde_json() {
        let source = serde_json::from_str::<u64>("not json").unwrap_err();
        let err: Error = source.into();
        assert!(matches!(err, Error::Report(_)));
        assert_eq!(err.to_string(), "could not serialize report");
    }

    #[test]
    fn bound_error_converts_into_crate_error() {
        let err: Error = BoundError { max_number: 7 }.into();
        assert!(matches!(err, Error::Bound(BoundError { max_number: 7 })));
    }

    #[test]
    fn construction_error_converts_into_crate_error() {
        let err: Error = ConstructionError { capacity: 8 }.into();
        assert!(matches!(
            err,
            Error::Construction(ConstructionError { capacity: 8 })
        ));
        assert_eq!(err.to_string(), "bit sequence is longer than capacity 8");
    }
}
