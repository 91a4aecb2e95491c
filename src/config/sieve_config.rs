use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{error::Error, oracle::DEFAULT_MAX_NUMBER};

/// Parameters fixed before the composite table is built.
///
/// Read from a JSON file such as `{ "max_number": 1000 }`. Missing fields
/// fall back to their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SieveConfig {
    pub max_number: u64,
}

impl SieveConfig {
    pub fn from_json_str(path: &Path, json: &str) -> Result<Self, Error> {
        serde_json::from_str(json).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load_from_path(path: &Path) -> Result<Self, Error> {
        let json = std::fs::read_to_string(path).map_err(|source| Error::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(path, &json)
    }

    /// Applies command-line overrides on top of the loaded values.
    pub fn with_max_number(self, max_number: Option<u64>) -> Self {
        SieveConfig {
            max_number: max_number.unwrap_or(self.max_number),
        }
    }
}

impl Default for SieveConfig {
    fn default() -> Self {
        SieveConfig {
            max_number: DEFAULT_MAX_NUMBER,
        }
    }
}
