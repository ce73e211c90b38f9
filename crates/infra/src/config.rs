//! Configuration loading and representation.

use std::path::PathBuf;

/// File name used when no data path is configured.
pub const DEFAULT_DATA_FILE: &str = "electrovault_inventory.json";

/// Environment variable overriding the data file location.
pub const DATA_PATH_ENV: &str = "ELECTROVAULT_DATA_PATH";

/// Where the inventory is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub data_path: PathBuf,
}

impl StoreConfig {
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
        }
    }

    /// Read `ELECTROVAULT_DATA_PATH`, falling back to the default file name.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup(DATA_PATH_ENV).filter(|v| !v.trim().is_empty()) {
            Some(path) => Self::new(path),
            None => Self::default(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_FILE)
    }
}
