//! Storage-layer error model.

use std::path::PathBuf;

use thiserror::Error;

use electrovault_core::DomainError;

/// Result type used by the store and its storage backends.
pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Input or invariant failure from the domain layer (validation, not found, ...).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The persisted file exists but does not hold a valid inventory.
    #[error("corrupt inventory data in {path}: {reason}")]
    CorruptData { path: PathBuf, reason: String },

    /// The persisted file could not be read or written.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize inventory: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl StoreError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn corrupt(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::CorruptData {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Offending field names when the failure is a validation error.
    pub fn invalid_fields(&self) -> Vec<&'static str> {
        match self {
            StoreError::Domain(err) => err.invalid_fields(),
            _ => Vec::new(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, StoreError::Domain(DomainError::Validation(_)))
    }

    pub fn is_corrupt_data(&self) -> bool {
        matches!(self, StoreError::CorruptData { .. })
    }

    pub fn is_io(&self) -> bool {
        matches!(self, StoreError::Io { .. })
    }
}
