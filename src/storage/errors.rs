//! Storage error types
//!
//! Error codes:
//! - ROSTER_STORAGE_IO (ERROR)
//! - ROSTER_INVALID_KEY (ERROR)
//! - ROSTER_ENCODE_FAILED (ERROR)
//! - ROSTER_DATA_CORRUPTION (ERROR, recovered by reseeding)

use std::io;

use thiserror::Error;

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed: {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },

    #[error("invalid storage key '{0}': only ASCII letters, digits, '.', '_' and '-' are allowed")]
    InvalidKey(String),

    #[error("failed to encode roster: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("persisted roster is corrupt: {reason}")]
    Corrupt { reason: String },
}

impl StorageError {
    /// Wraps an I/O error with a description of what was attempted
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        StorageError::Io {
            context: context.into(),
            source,
        }
    }

    /// Creates a corruption error
    pub fn corrupt(reason: impl Into<String>) -> Self {
        StorageError::Corrupt {
            reason: reason.into(),
        }
    }

    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            StorageError::Io { .. } => "ROSTER_STORAGE_IO",
            StorageError::InvalidKey(_) => "ROSTER_INVALID_KEY",
            StorageError::Encode(_) => "ROSTER_ENCODE_FAILED",
            StorageError::Corrupt { .. } => "ROSTER_DATA_CORRUPTION",
        }
    }
}
