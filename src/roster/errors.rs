//! Roster error types
//!
//! Error codes:
//! - ROSTER_DUPLICATE_ID (REJECT)
//! - ROSTER_OUT_OF_RANGE (REJECT)
//! - ROSTER_EMPTY_ID / ROSTER_INVALID_DATE / ROSTER_INVALID_NUMERIC (REJECT)
//! - ROSTER_DATA_CORRUPTION (ERROR, recovered on load)
//! - ROSTER_STORAGE_* (ERROR)
//!
//! Rejections never change state. No error is fatal to the process.

use thiserror::Error;

use crate::record::RecordError;
use crate::storage::StorageError;

/// Result type for roster operations
pub type RosterResult<T> = Result<T, RosterError>;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("student id '{id}' already exists")]
    DuplicateId { id: String },

    #[error("position {position} is out of range for a roster of {len} records")]
    OutOfRange { position: usize, len: usize },

    #[error(transparent)]
    InvalidRecord(#[from] RecordError),

    #[error("persisted roster is corrupt: {reason}")]
    CorruptPersistedData { reason: String },

    #[error(transparent)]
    Storage(StorageError),
}

impl From<StorageError> for RosterError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Corrupt { reason } => RosterError::CorruptPersistedData { reason },
            other => RosterError::Storage(other),
        }
    }
}

impl RosterError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            RosterError::DuplicateId { .. } => "ROSTER_DUPLICATE_ID",
            RosterError::OutOfRange { .. } => "ROSTER_OUT_OF_RANGE",
            RosterError::InvalidRecord(e) => e.code(),
            RosterError::CorruptPersistedData { .. } => "ROSTER_DATA_CORRUPTION",
            RosterError::Storage(e) => e.code(),
        }
    }

    /// True when the user can fix the input and retry
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            RosterError::DuplicateId { .. }
                | RosterError::OutOfRange { .. }
                | RosterError::InvalidRecord(_)
        )
    }
}
