//! Roster text format
//!
//! The persisted form is a JSON array of record objects with the keys
//! `id`, `fullName`, `dateOfBirth`, `studentClass` and `gpa`. There is no
//! version field. Decoding is all-or-nothing: one bad record fails the whole
//! payload.

use std::collections::HashSet;

use crate::record::StudentRecord;

use super::errors::{StorageError, StorageResult};

/// Encodes the full record list.
pub fn serialize(records: &[StudentRecord]) -> StorageResult<String> {
    Ok(serde_json::to_string(records)?)
}

/// Decodes a record list.
///
/// # Errors
///
/// Returns `StorageError::Corrupt` if the text is not a JSON array of valid
/// records or if two records share an id.
pub fn deserialize(text: &str) -> StorageResult<Vec<StudentRecord>> {
    let records: Vec<StudentRecord> =
        serde_json::from_str(text).map_err(|e| StorageError::corrupt(e.to_string()))?;

    let mut seen = HashSet::with_capacity(records.len());
    for record in &records {
        if !seen.insert(record.id()) {
            return Err(StorageError::corrupt(format!(
                "duplicate student id '{}'",
                record.id()
            )));
        }
    }

    Ok(records)
}
