//! Search filtering
//!
//! A record matches when its lowercased id, full name or class contains the
//! lowercased query. An empty query matches everything.

use crate::record::StudentRecord;

/// Case-insensitive substring filter over id, name and class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFilter {
    needle: String,
}

impl SearchFilter {
    /// Creates a filter; the query is lowercased once here.
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.to_lowercase(),
        }
    }

    /// Returns true if this filter keeps every record
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Checks if a record matches
    pub fn matches(&self, record: &StudentRecord) -> bool {
        if self.is_empty() {
            return true;
        }

        [record.id(), record.full_name(), record.student_class()]
            .iter()
            .any(|field| field.to_lowercase().contains(&self.needle))
    }
}
