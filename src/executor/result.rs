//! Result types for roster queries

use crate::record::StudentRecord;

/// A record in a query result, tagged with its absolute position in the
/// roster so a displayed row can be mapped back for update or remove.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterRow {
    /// Index into the authoritative record list
    pub position: usize,
    pub record: StudentRecord,
}

impl RosterRow {
    pub fn new(position: usize, record: StudentRecord) -> Self {
        Self { position, record }
    }
}

impl AsRef<StudentRecord> for RosterRow {
    fn as_ref(&self) -> &StudentRecord {
        &self.record
    }
}

/// Everything a table view needs to draw one page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub rows: Vec<RosterRow>,
    pub current_page: usize,
    pub page_count: usize,
    /// Records left after filtering
    pub total: usize,
    /// 1-based index of the first row shown; 0 when nothing is shown
    pub showing_start: usize,
    /// 1-based index of the last row shown
    pub showing_end: usize,
    /// Records in the roster, ignoring the search
    pub record_count: usize,
    pub average_gpa: f64,
}

impl PageView {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// "Showing X–Y of Z"
    pub fn summary(&self) -> String {
        format!(
            "Showing {}-{} of {}",
            self.showing_start, self.showing_end, self.total
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_empty() {
        let view = PageView {
            rows: Vec::new(),
            current_page: 1,
            page_count: 0,
            total: 0,
            showing_start: 0,
            showing_end: 0,
            record_count: 3,
            average_gpa: 3.1,
        };
        assert!(view.is_empty());
        assert_eq!(view.summary(), "Showing 0-0 of 0");
    }
}
