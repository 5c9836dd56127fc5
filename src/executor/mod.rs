//! Query pipeline for the roster
//!
//! # Execution Flow (strict order)
//!
//! 1. Filter records by the search query
//! 2. Stable sort by the chosen field and direction
//! 3. Slice out the current page
//!
//! Every stage works on a derived copy; the roster's insertion order is
//! never touched.

mod filters;
mod paginator;
mod result;
mod sorter;
mod window;

pub use filters::SearchFilter;
pub use paginator::{Paginator, ITEMS_PER_PAGE};
pub use result::{PageView, RosterRow};
pub use sorter::{RecordSorter, SortDirection, SortField, SortSpec, UnknownSortField};
pub use window::{PageWindow, PagerItem};

use crate::record::StudentRecord;

/// Runs filter and sort over `records`, keeping each row's position.
pub fn execute(records: &[StudentRecord], filter: &SearchFilter, sort: SortSpec) -> Vec<RosterRow> {
    let mut rows: Vec<RosterRow> = records
        .iter()
        .enumerate()
        .filter(|(_, record)| filter.matches(record))
        .map(|(position, record)| RosterRow::new(position, record.clone()))
        .collect();

    RecordSorter::sort(&mut rows, sort);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::sample_records;

    #[test]
    fn test_execute_keeps_positions() {
        let records = sample_records();
        let rows = execute(
            &records,
            &SearchFilter::new("ct01"),
            SortSpec::desc(SortField::Gpa),
        );

        assert_eq!(rows.len(), 4);
        for row in &rows {
            assert_eq!(&records[row.position], &row.record);
        }
        let gpas: Vec<f64> = rows.iter().map(|r| r.record.gpa()).collect();
        assert_eq!(gpas, [3.8, 3.7, 3.2, 3.2]);
        // equal GPAs keep insertion order
        assert_eq!(rows[2].record.id(), "2023089");
        assert_eq!(rows[3].record.id(), "2024003");
    }

    #[test]
    fn test_execute_does_not_reorder_source() {
        let records = sample_records();
        let before = records.clone();
        let _ = execute(&records, &SearchFilter::new(""), SortSpec::asc(SortField::Name));
        assert_eq!(records, before);
    }
}
