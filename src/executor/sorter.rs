//! Result sorting
//!
//! Sorting is stable: records with equal keys keep their relative order in
//! both directions. Direction only reverses the comparator outcome.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::record::StudentRecord;

/// Column the result is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortField {
    /// Case-sensitive
    #[default]
    Id,
    /// Case-insensitive
    Name,
    /// Case-sensitive
    Class,
    /// Numeric
    Gpa,
}

impl SortField {
    pub const ALL: [SortField; 4] = [
        SortField::Id,
        SortField::Name,
        SortField::Class,
        SortField::Gpa,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Name => "name",
            SortField::Class => "class",
            SortField::Gpa => "gpa",
        }
    }

    /// Compares two records by this field, ascending.
    pub fn compare(&self, a: &StudentRecord, b: &StudentRecord) -> Ordering {
        match self {
            SortField::Id => a.id().cmp(b.id()),
            SortField::Name => a
                .full_name()
                .to_lowercase()
                .cmp(&b.full_name().to_lowercase()),
            SortField::Class => a.student_class().cmp(b.student_class()),
            SortField::Gpa => a.gpa().total_cmp(&b.gpa()),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort field '{0}': expected id, name, class or gpa")]
pub struct UnknownSortField(pub String);

impl FromStr for SortField {
    type Err = UnknownSortField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownSortField(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field plus direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn asc(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Desc,
        }
    }
}

/// Sorts anything that exposes a record
pub struct RecordSorter;

impl RecordSorter {
    /// Stable sort according to `spec`.
    pub fn sort<T: AsRef<StudentRecord>>(items: &mut [T], spec: SortSpec) {
        items.sort_by(|a, b| {
            let ordering = spec.field.compare(a.as_ref(), b.as_ref());
            match spec.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make(id: &str, name: &str, class: &str, gpa: f64) -> StudentRecord {
        let dob = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        StudentRecord::new(id, name, dob, class, gpa).unwrap()
    }

    fn ids(records: &[StudentRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id()).collect()
    }

    #[test]
    fn test_sort_by_gpa_both_directions() {
        let mut docs = vec![
            make("a", "A", "C", 3.0),
            make("b", "B", "C", 2.0),
            make("c", "C", "C", 4.0),
        ];

        RecordSorter::sort(&mut docs, SortSpec::asc(SortField::Gpa));
        assert_eq!(ids(&docs), ["b", "a", "c"]);

        RecordSorter::sort(&mut docs, SortSpec::desc(SortField::Gpa));
        assert_eq!(ids(&docs), ["c", "a", "b"]);
    }

    #[test]
    fn test_sort_stable_in_both_directions() {
        let mut docs = vec![
            make("a", "A", "C1", 3.0),
            make("b", "B", "C1", 3.0),
            make("c", "C", "C1", 3.0),
        ];

        RecordSorter::sort(&mut docs, SortSpec::asc(SortField::Gpa));
        assert_eq!(ids(&docs), ["a", "b", "c"]);

        RecordSorter::sort(&mut docs, SortSpec::desc(SortField::Class));
        assert_eq!(ids(&docs), ["a", "b", "c"]);
    }

    #[test]
    fn test_name_is_case_insensitive() {
        let mut docs = vec![
            make("1", "charlie", "C", 0.0),
            make("2", "Alice", "C", 0.0),
            make("3", "bob", "C", 0.0),
        ];

        RecordSorter::sort(&mut docs, SortSpec::asc(SortField::Name));
        assert_eq!(ids(&docs), ["2", "3", "1"]);
    }

    #[test]
    fn test_id_and_class_are_case_sensitive() {
        let mut docs = vec![make("b", "", "x", 0.0), make("B", "", "Y", 0.0)];

        RecordSorter::sort(&mut docs, SortSpec::asc(SortField::Id));
        assert_eq!(ids(&docs), ["B", "b"]);

        RecordSorter::sort(&mut docs, SortSpec::asc(SortField::Class));
        assert_eq!(ids(&docs), ["B", "b"]);
    }

    #[test]
    fn test_sort_field_parse() {
        assert_eq!("gpa".parse::<SortField>().unwrap(), SortField::Gpa);
        assert_eq!("name".parse::<SortField>().unwrap(), SortField::Name);
        assert!("GPA".parse::<SortField>().is_err());
        for field in SortField::ALL {
            assert_eq!(field.to_string().parse::<SortField>().unwrap(), field);
        }
    }

    #[test]
    fn test_direction_flip() {
        assert_eq!(SortDirection::Asc.flipped(), SortDirection::Desc);
        assert_eq!(SortDirection::Desc.flipped(), SortDirection::Asc);
    }
}
