//! Student record value types
//!
//! A [`StudentRecord`] is immutable once built. Every constructor path,
//! including deserialization, goes through the same validation so a stored
//! record always has a non-empty id and a finite GPA.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::errors::{RecordError, RecordResult};

/// Date format used for storage, export and form input
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One student's stored attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawStudentRecord")]
pub struct StudentRecord {
    id: String,
    full_name: String,
    date_of_birth: NaiveDate,
    student_class: String,
    gpa: f64,
}

impl StudentRecord {
    /// Builds a record from typed values.
    ///
    /// # Errors
    ///
    /// - `EmptyId` if `id` is empty
    /// - `InvalidNumeric` if `gpa` is NaN or infinite
    pub fn new(
        id: impl Into<String>,
        full_name: impl Into<String>,
        date_of_birth: NaiveDate,
        student_class: impl Into<String>,
        gpa: f64,
    ) -> RecordResult<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(RecordError::EmptyId);
        }
        if !gpa.is_finite() {
            return Err(RecordError::InvalidNumeric {
                value: gpa.to_string(),
            });
        }

        Ok(Self {
            id,
            full_name: full_name.into(),
            date_of_birth,
            student_class: student_class.into(),
            gpa,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }

    pub fn student_class(&self) -> &str {
        &self.student_class
    }

    pub fn gpa(&self) -> f64 {
        self.gpa
    }

    /// Flat export projection: `[id, fullName, dateOfBirth, studentClass, gpa]`
    pub fn to_row(&self) -> [String; 5] {
        [
            self.id.clone(),
            self.full_name.clone(),
            self.date_of_birth.format(DATE_FORMAT).to_string(),
            self.student_class.clone(),
            self.gpa.to_string(),
        ]
    }
}

impl AsRef<StudentRecord> for StudentRecord {
    fn as_ref(&self) -> &StudentRecord {
        self
    }
}

/// Wire shape of a persisted record, validated into [`StudentRecord`].
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawStudentRecord {
    id: String,
    full_name: String,
    date_of_birth: NaiveDate,
    student_class: String,
    gpa: f64,
}

impl TryFrom<RawStudentRecord> for StudentRecord {
    type Error = RecordError;

    fn try_from(raw: RawStudentRecord) -> RecordResult<Self> {
        StudentRecord::new(
            raw.id,
            raw.full_name,
            raw.date_of_birth,
            raw.student_class,
            raw.gpa,
        )
    }
}

/// Unparsed form input, one string per field.
///
/// This is the only place text is coerced into typed values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentDraft {
    pub id: String,
    pub full_name: String,
    pub date_of_birth: String,
    pub student_class: String,
    pub gpa: String,
}

impl StudentDraft {
    /// Parses the draft into a record.
    ///
    /// Id and name are trimmed; a blank id is `EmptyId`. Class is kept as
    /// typed. Date and GPA ignore surrounding whitespace.
    pub fn parse(&self) -> RecordResult<StudentRecord> {
        let id = self.id.trim();
        if id.is_empty() {
            return Err(RecordError::EmptyId);
        }

        let dob_text = self.date_of_birth.trim();
        let date_of_birth = NaiveDate::parse_from_str(dob_text, DATE_FORMAT).map_err(|_| {
            RecordError::InvalidDate {
                value: self.date_of_birth.clone(),
            }
        })?;

        let gpa = parse_gpa(&self.gpa)?;

        StudentRecord::new(
            id,
            self.full_name.trim(),
            date_of_birth,
            self.student_class.clone(),
            gpa,
        )
    }
}

impl From<&StudentRecord> for StudentDraft {
    fn from(record: &StudentRecord) -> Self {
        let [id, full_name, date_of_birth, student_class, gpa] = record.to_row();
        Self {
            id,
            full_name,
            date_of_birth,
            student_class,
            gpa,
        }
    }
}

/// Parses GPA text, rejecting anything that is not a finite number.
///
/// `"NaN"` and `"inf"` parse as floats in Rust and are rejected here too.
pub fn parse_gpa(text: &str) -> RecordResult<f64> {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(RecordError::InvalidNumeric {
            value: text.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn draft(gpa: &str) -> StudentDraft {
        StudentDraft {
            id: "A1".into(),
            full_name: "X Y".into(),
            date_of_birth: "2000-01-01".into(),
            student_class: "C1".into(),
            gpa: gpa.into(),
        }
    }

    #[test]
    fn test_parse_valid_draft() {
        let record = draft("3.0").parse().unwrap();
        assert_eq!(record.id(), "A1");
        assert_eq!(record.full_name(), "X Y");
        assert_eq!(
            record.date_of_birth(),
            NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()
        );
        assert_eq!(record.student_class(), "C1");
        assert_eq!(record.gpa(), 3.0);
    }

    #[test]
    fn test_non_numeric_gpa_rejected() {
        for bad in ["abc", "", "NaN", "inf", "-inf", "3.5abc"] {
            let err = draft(bad).parse().unwrap_err();
            assert_eq!(err, RecordError::InvalidNumeric { value: bad.into() });
        }
    }

    #[test]
    fn test_gpa_whitespace_tolerated() {
        assert_eq!(draft(" 3.25 ").parse().unwrap().gpa(), 3.25);
    }

    #[test]
    fn test_empty_id_rejected() {
        let mut d = draft("3.0");
        d.id.clear();
        assert_eq!(d.parse().unwrap_err(), RecordError::EmptyId);
    }

    #[test]
    fn test_blank_id_rejected() {
        let mut d = draft("3.0");
        d.id = "   ".into();
        assert_eq!(d.parse().unwrap_err(), RecordError::EmptyId);
    }

    #[test]
    fn test_id_and_name_trimmed() {
        let mut d = draft("3.0");
        d.id = " A1 ".into();
        d.full_name = "  X Y\t".into();
        d.student_class = " C1 ".into();
        let record = d.parse().unwrap();
        assert_eq!(record.id(), "A1");
        assert_eq!(record.full_name(), "X Y");
        assert_eq!(record.student_class(), " C1 ");
    }

    #[test]
    fn test_invalid_date_rejected() {
        let mut d = draft("3.0");
        d.date_of_birth = "2000-13-01".into();
        assert!(matches!(
            d.parse().unwrap_err(),
            RecordError::InvalidDate { .. }
        ));
    }

    #[test]
    fn test_new_rejects_nan() {
        let dob = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        assert!(StudentRecord::new("A1", "X", dob, "C1", f64::NAN).is_err());
    }

    #[test]
    fn test_json_uses_camel_case_and_numeric_gpa() {
        let record = draft("3.5").parse().unwrap();
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "A1",
                "fullName": "X Y",
                "dateOfBirth": "2000-01-01",
                "studentClass": "C1",
                "gpa": 3.5
            })
        );
    }

    #[test]
    fn test_deserialize_validates() {
        let bad = json!({
            "id": "",
            "fullName": "X",
            "dateOfBirth": "2000-01-01",
            "studentClass": "C1",
            "gpa": 3.0
        });
        assert!(serde_json::from_value::<StudentRecord>(bad).is_err());

        let gpa_as_string = json!({
            "id": "A1",
            "fullName": "X",
            "dateOfBirth": "2000-01-01",
            "studentClass": "C1",
            "gpa": "3.0"
        });
        assert!(serde_json::from_value::<StudentRecord>(gpa_as_string).is_err());
    }

    #[test]
    fn test_draft_from_record() {
        let record = draft("3.5").parse().unwrap();
        let back = StudentDraft::from(&record);
        assert_eq!(back, draft("3.5"));
    }
}
