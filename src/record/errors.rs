//! Record boundary errors
//!
//! Error codes:
//! - ROSTER_EMPTY_ID (REJECT)
//! - ROSTER_INVALID_DATE (REJECT)
//! - ROSTER_INVALID_NUMERIC (REJECT)

use thiserror::Error;

/// Result type for record parsing
pub type RecordResult<T> = Result<T, RecordError>;

/// Errors raised while turning form text into a [`StudentRecord`](super::StudentRecord).
///
/// All variants are recoverable: the caller re-prompts for the offending field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("student id must not be empty")]
    EmptyId,

    #[error("invalid date of birth '{value}': expected YYYY-MM-DD")]
    InvalidDate { value: String },

    #[error("invalid GPA '{value}': expected a finite number")]
    InvalidNumeric { value: String },
}

impl RecordError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            RecordError::EmptyId => "ROSTER_EMPTY_ID",
            RecordError::InvalidDate { .. } => "ROSTER_INVALID_DATE",
            RecordError::InvalidNumeric { .. } => "ROSTER_INVALID_NUMERIC",
        }
    }

    /// Name of the form field the error refers to
    pub fn field(&self) -> &'static str {
        match self {
            RecordError::EmptyId => "id",
            RecordError::InvalidDate { .. } => "dateOfBirth",
            RecordError::InvalidNumeric { .. } => "gpa",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(RecordError::EmptyId.code(), "ROSTER_EMPTY_ID");
        assert_eq!(
            RecordError::InvalidDate { value: "x".into() }.code(),
            "ROSTER_INVALID_DATE"
        );
        assert_eq!(
            RecordError::InvalidNumeric { value: "x".into() }.code(),
            "ROSTER_INVALID_NUMERIC"
        );
    }

    #[test]
    fn test_display_names_value() {
        let err = RecordError::InvalidNumeric { value: "abc".into() };
        assert!(err.to_string().contains("abc"));
        assert_eq!(err.field(), "gpa");
    }
}
