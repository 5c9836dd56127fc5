//! Student record model
//!
//! - [`StudentRecord`]: validated, immutable value stored by the roster
//! - [`StudentDraft`]: raw form text, parsed at the input boundary
//! - [`sample_records`]: the built-in seed set

mod errors;
mod seed;
mod types;

pub use errors::{RecordError, RecordResult};
pub use seed::sample_records;
pub use types::{parse_gpa, StudentDraft, StudentRecord, DATE_FORMAT};
