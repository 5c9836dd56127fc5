//! Export error types

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("CSV output is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl ExportError {
    pub fn code(&self) -> &'static str {
        match self {
            ExportError::Csv(_) => "ROSTER_EXPORT_CSV",
            ExportError::Io { .. } => "ROSTER_EXPORT_IO",
            ExportError::Utf8(_) => "ROSTER_EXPORT_ENCODING",
        }
    }
}
