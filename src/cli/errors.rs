//! CLI error types
//!
//! Every CLI error ends the process with exit code 1.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::export::ExportError;
use crate::roster::RosterError;
use crate::storage::StorageError;

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("config error: {0}")]
    Config(String),

    #[error("config file {path} already exists")]
    AlreadyInitialized { path: PathBuf },

    #[error("page {page} does not exist ({page_count} pages)")]
    PageOutOfRange { page: usize, page_count: usize },

    #[error(transparent)]
    Roster(#[from] RosterError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl CliError {
    pub fn config(msg: impl Into<String>) -> Self {
        CliError::Config(msg.into())
    }

    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            CliError::Config(_) => "ROSTER_CLI_CONFIG_ERROR",
            CliError::AlreadyInitialized { .. } => "ROSTER_CLI_ALREADY_INITIALIZED",
            CliError::PageOutOfRange { .. } => "ROSTER_CLI_PAGE_OUT_OF_RANGE",
            CliError::Roster(e) => e.code(),
            CliError::Storage(e) => e.code(),
            CliError::Export(e) => e.code(),
            CliError::Io(_) => "ROSTER_CLI_IO_ERROR",
        }
    }
}
