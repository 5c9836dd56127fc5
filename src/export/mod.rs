//! CSV export

mod errors;
mod writer;

pub use errors::{ExportError, ExportResult};
pub use writer::{
    export_to_file, export_to_writer, to_csv_string, write_csv, DEFAULT_EXPORT_FILE,
    EXPORT_HEADERS,
};
