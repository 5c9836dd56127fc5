//! CSV rendering of the roster
//!
//! Format:
//! - header `ID,Full Name,Date of Birth,Class,GPA`, unquoted
//! - every data field double-quoted, embedded quotes doubled
//! - `\n` line endings
//! - rows in roster insertion order, unaffected by search or sort

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use csv::{QuoteStyle, Terminator, WriterBuilder};
use tracing::info;

use crate::observability::Event;
use crate::roster::RosterStore;
use crate::storage::StorageBackend;

use super::errors::{ExportError, ExportResult};

pub const EXPORT_HEADERS: [&str; 5] = ["ID", "Full Name", "Date of Birth", "Class", "GPA"];

/// File name offered for downloads
pub const DEFAULT_EXPORT_FILE: &str = "students.csv";

/// Writes the header and `rows` to `writer`.
pub fn write_csv<W: Write>(rows: &[[String; 5]], mut writer: W) -> ExportResult<()> {
    {
        let mut header_writer = builder(QuoteStyle::Necessary).from_writer(&mut writer);
        header_writer.write_record(EXPORT_HEADERS)?;
        header_writer.flush().map_err(csv::Error::from)?;
    }

    let mut csv_writer = builder(QuoteStyle::Always).from_writer(writer);
    for row in rows {
        csv_writer.write_record(row)?;
    }
    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

fn builder(quote_style: QuoteStyle) -> WriterBuilder {
    let mut builder = WriterBuilder::new();
    builder
        .quote_style(quote_style)
        .terminator(Terminator::Any(b'\n'));
    builder
}

/// Renders rows to a string.
pub fn to_csv_string(rows: &[[String; 5]]) -> ExportResult<String> {
    let mut buffer = Vec::new();
    write_csv(rows, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

/// Writes the whole roster to `path`. Returns the number of data rows.
pub fn export_to_file<B: StorageBackend>(store: &RosterStore<B>, path: &Path) -> ExportResult<usize> {
    let rows = store.export_rows();
    let file = File::create(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    write_csv(&rows, BufWriter::new(file))?;

    info!(event = %Event::ExportComplete, path = %path.display(), rows = rows.len(), "roster exported");
    Ok(rows.len())
}

/// Writes the whole roster to `writer`. Returns the number of data rows.
pub fn export_to_writer<B: StorageBackend, W: Write>(
    store: &RosterStore<B>,
    writer: W,
) -> ExportResult<usize> {
    let rows = store.export_rows();
    write_csv(&rows, writer)?;

    info!(event = %Event::ExportComplete, rows = rows.len(), "roster exported");
    Ok(rows.len())
}
