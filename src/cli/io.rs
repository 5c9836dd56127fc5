//! Plain-text rendering for CLI output
//!
//! Output goes to stdout; logs go to stderr.

use std::io::Write;

use crate::display::{avatar_slot, format_dob, format_gpa, initials};
use crate::executor::{PageView, PageWindow, PagerItem};

use super::errors::CliResult;

const EMPTY_MESSAGE: &str = "No students found.";

/// Writes the page table, summary line and pager.
pub fn write_page<W: Write>(out: &mut W, view: &PageView, window: &PageWindow) -> CliResult<()> {
    if view.is_empty() {
        writeln!(out, "{}", EMPTY_MESSAGE)?;
    } else {
        writeln!(
            out,
            "{:>4}  {:<6}  {:<10}  {:<24}  {:<13}  {:<6}  {:>4}",
            "POS", "AVATAR", "ID", "NAME", "BORN", "CLASS", "GPA"
        )?;
        for row in &view.rows {
            let record = &row.record;
            writeln!(
                out,
                "{:>4}  {:<6}  {:<10}  {:<24}  {:<13}  {:<6}  {:>4}",
                row.position,
                format!("{}/{}", initials(record.full_name()), avatar_slot(row.position)),
                record.id(),
                record.full_name(),
                format_dob(record.date_of_birth()),
                record.student_class(),
                format_gpa(record.gpa()),
            )?;
        }
    }
    writeln!(out, "{}", view.summary())?;

    if !window.is_empty() {
        writeln!(out, "{}", render_pager(window))?;
    }
    Ok(())
}

/// `‹ 1 … 4 [5] 6 … 10 ›`, with a disabled arrow shown as a space.
pub fn render_pager(window: &PageWindow) -> String {
    let mut parts = Vec::with_capacity(window.items.len() + 2);
    parts.push(if window.prev_enabled { "‹" } else { " " }.to_string());
    for item in &window.items {
        parts.push(match item {
            PagerItem::Page { number, current: true } => format!("[{}]", number),
            PagerItem::Page { number, .. } => number.to_string(),
            PagerItem::Gap => "…".to_string(),
        });
    }
    parts.push(if window.next_enabled { "›" } else { " " }.to_string());
    parts.join(" ")
}

/// Writes the roster totals.
pub fn write_stats<W: Write>(out: &mut W, record_count: usize, average_gpa: f64) -> CliResult<()> {
    writeln!(out, "Students: {}", record_count)?;
    writeln!(out, "Average GPA: {}", format_gpa(average_gpa))?;
    Ok(())
}
