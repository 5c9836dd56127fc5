//! CLI module for the roster
//!
//! Provides command-line interface for:
//! - init: write a config and seed the roster
//! - list: search, sort and page through students
//! - add / update / remove: edit the roster
//! - export: CSV output
//! - stats: totals

mod args;
mod commands;
mod config;
mod errors;
mod io;

use std::io::stdout;

pub use args::{Cli, Command, LogFormatArg, RecordArgs};
pub use commands::{add, export, init, list, remove, run_command, stats, update};
pub use config::{Config, DEFAULT_DATA_DIR};
pub use errors::{CliError, CliResult};
pub use io::{render_pager, write_page, write_stats};

/// Dispatches a parsed command line, printing results to stdout.
pub fn run(cli: Cli) -> CliResult<()> {
    let mut out = stdout().lock();
    run_command(cli.command, &cli.config, &mut out)
}
