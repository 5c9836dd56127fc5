//! roster CLI entry point
//!
//! Parses arguments, installs logging, and hands off to the CLI module.
//! Errors go to stderr with exit code 1.

use std::io::{self, IsTerminal};

use roster::cli::{self, Cli, LogFormatArg};
use roster::observability::{init_logging, LogConfig, LogFormat};

fn main() {
    let cli = Cli::parse_args();

    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let log_config = LogConfig::from_verbosity(cli.verbose)
        .with_format(format)
        .with_ansi(io::stderr().is_terminal());
    if let Err(e) = init_logging(&log_config) {
        eprintln!("warning: logging disabled: {}", e);
    }

    if let Err(e) = cli::run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
