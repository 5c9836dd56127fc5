//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! The library only emits events; the binary decides where they go by
//! calling [`init_logging`] once at startup. Logs go to stderr so stdout
//! stays free for command output.
//!
//! # Log Levels
//!
//! - `error`: corrupt data, failed writes
//! - `warn`: rejected mutations
//! - `info`: load, seed, mutations, export
//! - `debug`: view-state changes, storage writes

use std::io;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable multi-line format.
    Pretty,
    /// Single-line format.
    #[default]
    Compact,
    /// JSON, one object per line.
    Json,
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: LevelFilter,
    pub format: LogFormat,
    pub with_ansi: bool,
    /// Let `RUST_LOG` override `level` when set.
    pub use_env_filter: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::WARN,
            format: LogFormat::default(),
            with_ansi: false,
            use_env_filter: true,
        }
    }
}

impl LogConfig {
    /// Maps `-v` occurrences to a level.
    ///
    /// - 0: warn
    /// - 1 (`-v`): info
    /// - 2 (`-vv`): debug
    /// - 3+: trace
    #[must_use]
    pub fn from_verbosity(verbosity: u8) -> Self {
        let level = match verbosity {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        };
        Self {
            level,
            use_env_filter: verbosity == 0,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn with_ansi(mut self, enable: bool) -> Self {
        self.with_ansi = enable;
        self
    }

    fn build_filter(&self) -> EnvFilter {
        let fallback = EnvFilter::default().add_directive(self.level.into());
        if self.use_env_filter {
            EnvFilter::try_from_default_env().unwrap_or(fallback)
        } else {
            fallback
        }
    }
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    let filter = config.build_filter();
    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(io::stderr))
            .try_init(),
        LogFormat::Compact => registry
            .with(
                fmt::layer()
                    .compact()
                    .without_time()
                    .with_target(false)
                    .with_ansi(config.with_ansi)
                    .with_writer(io::stderr),
            )
            .try_init(),
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .pretty()
                    .with_ansi(config.with_ansi)
                    .with_writer(io::stderr),
            )
            .try_init(),
    };

    result.map_err(io::Error::other)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(LogConfig::from_verbosity(0).level, LevelFilter::WARN);
        assert_eq!(LogConfig::from_verbosity(1).level, LevelFilter::INFO);
        assert_eq!(LogConfig::from_verbosity(2).level, LevelFilter::DEBUG);
        assert_eq!(LogConfig::from_verbosity(9).level, LevelFilter::TRACE);
    }

    #[test]
    fn test_explicit_verbosity_disables_env_filter() {
        assert!(LogConfig::from_verbosity(0).use_env_filter);
        assert!(!LogConfig::from_verbosity(1).use_env_filter);
    }

    #[test]
    fn test_builder() {
        let config = LogConfig::default()
            .with_format(LogFormat::Json)
            .with_ansi(true);
        assert_eq!(config.format, LogFormat::Json);
        assert!(config.with_ansi);
    }
}
