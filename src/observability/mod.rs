//! Observability for the roster
//!
//! - Typed [`Event`] names attached to every lifecycle log line
//! - `tracing` subscriber setup for the binary
//!
//! # Usage
//!
//! ```ignore
//! use roster::observability::Event;
//!
//! tracing::info!(event = %Event::RecordAdded, id = "A1", "record added");
//! ```

mod events;
mod logging;

pub use events::Event;
pub use logging::{init_logging, LogConfig, LogFormat};
