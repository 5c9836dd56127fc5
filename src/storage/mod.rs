//! Persistence for the roster
//!
//! - [`StorageBackend`]: injected key/value store
//! - [`FileBackend`]: durable, one file per key
//! - [`MemoryBackend`]: in-process, for tests
//! - [`codec`]: the JSON text format of the record list

pub mod codec;

mod backend;
mod errors;
mod file;

pub use backend::{validate_key, MemoryBackend, StorageBackend};
pub use errors::{StorageError, StorageResult};
pub use file::FileBackend;
