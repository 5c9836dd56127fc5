//! roster - a deterministic, locally persisted student roster
//!
//! Records live in an ordered list owned by [`roster::RosterStore`]. Search,
//! sort and paging produce derived views; every mutation is written through
//! a [`storage::StorageBackend`] before it returns.

pub mod cli;
pub mod display;
pub mod executor;
pub mod export;
pub mod observability;
pub mod record;
pub mod roster;
pub mod storage;
