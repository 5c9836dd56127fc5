//! Observable roster events
//!
//! Each event is logged as a `tracing` field `event = "ROSTER_..."` so log
//! lines can be filtered by a stable name regardless of message wording.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Configuration file loaded
    ConfigLoaded,
    /// Persisted roster read and decoded
    LoadComplete,
    /// No persisted roster; sample set written
    Seeded,
    /// Persisted roster was corrupt; sample set restored
    CorruptDataRecovered,

    // Mutations
    RecordAdded,
    RecordUpdated,
    RecordRemoved,
    /// Mutation refused (duplicate id, bad position)
    MutationRejected,
    /// Write to the backend failed; mutation rolled back
    PersistFailed,

    // View state
    SearchChanged,
    SortChanged,
    PageChanged,

    // Export
    ExportComplete,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "ROSTER_CONFIG_LOADED",
            Event::LoadComplete => "ROSTER_LOAD_COMPLETE",
            Event::Seeded => "ROSTER_SEEDED",
            Event::CorruptDataRecovered => "ROSTER_CORRUPT_DATA_RECOVERED",

            Event::RecordAdded => "ROSTER_RECORD_ADDED",
            Event::RecordUpdated => "ROSTER_RECORD_UPDATED",
            Event::RecordRemoved => "ROSTER_RECORD_REMOVED",
            Event::MutationRejected => "ROSTER_MUTATION_REJECTED",
            Event::PersistFailed => "ROSTER_PERSIST_FAILED",

            Event::SearchChanged => "ROSTER_SEARCH_CHANGED",
            Event::SortChanged => "ROSTER_SORT_CHANGED",
            Event::PageChanged => "ROSTER_PAGE_CHANGED",

            Event::ExportComplete => "ROSTER_EXPORT_COMPLETE",
        }
    }

    /// Events that leave the store in a degraded or unexpected state
    pub fn is_alert(&self) -> bool {
        matches!(self, Event::CorruptDataRecovered | Event::PersistFailed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
