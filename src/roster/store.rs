//! The roster store
//!
//! Owns the authoritative record list and the view state. Every successful
//! mutation persists the full list before returning; if the write fails the
//! mutation is undone so memory and storage never disagree.
//!
//! # Invariants
//!
//! - Student ids are unique
//! - The record list keeps insertion order; queries work on copies
//! - `current_page` is at least 1

use std::mem;

use tracing::{debug, error, info, warn};

use crate::executor::{self, PageView, PageWindow, RosterRow, SortField};
use crate::observability::Event;
use crate::record::{sample_records, StudentDraft, StudentRecord};
use crate::storage::{codec, validate_key, StorageBackend};

use super::errors::{RosterError, RosterResult};
use super::view::ViewState;

/// Storage key used when none is configured
pub const DEFAULT_STORAGE_KEY: &str = "students";

/// Suffix of the key that keeps a corrupt payload after recovery
pub const CORRUPT_BACKUP_SUFFIX: &str = "corrupt";

/// How the store obtained its records on open
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Decoded from storage
    Loaded { count: usize },
    /// Nothing stored; sample set written
    Seeded { count: usize },
    /// Stored data was corrupt; sample set written, raw text kept under
    /// `backup_key`
    Recovered { reason: String, backup_key: String },
}

pub struct RosterStore<B: StorageBackend> {
    backend: B,
    key: String,
    records: Vec<StudentRecord>,
    view: ViewState,
    load_outcome: LoadOutcome,
}

impl<B: StorageBackend> RosterStore<B> {
    /// Opens the roster stored under [`DEFAULT_STORAGE_KEY`].
    pub fn open(backend: B) -> RosterResult<Self> {
        Self::open_with_key(backend, DEFAULT_STORAGE_KEY)
    }

    /// Opens the roster stored under `key`.
    ///
    /// Missing data seeds the sample set. Corrupt data is copied to
    /// `<key>.corrupt`, logged, and replaced by the sample set; a partially
    /// decoded list is never used.
    ///
    /// # Errors
    ///
    /// Only backend failures (and an invalid key) are returned.
    pub fn open_with_key(mut backend: B, key: &str) -> RosterResult<Self> {
        validate_key(key)?;

        let (records, load_outcome) = match backend.get(key)? {
            None => {
                let records = sample_records();
                let text = codec::serialize(&records)?;
                backend.set(key, &text)?;
                info!(event = %Event::Seeded, key, count = records.len(), "seeded sample roster");
                let count = records.len();
                (records, LoadOutcome::Seeded { count })
            }
            Some(text) => match Self::deserialize(&text) {
                Ok(records) => {
                    info!(event = %Event::LoadComplete, key, count = records.len(), "roster loaded");
                    let count = records.len();
                    (records, LoadOutcome::Loaded { count })
                }
                Err(err) => {
                    let reason = match err {
                        RosterError::CorruptPersistedData { reason } => reason,
                        other => other.to_string(),
                    };
                    let backup_key = format!("{}.{}", key, CORRUPT_BACKUP_SUFFIX);
                    backend.set(&backup_key, &text)?;

                    let records = sample_records();
                    backend.set(key, &codec::serialize(&records)?)?;
                    error!(
                        event = %Event::CorruptDataRecovered,
                        key,
                        backup_key = %backup_key,
                        reason = %reason,
                        "persisted roster was corrupt; restored sample roster"
                    );
                    (records, LoadOutcome::Recovered { reason, backup_key })
                }
            },
        };

        Ok(Self {
            backend,
            key: key.to_string(),
            records,
            view: ViewState::default(),
            load_outcome,
        })
    }

    pub fn load_outcome(&self) -> &LoadOutcome {
        &self.load_outcome
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    // ------------------------------------------------------------------
    // Record access
    // ------------------------------------------------------------------

    /// All records in insertion order
    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&StudentRecord> {
        self.records.get(position)
    }

    /// Absolute position of the record with `id`
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Appends a record.
    ///
    /// # Errors
    ///
    /// `DuplicateId` if a record with the same id exists (state unchanged).
    pub fn add(&mut self, record: StudentRecord) -> RosterResult<()> {
        if self.position_of(record.id()).is_some() {
            return Err(self.reject(RosterError::DuplicateId {
                id: record.id().to_string(),
            }));
        }

        let position = self.records.len();
        let id = record.id().to_string();
        self.records.push(record);
        self.commit(|records| {
            records.pop();
        })?;

        info!(event = %Event::RecordAdded, id = %id, position, "record added");
        Ok(())
    }

    /// Parses form input and appends it.
    pub fn add_draft(&mut self, draft: &StudentDraft) -> RosterResult<()> {
        let record = draft.parse().map_err(|e| self.reject(e.into()))?;
        self.add(record)
    }

    /// Replaces the record at `position`.
    ///
    /// `position` indexes the full roster, not a filtered page; use
    /// [`RosterRow::position`] or [`position_of`](Self::position_of).
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if `position` is past the end
    /// - `DuplicateId` if another record already has the new id
    pub fn update(&mut self, position: usize, record: StudentRecord) -> RosterResult<()> {
        self.check_position(position)?;

        let clash = self
            .records
            .iter()
            .enumerate()
            .any(|(i, existing)| i != position && existing.id() == record.id());
        if clash {
            return Err(self.reject(RosterError::DuplicateId {
                id: record.id().to_string(),
            }));
        }

        let id = record.id().to_string();
        let previous = mem::replace(&mut self.records[position], record);
        let previous_id = previous.id().to_string();
        self.commit(move |records| {
            records[position] = previous;
        })?;
        self.clamp_page();

        info!(
            event = %Event::RecordUpdated,
            id = %id,
            previous_id = %previous_id,
            position,
            "record updated"
        );
        Ok(())
    }

    /// Parses form input and replaces the record at `position`.
    pub fn update_draft(&mut self, position: usize, draft: &StudentDraft) -> RosterResult<()> {
        let record = draft.parse().map_err(|e| self.reject(e.into()))?;
        self.update(position, record)
    }

    /// Removes and returns the record at `position`.
    ///
    /// Every later record moves down one position; positions held by the
    /// caller are stale afterwards.
    pub fn remove(&mut self, position: usize) -> RosterResult<StudentRecord> {
        self.check_position(position)?;

        let removed = self.records.remove(position);
        let restore = removed.clone();
        self.commit(move |records| {
            records.insert(position, restore);
        })?;
        self.clamp_page();

        info!(event = %Event::RecordRemoved, id = removed.id(), position, "record removed");
        Ok(removed)
    }

    /// Keeps the current page inside the shrunken result set.
    fn clamp_page(&mut self) {
        let page_count = self.page_count();
        self.view.clamp_page(page_count);
    }

    fn check_position(&self, position: usize) -> RosterResult<()> {
        if position < self.records.len() {
            Ok(())
        } else {
            Err(self.reject(RosterError::OutOfRange {
                position,
                len: self.records.len(),
            }))
        }
    }

    fn reject(&self, err: RosterError) -> RosterError {
        warn!(event = %Event::MutationRejected, code = err.code(), "{}", err);
        err
    }

    /// Persists the current list; on failure applies `undo` and returns the
    /// storage error.
    fn commit(&mut self, undo: impl FnOnce(&mut Vec<StudentRecord>)) -> RosterResult<()> {
        let result = codec::serialize(&self.records)
            .and_then(|text| self.backend.set(&self.key, &text));

        if let Err(err) = result {
            undo(&mut self.records);
            error!(event = %Event::PersistFailed, key = %self.key, error = %err, "roster write failed; change rolled back");
            return Err(err.into());
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // View state
    // ------------------------------------------------------------------

    /// Sets the search query and returns to page 1.
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.view.set_search(query);
        debug!(event = %Event::SearchChanged, query = self.view.search_query(), "search changed");
    }

    /// Sorts by `field`; choosing the current field again flips the
    /// direction. Returns to page 1.
    pub fn set_sort(&mut self, field: SortField) {
        self.view.set_sort(field);
        debug!(
            event = %Event::SortChanged,
            field = %self.view.sort_field(),
            direction = %self.view.sort_direction(),
            "sort changed"
        );
    }

    /// Moves to page `page`. Returns false, leaving the page unchanged, when
    /// `page` is outside `1..=page_count()`.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        if page < 1 || page > self.page_count() {
            return false;
        }
        self.view.set_page(page);
        debug!(event = %Event::PageChanged, page, "page changed");
        true
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Filtered and sorted rows with their absolute positions.
    pub fn query_rows(&self) -> Vec<RosterRow> {
        executor::execute(&self.records, &self.view.filter(), self.view.sort_spec())
    }

    /// Filtered and sorted records, not paginated.
    pub fn query(&self) -> Vec<StudentRecord> {
        self.query_rows().into_iter().map(|row| row.record).collect()
    }

    /// Rows of the current page.
    pub fn page_rows(&self) -> Vec<RosterRow> {
        let rows = self.query_rows();
        let range = self
            .view
            .paginator()
            .bounds(self.view.current_page(), rows.len());
        rows[range].to_vec()
    }

    /// Records of the current page.
    pub fn page(&self) -> Vec<StudentRecord> {
        self.page_rows().into_iter().map(|row| row.record).collect()
    }

    /// Pages in the filtered result; 0 when nothing matches.
    pub fn page_count(&self) -> usize {
        let total = self.count_matching();
        self.view.paginator().page_count(total)
    }

    fn count_matching(&self) -> usize {
        let filter = self.view.filter();
        self.records.iter().filter(|r| filter.matches(r)).count()
    }

    /// Mean GPA over the whole roster (search ignored), rounded to one
    /// decimal. 0.0 for an empty roster.
    pub fn average_gpa(&self) -> f64 {
        if self.records.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.records.iter().map(StudentRecord::gpa).sum();
        let mean = sum / self.records.len() as f64;
        (mean * 10.0).round() / 10.0
    }

    /// Current page plus the numbers a table footer shows.
    pub fn page_view(&self) -> PageView {
        let rows = self.query_rows();
        let total = rows.len();
        let paginator = self.view.paginator();
        let current_page = self.view.current_page();
        let range = paginator.bounds(current_page, total);

        let showing_start = if range.is_empty() { 0 } else { range.start + 1 };
        let showing_end = range.end;
        let page_rows = rows[range].to_vec();

        PageView {
            rows: page_rows,
            current_page,
            page_count: paginator.page_count(total),
            total,
            showing_start,
            showing_end,
            record_count: self.records.len(),
            average_gpa: self.average_gpa(),
        }
    }

    /// Pager buttons for the current state
    pub fn page_window(&self) -> PageWindow {
        PageWindow::around(self.view.current_page(), self.page_count())
    }

    // ------------------------------------------------------------------
    // Serialization and export
    // ------------------------------------------------------------------

    /// Encodes the record list (view state excluded).
    pub fn serialize(&self) -> RosterResult<String> {
        Ok(codec::serialize(&self.records)?)
    }

    /// Decodes a record list, all or nothing.
    ///
    /// # Errors
    ///
    /// `CorruptPersistedData` if any record is invalid.
    pub fn deserialize(text: &str) -> RosterResult<Vec<StudentRecord>> {
        Ok(codec::deserialize(text)?)
    }

    /// `[id, fullName, dateOfBirth, studentClass, gpa]` per record, in
    /// insertion order, ignoring search and sort.
    pub fn export_rows(&self) -> Vec<[String; 5]> {
        self.records.iter().map(StudentRecord::to_row).collect()
    }
}
