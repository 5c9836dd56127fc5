//! Roster store
//!
//! The single owner of student records. The presentation layer drives it
//! through an explicit command interface (`add`, `update`, `remove`,
//! `set_search`, `set_sort`, `go_to_page`) and redraws from `page_view`.

mod errors;
mod store;
mod view;

pub use errors::{RosterError, RosterResult};
pub use store::{LoadOutcome, RosterStore, CORRUPT_BACKUP_SUFFIX, DEFAULT_STORAGE_KEY};
pub use view::ViewState;
