//! Journal domain module.
//!
//! Double-entry journal entries and their lines, plus the entry validator
//! that gates acceptance. Entries are immutable once accepted; the only
//! mutation the model admits is whole-entry deletion, which cascades to the
//! lines. Pure domain logic (no IO, no HTTP, no storage).

pub mod entry;
pub mod validate;

pub use entry::{EntryDraft, JournalEntry, JournalLine, LineDraft};
pub use validate::{BALANCE_TOLERANCE, validate_entry};
