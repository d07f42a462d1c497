//! # Storage Layer
//!
//! Everything notekeep remembers lives in a local key-value blob: a handful of
//! keys, each holding one JSON document. The [`StorageBackend`] trait is that
//! blob; [`NoteStore`] is the component that owns the in-memory state and decides
//! what gets written where.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: production backend, one `<key>.json` file per key
//!   inside the data directory, written atomically (tmp file + rename).
//! - [`mem_backend::MemBackend`]: in-memory backend for tests, with write-error
//!   simulation.
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── notes.json        # JSON array of notes, in display order
//! ├── categories.json   # JSON array of lowercase category names
//! ├── theme.json        # JSON string
//! └── config.json       # client configuration (see config.rs)
//! ```
//!
//! The whole collection is the unit of persistence: every mutation rewrites
//! `notes.json` in full. There is no partial-write recovery; an unreadable file
//! is treated as if it were missing.

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod note_store;

pub use backend::StorageBackend;
pub use note_store::NoteStore;

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::mem_backend::MemBackend;
    use super::note_store::{NoteStore, NOTES_KEY};
    use crate::model::{Note, NoteId};
    use chrono::{Duration, Utc};

    /// A note created `minutes_ago` minutes in the past.
    pub fn note_at(id: NoteId, title: &str, minutes_ago: i64) -> Note {
        let mut note = Note::new(id, title.to_string(), format!("<p>{}</p>", title));
        note.timestamp = Utc::now() - Duration::minutes(minutes_ago);
        note.last_edited = note.timestamp;
        note
    }

    /// Opens a store whose backend already holds `notes`, in the given order.
    pub fn store_with(notes: Vec<Note>) -> NoteStore<MemBackend> {
        let backend = MemBackend::new();
        backend.insert_raw(NOTES_KEY, &serde_json::to_string(&notes).unwrap());
        NoteStore::open(backend)
    }
}
