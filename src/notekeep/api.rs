//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for any UI, be it the bundled CLI, a web view or a test.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Tracks session state** the store deliberately knows nothing about: which
//!   note is open for editing, and the current view (filter, search term, sort order)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs` and the store
//! - **I/O beyond the backend**: no stdout, stderr or terminal assumptions
//! - **Presentation**: returns notes and messages, not strings to print
//!
//! ## Generic Over StorageBackend
//!
//! `NotekeepApi<B: StorageBackend>` is generic over the storage backend:
//! - Production: `NotekeepApi<FsBackend>`
//! - Testing: `NotekeepApi<MemBackend>`

use crate::commands;
use crate::error::{NotekeepError, Result};
use crate::model::{NoteDraft, NoteId, NotePatch, SortOrder};
use crate::query::Filter;
use crate::store::{NoteStore, StorageBackend};

/// What the renderer is currently showing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub filter: Filter,
    pub search: String,
    pub sort: SortOrder,
}

/// The main API facade for notekeep operations.
pub struct NotekeepApi<B: StorageBackend> {
    store: NoteStore<B>,
    editing: Option<NoteId>,
    view: ViewState,
}

impl<B: StorageBackend> NotekeepApi<B> {
    pub fn new(store: NoteStore<B>) -> Self {
        Self {
            store,
            editing: None,
            view: ViewState::default(),
        }
    }

    pub fn open(backend: B) -> Self {
        Self::new(NoteStore::open(backend))
    }

    pub fn store(&self) -> &NoteStore<B> {
        &self.store
    }

    pub fn create_note(&mut self, draft: NoteDraft) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, draft)
    }

    pub fn update_note(&mut self, id: NoteId, patch: NotePatch) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, id, patch)
    }

    /// Starts an edit session on `id`, replacing any session already open.
    pub fn open_for_edit(&mut self, id: NoteId) -> Result<commands::CmdResult> {
        let result = commands::view::run(&self.store, &[id])?;
        self.editing = result.listed_notes.first().map(|n| n.id);
        Ok(result)
    }

    pub fn editing(&self) -> Option<NoteId> {
        self.editing
    }

    pub fn close_edit(&mut self) {
        self.editing = None;
    }

    /// Applies `patch` to the note open for editing and ends the session.
    pub fn save_edit(&mut self, patch: NotePatch) -> Result<commands::CmdResult> {
        let id = self
            .editing
            .ok_or_else(|| NotekeepError::Api("No note is open for editing".to_string()))?;
        let result = commands::update::run(&mut self.store, id, patch)?;
        self.close_edit();
        Ok(result)
    }

    /// Deletes a note, closing the edit session if it was the one being edited.
    pub fn delete_note(&mut self, id: NoteId) -> Result<commands::CmdResult> {
        let result = commands::delete::run(&mut self.store, id)?;
        if self.editing == Some(id) {
            self.close_edit();
        }
        Ok(result)
    }

    pub fn toggle_archived(&mut self, id: NoteId) -> Result<commands::CmdResult> {
        commands::archive::toggle(&mut self.store, id)
    }

    pub fn pin_note(&mut self, id: NoteId) -> Result<commands::CmdResult> {
        commands::pinning::pin(&mut self.store, id)
    }

    pub fn unpin_note(&mut self, id: NoteId) -> Result<commands::CmdResult> {
        commands::pinning::unpin(&mut self.store, id)
    }

    pub fn sort_notes(&mut self, order: SortOrder) -> Result<commands::CmdResult> {
        self.view.sort = order;
        commands::sort::run(&mut self.store, order)
    }

    pub fn toggle_sort(&mut self) -> Result<commands::CmdResult> {
        self.sort_notes(self.view.sort.toggled())
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.view.filter = filter;
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.view.search = term.into();
    }

    pub fn clear_search(&mut self) {
        self.view.search.clear();
    }

    /// The notes visible under the current view state.
    pub fn visible_notes(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, &self.view.filter, &self.view.search)
    }

    pub fn list_notes(&self, filter: &Filter, term: &str) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, filter, term)
    }

    pub fn view_notes(&self, ids: &[NoteId]) -> Result<commands::CmdResult> {
        commands::view::run(&self.store, ids)
    }

    pub fn categories(&self) -> Result<commands::CmdResult> {
        commands::categories::list(&self.store)
    }

    pub fn add_category(&mut self, name: &str) -> Result<commands::CmdResult> {
        commands::categories::add(&mut self.store, name)
    }

    pub fn theme(&self) -> Result<commands::CmdResult> {
        commands::theme::get(&self.store)
    }

    pub fn set_theme(&mut self, name: &str) -> Result<commands::CmdResult> {
        commands::theme::set(&mut self.store, name)
    }

    pub fn append_transcript<S: AsRef<str>>(
        &mut self,
        id: NoteId,
        fragments: &[S],
    ) -> Result<commands::CmdResult> {
        commands::dictate::run(&mut self.store, id, fragments)
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;

    fn api() -> NotekeepApi<MemBackend> {
        NotekeepApi::open(MemBackend::new())
    }

    #[test]
    fn deleting_edited_note_closes_session() {
        let mut api = api();
        let id = api.create_note(NoteDraft::new("A", "")).unwrap().affected_notes[0].id;
        api.open_for_edit(id).unwrap();
        assert_eq!(api.editing(), Some(id));

        api.delete_note(id).unwrap();
        assert_eq!(api.editing(), None);
    }

    #[test]
    fn deleting_another_note_keeps_session() {
        let mut api = api();
        let a = api.create_note(NoteDraft::new("A", "")).unwrap().affected_notes[0].id;
        let b = api.create_note(NoteDraft::new("B", "")).unwrap().affected_notes[0].id;
        api.open_for_edit(a).unwrap();

        api.delete_note(b).unwrap();
        assert_eq!(api.editing(), Some(a));
    }

    #[test]
    fn opening_missing_note_starts_no_session() {
        let mut api = api();
        let result = api.open_for_edit(4).unwrap();
        assert!(result.listed_notes.is_empty());
        assert_eq!(api.editing(), None);
    }

    #[test]
    fn save_edit_updates_and_closes() {
        let mut api = api();
        let id = api.create_note(NoteDraft::new("A", "")).unwrap().affected_notes[0].id;
        api.open_for_edit(id).unwrap();

        let result = api.save_edit(NotePatch::new().title("B")).unwrap();
        assert_eq!(result.affected_notes[0].title, "B");
        assert_eq!(api.editing(), None);
        assert!(matches!(
            api.save_edit(NotePatch::new()),
            Err(NotekeepError::Api(_))
        ));
    }

    #[test]
    fn visible_notes_follow_view_state() {
        let mut api = api();
        api.create_note(NoteDraft::new("Groceries", "").with_category("personal"))
            .unwrap();
        api.create_note(NoteDraft::new("Roadmap", "").with_category("work"))
            .unwrap();

        api.set_filter("work".parse().unwrap());
        assert_eq!(api.visible_notes().unwrap().listed_notes.len(), 1);

        api.set_filter(Filter::All);
        api.set_search("GROC");
        let listed = api.visible_notes().unwrap().listed_notes;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].title, "Groceries");

        api.clear_search();
        assert_eq!(api.visible_notes().unwrap().listed_notes.len(), 2);
    }

    #[test]
    fn toggle_sort_alternates() {
        let mut api = api();
        assert_eq!(api.view().sort, SortOrder::Newest);
        api.toggle_sort().unwrap();
        assert_eq!(api.view().sort, SortOrder::Oldest);
        api.toggle_sort().unwrap();
        assert_eq!(api.view().sort, SortOrder::Newest);
    }
}
