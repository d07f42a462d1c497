use super::backend::StorageBackend;
use crate::error::{NotekeepError, Result};
use crate::model::{
    content_or_default, is_reserved_category, normalize_category, normalize_tags,
    title_or_default, Note, NoteDraft, NoteId, NotePatch, SortOrder, DEFAULT_CATEGORIES,
    DEFAULT_THEME,
};
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashSet;

pub const NOTES_KEY: &str = "notes";
pub const CATEGORIES_KEY: &str = "categories";
pub const THEME_KEY: &str = "theme";

/// The single source of truth for the note collection.
///
/// Owns the notes (in display order), the id allocator, the category set and
/// the theme name, and is the only thing that talks to the backend. Every
/// mutation writes the affected key back before returning. Write failures are
/// logged and otherwise ignored; the in-memory state stays authoritative.
pub struct NoteStore<B: StorageBackend> {
    backend: B,
    notes: Vec<Note>,
    /// `None` once the counter has passed `NoteId::MAX`.
    next_id: Option<NoteId>,
    categories: Vec<String>,
    theme: String,
}

impl<B: StorageBackend> NoteStore<B> {
    /// Loads all state from the backend. Missing or unreadable keys fall back to defaults.
    pub fn open(backend: B) -> Self {
        let loaded: Vec<Note> = load_or(&backend, NOTES_KEY, Vec::new);
        let notes = dedupe_ids(loaded);
        let next_id = match notes.iter().map(|n| n.id).max() {
            None => Some(1),
            Some(max) => {
                let next = max.checked_add(1);
                if next.is_none() {
                    warn!("note id {} leaves no room above it; reusing free ids", max);
                }
                next
            }
        };

        let stored: Vec<String> = load_or(&backend, CATEGORIES_KEY, default_categories);
        let mut categories = Vec::new();
        for name in stored {
            let name = name.trim().to_lowercase();
            if !name.is_empty() && !is_reserved_category(&name) && !categories.contains(&name) {
                categories.push(name);
            }
        }
        if categories.is_empty() {
            categories = default_categories();
        }

        let theme = load_theme(&backend);

        debug!(
            "opened store: {} notes, next id {:?}, {} categories",
            notes.len(),
            next_id,
            categories.len()
        );

        Self {
            backend,
            notes,
            next_id,
            categories,
            theme,
        }
    }

    /// Current in-memory order (newest insertion first unless re-sorted).
    pub fn all(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// The id the next created note will receive.
    pub fn next_id(&self) -> NoteId {
        match self.next_id {
            Some(id) if self.get(id).is_none() => id,
            _ => lowest_free_id(&self.notes),
        }
    }

    pub fn create(&mut self, draft: NoteDraft) -> Note {
        let id = self.next_id();
        self.next_id = id.checked_add(1);

        let title = title_or_default(&draft.title, self.notes.len() + 1);
        let mut note = Note::new(id, title, content_or_default(&draft.content));
        note.image = draft.image.filter(|img| !img.trim().is_empty());
        note.category = normalize_category(draft.category.as_deref().unwrap_or_default());
        note.tags = normalize_tags(draft.tags);
        note.pinned = draft.pinned;

        self.register_category(&note.category);
        self.notes.insert(0, note.clone());
        self.persist_notes();

        debug!("created note {} ({})", id, note.title);
        note
    }

    pub fn update(&mut self, id: NoteId, patch: NotePatch) -> Result<Note> {
        let pos = self.position(id)?;
        let fallback_n = self.notes.len() + 1;
        let category = patch.category.as_deref().map(normalize_category);

        let note = &mut self.notes[pos];
        if let Some(title) = patch.title {
            note.title = title_or_default(&title, fallback_n);
        }
        if let Some(content) = patch.content {
            note.content = content_or_default(&content);
        }
        if let Some(tags) = patch.tags {
            note.tags = normalize_tags(tags);
        }
        if let Some(pinned) = patch.pinned {
            note.pinned = pinned;
        }
        if let Some(category) = &category {
            note.category = category.clone();
        }
        patch.image.apply(&mut note.image);
        note.touch();
        let updated = note.clone();

        if let Some(category) = category {
            self.register_category(&category);
        }
        self.persist_notes();

        debug!("updated note {}", id);
        Ok(updated)
    }

    /// Removes the note if present. Returns whether anything was removed.
    pub fn delete(&mut self, id: NoteId) -> bool {
        let Ok(pos) = self.position(id) else {
            return false;
        };
        self.notes.remove(pos);
        self.persist_notes();

        debug!("deleted note {}", id);
        true
    }

    pub fn toggle_archived(&mut self, id: NoteId) -> Result<Note> {
        let pos = self.position(id)?;
        let note = &mut self.notes[pos];
        note.archived = !note.archived;
        note.touch();
        let updated = note.clone();
        self.persist_notes();

        debug!("note {} archived={}", id, updated.archived);
        Ok(updated)
    }

    pub fn set_pinned(&mut self, id: NoteId, pinned: bool) -> Result<Note> {
        let pos = self.position(id)?;
        let note = &mut self.notes[pos];
        note.pinned = pinned;
        note.touch();
        let updated = note.clone();
        self.persist_notes();

        debug!("note {} pinned={}", id, pinned);
        Ok(updated)
    }

    /// Reorders the whole collection by creation time. Stable for equal timestamps.
    pub fn sort_by(&mut self, order: SortOrder) {
        match order {
            SortOrder::Newest => self.notes.sort_by(|a, b| b.timestamp.cmp(&a.timestamp)),
            SortOrder::Oldest => self.notes.sort_by(|a, b| a.timestamp.cmp(&b.timestamp)),
        }
        self.persist_notes();
        debug!("sorted notes: {}", order);
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn has_category(&self, name: &str) -> bool {
        let name = name.trim().to_lowercase();
        self.categories.iter().any(|c| *c == name)
    }

    /// Adds a category (stored lowercase). Returns false for blank, reserved or
    /// already known names.
    pub fn add_category(&mut self, name: &str) -> bool {
        let name = name.trim().to_lowercase();
        if name.is_empty() || is_reserved_category(&name) || self.categories.contains(&name) {
            return false;
        }
        self.categories.push(name);
        self.persist(CATEGORIES_KEY, &self.categories);
        true
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    pub fn set_theme(&mut self, theme: &str) {
        let theme = theme.trim();
        self.theme = if theme.is_empty() {
            DEFAULT_THEME.to_string()
        } else {
            theme.to_string()
        };
        self.persist(THEME_KEY, &self.theme);
    }

    /// Writes every key, surfacing the first failure instead of logging it.
    pub fn save(&self) -> Result<()> {
        write_json(&self.backend, NOTES_KEY, &self.notes)?;
        write_json(&self.backend, CATEGORIES_KEY, &self.categories)?;
        write_json(&self.backend, THEME_KEY, &self.theme)?;
        Ok(())
    }

    fn position(&self, id: NoteId) -> Result<usize> {
        self.notes
            .iter()
            .position(|n| n.id == id)
            .ok_or(NotekeepError::NoteNotFound(id))
    }

    fn register_category(&mut self, category: &str) {
        if !self.has_category(category) {
            self.add_category(category);
        }
    }

    fn persist_notes(&self) {
        self.persist(NOTES_KEY, &self.notes);
    }

    fn persist<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        if let Err(e) = write_json(&self.backend, key, value) {
            warn!("could not persist '{}': {}", key, e);
        }
    }
}

fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
}

fn write_json<B, T>(backend: &B, key: &str, value: &T) -> Result<()>
where
    B: StorageBackend,
    T: Serialize + ?Sized,
{
    let content = serde_json::to_string(value).map_err(NotekeepError::Serialization)?;
    backend.write(key, &content)
}

fn load_or<B, T, F>(backend: &B, key: &str, default: F) -> T
where
    B: StorageBackend,
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    match backend.read(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!("ignoring unreadable '{}': {}", key, e);
                default()
            }
        },
        Ok(None) => default(),
        Err(e) => {
            warn!("could not read '{}': {}", key, e);
            default()
        }
    }
}

// Only reached once the counter is exhausted; a collection never holds every id.
fn lowest_free_id(notes: &[Note]) -> NoteId {
    let used: HashSet<NoteId> = notes.iter().map(|n| n.id).collect();
    (1..=NoteId::MAX)
        .find(|id| !used.contains(id))
        .unwrap_or_default()
}

// The widget stored the theme as a bare string, later versions as JSON.
fn load_theme<B: StorageBackend>(backend: &B) -> String {
    let raw = match backend.read(THEME_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return DEFAULT_THEME.to_string(),
        Err(e) => {
            warn!("could not read '{}': {}", THEME_KEY, e);
            return DEFAULT_THEME.to_string();
        }
    };
    let theme = serde_json::from_str::<String>(&raw).unwrap_or_else(|_| raw.trim().to_string());
    if theme.trim().is_empty() {
        DEFAULT_THEME.to_string()
    } else {
        theme
    }
}

// A hand-edited blob may repeat ids; the first occurrence wins.
fn dedupe_ids(notes: Vec<Note>) -> Vec<Note> {
    let mut seen = HashSet::new();
    notes
        .into_iter()
        .filter(|n| {
            let fresh = seen.insert(n.id);
            if !fresh {
                warn!("dropping note with duplicate id {}", n.id);
            }
            fresh
        })
        .collect()
}
