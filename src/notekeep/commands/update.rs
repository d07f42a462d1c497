use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{NoteId, NotePatch};
use crate::store::{NoteStore, StorageBackend};

use super::helpers::{found, not_found, validate_image_update};

pub fn run<B: StorageBackend>(
    store: &mut NoteStore<B>,
    id: NoteId,
    patch: NotePatch,
) -> Result<CmdResult> {
    validate_image_update(&patch.image)?;

    let Some(note) = found(store.update(id, patch))? else {
        return Ok(not_found(id));
    };

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Note updated successfully! ({}): {}",
        note.id, note.title
    )));
    result.affected_notes.push(note);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ImageUpdate, NoteDraft};
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn updates_note_fields() {
        let mut store = NoteStore::open(MemBackend::new());
        let note = store.create(NoteDraft::new("Title", "Old"));

        let result = run(
            &mut store,
            note.id,
            NotePatch::new().content("New").tags(["a", "b"]),
        )
        .unwrap();

        assert_eq!(result.affected_notes[0].content, "New");
        assert_eq!(store.get(note.id).unwrap().tags, vec!["a", "b"]);
    }

    #[test]
    fn missing_note_is_a_noop() {
        let mut store = NoteStore::open(MemBackend::new());
        let result = run(&mut store, 5, NotePatch::new().title("x")).unwrap();
        assert!(result.is_noop());
        assert!(store.is_empty());
    }

    #[test]
    fn invalid_image_is_rejected_before_touching_the_note() {
        let mut store = NoteStore::open(MemBackend::new());
        let note = store.create(NoteDraft::new("Title", "Old"));
        let patch = NotePatch::new()
            .title("Changed")
            .image(ImageUpdate::SetTo("not-a-url".into()));

        assert!(run(&mut store, note.id, patch).is_err());
        assert_eq!(store.get(note.id).unwrap().title, "Title");
    }
}
