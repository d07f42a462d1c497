use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NoteDraft;
use crate::store::{NoteStore, StorageBackend};

use super::helpers::validate_image;

pub fn run<B: StorageBackend>(store: &mut NoteStore<B>, draft: NoteDraft) -> Result<CmdResult> {
    validate_image(draft.image.as_deref())?;

    let note = store.create(draft);
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Note added successfully! ({}): {}",
        note.id, note.title
    )));
    result.affected_notes.push(note);
    Ok(result)
}
