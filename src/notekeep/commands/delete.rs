use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NoteId;
use crate::store::{NoteStore, StorageBackend};

use super::helpers::not_found;

pub fn run<B: StorageBackend>(store: &mut NoteStore<B>, id: NoteId) -> Result<CmdResult> {
    let Some(note) = store.get(id).cloned() else {
        return Ok(not_found(id));
    };
    store.delete(id);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Note deleted ({}): {}",
        note.id, note.title
    )));
    result.affected_notes.push(note);
    Ok(result)
}
