use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NoteId;
use crate::store::{NoteStore, StorageBackend};

use super::helpers::{found, not_found};

/// Moves a note into the archive, or back out of it.
pub fn toggle<B: StorageBackend>(store: &mut NoteStore<B>, id: NoteId) -> Result<CmdResult> {
    let Some(note) = found(store.toggle_archived(id))? else {
        return Ok(not_found(id));
    };

    let verb = if note.archived {
        "archived"
    } else {
        "restored from archive"
    };
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Note {} ({}): {}",
        verb, note.id, note.title
    )));
    result.affected_notes.push(note);
    Ok(result)
}
