use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NoteId;
use crate::store::{NoteStore, StorageBackend};

use super::helpers::{found, not_found};

pub fn pin<B: StorageBackend>(store: &mut NoteStore<B>, id: NoteId) -> Result<CmdResult> {
    pin_state(store, id, true)
}

pub fn unpin<B: StorageBackend>(store: &mut NoteStore<B>, id: NoteId) -> Result<CmdResult> {
    pin_state(store, id, false)
}

fn pin_state<B: StorageBackend>(
    store: &mut NoteStore<B>,
    id: NoteId,
    is_pinned: bool,
) -> Result<CmdResult> {
    let Some(note) = found(store.set_pinned(id, is_pinned))? else {
        return Ok(not_found(id));
    };

    let verb = if is_pinned { "pinned" } else { "unpinned" };
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Note {} ({}): {}",
        verb, note.id, note.title
    )));
    result.affected_notes.push(note);
    Ok(result)
}
