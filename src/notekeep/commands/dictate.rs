use crate::commands::{CmdMessage, CmdResult};
use crate::editor::append_transcripts;
use crate::error::Result;
use crate::model::{NoteId, NotePatch};
use crate::store::{NoteStore, StorageBackend};

use super::helpers::{found, not_found};

/// Appends finalized transcript fragments to a stored note's content.
pub fn run<B: StorageBackend, S: AsRef<str>>(
    store: &mut NoteStore<B>,
    id: NoteId,
    fragments: &[S],
) -> Result<CmdResult> {
    let Some(current) = store.get(id).map(|n| n.content.clone()) else {
        return Ok(not_found(id));
    };

    let fragments: Vec<&str> = fragments.iter().map(|f| f.as_ref()).collect();
    let content = append_transcripts(&current, fragments);
    if content == current {
        return Ok(CmdResult::default().with_message(CmdMessage::info("Nothing to append")));
    }

    let Some(note) = found(store.update(id, NotePatch::new().content(content)))? else {
        return Ok(not_found(id));
    };
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Transcript appended ({}): {}",
        note.id, note.title
    )));
    result.affected_notes.push(note);
    Ok(result)
}
