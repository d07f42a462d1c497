use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NoteId;
use crate::store::{NoteStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &NoteStore<B>, ids: &[NoteId]) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    for id in ids {
        match store.get(*id) {
            Some(note) => result.listed_notes.push(note.clone()),
            None => result.add_message(CmdMessage::warning(format!("Note {} not found", id))),
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NoteDraft;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn views_existing_and_reports_missing() {
        let mut store = NoteStore::open(MemBackend::new());
        let note = store.create(NoteDraft::new("A", "<p>body</p>"));

        let result = run(&store, &[note.id, 77]).unwrap();
        assert_eq!(result.listed_notes.len(), 1);
        assert_eq!(result.messages.len(), 1);
        assert!(result.messages[0].content.contains("77"));
    }
}
