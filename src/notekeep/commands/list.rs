use crate::commands::CmdResult;
use crate::error::Result;
use crate::query::{visible, Filter};
use crate::store::{NoteStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &NoteStore<B>, filter: &Filter, term: &str) -> Result<CmdResult> {
    let listed = visible(store.all(), filter, term)
        .into_iter()
        .cloned()
        .collect();
    Ok(CmdResult::default().with_listed_notes(listed))
}
