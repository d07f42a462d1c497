use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::SortOrder;
use crate::store::{NoteStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &mut NoteStore<B>, order: SortOrder) -> Result<CmdResult> {
    store.sort_by(order);
    Ok(CmdResult::default()
        .with_listed_notes(store.all().to_vec())
        .with_message(CmdMessage::info(format!("Sorted: {}", order.label()))))
}
