use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{NoteStore, StorageBackend};

pub fn get<B: StorageBackend>(store: &NoteStore<B>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_theme(store.theme()))
}

pub fn set<B: StorageBackend>(store: &mut NoteStore<B>, name: &str) -> Result<CmdResult> {
    store.set_theme(name);
    Ok(CmdResult::default()
        .with_theme(store.theme())
        .with_message(CmdMessage::success(format!("Theme set to {}", store.theme()))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn sets_and_reads_theme() {
        let mut store = NoteStore::open(MemBackend::new());
        assert_eq!(get(&store).unwrap().theme.as_deref(), Some("light"));
        set(&mut store, "dark").unwrap();
        assert_eq!(get(&store).unwrap().theme.as_deref(), Some("dark"));
    }
}
