use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::is_reserved_category;
use crate::store::{NoteStore, StorageBackend};

pub fn list<B: StorageBackend>(store: &NoteStore<B>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_categories(store.categories().to_vec()))
}

pub fn add<B: StorageBackend>(store: &mut NoteStore<B>, name: &str) -> Result<CmdResult> {
    let message = if store.add_category(name) {
        CmdMessage::success(format!("Category added: {}", name.trim().to_lowercase()))
    } else if name.trim().is_empty() {
        CmdMessage::warning("Category name cannot be empty")
    } else if is_reserved_category(&name.trim().to_lowercase()) {
        CmdMessage::warning(format!(
            "'{}' is a filter name and cannot be used as a category",
            name.trim()
        ))
    } else {
        CmdMessage::warning(format!("Category already exists: {}", name.trim()))
    };
    Ok(CmdResult::default()
        .with_categories(store.categories().to_vec())
        .with_message(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn adds_new_category() {
        let mut store = NoteStore::open(MemBackend::new());
        let result = add(&mut store, "Recipes").unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert!(result.categories.contains(&"recipes".to_string()));
    }

    #[test]
    fn duplicate_is_reported() {
        let mut store = NoteStore::open(MemBackend::new());
        let result = add(&mut store, "IDEAS").unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(list(&store).unwrap().categories.len(), 4);
    }

    #[test]
    fn filter_name_is_refused() {
        let mut store = NoteStore::open(MemBackend::new());
        let result = add(&mut store, "Archived").unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert!(result.messages[0].content.contains("filter name"));
        assert!(!result.categories.contains(&"archived".to_string()));
    }
}
