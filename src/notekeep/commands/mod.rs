use crate::model::Note;

pub mod archive;
pub mod categories;
pub mod create;
pub mod delete;
pub mod dictate;
pub mod helpers;
pub mod list;
pub mod pinning;
pub mod sort;
pub mod theme;
pub mod update;
pub mod view;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Notes created or changed by the command, in their post-command state
    pub affected_notes: Vec<Note>,
    /// Notes to display, in display order
    pub listed_notes: Vec<Note>,
    pub categories: Vec<String>,
    pub theme: Option<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_listed_notes(mut self, notes: Vec<Note>) -> Self {
        self.listed_notes = notes;
        self
    }

    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = Some(theme.into());
        self
    }

    /// True when a referenced note was missing and nothing was changed.
    pub fn is_noop(&self) -> bool {
        self.affected_notes.is_empty()
            && self
                .messages
                .iter()
                .any(|m| m.level == MessageLevel::Warning)
    }
}
