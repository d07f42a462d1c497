//! # Domain Model
//!
//! This module defines the core data structures for notekeep: [`Note`], the
//! input shapes used to create and change notes ([`NoteDraft`], [`NotePatch`],
//! [`ImageUpdate`]) and the collection ordering ([`SortOrder`]).
//!
//! ## Defaults and Coercion
//!
//! Editor surfaces hand us whatever the user typed. Nothing here is rejected:
//!
//! - **Blank title**: becomes `"Note {n}"`, `n` being the collection size after insertion.
//! - **Blank content**: becomes [`DEFAULT_CONTENT`].
//! - **Blank category**: becomes [`DEFAULT_CATEGORY`]. Categories are always lowercase.
//! - **Reserved category**: the filter names in [`RESERVED_CATEGORY_NAMES`] also
//!   become [`DEFAULT_CATEGORY`], so a category filter can always reach its notes.
//! - **Tags**: trimmed, empties dropped, duplicates removed (first occurrence wins).
//!
//! ## Content
//!
//! `content` is opaque rich-text markup. The core only ever looks inside it through
//! [`plain_text`], which strips tags and decodes the handful of entities an editor
//! surface produces. That is what search matches against and what previews show.
//!
//! ## Timestamps
//!
//! `timestamp` is set once at creation. `last_edited` only moves forward and is never
//! earlier than `timestamp`; the deserializer clamps legacy records that violate this.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

pub type NoteId = u64;

pub const DEFAULT_CONTENT: &str = "<p>Click to edit this note...</p>";
pub const DEFAULT_CATEGORY: &str = "general";
pub const DEFAULT_CATEGORIES: [&str; 4] = ["general", "work", "personal", "ideas"];
pub const DEFAULT_THEME: &str = "light";
/// Names the view filter claims for itself; never valid as a category.
pub const RESERVED_CATEGORY_NAMES: [&str; 3] = ["all", "pinned", "archived"];

static MARKUP_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    /// Embedded image as a `data:` URL.
    pub image: Option<String>,
    pub category: String,
    pub tags: Vec<String>,
    pub pinned: bool,
    pub archived: bool,
    pub timestamp: DateTime<Utc>,
    pub last_edited: DateTime<Utc>,
}

// Notes written by the first widget release carry neither category, tags nor flags,
// and some have no lastEdited at all.
impl<'de> Deserialize<'de> for Note {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let helper = NoteHelper::deserialize(deserializer)?;
        let last_edited = match helper.last_edited {
            Some(edited) if edited >= helper.timestamp => edited,
            _ => helper.timestamp,
        };

        Ok(Note {
            id: helper.id,
            title: helper.title,
            content: helper.content,
            image: helper.image.filter(|img| !img.is_empty()),
            category: helper
                .category
                .map(|c| normalize_category(&c))
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            tags: normalize_tags(helper.tags),
            pinned: helper.pinned,
            archived: helper.archived,
            timestamp: helper.timestamp,
            last_edited,
        })
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct NoteHelper {
    id: NoteId,
    title: String,
    content: String,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    pinned: bool,
    #[serde(default)]
    archived: bool,
    timestamp: DateTime<Utc>,
    #[serde(default)]
    last_edited: Option<DateTime<Utc>>,
}

impl Note {
    pub fn new(id: NoteId, title: String, content: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            title,
            content,
            image: None,
            category: DEFAULT_CATEGORY.to_string(),
            tags: Vec::new(),
            pinned: false,
            archived: false,
            timestamp: now,
            last_edited: now,
        }
    }

    /// Marks the note as edited now. Never moves `last_edited` backwards.
    pub fn touch(&mut self) {
        let now = Utc::now();
        if now > self.last_edited {
            self.last_edited = now;
        }
    }

    pub fn plain_content(&self) -> String {
        plain_text(&self.content)
    }
}

/// Strips markup tags and decodes basic entities.
pub fn plain_text(markup: &str) -> String {
    let stripped = MARKUP_TAG.replace_all(markup, "");
    stripped
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

pub fn default_title(n: usize) -> String {
    format!("Note {}", n)
}

pub fn title_or_default(raw: &str, n: usize) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        default_title(n)
    } else {
        trimmed.to_string()
    }
}

pub fn content_or_default(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        DEFAULT_CONTENT.to_string()
    } else {
        trimmed.to_string()
    }
}

pub fn normalize_category(raw: &str) -> String {
    let name = raw.trim().to_lowercase();
    if name.is_empty() || is_reserved_category(&name) {
        DEFAULT_CATEGORY.to_string()
    } else {
        name
    }
}

/// Expects a trimmed, lowercased name.
pub fn is_reserved_category(name: &str) -> bool {
    RESERVED_CATEGORY_NAMES.contains(&name)
}

/// Trims tags, drops empty ones and removes duplicates keeping the first occurrence.
pub fn normalize_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    tags.into_iter()
        .map(|t| t.as_ref().trim().to_string())
        .filter(|t| !t.is_empty())
        .filter(|t| seen.insert(t.clone()))
        .collect()
}

/// Field values collected by an editor surface before a note exists.
#[derive(Debug, Clone, Default)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub image: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub pinned: bool,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            ..Default::default()
        }
    }

    pub fn with_image(mut self, data_url: impl Into<String>) -> Self {
        self.image = Some(data_url.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn pinned(mut self, pinned: bool) -> Self {
        self.pinned = pinned;
        self
    }
}

/// What an edit does to the note's image.
///
/// "Leave it alone" and "remove it" are different requests and must not
/// collapse into the same `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ImageUpdate {
    #[default]
    Unchanged,
    Cleared,
    SetTo(String),
}

impl ImageUpdate {
    pub fn apply(self, image: &mut Option<String>) {
        match self {
            ImageUpdate::Unchanged => {}
            ImageUpdate::Cleared => *image = None,
            ImageUpdate::SetTo(data) => *image = Some(data),
        }
    }

    pub fn is_unchanged(&self) -> bool {
        matches!(self, ImageUpdate::Unchanged)
    }
}

/// A partial edit. Only fields that are `Some` (or a non-`Unchanged` image) are applied.
#[derive(Debug, Clone, Default)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub image: ImageUpdate,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub pinned: Option<bool>,
}

impl NotePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn image(mut self, image: ImageUpdate) -> Self {
        self.image = image;
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn pinned(mut self, pinned: bool) -> Self {
        self.pinned = Some(pinned);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.image.is_unchanged()
            && self.category.is_none()
            && self.tags.is_none()
            && self.pinned.is_none()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Newest => SortOrder::Oldest,
            SortOrder::Oldest => SortOrder::Newest,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Newest => "Newest First",
            SortOrder::Oldest => "Oldest First",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Newest => write!(f, "newest"),
            SortOrder::Oldest => write!(f, "oldest"),
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "newest" | "new" => Ok(SortOrder::Newest),
            "oldest" | "old" => Ok(SortOrder::Oldest),
            other => Err(format!("Unknown sort order: {}", other)),
        }
    }
}
