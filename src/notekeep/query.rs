//! # Query/View Engine
//!
//! Pure, read-only derivation of which notes are visible. Nothing in here
//! mutates a note or the collection; every function returns references into the
//! slice it was given, in the order it was given.
//!
//! A view is a [`Filter`] followed by a free-text search term. Filtering happens
//! first, searching narrows the filtered set.
//!
//! An empty result carries no reason. Whether the renderer says "no notes yet"
//! or "nothing matches" is its own call.

use crate::model::Note;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A named predicate selecting notes for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Filter {
    /// Everything that is not archived.
    #[default]
    All,
    /// Pinned notes, archived or not.
    Pinned,
    Archived,
    /// Notes in one category, archived or not.
    Category(String),
}

impl Filter {
    pub fn matches(&self, note: &Note) -> bool {
        match self {
            Filter::All => !note.archived,
            Filter::Pinned => note.pinned,
            Filter::Archived => note.archived,
            Filter::Category(name) => note.category == *name,
        }
    }
}

impl FromStr for Filter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        Ok(match name.as_str() {
            "" | "all" => Filter::All,
            "pinned" => Filter::Pinned,
            "archived" => Filter::Archived,
            _ => Filter::Category(name),
        })
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => write!(f, "all"),
            Filter::Pinned => write!(f, "pinned"),
            Filter::Archived => write!(f, "archived"),
            Filter::Category(name) => write!(f, "{}", name),
        }
    }
}

pub fn filter<'a, I>(notes: I, filter: &Filter) -> Vec<&'a Note>
where
    I: IntoIterator<Item = &'a Note>,
{
    notes.into_iter().filter(|n| filter.matches(n)).collect()
}

/// Case-insensitive substring search over title, plain-text content and tags.
/// A blank term matches everything.
pub fn search<'a, I>(notes: I, term: &str) -> Vec<&'a Note>
where
    I: IntoIterator<Item = &'a Note>,
{
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return notes.into_iter().collect();
    }
    notes
        .into_iter()
        .filter(|n| matches_term(n, &term))
        .collect()
}

/// `term` must already be lowercase.
fn matches_term(note: &Note, term: &str) -> bool {
    note.title.to_lowercase().contains(term)
        || note.plain_content().to_lowercase().contains(term)
        || note.tags.iter().any(|t| t.to_lowercase().contains(term))
}

/// Filter, then search.
pub fn visible<'a>(notes: &'a [Note], by: &Filter, term: &str) -> Vec<&'a Note> {
    search(filter(notes, by), term)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::note_at;

    fn ids(notes: &[&Note]) -> Vec<u64> {
        notes.iter().map(|n| n.id).collect()
    }

    fn sample() -> Vec<Note> {
        let mut work = note_at(1, "Quarterly report", 30);
        work.category = "work".into();
        work.tags = vec!["urgent".into()];

        let mut pinned_archived = note_at(2, "Old pinned", 20);
        pinned_archived.pinned = true;
        pinned_archived.archived = true;

        let mut personal = note_at(3, "Dentist", 10);
        personal.category = "personal".into();
        personal.content = "<p>Call <b>Dr. Who</b></p>".into();

        let mut archived_work = note_at(4, "Last year", 40);
        archived_work.category = "work".into();
        archived_work.archived = true;

        vec![work, pinned_archived, personal, archived_work]
    }

    #[test]
    fn blank_search_is_identity() {
        let notes = sample();
        assert_eq!(ids(&search(&notes, "")), vec![1, 2, 3, 4]);
        assert_eq!(ids(&search(&notes, "   ")), vec![1, 2, 3, 4]);
    }

    #[test]
    fn search_matches_tags_case_insensitively() {
        let mut a = note_at(1, "A", 10);
        a.tags = vec!["urgent".into()];
        let b = note_at(2, "B", 5);
        let notes = vec![a, b];
        assert_eq!(ids(&search(&notes, "URG")), vec![1]);
    }

    #[test]
    fn search_matches_title_and_plain_content() {
        let notes = sample();
        assert_eq!(ids(&search(&notes, "quarterly")), vec![1]);
        assert_eq!(ids(&search(&notes, "dr. who")), vec![3]);
    }

    #[test]
    fn search_ignores_markup() {
        let notes = sample();
        assert!(search(&notes, "<b>").is_empty());
    }

    #[test]
    fn all_and_archived_partition_the_collection() {
        let notes = sample();
        let all = filter(&notes, &Filter::All);
        let archived = filter(&notes, &Filter::Archived);
        assert!(all.iter().all(|n| !n.archived));
        assert!(archived.iter().all(|n| n.archived));
        assert_eq!(all.len() + archived.len(), notes.len());
    }

    #[test]
    fn pinned_ignores_archived_flag() {
        let notes = sample();
        assert_eq!(ids(&filter(&notes, &Filter::Pinned)), vec![2]);
        assert!(!ids(&filter(&notes, &Filter::All)).contains(&2));
    }

    #[test]
    fn category_filter_includes_archived() {
        let notes = sample();
        assert_eq!(ids(&filter(&notes, &"work".parse().unwrap())), vec![1, 4]);
    }

    #[test]
    fn visible_filters_then_searches() {
        let notes = sample();
        let work: Filter = "Work".parse().unwrap();
        assert_eq!(ids(&visible(&notes, &work, "year")), vec![4]);
        assert!(visible(&notes, &Filter::All, "year").is_empty());
    }

    #[test]
    fn empty_inputs_give_empty_results() {
        let notes: Vec<Note> = Vec::new();
        assert!(visible(&notes, &Filter::All, "").is_empty());
        assert!(visible(&sample(), &Filter::Pinned, "nothing like this").is_empty());
    }

    #[test]
    fn parses_filter_names() {
        assert_eq!("".parse::<Filter>().unwrap(), Filter::All);
        assert_eq!("PINNED".parse::<Filter>().unwrap(), Filter::Pinned);
        assert_eq!("archived".parse::<Filter>().unwrap(), Filter::Archived);
        assert_eq!(
            "Ideas".parse::<Filter>().unwrap(),
            Filter::Category("ideas".into())
        );
        assert_eq!(Filter::Category("ideas".into()).to_string(), "ideas");
    }
}
