//! Search and tag filtering over the note sequence.

use crate::domain::{Note, TagFilter};

/// A note selected by a query, with its position in the full store.
///
/// `index` is the note's index in the unfiltered sequence, which is what a
/// delete action must target. It is not the note's position in the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryHit<'a> {
    pub index: usize,
    pub note: &'a Note,
}

/// A free-text search term combined with a tag filter.
///
/// The search term is trimmed and lowercased once, when the query is built.
/// A note matches when its lowercased title or content contains the term and
/// its tag passes the filter. An empty term matches every note.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    term: String,
    tag_filter: TagFilter,
}

impl Query {
    pub fn new(search_term: &str, tag_filter: TagFilter) -> Self {
        Self {
            term: search_term.trim().to_lowercase(),
            tag_filter,
        }
    }

    /// Returns the normalized search term.
    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn tag_filter(&self) -> &TagFilter {
        &self.tag_filter
    }

    /// Returns true if neither the term nor the tag restricts anything.
    pub fn is_unfiltered(&self) -> bool {
        self.term.is_empty() && self.tag_filter == TagFilter::All
    }

    /// Returns true if `note` satisfies both the search term and the tag filter.
    pub fn matches(&self, note: &Note) -> bool {
        self.matches_term(note) && self.tag_filter.matches(note.tag())
    }

    fn matches_term(&self, note: &Note) -> bool {
        self.term.is_empty()
            || note.title().to_lowercase().contains(&self.term)
            || note.content().to_lowercase().contains(&self.term)
    }

    /// Selects the matching notes from the full sequence, preserving order.
    pub fn apply<'a>(&self, notes: &'a [Note]) -> Vec<QueryHit<'a>> {
        let unfiltered = self.is_unfiltered();
        notes
            .iter()
            .enumerate()
            .filter(|(_, note)| unfiltered || self.matches(note))
            .map(|(index, note)| QueryHit { index, note })
            .collect()
    }
}

/// Selects the notes matching `search_term` and `tag_filter`.
///
/// Shorthand for `Query::new(search_term, tag_filter).apply(notes)`.
///
/// # Examples
///
/// ```
/// use jot::domain::{Note, Tag, TagFilter};
/// use jot::view::query;
/// use chrono::Utc;
///
/// let notes = vec![
///     Note::new("Buy milk", "2L", Tag::Personal, Utc::now()).unwrap(),
///     Note::new("Ship release", "v1.2", Tag::Work, Utc::now()).unwrap(),
/// ];
///
/// let hits = query(&notes, "SHIP", &TagFilter::All);
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].index, 1);
/// ```
pub fn query<'a>(notes: &'a [Note], search_term: &str, tag_filter: &TagFilter) -> Vec<QueryHit<'a>> {
    Query::new(search_term, tag_filter.clone()).apply(notes)
}
