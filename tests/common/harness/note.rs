//! Builder for test notes with sensible defaults.

// Allow dead code since this is a test utility shared across test binaries
#![allow(dead_code)]

use chrono::{DateTime, Utc};
use jot::domain::{Note, Tag};

/// Builder for creating test notes with sensible defaults.
#[derive(Debug)]
pub struct TestNote {
    title: String,
    content: String,
    tag: Tag,
    created_at: DateTime<Utc>,
}

impl TestNote {
    /// Creates a new test note with the given title, tagged `personal`.
    pub fn new(title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            content: format!("Content of {}", title),
            title,
            tag: Tag::Personal,
            created_at: Utc::now(),
        }
    }

    /// Sets the tag.
    pub fn tag(mut self, tag: &str) -> Self {
        self.tag = Tag::new(tag);
        self
    }

    /// Sets the content.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Sets the creation time from an RFC 3339 string.
    pub fn created_at(mut self, rfc3339: &str) -> Self {
        self.created_at = DateTime::parse_from_rfc3339(rfc3339)
            .expect("Invalid timestamp")
            .with_timezone(&Utc);
        self
    }

    /// Returns the title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Converts this TestNote to a domain Note.
    pub fn to_note(&self) -> Note {
        Note::new(&self.title, &self.content, self.tag.clone(), self.created_at)
            .expect("TestNote should always produce valid Note")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_defaults() {
        let note = TestNote::new("My Test Note").to_note();
        assert_eq!(note.title(), "My Test Note");
        assert_eq!(note.content(), "Content of My Test Note");
        assert_eq!(note.tag(), &Tag::Personal);
    }

    #[test]
    fn test_note_builder_fluent() {
        let note = TestNote::new("Release")
            .tag("work")
            .content("Ship it")
            .created_at("2024-01-15T10:30:00Z")
            .to_note();
        assert_eq!(note.tag(), &Tag::Work);
        assert_eq!(note.content(), "Ship it");
        assert_eq!(
            note.created_at().to_rfc3339(),
            "2024-01-15T10:30:00+00:00"
        );
    }
}
