//! Note struct: a short titled text with a category tag and creation time.

use crate::domain::Tag;
use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of error that occurred when constructing a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseNoteErrorKind {
    EmptyTitle,
    EmptyContent,
}

/// Error returned when constructing an invalid note.
#[derive(Debug, Clone)]
pub struct ParseNoteError {
    kind: ParseNoteErrorKind,
}

impl fmt::Display for ParseNoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ParseNoteErrorKind::EmptyTitle => write!(f, "invalid note: title cannot be empty"),
            ParseNoteErrorKind::EmptyContent => {
                write!(f, "invalid note: content cannot be empty")
            }
        }
    }
}

impl std::error::Error for ParseNoteError {}

/// A user-authored note.
///
/// Notes are immutable once created: the store only ever inserts or removes
/// whole notes. Title and content are checked for presence when the note is
/// created through [`Note::new`], but notes read back from storage are taken
/// as they are.
///
/// The creation time is kept at millisecond precision so that a note written
/// to storage and read back compares equal to the original.
///
/// # Examples
///
/// ```
/// use jot::domain::{Note, Tag};
/// use chrono::Utc;
///
/// let note = Note::new("Buy milk", "Two litres", Tag::Personal, Utc::now()).unwrap();
/// assert_eq!(note.title(), "Buy milk");
/// assert!(Note::new("   ", "body", Tag::Work, Utc::now()).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    title: String,
    content: String,
    tag: Tag,
    created_at: DateTime<Utc>,
}

impl Note {
    /// Creates a new note.
    ///
    /// Title and content are stored exactly as given; surrounding whitespace
    /// only matters for the emptiness check.
    ///
    /// # Errors
    ///
    /// Returns `ParseNoteError` if:
    /// - The title is empty or whitespace-only
    /// - The content is empty or whitespace-only
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        tag: Tag,
        created_at: DateTime<Utc>,
    ) -> Result<Self, ParseNoteError> {
        let title = title.into();
        let content = content.into();

        if title.trim().is_empty() {
            return Err(ParseNoteError {
                kind: ParseNoteErrorKind::EmptyTitle,
            });
        }

        if content.trim().is_empty() {
            return Err(ParseNoteError {
                kind: ParseNoteErrorKind::EmptyContent,
            });
        }

        Ok(Self::from_parts(title, content, tag, created_at))
    }

    /// Assembles a note without validating it (used when reading storage).
    fn from_parts(title: String, content: String, tag: Tag, created_at: DateTime<Utc>) -> Self {
        Self {
            title,
            content,
            tag,
            created_at: created_at.trunc_subsecs(3),
        }
    }

    /// Returns the note's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the note's content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the note's tag.
    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    /// Returns when the note was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.title, self.tag)
    }
}

impl Serialize for Note {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(4))?;
        map.serialize_entry("title", &self.title)?;
        map.serialize_entry("content", &self.content)?;
        map.serialize_entry("tag", &self.tag)?;
        map.serialize_entry(
            "createdAt",
            &self
                .created_at
                .to_rfc3339_opts(SecondsFormat::Millis, true),
        )?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for Note {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct NoteHelper {
            title: String,
            content: String,
            tag: Tag,
            // Older stores wrote the creation time under `date`.
            #[serde(rename = "createdAt", alias = "date")]
            created_at: DateTime<Utc>,
        }

        let helper = NoteHelper::deserialize(deserializer)?;
        Ok(Note::from_parts(
            helper.title,
            helper.content,
            helper.tag,
            helper.created_at,
        ))
    }
}
