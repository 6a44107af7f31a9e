//! Note category tags and the tag filter used by queries.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A category label attached to a note.
///
/// Four categories are known and get a display name, a style class and an
/// icon. Any other value is carried through untouched as [`Tag::Other`] so a
/// stored note never loses its label, and displays as its raw value.
///
/// Matching is exact: `work` is [`Tag::Work`], while `Work` is an unknown tag.
///
/// # Examples
///
/// ```
/// use jot::domain::Tag;
///
/// let tag = Tag::new("ideas");
/// assert_eq!(tag, Tag::Ideas);
/// assert_eq!(tag.display_name(), "Ideas");
///
/// let custom = Tag::new("groceries");
/// assert_eq!(custom.display_name(), "groceries");
/// assert_eq!(custom.style_class(), "");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub enum Tag {
    Work,
    #[default]
    Personal,
    Ideas,
    Reminders,
    Other(String),
}

impl Tag {
    /// The known tags, in the order they are offered to users.
    pub const KNOWN: [Tag; 4] = [Tag::Work, Tag::Personal, Tag::Ideas, Tag::Reminders];

    /// Creates a tag from its raw value.
    pub fn new(s: &str) -> Self {
        match s {
            "work" => Tag::Work,
            "personal" => Tag::Personal,
            "ideas" => Tag::Ideas,
            "reminders" => Tag::Reminders,
            other => Tag::Other(other.to_string()),
        }
    }

    /// Returns the raw value, as persisted.
    pub fn as_str(&self) -> &str {
        match self {
            Tag::Work => "work",
            Tag::Personal => "personal",
            Tag::Ideas => "ideas",
            Tag::Reminders => "reminders",
            Tag::Other(s) => s,
        }
    }

    /// Returns true for one of the four known categories.
    pub fn is_known(&self) -> bool {
        !matches!(self, Tag::Other(_))
    }

    /// Human-readable name. Unknown tags fall back to the raw value.
    pub fn display_name(&self) -> &str {
        match self {
            Tag::Work => "Work",
            Tag::Personal => "Personal",
            Tag::Ideas => "Ideas",
            Tag::Reminders => "Reminders",
            Tag::Other(s) => s,
        }
    }

    /// Style class for the tag badge; empty for unknown tags.
    pub fn style_class(&self) -> &'static str {
        match self {
            Tag::Work => "tag-work",
            Tag::Personal => "tag-personal",
            Tag::Ideas => "tag-ideas",
            Tag::Reminders => "tag-reminders",
            Tag::Other(_) => "",
        }
    }

    /// Icon name for the tag badge.
    pub fn icon(&self) -> Option<&'static str> {
        match self {
            Tag::Work => Some("briefcase"),
            Tag::Personal => Some("user"),
            Tag::Ideas => Some("lightbulb"),
            Tag::Reminders => Some("bell"),
            Tag::Other(_) => None,
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag(\"{}\")", self.as_str())
    }
}

impl FromStr for Tag {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for Tag {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl Serialize for Tag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::new(&s))
    }
}

/// Restricts a query to one tag, or lets every tag through.
///
/// The raw value `all` is the sentinel for "no restriction".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TagFilter {
    #[default]
    All,
    Only(Tag),
}

impl TagFilter {
    /// Sentinel value meaning "no tag restriction".
    pub const ALL: &'static str = "all";

    /// Parses a filter value; `all` means no restriction, anything else is a tag.
    pub fn parse(s: &str) -> Self {
        if s == Self::ALL {
            TagFilter::All
        } else {
            TagFilter::Only(Tag::new(s))
        }
    }

    /// Returns true if a note with `tag` passes this filter.
    pub fn matches(&self, tag: &Tag) -> bool {
        match self {
            TagFilter::All => true,
            TagFilter::Only(wanted) => wanted == tag,
        }
    }
}

impl fmt::Display for TagFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagFilter::All => write!(f, "{}", Self::ALL),
            TagFilter::Only(tag) => write!(f, "{}", tag),
        }
    }
}

impl FromStr for TagFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}
