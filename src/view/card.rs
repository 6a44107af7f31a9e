//! View models handed to the presentation layer.

use super::query::QueryHit;
use chrono::{DateTime, Local, SecondsFormat, TimeZone, Utc};
use serde::Serialize;
use std::fmt::Display;
use std::io;

/// Display format for note dates: day/month/year, 24-hour time.
pub const DATE_FORMAT: &str = "%d/%m/%Y, %H:%M";

/// Everything needed to draw one note card.
///
/// `index` is the note's position in the full store. A delete action on the
/// card must report this index, not the card's position on screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteCard {
    pub index: usize,
    pub title: String,
    pub content: String,
    pub tag: String,
    pub tag_label: String,
    pub tag_class: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_icon: Option<String>,
    pub created_at: String,
    pub date: String,
}

impl NoteCard {
    /// Builds a card, formatting the date in the local time zone.
    pub fn from_hit(hit: &QueryHit<'_>) -> Self {
        Self::from_hit_in(hit, &Local)
    }

    /// Builds a card, formatting the date in `tz`.
    pub fn from_hit_in<Tz>(hit: &QueryHit<'_>, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let note = hit.note;
        let tag = note.tag();
        Self {
            index: hit.index,
            title: note.title().to_string(),
            content: note.content().to_string(),
            tag: tag.as_str().to_string(),
            tag_label: tag.display_name().to_string(),
            tag_class: tag.style_class().to_string(),
            tag_icon: tag.icon().map(str::to_string),
            created_at: note
                .created_at()
                .to_rfc3339_opts(SecondsFormat::Millis, true),
            date: format_date_in(note.created_at(), tz),
        }
    }
}

/// Maps a query result to cards, keeping its order.
pub fn render_cards(hits: &[QueryHit<'_>]) -> Vec<NoteCard> {
    hits.iter().map(NoteCard::from_hit).collect()
}

/// Formats a timestamp as `dd/mm/yyyy, HH:MM` in `tz`.
pub fn format_date_in<Tz>(timestamp: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    timestamp.with_timezone(tz).format(DATE_FORMAT).to_string()
}

/// Receives the visible notes whenever they change.
///
/// Implementations draw the cards and show or hide an empty-state message.
/// Both calls are made on every refresh, `render` first.
pub trait Renderer {
    /// Draws the visible notes, replacing whatever was drawn before.
    fn render(&mut self, cards: &[NoteCard]) -> io::Result<()>;

    /// Signals whether the visible set is empty.
    fn notify_empty(&mut self, is_empty: bool) -> io::Result<()>;
}
