//! Core types: Note, Tag, TagFilter

mod note;
mod tag;

pub use note::{Note, ParseNoteError};
pub use tag::{Tag, TagFilter};
