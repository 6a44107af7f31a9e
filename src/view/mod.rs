//! Query and presentation: filtered views over the store and their view models

mod card;
mod query;

pub use card::{DATE_FORMAT, NoteCard, Renderer, format_date_in, render_cards};
pub use query::{Query, QueryHit, query};
