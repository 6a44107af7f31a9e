//! Input handling for a note-taking session.
//!
//! A [`Session`] owns the note store together with the current search term,
//! tag filter, and any delete awaiting confirmation. Front ends feed user
//! actions into it and ask it to refresh a [`Renderer`].

use crate::domain::{Note, ParseNoteError, Tag, TagFilter};
use crate::store::{NoteStore, Storage, StoreError, StoreResult};
use crate::view::{NoteCard, Query, QueryHit, Renderer, render_cards};
use chrono::{DateTime, Utc};
use std::io;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors raised while submitting a note.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ParseNoteError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A delete that has been requested but not yet confirmed.
///
/// Holds the store index the user picked and the note that was there at the
/// time, so a confirmation arriving after the sequence changed does not remove
/// a different note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
    index: usize,
    note: Note,
}

impl PendingDelete {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn note(&self) -> &Note {
        &self.note
    }
}

/// The controller between user actions and the note store.
#[derive(Debug)]
pub struct Session<S> {
    store: NoteStore<S>,
    query: Query,
    pending: Option<PendingDelete>,
}

impl<S: Storage> Session<S> {
    pub fn new(store: NoteStore<S>) -> Self {
        Self {
            store,
            query: Query::default(),
            pending: None,
        }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &NoteStore<S> {
        &self.store
    }

    /// Creates a note stamped with the current time and adds it to the front.
    pub fn submit_note(
        &mut self,
        title: &str,
        content: &str,
        tag: Tag,
    ) -> Result<&Note, SubmitError> {
        self.submit_note_at(title, content, tag, Utc::now())
    }

    /// Creates a note with an explicit creation time and adds it to the front.
    pub fn submit_note_at(
        &mut self,
        title: &str,
        content: &str,
        tag: Tag,
        created_at: DateTime<Utc>,
    ) -> Result<&Note, SubmitError> {
        let note = Note::new(title, content, tag, created_at)?;
        info!(title = note.title(), tag = %note.tag(), "note created");
        // Positions shift even if persisting fails; an earlier request no
        // longer points where the user meant.
        if self.pending.take().is_some() {
            debug!("dropped pending delete before insert");
        }
        self.store.add(note)?;
        Ok(&self.store.notes()[0])
    }

    /// Marks the note at `index` (a full-store index) for deletion.
    ///
    /// Returns the pending delete, or `None` if there is no note at `index`,
    /// in which case nothing is pending.
    pub fn request_delete(&mut self, index: usize) -> Option<&PendingDelete> {
        self.pending = self.store.get(index).map(|note| PendingDelete {
            index,
            note: note.clone(),
        });
        debug!(index, pending = self.pending.is_some(), "delete requested");
        self.pending.as_ref()
    }

    /// Returns the delete awaiting confirmation, if any.
    pub fn pending_delete(&self) -> Option<&PendingDelete> {
        self.pending.as_ref()
    }

    /// Forgets any pending delete.
    pub fn cancel_delete(&mut self) {
        if self.pending.take().is_some() {
            debug!("delete cancelled");
        }
    }

    /// Removes the pending note and clears the request.
    ///
    /// A no-op when nothing is pending, or when the note at the captured index
    /// is no longer the one the user picked. Returns the removed note.
    pub fn confirm_delete(&mut self) -> StoreResult<Option<Note>> {
        let Some(pending) = self.pending.take() else {
            return Ok(None);
        };

        if self.store.get(pending.index) != Some(&pending.note) {
            warn!(
                index = pending.index,
                title = pending.note.title(),
                "note moved since delete was requested, not deleting"
            );
            return Ok(None);
        }

        let removed = self.store.remove_at(Some(pending.index))?;
        if let Some(note) = &removed {
            info!(index = pending.index, title = note.title(), "note deleted");
        }
        Ok(removed)
    }

    /// Sets the free-text search term.
    pub fn set_search_term(&mut self, text: &str) {
        self.query = Query::new(text, self.query.tag_filter().clone());
    }

    /// Sets the tag filter.
    pub fn set_tag_filter(&mut self, filter: TagFilter) {
        self.query = Query::new(self.query.term(), filter);
    }

    /// Returns the active query.
    pub fn query(&self) -> &Query {
        &self.query
    }

    /// Returns the notes the active query selects from the live store.
    pub fn visible(&self) -> Vec<QueryHit<'_>> {
        self.query.apply(self.store.notes())
    }

    /// Returns the cards for the visible notes.
    pub fn cards(&self) -> Vec<NoteCard> {
        render_cards(&self.visible())
    }

    /// Hands the visible notes to `renderer`, then reports whether any are visible.
    pub fn refresh<R: Renderer + ?Sized>(&self, renderer: &mut R) -> io::Result<()> {
        let cards = self.cards();
        renderer.render(&cards)?;
        renderer.notify_empty(cards.is_empty())
    }
}
