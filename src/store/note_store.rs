//! The authoritative, persisted sequence of notes.

use super::storage::{Storage, StorageError};
use crate::domain::Note;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors raised while persisting the note sequence.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to serialize notes: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Storage key used when none is configured.
pub const DEFAULT_KEY: &str = "notes";

/// Ordered collection of notes, newest first, backed by a [`Storage`] key.
///
/// The store is the only owner of the sequence. Every mutation is written
/// through to storage before the call returns. Reading never fails: a
/// missing or unreadable value is treated as an empty sequence.
///
/// Notes are addressed by their current position. Index 0 is always the
/// most recently added note.
///
/// # Examples
///
/// ```
/// use jot::domain::{Note, Tag};
/// use jot::store::{MemoryStorage, NoteStore};
/// use chrono::Utc;
///
/// let mut store = NoteStore::open(MemoryStorage::new());
/// store.add(Note::new("First", "a", Tag::Work, Utc::now()).unwrap()).unwrap();
/// store.add(Note::new("Second", "b", Tag::Work, Utc::now()).unwrap()).unwrap();
/// assert_eq!(store.get(0).unwrap().title(), "Second");
///
/// // Out-of-range removal is a no-op.
/// assert!(store.remove_at(Some(9)).unwrap().is_none());
/// assert_eq!(store.len(), 2);
/// ```
#[derive(Debug)]
pub struct NoteStore<S> {
    storage: S,
    key: String,
    notes: Vec<Note>,
}

impl<S: Storage> NoteStore<S> {
    /// Opens the store under [`DEFAULT_KEY`] and loads its contents.
    pub fn open(storage: S) -> Self {
        Self::open_with_key(storage, DEFAULT_KEY)
    }

    /// Opens the store under `key` and loads its contents.
    pub fn open_with_key(storage: S, key: impl Into<String>) -> Self {
        let mut store = Self {
            storage,
            key: key.into(),
            notes: Vec::new(),
        };
        store.notes = store.load();
        debug!(key = %store.key, count = store.notes.len(), "loaded notes");
        store
    }

    /// Reads the persisted sequence.
    ///
    /// Never fails: an absent key, a storage error, or content that is not a
    /// JSON array yields an empty sequence. Inside an array, records that do
    /// not form a note are skipped and the rest are kept.
    pub fn load(&self) -> Vec<Note> {
        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to read notes, starting empty");
                return Vec::new();
            }
        };

        let records = match serde_json::from_str::<Vec<serde_json::Value>>(&raw) {
            Ok(records) => records,
            Err(e) => {
                warn!(key = %self.key, error = %e, "stored notes are malformed, starting empty");
                return Vec::new();
            }
        };

        records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| match serde_json::from_value::<Note>(record) {
                Ok(note) => Some(note),
                Err(e) => {
                    warn!(key = %self.key, index, error = %e, "skipping unreadable note record");
                    None
                }
            })
            .collect()
    }

    /// Inserts `note` at the front of the sequence and persists.
    pub fn add(&mut self, note: Note) -> StoreResult<()> {
        debug!(title = note.title(), tag = %note.tag(), "adding note");
        self.notes.insert(0, note);
        self.persist()
    }

    /// Removes the note at `index` and persists.
    ///
    /// `None` or an index past the end is a no-op: nothing is removed and
    /// storage is not touched. Returns the removed note, if any.
    pub fn remove_at(&mut self, index: Option<usize>) -> StoreResult<Option<Note>> {
        let Some(index) = index.filter(|&i| i < self.notes.len()) else {
            debug!(?index, len = self.notes.len(), "ignoring removal outside the store");
            return Ok(None);
        };

        let removed = self.notes.remove(index);
        debug!(index, title = removed.title(), "removed note");
        self.persist()?;
        Ok(Some(removed))
    }

    /// Writes the whole sequence to storage, replacing prior contents.
    pub fn persist(&mut self) -> StoreResult<()> {
        let json = serde_json::to_string(&self.notes)?;
        self.storage.set(&self.key, &json)?;
        Ok(())
    }

    /// Returns the notes, newest first.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Returns the note at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Note> {
        self.notes.get(index)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Returns the storage key this store reads and writes.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the backing storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }
}
