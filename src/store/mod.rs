//! Note persistence: the ordered note store and its storage backends

mod note_store;
mod storage;

pub use note_store::{DEFAULT_KEY, NoteStore, StoreError, StoreResult};
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError};
