//! Note persistence behind a trait seam.
//!
//! [`LocalStore`] is the shipped backend; remote backends implement the
//! same [`NoteStore`] interface and plug in without touching callers.

use std::path::PathBuf;

use crate::models::{Note, NoteId};

pub mod local;

pub use local::LocalStore;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Note not found: {0}")]
    NotFound(NoteId),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to decode note file {path}: {source}")]
    Decode {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Failed to encode note {id}: {source}")]
    Encode {
        id: NoteId,
        source: serde_json::Error,
    },
    #[error("Invalid store root: {0}")]
    InvalidRoot(PathBuf),
}

pub trait NoteStore {
    /// All readable notes, newest edit first.
    fn list_notes(&self) -> Result<Vec<Note>, StorageError>;

    fn load_note(&self, id: NoteId) -> Result<Note, StorageError>;

    fn save_note(&self, note: &Note) -> Result<(), StorageError>;

    fn delete_note(&self, id: NoteId) -> Result<(), StorageError>;

    /// Reconciles with the backend's remote side, where one exists.
    fn sync(&self) -> Result<(), StorageError>;
}
