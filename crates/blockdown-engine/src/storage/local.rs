use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::warn;

use crate::models::{Note, NoteId};

use super::{NoteStore, StorageError};

/// Filesystem-backed store: one pretty-printed JSON document per note,
/// named `<note-id>.json`, flat under the store root.
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    /// Opens a store rooted at `root`, creating the directory if missing.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        if root.exists() && !root.is_dir() {
            return Err(StorageError::InvalidRoot(root));
        }
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn note_path(&self, id: NoteId) -> PathBuf {
        self.root.join(format!("{id}.json"))
    }

    fn read_note(&self, path: &Path) -> Result<Note, StorageError> {
        let data = fs::read_to_string(path)?;
        serde_json::from_str(&data).map_err(|source| StorageError::Decode {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl NoteStore for LocalStore {
    fn list_notes(&self) -> Result<Vec<Note>, StorageError> {
        let mut notes = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().is_none_or(|ext| ext != "json") {
                continue;
            }
            let is_note = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .is_some_and(|stem| stem.parse::<NoteId>().is_ok());
            if !is_note {
                continue;
            }
            match self.read_note(&path) {
                Ok(note) => notes.push(note),
                // One corrupt file must not take the whole list down.
                Err(err) => warn!("skipping unreadable note file {}: {err}", path.display()),
            }
        }
        notes.sort_by(|a, b| b.last_modified.cmp(&a.last_modified));
        Ok(notes)
    }

    fn load_note(&self, id: NoteId) -> Result<Note, StorageError> {
        let path = self.note_path(id);
        match fs::read_to_string(&path) {
            Ok(data) => {
                serde_json::from_str(&data).map_err(|source| StorageError::Decode { path, source })
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Err(StorageError::NotFound(id)),
            Err(err) => Err(err.into()),
        }
    }

    fn save_note(&self, note: &Note) -> Result<(), StorageError> {
        let data = serde_json::to_string_pretty(note).map_err(|source| StorageError::Encode {
            id: note.id,
            source,
        })?;
        fs::write(self.note_path(note.id), data)?;
        Ok(())
    }

    fn delete_note(&self, id: NoteId) -> Result<(), StorageError> {
        match fs::remove_file(self.note_path(id)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Err(StorageError::NotFound(id)),
            Err(err) => Err(err.into()),
        }
    }

    fn sync(&self) -> Result<(), StorageError> {
        // Local backend has no remote side.
        Ok(())
    }
}
