pub mod note;

pub use note::{Note, NoteId, PREVIEW_MAX_CHARS};
