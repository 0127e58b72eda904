pub mod blocks;
pub mod classify;
pub mod cursor;
pub mod display;
pub mod editing;
pub mod inline;
pub mod models;
pub mod parsing;
pub mod serialize;
pub mod storage;
pub mod syntax;

// Re-export key types for easier usage
pub use blocks::{Alignment, Block, BlockId, BlockKind, TableData};
pub use classify::{Classification, classify};
pub use cursor::CursorRange;
pub use display::display_value;
pub use editing::{Editor, EditorMode};
pub use inline::{Segment, format_line};
pub use models::{Note, NoteId};
pub use parsing::parse_markdown;
pub use serialize::{render_block, serialize_blocks};
pub use storage::{LocalStore, NoteStore, StorageError};
