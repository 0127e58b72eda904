//! The note document as persisted: title, typed content blocks, derived
//! preview and millisecond timestamps, serialized as one camelCase JSON
//! object per note.

use std::fmt;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::blocks::Block;
use crate::parsing::parse_markdown;
use crate::serialize::serialize_blocks;

/// Chars of content shown in note lists.
pub const PREVIEW_MAX_CHARS: usize = 80;

/// Stable identity for a note; doubles as its file stem in local storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoteId(Uuid);

impl NoteId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for NoteId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: Vec<Block>,
    #[serde(default)]
    pub preview: String,
    #[serde(default)]
    pub color: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
    pub last_modified: i64,
}

impl Note {
    /// Fresh note holding one empty paragraph, so the non-empty document
    /// invariant holds from birth.
    pub fn new(title: impl Into<String>) -> Self {
        let now = now_millis();
        Self {
            id: NoteId::new(),
            title: title.into(),
            content: vec![Block::empty_paragraph()],
            preview: String::new(),
            color: None,
            created_at: now,
            updated_at: now,
            last_modified: now,
        }
    }

    pub fn from_markdown(title: impl Into<String>, markdown: &str) -> Self {
        let mut note = Self::new(title);
        note.content = parse_markdown(markdown);
        note.refresh_preview();
        note
    }

    /// The note body serialized back to markdown.
    pub fn markdown(&self) -> String {
        serialize_blocks(&self.content)
    }

    /// Re-derives the list preview from the first non-empty block.
    pub fn refresh_preview(&mut self) {
        self.preview = derive_preview(&self.content);
    }

    /// Marks the note edited now: refreshes timestamps and preview.
    pub fn touch(&mut self) {
        let now = now_millis();
        self.updated_at = now;
        self.last_modified = now;
        self.refresh_preview();
    }
}

fn derive_preview(blocks: &[Block]) -> String {
    let Some(first) = blocks.iter().find(|block| !block.content.trim().is_empty()) else {
        return String::new();
    };
    let line = first.content.lines().next().unwrap_or("");
    line.chars().take(PREVIEW_MAX_CHARS).collect()
}

fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
