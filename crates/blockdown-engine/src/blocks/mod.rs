//! Typed document model: a note body is an ordered `Vec<Block>`.
//!
//! Every block carries a stable [`BlockId`], a [`BlockKind`] holding the
//! type-specific metadata, and the plain-text `content` the user edits.
//! Structural syntax (heading hashes, quote markers, fences) is never
//! stored in `content`; it is re-synthesized on demand by the serializer
//! and the display projector.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identity for a block, preserved across edits and reorders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockId(Uuid);

impl BlockId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BlockId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Column alignment for table cells, taken from the alignment row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
}

/// Structured table content: header cells, per-column alignment and data
/// rows.
///
/// Construction normalizes the shape so the three parts always agree on
/// column count: alignments are padded with [`Alignment::Left`] or
/// truncated, rows are padded with empty cells or truncated. Deserialized
/// tables pass through the same normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawTableData")]
pub struct TableData {
    headers: Vec<String>,
    alignments: Vec<Alignment>,
    rows: Vec<Vec<String>>,
}

impl TableData {
    pub fn new(
        headers: Vec<String>,
        alignments: Vec<Alignment>,
        rows: Vec<Vec<String>>,
    ) -> Self {
        let width = headers.len();
        let mut alignments = alignments;
        alignments.resize(width, Alignment::Left);
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();
        Self {
            headers,
            alignments,
            rows,
        }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn alignments(&self) -> &[Alignment] {
        &self.alignments
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of columns, fixed by the header row.
    pub fn width(&self) -> usize {
        self.headers.len()
    }
}

#[derive(Deserialize)]
struct RawTableData {
    #[serde(default)]
    headers: Vec<String>,
    #[serde(default)]
    alignments: Vec<Alignment>,
    #[serde(default)]
    rows: Vec<Vec<String>>,
}

impl From<RawTableData> for TableData {
    fn from(raw: RawTableData) -> Self {
        TableData::new(raw.headers, raw.alignments, raw.rows)
    }
}

fn default_heading_level() -> u8 {
    1
}

/// Block type plus its type-specific metadata, as a closed sum.
///
/// The serialized form is internally tagged so a persisted block reads as
/// `{"type": "heading", "level": 2, ...}`, matching the note document
/// layout on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum BlockKind {
    Paragraph,
    Heading {
        #[serde(default = "default_heading_level")]
        level: u8,
    },
    Code {
        #[serde(default)]
        language: Option<String>,
        #[serde(default, rename = "showLineNumbers")]
        show_line_numbers: bool,
    },
    Quote {
        #[serde(default)]
        depth: usize,
    },
    List {
        #[serde(default)]
        ordered: bool,
        #[serde(default)]
        depth: usize,
    },
    Checklist {
        #[serde(default)]
        checked: bool,
        #[serde(default)]
        depth: usize,
    },
    Divider,
    Image {
        url: String,
        #[serde(default)]
        title: Option<String>,
    },
    Table(TableData),
}

impl BlockKind {
    /// Short lowercase name of the kind, the same string used as the
    /// serialized `type` tag.
    pub fn name(&self) -> &'static str {
        match self {
            BlockKind::Paragraph => "paragraph",
            BlockKind::Heading { .. } => "heading",
            BlockKind::Code { .. } => "code",
            BlockKind::Quote { .. } => "quote",
            BlockKind::List { .. } => "list",
            BlockKind::Checklist { .. } => "checklist",
            BlockKind::Divider => "divider",
            BlockKind::Image { .. } => "image",
            BlockKind::Table(_) => "table",
        }
    }
}

/// One editable unit of a note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockId,
    #[serde(flatten)]
    pub kind: BlockKind,
    #[serde(default)]
    pub content: String,
}

impl Block {
    pub fn new(kind: BlockKind) -> Self {
        Self {
            id: BlockId::new(),
            kind,
            content: String::new(),
        }
    }

    pub fn with_content(kind: BlockKind, content: impl Into<String>) -> Self {
        Self {
            id: BlockId::new(),
            kind,
            content: content.into(),
        }
    }

    /// The canonical representation of an empty document is exactly one of
    /// these.
    pub fn empty_paragraph() -> Self {
        Self::new(BlockKind::Paragraph)
    }

    /// Shallow copy under a fresh id, for duplicate-block operations.
    pub fn duplicate(&self) -> Self {
        Self {
            id: BlockId::new(),
            kind: self.kind.clone(),
            content: self.content.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
