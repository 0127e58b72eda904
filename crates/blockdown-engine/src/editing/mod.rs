//! Editor state: an owned block sequence plus the block-level operations
//! a UI drives.
//!
//! The editor owns the single source of truth, a `Vec<Block>`, and keeps
//! the document invariant that it is never empty: every path that could
//! drain it re-seeds one empty paragraph. Id-based operations treat an
//! unknown id as a no-op and say so through their return value rather
//! than failing.
//!
//! Two modes: block editing (the normal case) and raw markdown editing
//! over the serialized text. Undo history is the caller's concern; the
//! editor is a plain value that can be cloned and swapped wholesale.

use log::debug;

use crate::blocks::{Block, BlockId, BlockKind};
use crate::classify::classify;
use crate::parsing::parse_markdown;
use crate::serialize::serialize_blocks;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Edit,
    Raw,
}

#[derive(Debug, Clone)]
pub struct Editor {
    blocks: Vec<Block>,
    mode: EditorMode,
    raw_text: String,
}

impl Editor {
    pub fn new() -> Self {
        Self {
            blocks: vec![Block::empty_paragraph()],
            mode: EditorMode::Edit,
            raw_text: String::new(),
        }
    }

    pub fn from_markdown(markdown: &str) -> Self {
        Self {
            blocks: parse_markdown(markdown),
            mode: EditorMode::Edit,
            raw_text: String::new(),
        }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn block(&self, id: BlockId) -> Option<&Block> {
        self.blocks.iter().find(|block| block.id == id)
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    /// Current markdown form of the document. In raw mode this is the
    /// raw buffer as typed, unparsed.
    pub fn markdown(&self) -> String {
        match self.mode {
            EditorMode::Edit => serialize_blocks(&self.blocks),
            EditorMode::Raw => self.raw_text.clone(),
        }
    }

    /// Inserts a fresh empty block of the given kind, at `index` or at
    /// the end. Out-of-range indices clamp.
    pub fn insert_block(&mut self, kind: BlockKind, index: Option<usize>) -> BlockId {
        let block = Block::new(kind);
        let id = block.id;
        let index = index.unwrap_or(self.blocks.len()).min(self.blocks.len());
        self.blocks.insert(index, block);
        id
    }

    /// Removes a block. Deleting the last remaining block resets the
    /// document to one empty paragraph.
    pub fn delete_block(&mut self, id: BlockId) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        self.blocks.remove(index);
        if self.blocks.is_empty() {
            self.blocks.push(Block::empty_paragraph());
        }
        debug!("deleted block {id}");
        true
    }

    pub fn move_block_up(&mut self, id: BlockId) -> bool {
        match self.index_of(id) {
            Some(index) if index > 0 => {
                self.blocks.swap(index, index - 1);
                true
            }
            _ => false,
        }
    }

    pub fn move_block_down(&mut self, id: BlockId) -> bool {
        match self.index_of(id) {
            Some(index) if index + 1 < self.blocks.len() => {
                self.blocks.swap(index, index + 1);
                true
            }
            _ => false,
        }
    }

    /// Shallow copy under a fresh id, inserted right after the source.
    pub fn duplicate_block(&mut self, id: BlockId) -> Option<BlockId> {
        let index = self.index_of(id)?;
        let copy = self.blocks[index].duplicate();
        let copy_id = copy.id;
        self.blocks.insert(index + 1, copy);
        Some(copy_id)
    }

    /// Line break on a block with content: a fresh empty paragraph opens
    /// right below and takes focus. A break on an empty block does
    /// nothing.
    pub fn split_block(&mut self, id: BlockId) -> Option<BlockId> {
        let index = self.index_of(id)?;
        if self.blocks[index].is_empty() {
            return None;
        }
        let block = Block::empty_paragraph();
        let new_id = block.id;
        self.blocks.insert(index + 1, block);
        Some(new_id)
    }

    /// Backspace on an empty block merges it away, returning the id of
    /// the previous block as the new focus target. The first block and
    /// blocks that still hold content stay put.
    pub fn merge_backspace(&mut self, id: BlockId) -> Option<BlockId> {
        let index = self.index_of(id)?;
        if index == 0 || !self.blocks[index].is_empty() {
            return None;
        }
        self.blocks.remove(index);
        Some(self.blocks[index - 1].id)
    }

    /// Applies raw edit text to a block, re-deriving kind and content
    /// through the live classifier.
    pub fn edit_block_text(&mut self, id: BlockId, raw_text: &str) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        let result = classify(raw_text, &self.blocks[index]);
        let block = &mut self.blocks[index];
        block.kind = result.kind;
        block.content = result.content;
        true
    }

    /// Raw-mode textarea updates; ignored outside raw mode only in the
    /// sense that the buffer is overwritten on the next mode switch.
    pub fn set_raw_text(&mut self, text: impl Into<String>) {
        self.raw_text = text.into();
    }

    /// Flips between block editing and raw markdown editing. Entering
    /// raw mode serializes the blocks into the raw buffer; leaving it
    /// re-parses the buffer into blocks.
    pub fn toggle_mode(&mut self) {
        match self.mode {
            EditorMode::Edit => {
                self.raw_text = serialize_blocks(&self.blocks);
                self.mode = EditorMode::Raw;
            }
            EditorMode::Raw => {
                self.blocks = parse_markdown(&self.raw_text);
                self.mode = EditorMode::Edit;
            }
        }
    }

    fn index_of(&self, id: BlockId) -> Option<usize> {
        self.blocks.iter().position(|block| block.id == id)
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}
