//! Editing-surface projection of a block.

use crate::blocks::Block;
use crate::serialize::render_block;

/// Text the editing surface shows for a block.
///
/// An active block exposes its full markdown form, syntax markers
/// included, so the structure is editable in place; the live classifier
/// re-derives the block from exactly this text. An inactive block
/// exposes plain content for styled read-only rendering through the
/// inline formatter.
pub fn display_value(block: &Block, active: bool) -> String {
    if active {
        render_block(block)
    } else {
        block.content.clone()
    }
}
