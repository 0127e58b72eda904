//! Live re-classification of a block's raw edit text.
//!
//! Runs on every keystroke while a block is active: the editing surface
//! shows the full markdown form (see [`crate::display`]), and this module
//! decides what the typed text currently is. Total and idempotent;
//! classifying the display value of a classification's result yields the
//! same classification. The one deliberate asymmetry against the document
//! parser: a fence only commits to a code block once the text contains a
//! newline, so the language tag can be finished in peace.

use crate::blocks::{Block, BlockKind};
use crate::syntax::{CodeFence, Divider, Heading, ImageLine, ListMarker, Quote};

/// New kind and content derived from raw edit text.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub kind: BlockKind,
    pub content: String,
}

impl Classification {
    fn new(kind: BlockKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
        }
    }
}

/// Re-derives a block's kind and content from raw text, in precedence
/// order. `current` supplies continuity: an emptied quote, list or
/// checklist keeps its identity instead of collapsing to a paragraph, and
/// a re-classified code block keeps its line-number flag.
pub fn classify(raw_text: &str, current: &Block) -> Classification {
    if raw_text.is_empty() {
        let kind = match &current.kind {
            BlockKind::Quote { .. } | BlockKind::List { .. } | BlockKind::Checklist { .. } => {
                current.kind.clone()
            }
            _ => BlockKind::Paragraph,
        };
        return Classification::new(kind, "");
    }

    if let Some((level, content)) = Heading::parse(raw_text) {
        return Classification::new(BlockKind::Heading { level }, content);
    }

    let first_line = raw_text.lines().next().unwrap_or("");
    if let Some(tag) = CodeFence::parse(first_line)
        && raw_text.contains('\n')
    {
        let show_line_numbers = matches!(
            &current.kind,
            BlockKind::Code {
                show_line_numbers: true,
                ..
            }
        );
        return Classification::new(
            BlockKind::Code {
                language: Some(CodeFence::language_of(tag)),
                show_line_numbers,
            },
            code_body(raw_text),
        );
    }

    if let Some((alt, url, title)) = ImageLine::parse(raw_text) {
        return Classification::new(
            BlockKind::Image {
                url: url.to_string(),
                title: title.map(str::to_string),
            },
            alt,
        );
    }

    if let Some((depth, content)) = Quote::parse(raw_text) {
        return Classification::new(BlockKind::Quote { depth }, content);
    }

    if let Some((depth, checked, _)) = ListMarker::parse_checklist(first_line) {
        return Classification::new(
            BlockKind::Checklist { checked, depth },
            strip_item_markers(raw_text),
        );
    }

    if let Some((depth, ordered, _)) = ListMarker::parse(first_line) {
        return Classification::new(
            BlockKind::List { ordered, depth },
            strip_item_markers(raw_text),
        );
    }

    if Divider::matches(raw_text) {
        return Classification::new(BlockKind::Divider, "");
    }

    Classification::new(BlockKind::Paragraph, raw_text)
}

/// Interior of a typed code block: everything after the opening fence
/// line, minus a trailing closing fence if one is present.
fn code_body(raw_text: &str) -> String {
    let mut lines: Vec<&str> = raw_text.lines().skip(1).collect();
    if let Some(last) = lines.last()
        && CodeFence::is_fence(last)
    {
        lines.pop();
    }
    lines.join("\n")
}

/// Strips per-line item markers from multi-item list or checklist text.
/// Lines without a marker pass through verbatim.
fn strip_item_markers(raw_text: &str) -> String {
    raw_text
        .lines()
        .map(|line| {
            if let Some((_, _, content)) = ListMarker::parse_checklist(line) {
                content
            } else if let Some((_, _, content)) = ListMarker::parse(line) {
                content
            } else {
                line
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
