//! Caret preservation when a block's syntax prefix changes underneath it.
//!
//! While an active block is re-rendered (heading level changed, list
//! marker swapped, checkbox toggled), the text the user is editing gets a
//! prefix of a different length and the caret would visually jump. The
//! translation here shifts positions by the prefix length delta, keeping
//! the caret anchored to the same content character. Positions are char
//! offsets into the display text.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::blocks::BlockKind;

/// Selection range in char offsets; a collapsed range is a caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorRange {
    pub start: usize,
    pub end: usize,
}

impl CursorRange {
    pub fn caret(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    pub fn is_caret(&self) -> bool {
        self.start == self.end
    }
}

/// Translates a cursor from `old_text` to `new_text` for a block of the
/// given kind.
///
/// Kinds without a line prefix (paragraph, code, divider, image, table)
/// pass the cursor through unchanged. For prefixed kinds, positions
/// inside the old prefix clamp into the new prefix, positions past it
/// shift by the prefix length delta, and a text that no longer matches
/// the kind's prefix at all snaps the cursor to the end of `new_text`.
pub fn translate(
    old_text: &str,
    new_text: &str,
    cursor: CursorRange,
    kind: &BlockKind,
) -> CursorRange {
    let Some(re) = prefix_regex(kind) else {
        return cursor;
    };

    let old_prefix = re.find(old_text).map(|m| char_len(&old_text[..m.end()]));
    let new_prefix = re.find(new_text).map(|m| char_len(&new_text[..m.end()]));
    let new_len = char_len(new_text);

    let (Some(old_prefix), Some(new_prefix)) = (old_prefix, new_prefix) else {
        return CursorRange {
            start: new_len,
            end: new_len,
        };
    };

    let diff = new_prefix as isize - old_prefix as isize;
    let mark_edit = checklist_mark_edit(old_text, new_text, kind);

    let translate_pos = |pos: usize| -> usize {
        // Toggling the checkbox rewrites `[x]` to `[ ]` in place, so the
        // prefix length never changes; the caret still has to hop over
        // the mark position.
        match mark_edit {
            Some(MarkEdit::Removed) if pos == 4 => return 3,
            Some(MarkEdit::Inserted) if pos == 3 => return 4,
            _ => {}
        }
        let limit = if pos <= old_prefix {
            new_prefix
        } else {
            new_len
        };
        (pos as isize + diff).clamp(0, limit as isize) as usize
    };

    let start = translate_pos(cursor.start);
    let end = translate_pos(cursor.end).max(start);
    CursorRange { start, end }
}

enum MarkEdit {
    Inserted,
    Removed,
}

fn checklist_mark_edit(old_text: &str, new_text: &str, kind: &BlockKind) -> Option<MarkEdit> {
    if !matches!(kind, BlockKind::Checklist { .. }) {
        return None;
    }
    match (bracket_mark(old_text)?, bracket_mark(new_text)?) {
        (' ', 'x' | 'X') => Some(MarkEdit::Inserted),
        ('x' | 'X', ' ') => Some(MarkEdit::Removed),
        _ => None,
    }
}

fn bracket_mark(text: &str) -> Option<char> {
    static MARK_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = MARK_REGEX
        .get_or_init(|| Regex::new(r"^ *[-*+] +\[(.)\]").expect("Invalid mark regex"));
    re.captures(text)?.get(1)?.as_str().chars().next()
}

fn prefix_regex(kind: &BlockKind) -> Option<&'static Regex> {
    static HEADING_PREFIX: OnceLock<Regex> = OnceLock::new();
    static QUOTE_PREFIX: OnceLock<Regex> = OnceLock::new();
    static LIST_PREFIX: OnceLock<Regex> = OnceLock::new();
    static CHECKLIST_PREFIX: OnceLock<Regex> = OnceLock::new();
    match kind {
        BlockKind::Heading { .. } => Some(
            HEADING_PREFIX
                .get_or_init(|| Regex::new(r"^#{1,6} ").expect("Invalid heading prefix regex")),
        ),
        BlockKind::Quote { .. } => Some(
            QUOTE_PREFIX.get_or_init(|| Regex::new(r"^>+ ").expect("Invalid quote prefix regex")),
        ),
        BlockKind::List { .. } => Some(LIST_PREFIX.get_or_init(|| {
            Regex::new(r"^ *(?:[-*+]|\d+\.) ").expect("Invalid list prefix regex")
        })),
        BlockKind::Checklist { .. } => Some(CHECKLIST_PREFIX.get_or_init(|| {
            Regex::new(r"^ *[-*+] +\[[ xX]?\] ?").expect("Invalid checklist prefix regex")
        })),
        _ => None,
    }
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}
