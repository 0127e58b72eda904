//! Markdown construct knowledge, one file per construct.
//!
//! Every pattern the engine recognizes lives in exactly one of these
//! modules; the document parser, the live classifier and the serializer
//! all consult the same rules, so a construct's syntax is never defined
//! twice. [`classify_line`] holds the precedence order for whole-document
//! parsing.

pub mod code_fence;
pub mod divider;
pub mod heading;
pub mod image;
pub mod list;
pub mod quote;
pub mod table;

pub use code_fence::CodeFence;
pub use divider::Divider;
pub use heading::Heading;
pub use image::ImageLine;
pub use list::ListMarker;
pub use quote::Quote;
pub use table::TableRow;

/// Local classification of one raw line, before any aggregation or
/// multi-line context is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    Fence { tag: &'a str },
    Heading { level: u8, content: &'a str },
    Quote { depth: usize, content: &'a str },
    Divider,
    Image {
        alt: &'a str,
        url: &'a str,
        title: Option<&'a str>,
    },
    Checklist {
        depth: usize,
        checked: bool,
        content: &'a str,
    },
    ListItem {
        depth: usize,
        ordered: bool,
        content: &'a str,
    },
    Text,
}

/// Classifies one line by the parser's precedence order:
/// blank, fence, heading, quote, divider, image, checklist, list item,
/// plain text. Checklist must come before list item because every
/// checklist line is also a valid list line. Fence interior lines and
/// table rows are context-dependent and handled by the parser itself.
pub fn classify_line(line: &str) -> LineKind<'_> {
    if line.trim().is_empty() {
        return LineKind::Blank;
    }
    if let Some(tag) = CodeFence::parse(line) {
        return LineKind::Fence { tag };
    }
    if let Some((level, content)) = Heading::parse(line) {
        return LineKind::Heading { level, content };
    }
    if let Some((depth, content)) = Quote::parse(line) {
        return LineKind::Quote { depth, content };
    }
    if Divider::matches(line) {
        return LineKind::Divider;
    }
    if let Some((alt, url, title)) = ImageLine::parse(line) {
        return LineKind::Image { alt, url, title };
    }
    if let Some((depth, checked, content)) = ListMarker::parse_checklist(line) {
        return LineKind::Checklist {
            depth,
            checked,
            content,
        };
    }
    if let Some((depth, ordered, content)) = ListMarker::parse(line) {
        return LineKind::ListItem {
            depth,
            ordered,
            content,
        };
    }
    LineKind::Text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_covers_whitespace_only() {
        assert_eq!(classify_line(""), LineKind::Blank);
        assert_eq!(classify_line("   "), LineKind::Blank);
    }

    #[test]
    fn checklist_wins_over_list() {
        assert!(matches!(
            classify_line("- [ ] task"),
            LineKind::Checklist { checked: false, .. }
        ));
        assert!(matches!(classify_line("- task"), LineKind::ListItem { .. }));
    }

    #[test]
    fn quote_wins_over_list_inside_marker() {
        assert!(matches!(
            classify_line("> - quoted bullet"),
            LineKind::Quote { depth: 0, .. }
        ));
    }

    #[test]
    fn divider_is_not_a_list_item() {
        assert_eq!(classify_line("---"), LineKind::Divider);
    }

    #[test]
    fn pipe_rows_are_plain_text_here() {
        // Table detection needs lookahead; locally a row is just text.
        assert_eq!(classify_line("| a | b |"), LineKind::Text);
    }

    #[test]
    fn fence_with_tag() {
        assert_eq!(classify_line("```rust"), LineKind::Fence { tag: "rust" });
    }
}
