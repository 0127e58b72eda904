//! Block sequence back to markdown text.
//!
//! Rendering is total: any block serializes, with missing or out-of-range
//! metadata falling back to defaults (heading levels clamp into 1..=6, a
//! code block without a language gets a bare fence). Inter-block spacing
//! follows one rule: a blank line between blocks, except between
//! neighbors that would have been aggregated by the parser, which join
//! with a single newline so the text round-trips.

use crate::blocks::{Block, BlockKind};
use crate::syntax::{CodeFence, Divider, Heading, ImageLine, ListMarker, Quote, TableRow};

/// Serializes blocks to markdown.
pub fn serialize_blocks(blocks: &[Block]) -> String {
    let mut out = String::new();
    for (i, block) in blocks.iter().enumerate() {
        if i > 0 {
            out.push_str(joiner(&blocks[i - 1].kind, &block.kind));
        }
        out.push_str(&render_block(block));
    }
    out
}

/// Renders one block to its full markdown form, markers included.
///
/// This is also the editing surface an active block exposes, so the live
/// classifier must be able to re-derive the block from this output.
pub fn render_block(block: &Block) -> String {
    match &block.kind {
        BlockKind::Paragraph => block.content.clone(),
        BlockKind::Heading { level } => {
            format!("{}{}", Heading::prefix(*level), block.content)
        }
        BlockKind::Code { language, .. } => {
            format!(
                "{}\n{}\n{}",
                CodeFence::opening(language.as_deref()),
                block.content,
                CodeFence::MARKER
            )
        }
        BlockKind::Quote { depth } => {
            let prefix = Quote::prefix(*depth);
            if block.content.is_empty() {
                prefix
            } else {
                block
                    .content
                    .lines()
                    .map(|line| format!("{prefix}{line}"))
                    .collect::<Vec<_>>()
                    .join("\n")
            }
        }
        BlockKind::List { ordered, depth } => {
            if block.content.is_empty() {
                ListMarker::item_prefix(*depth, *ordered, 0)
            } else {
                block
                    .content
                    .lines()
                    .enumerate()
                    .map(|(i, line)| {
                        format!("{}{}", ListMarker::item_prefix(*depth, *ordered, i), line)
                    })
                    .collect::<Vec<_>>()
                    .join("\n")
            }
        }
        BlockKind::Checklist { checked, depth } => {
            let prefix = ListMarker::checklist_prefix(*depth, *checked);
            if block.content.is_empty() {
                prefix
            } else {
                block
                    .content
                    .lines()
                    .map(|line| format!("{prefix}{line}"))
                    .collect::<Vec<_>>()
                    .join("\n")
            }
        }
        BlockKind::Divider => Divider::CANONICAL.to_string(),
        BlockKind::Image { url, title } => {
            ImageLine::render(&block.content, url, title.as_deref())
        }
        BlockKind::Table(table) => {
            if table.headers().is_empty() {
                return String::new();
            }
            let markers: Vec<String> = table
                .alignments()
                .iter()
                .map(|alignment| TableRow::alignment_marker(*alignment).to_string())
                .collect();
            let mut lines = vec![
                TableRow::render_row(table.headers()),
                TableRow::render_row(&markers),
            ];
            for row in table.rows() {
                lines.push(TableRow::render_row(row));
            }
            lines.join("\n")
        }
    }
}

/// Separator between two rendered neighbors. Equal-shaped runs that the
/// parser would re-aggregate join tightly; everything else gets a blank
/// line.
fn joiner(prev: &BlockKind, next: &BlockKind) -> &'static str {
    match (prev, next) {
        (BlockKind::Quote { depth: a }, BlockKind::Quote { depth: b }) if a == b => "\n",
        (
            BlockKind::List {
                ordered: prev_ordered,
                depth: prev_depth,
            },
            BlockKind::List { ordered, depth },
        ) if prev_ordered == ordered && prev_depth == depth => "\n",
        (BlockKind::Checklist { .. }, BlockKind::Checklist { .. }) => "\n",
        _ => "\n\n",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::{Alignment, TableData};

    #[test]
    fn paragraph_renders_content_verbatim() {
        let block = Block::with_content(BlockKind::Paragraph, "plain text");
        assert_eq!(render_block(&block), "plain text");
    }

    #[test]
    fn heading_renders_hashes() {
        let block = Block::with_content(BlockKind::Heading { level: 3 }, "Section");
        assert_eq!(render_block(&block), "### Section");
    }

    #[test]
    fn heading_clamps_invalid_levels() {
        let low = Block::with_content(BlockKind::Heading { level: 0 }, "x");
        let high = Block::with_content(BlockKind::Heading { level: 9 }, "x");
        assert_eq!(render_block(&low), "# x");
        assert_eq!(render_block(&high), "###### x");
    }

    #[test]
    fn code_without_language_gets_bare_fence() {
        let block = Block::with_content(
            BlockKind::Code {
                language: None,
                show_line_numbers: false,
            },
            "let x = 1;",
        );
        assert_eq!(render_block(&block), "```\nlet x = 1;\n```");
    }

    #[test]
    fn code_with_language_tags_the_fence() {
        let block = Block::with_content(
            BlockKind::Code {
                language: Some("rust".to_string()),
                show_line_numbers: true,
            },
            "let x = 1;",
        );
        assert_eq!(render_block(&block), "```rust\nlet x = 1;\n```");
    }

    #[test]
    fn quote_prefixes_every_content_line() {
        let block = Block::with_content(BlockKind::Quote { depth: 1 }, "a\nb");
        assert_eq!(render_block(&block), ">> a\n>> b");
    }

    #[test]
    fn empty_quote_renders_bare_prefix() {
        let block = Block::new(BlockKind::Quote { depth: 0 });
        assert_eq!(render_block(&block), "> ");
    }

    #[test]
    fn ordered_list_numbers_items_from_one() {
        let block = Block::with_content(
            BlockKind::List {
                ordered: true,
                depth: 0,
            },
            "a\nb\nc",
        );
        assert_eq!(render_block(&block), "1. a\n2. b\n3. c");
    }

    #[test]
    fn nested_list_indents_two_spaces_per_depth() {
        let block = Block::with_content(
            BlockKind::List {
                ordered: false,
                depth: 2,
            },
            "deep",
        );
        assert_eq!(render_block(&block), "    - deep");
    }

    #[test]
    fn checklist_renders_marks() {
        let todo = Block::with_content(
            BlockKind::Checklist {
                checked: false,
                depth: 0,
            },
            "a\nb",
        );
        let done = Block::with_content(
            BlockKind::Checklist {
                checked: true,
                depth: 0,
            },
            "c",
        );
        assert_eq!(render_block(&todo), "- [ ] a\n- [ ] b");
        assert_eq!(render_block(&done), "- [x] c");
    }

    #[test]
    fn image_renders_alt_from_content() {
        let block = Block::with_content(
            BlockKind::Image {
                url: "pic.png".to_string(),
                title: Some("Caption".to_string()),
            },
            "alt text",
        );
        assert_eq!(render_block(&block), "![alt text](pic.png \"Caption\")");
    }

    #[test]
    fn table_renders_header_alignment_and_rows() {
        let table = TableData::new(
            vec!["h1".into(), "h2".into()],
            vec![Alignment::Center, Alignment::Right],
            vec![vec!["a".into(), "b".into()]],
        );
        let block = Block::new(BlockKind::Table(table));
        assert_eq!(
            render_block(&block),
            "| h1 | h2 |\n| :---: | ---: |\n| a | b |"
        );
    }

    #[test]
    fn headerless_table_serializes_to_nothing() {
        let table = TableData::new(vec![], vec![], vec![]);
        let block = Block::new(BlockKind::Table(table));
        assert_eq!(render_block(&block), "");
    }

    #[test]
    fn blocks_join_with_blank_line_by_default() {
        let blocks = vec![
            Block::with_content(BlockKind::Heading { level: 1 }, "Title"),
            Block::with_content(BlockKind::Paragraph, "body"),
        ];
        assert_eq!(serialize_blocks(&blocks), "# Title\n\nbody");
    }

    #[test]
    fn equal_depth_quotes_join_tightly() {
        let blocks = vec![
            Block::with_content(BlockKind::Quote { depth: 0 }, "a"),
            Block::with_content(BlockKind::Quote { depth: 0 }, "b"),
            Block::with_content(BlockKind::Quote { depth: 1 }, "c"),
        ];
        assert_eq!(serialize_blocks(&blocks), "> a\n> b\n\n>> c");
    }

    #[test]
    fn matching_list_blocks_join_tightly() {
        let blocks = vec![
            Block::with_content(
                BlockKind::List {
                    ordered: false,
                    depth: 0,
                },
                "a",
            ),
            Block::with_content(
                BlockKind::List {
                    ordered: false,
                    depth: 1,
                },
                "b",
            ),
        ];
        // Depth differs, so these two keep the blank line.
        assert_eq!(serialize_blocks(&blocks), "- a\n\n  - b");
    }

    #[test]
    fn checklists_always_join_tightly() {
        let blocks = vec![
            Block::with_content(
                BlockKind::Checklist {
                    checked: false,
                    depth: 0,
                },
                "todo",
            ),
            Block::with_content(
                BlockKind::Checklist {
                    checked: true,
                    depth: 0,
                },
                "done",
            ),
        ];
        assert_eq!(serialize_blocks(&blocks), "- [ ] todo\n- [x] done");
    }

    #[test]
    fn empty_block_list_serializes_to_empty_string() {
        assert_eq!(serialize_blocks(&[]), "");
    }

    #[test]
    fn mixed_document_snapshot() {
        let blocks = vec![
            Block::with_content(BlockKind::Heading { level: 1 }, "Title"),
            Block::with_content(BlockKind::Paragraph, "Intro text."),
            Block::with_content(
                BlockKind::List {
                    ordered: false,
                    depth: 0,
                },
                "one\ntwo",
            ),
            Block::with_content(
                BlockKind::Code {
                    language: Some("rust".to_string()),
                    show_line_numbers: false,
                },
                "fn main() {}",
            ),
            Block::new(BlockKind::Divider),
        ];
        insta::assert_snapshot!(serialize_blocks(&blocks), @r"
        # Title

        Intro text.

        - one
        - two

        ```rust
        fn main() {}
        ```

        ---
        ");
    }
}
