//! Whole-document parsing: markdown text into an ordered block sequence.
//!
//! A single forward pass over lines. Most lines map straight to a block
//! via [`classify_line`]; paragraphs, fenced code and list runs accumulate
//! in an open run that is flushed on a blank line, on a construct change
//! or at end of input. Tables are the one place that needs lookahead: a
//! pipe row only starts a table when the following line is a valid
//! alignment row.

use log::debug;

use crate::blocks::{Block, BlockKind, TableData};
use crate::syntax::{CodeFence, LineKind, TableRow, classify_line};

/// Parses markdown into blocks.
///
/// Total: never fails, and always yields at least one block. Blank or
/// whitespace-only input yields exactly one empty paragraph.
pub fn parse_markdown(markdown: &str) -> Vec<Block> {
    Parser::new(markdown).run()
}

/// Lines accumulated toward a block that is still open.
#[derive(Debug)]
enum OpenRun<'a> {
    None,
    Paragraph(Vec<&'a str>),
    Fence {
        language: String,
        lines: Vec<&'a str>,
    },
    List {
        ordered: bool,
        depth: usize,
        items: Vec<&'a str>,
    },
    Checklist {
        checked: bool,
        depth: usize,
        items: Vec<&'a str>,
    },
}

struct Parser<'a> {
    lines: Vec<&'a str>,
    pos: usize,
    open: OpenRun<'a>,
    out: Vec<Block>,
}

impl<'a> Parser<'a> {
    fn new(markdown: &'a str) -> Self {
        Self {
            lines: markdown.lines().collect(),
            pos: 0,
            open: OpenRun::None,
            out: vec![],
        }
    }

    fn run(mut self) -> Vec<Block> {
        while self.pos < self.lines.len() {
            let line = self.lines[self.pos];
            if self.in_fence() {
                self.consume_fence_line(line);
                self.pos += 1;
                continue;
            }
            if self.try_table() {
                // Table consumption advanced `pos` past its rows already.
                continue;
            }
            self.consume_line(line);
            self.pos += 1;
        }
        self.flush_open();
        if self.out.is_empty() {
            self.out.push(Block::empty_paragraph());
        }
        self.out
    }

    fn consume_line(&mut self, line: &'a str) {
        match classify_line(line) {
            LineKind::Blank => self.flush_open(),
            LineKind::Fence { tag } => {
                self.flush_open();
                self.open = OpenRun::Fence {
                    language: CodeFence::language_of(tag),
                    lines: vec![],
                };
            }
            LineKind::Heading { level, content } => {
                self.flush_open();
                self.out
                    .push(Block::with_content(BlockKind::Heading { level }, content));
            }
            LineKind::Quote { depth, content } => {
                // Quote lines never aggregate: one block per line.
                self.flush_open();
                self.out
                    .push(Block::with_content(BlockKind::Quote { depth }, content));
            }
            LineKind::Divider => {
                self.flush_open();
                self.out.push(Block::new(BlockKind::Divider));
            }
            LineKind::Image { alt, url, title } => {
                self.flush_open();
                self.out.push(Block::with_content(
                    BlockKind::Image {
                        url: url.to_string(),
                        title: title.map(str::to_string),
                    },
                    alt,
                ));
            }
            LineKind::Checklist {
                depth,
                checked,
                content,
            } => self.extend_checklist(depth, checked, content),
            LineKind::ListItem {
                depth,
                ordered,
                content,
            } => self.extend_list(depth, ordered, content),
            LineKind::Text => self.extend_paragraph(line),
        }
    }

    fn in_fence(&self) -> bool {
        matches!(self.open, OpenRun::Fence { .. })
    }

    fn consume_fence_line(&mut self, line: &'a str) {
        if CodeFence::is_fence(line) {
            // Closing fence: flush the accumulated code block.
            self.flush_open();
        } else if let OpenRun::Fence { lines, .. } = &mut self.open {
            lines.push(line);
        }
    }

    fn extend_paragraph(&mut self, line: &'a str) {
        if let OpenRun::Paragraph(lines) = &mut self.open {
            lines.push(line);
            return;
        }
        self.flush_open();
        self.open = OpenRun::Paragraph(vec![line]);
    }

    fn extend_list(&mut self, depth: usize, ordered: bool, content: &'a str) {
        if let OpenRun::List {
            ordered: open_ordered,
            depth: open_depth,
            items,
        } = &mut self.open
            && *open_ordered == ordered
            && *open_depth == depth
        {
            items.push(content);
            return;
        }
        // Marker style or depth changed: the run splits into a new block.
        self.flush_open();
        self.open = OpenRun::List {
            ordered,
            depth,
            items: vec![content],
        };
    }

    fn extend_checklist(&mut self, depth: usize, checked: bool, content: &'a str) {
        if let OpenRun::Checklist {
            checked: open_checked,
            depth: open_depth,
            items,
        } = &mut self.open
            && *open_checked == checked
            && *open_depth == depth
        {
            items.push(content);
            return;
        }
        self.flush_open();
        self.open = OpenRun::Checklist {
            checked,
            depth,
            items: vec![content],
        };
    }

    /// Attempts the table lookahead at the current position. Returns true
    /// if a table was consumed; `pos` then points past its last row.
    fn try_table(&mut self) -> bool {
        let header = self.lines[self.pos];
        if !TableRow::is_row(header) {
            return false;
        }
        let alignments = match self
            .lines
            .get(self.pos + 1)
            .and_then(|line| TableRow::parse_alignment_row(line))
        {
            Some(alignments) => alignments,
            // No alignment row: the pipes are just paragraph text.
            None => return false,
        };
        self.flush_open();
        let headers = TableRow::cells(header);
        self.pos += 2;
        let mut rows = Vec::new();
        while let Some(&line) = self.lines.get(self.pos) {
            if line.trim().is_empty() || !TableRow::is_row(line) {
                break;
            }
            rows.push(TableRow::cells(line));
            self.pos += 1;
        }
        debug!(
            "table detected: {} columns, {} data rows",
            headers.len(),
            rows.len()
        );
        self.out
            .push(Block::new(BlockKind::Table(TableData::new(
                headers, alignments, rows,
            ))));
        true
    }

    fn flush_open(&mut self) {
        match std::mem::replace(&mut self.open, OpenRun::None) {
            OpenRun::None => {}
            OpenRun::Paragraph(lines) => self
                .out
                .push(Block::with_content(BlockKind::Paragraph, lines.join("\n"))),
            OpenRun::Fence { language, lines } => {
                // An unterminated fence at EOF flushes what it gathered.
                self.out.push(Block::with_content(
                    BlockKind::Code {
                        language: Some(language),
                        show_line_numbers: false,
                    },
                    lines.join("\n"),
                ));
            }
            OpenRun::List {
                ordered,
                depth,
                items,
            } => self.out.push(Block::with_content(
                BlockKind::List { ordered, depth },
                items.join("\n"),
            )),
            OpenRun::Checklist {
                checked,
                depth,
                items,
            } => self.out.push(Block::with_content(
                BlockKind::Checklist { checked, depth },
                items.join("\n"),
            )),
        }
    }
}
