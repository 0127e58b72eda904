use crate::blocks::Alignment;

/// Pipe table syntax: row shape, cell splitting and the alignment row
/// that gates table detection.
pub struct TableRow;

impl TableRow {
    pub const PIPE: char = '|';

    /// A table row candidate starts with a pipe once trimmed.
    pub fn is_row(line: &str) -> bool {
        line.trim().starts_with(Self::PIPE)
    }

    /// Splits a row into trimmed cells, dropping the outer pipes.
    pub fn cells(line: &str) -> Vec<String> {
        let trimmed = line.trim();
        let inner = trimmed.strip_prefix(Self::PIPE).unwrap_or(trimmed);
        let inner = inner.strip_suffix(Self::PIPE).unwrap_or(inner);
        inner
            .split(Self::PIPE)
            .map(|cell| cell.trim().to_string())
            .collect()
    }

    /// Matches one alignment cell (`:?-+:?`).
    pub fn alignment_of_cell(cell: &str) -> Option<Alignment> {
        let (colon_left, rest) = match cell.strip_prefix(':') {
            Some(rest) => (true, rest),
            None => (false, cell),
        };
        let (colon_right, dashes) = match rest.strip_suffix(':') {
            Some(rest) => (true, rest),
            None => (false, rest),
        };
        if dashes.is_empty() || !dashes.bytes().all(|b| b == b'-') {
            return None;
        }
        Some(match (colon_left, colon_right) {
            (true, true) => Alignment::Center,
            (false, true) => Alignment::Right,
            _ => Alignment::Left,
        })
    }

    /// Matches a whole alignment row; every cell must be an alignment
    /// cell. This row is what separates a real table from a paragraph
    /// that happens to contain pipes.
    pub fn parse_alignment_row(line: &str) -> Option<Vec<Alignment>> {
        if !Self::is_row(line) {
            return None;
        }
        Self::cells(line)
            .iter()
            .map(|cell| Self::alignment_of_cell(cell))
            .collect()
    }

    pub fn alignment_marker(alignment: Alignment) -> &'static str {
        match alignment {
            Alignment::Left => "---",
            Alignment::Center => ":---:",
            Alignment::Right => "---:",
        }
    }

    /// Renders cells back to the canonical `| a | b |` form.
    pub fn render_row(cells: &[String]) -> String {
        format!("| {} |", cells.join(" | "))
    }
}
