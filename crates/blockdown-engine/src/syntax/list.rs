/// List item and checklist syntax with owned marker knowledge.
///
/// Covers unordered bullets (`-`, `*`, `+`), ordered markers (`1.`) and
/// checklist brackets (`[ ]` / `[x]`). Indentation is spaces only, two per
/// depth level; odd indents round down.
pub struct ListMarker;

impl ListMarker {
    pub const BULLETS: [char; 3] = ['-', '*', '+'];
    pub const INDENT_WIDTH: usize = 2;

    /// Matches a list item line, returning `(depth, ordered, content)`.
    ///
    /// Checklist lines also match here (their bracket ends up in the
    /// content), so callers that care must try [`Self::parse_checklist`]
    /// first.
    pub fn parse(line: &str) -> Option<(usize, bool, &str)> {
        let (indent, rest) = split_indent(line);
        if let Some(content) = split_bullet(rest) {
            return Some((Self::depth_of_indent(indent), false, content));
        }
        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits > 0 {
            if let Some(content) = rest[digits..]
                .strip_prefix('.')
                .and_then(|after| after.strip_prefix(' '))
            {
                return Some((Self::depth_of_indent(indent), true, content));
            }
        }
        None
    }

    /// Matches a checklist line, returning `(depth, checked, content)`.
    ///
    /// The bracket mark is case-insensitive (`[x]` or `[X]`). A line that
    /// ends right after the bracket is a checklist with empty content;
    /// text glued to the closing bracket is not a checklist.
    pub fn parse_checklist(line: &str) -> Option<(usize, bool, &str)> {
        let (indent, rest) = split_indent(line);
        let after_bullet = split_bullet(rest)?.trim_start_matches(' ');
        let mark = after_bullet.strip_prefix('[')?;
        let checked = match mark.chars().next()? {
            ' ' => false,
            'x' | 'X' => true,
            _ => return None,
        };
        let after_mark = mark[1..].strip_prefix(']')?;
        let content = match after_mark.strip_prefix(' ') {
            Some(content) => content,
            None if after_mark.is_empty() => "",
            None => return None,
        };
        Some((Self::depth_of_indent(indent), checked, content))
    }

    pub fn depth_of_indent(spaces: usize) -> usize {
        spaces / Self::INDENT_WIDTH
    }

    pub fn indent(depth: usize) -> String {
        " ".repeat(depth * Self::INDENT_WIDTH)
    }

    /// Marker prefix for one rendered item, e.g. `"  - "` or `"3. "`.
    pub fn item_prefix(depth: usize, ordered: bool, index: usize) -> String {
        let mut prefix = Self::indent(depth);
        if ordered {
            prefix.push_str(&format!("{}. ", index + 1));
        } else {
            prefix.push_str("- ");
        }
        prefix
    }

    /// Marker prefix for one rendered checklist item, e.g. `"- [x] "`.
    pub fn checklist_prefix(depth: usize, checked: bool) -> String {
        let mut prefix = Self::indent(depth);
        prefix.push_str(if checked { "- [x] " } else { "- [ ] " });
        prefix
    }
}

fn split_indent(line: &str) -> (usize, &str) {
    let spaces = line.bytes().take_while(|&b| b == b' ').count();
    (spaces, &line[spaces..])
}

/// Strips `<bullet><space>` from the start, returning the rest.
fn split_bullet(rest: &str) -> Option<&str> {
    let c = rest.chars().next()?;
    if !ListMarker::BULLETS.contains(&c) {
        return None;
    }
    rest[c.len_utf8()..].strip_prefix(' ')
}
