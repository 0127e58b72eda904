/// Blockquote syntax with owned marker knowledge.
pub struct Quote;

impl Quote {
    pub const MARKER: char = '>';

    /// Matches a `>`-run at the start of a line, returning `(depth, content)`.
    ///
    /// Depth counts nesting beyond the first marker: `"> x"` is depth 0,
    /// `">> x"` depth 1. A marker-only line (`">"`, `">>"`) is a valid
    /// empty quote. A marker glued to text with no space (`">x"`) is not a
    /// quote at all and falls through to the caller's next rule.
    pub fn parse(line: &str) -> Option<(usize, &str)> {
        let markers = line.bytes().take_while(|&b| b == Self::MARKER as u8).count();
        if markers == 0 {
            return None;
        }
        let rest = &line[markers..];
        if rest.is_empty() {
            return Some((markers - 1, ""));
        }
        let content = rest.strip_prefix(' ')?;
        Some((markers - 1, content))
    }

    /// Marker prefix for a depth, e.g. `">> "` for depth 1.
    pub fn prefix(depth: usize) -> String {
        let mut prefix = Self::MARKER.to_string().repeat(depth + 1);
        prefix.push(' ');
        prefix
    }
}
