/// ATX heading syntax with owned marker knowledge.
///
/// All heading pattern knowledge lives here, shared by the document parser
/// and the live classifier.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: u8 = 6;

    /// Matches `#{1,} ` at the start of a line, returning `(level, content)`.
    ///
    /// Runs longer than six hashes still classify as a heading, capped at
    /// level 6. Content is everything after the first space, untrimmed, so
    /// a round trip through the serializer is byte-stable.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let hashes = line.bytes().take_while(|&b| b == Self::MARKER as u8).count();
        if hashes == 0 {
            return None;
        }
        let content = line[hashes..].strip_prefix(' ')?;
        let level = hashes.min(Self::MAX_LEVEL as usize) as u8;
        Some((level, content))
    }

    /// Clamps an arbitrary level into the valid `1..=6` range.
    pub fn clamp_level(level: u8) -> u8 {
        level.clamp(1, Self::MAX_LEVEL)
    }

    /// Marker prefix for a level, e.g. `"## "` for level 2.
    pub fn prefix(level: u8) -> String {
        let level = Self::clamp_level(level) as usize;
        let mut prefix = Self::MARKER.to_string().repeat(level);
        prefix.push(' ');
        prefix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_level_one() {
        assert_eq!(Heading::parse("# Title"), Some((1, "Title")));
    }

    #[test]
    fn parse_level_six() {
        assert_eq!(Heading::parse("###### Deep"), Some((6, "Deep")));
    }

    #[test]
    fn parse_caps_overlong_runs_at_six() {
        assert_eq!(Heading::parse("####### Deeper"), Some((6, "Deeper")));
    }

    #[test]
    fn parse_requires_space_after_hashes() {
        assert_eq!(Heading::parse("#Title"), None);
        assert_eq!(Heading::parse("#"), None);
    }

    #[test]
    fn parse_allows_empty_content() {
        assert_eq!(Heading::parse("## "), Some((2, "")));
    }

    #[test]
    fn parse_keeps_extra_spaces_in_content() {
        assert_eq!(Heading::parse("#   indented"), Some((1, "  indented")));
    }

    #[test]
    fn prefix_clamps_out_of_range_levels() {
        assert_eq!(Heading::prefix(0), "# ");
        assert_eq!(Heading::prefix(9), "###### ");
    }
}
