/// Fenced code block syntax with owned delimiter knowledge.
pub struct CodeFence;

impl CodeFence {
    pub const MARKER: &'static str = "```";

    /// Language stored when a fence opens with no tag.
    pub const DEFAULT_LANGUAGE: &'static str = "plaintext";

    /// Matches a fence line, returning the trimmed info tag.
    ///
    /// `"```"` yields `Some("")`, `"```rust"` yields `Some("rust")`.
    /// Fences are only recognized at column zero.
    pub fn parse(line: &str) -> Option<&str> {
        line.strip_prefix(Self::MARKER).map(str::trim)
    }

    pub fn is_fence(line: &str) -> bool {
        Self::parse(line).is_some()
    }

    /// Opening fence line for a language, e.g. `"```rust"`.
    pub fn opening(language: Option<&str>) -> String {
        match language {
            Some(tag) if !tag.is_empty() => format!("{}{}", Self::MARKER, tag),
            _ => Self::MARKER.to_string(),
        }
    }

    /// Resolves an opening tag to the stored language.
    pub fn language_of(tag: &str) -> String {
        if tag.is_empty() {
            Self::DEFAULT_LANGUAGE.to_string()
        } else {
            tag.to_string()
        }
    }
}
