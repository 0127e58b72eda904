use regex::Regex;
use std::sync::OnceLock;

/// Standalone image line syntax: `![alt](url "title")`.
///
/// Only whole lines count as image blocks; an image embedded in running
/// text stays part of its paragraph.
pub struct ImageLine;

impl ImageLine {
    /// Matches a full image line, returning `(alt, url, title)`.
    pub fn parse(line: &str) -> Option<(&str, &str, Option<&str>)> {
        static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
        let re = IMAGE_REGEX.get_or_init(|| {
            Regex::new(r#"^!\[([^\]]*)\]\(\s*(\S+?)(?:\s+"([^"]*)")?\s*\)$"#)
                .expect("Invalid image regex")
        });
        let caps = re.captures(line)?;
        let alt = caps.get(1).map_or("", |m| m.as_str());
        let url = caps.get(2)?.as_str();
        let title = caps.get(3).map(|m| m.as_str());
        Some((alt, url, title))
    }

    /// Renders the markdown form back from its parts.
    pub fn render(alt: &str, url: &str, title: Option<&str>) -> String {
        match title {
            Some(title) if !title.is_empty() => format!("![{alt}]({url} \"{title}\")"),
            _ => format!("![{alt}]({url})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_basic_image() {
        assert_eq!(
            ImageLine::parse("![cat](https://example.com/cat.png)"),
            Some(("cat", "https://example.com/cat.png", None))
        );
    }

    #[test]
    fn parse_image_with_title() {
        assert_eq!(
            ImageLine::parse("![cat](cat.png \"A cat\")"),
            Some(("cat", "cat.png", Some("A cat")))
        );
    }

    #[test]
    fn parse_allows_empty_alt() {
        assert_eq!(ImageLine::parse("![](x.png)"), Some(("", "x.png", None)));
    }

    #[test]
    fn parse_rejects_missing_url() {
        assert_eq!(ImageLine::parse("![alt]()"), None);
    }

    #[test]
    fn parse_rejects_trailing_text() {
        assert_eq!(ImageLine::parse("![a](x.png) and more"), None);
    }

    #[test]
    fn parse_rejects_link_syntax() {
        assert_eq!(ImageLine::parse("[not image](x.png)"), None);
    }

    #[test]
    fn render_round_trips() {
        let line = ImageLine::render("cat", "cat.png", Some("A cat"));
        assert_eq!(line, "![cat](cat.png \"A cat\")");
        assert_eq!(
            ImageLine::parse(&line),
            Some(("cat", "cat.png", Some("A cat")))
        );
    }
}
