/// Thematic break syntax.
///
/// Only the three exact forms count; longer runs like `----` stay
/// paragraphs.
pub struct Divider;

impl Divider {
    pub const FORMS: [&'static str; 3] = ["---", "***", "___"];

    /// The form the serializer emits.
    pub const CANONICAL: &'static str = "---";

    pub fn matches(line: &str) -> bool {
        Self::FORMS.contains(&line.trim())
    }
}
