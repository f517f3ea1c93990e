//! Rich text spans — the atomic inline unit of Notion content.

use super::Color;
use serde::{Deserialize, Serialize};

/// Style annotations on a rich text span.
///
/// The booleans are independent and may combine arbitrarily; `color`
/// carries the `Default` sentinel when no override applies.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Annotations {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub underline: bool,
    pub code: bool,
    pub color: Color,
}

impl Annotations {
    /// Whether any styling is applied at all.
    pub fn is_plain(&self) -> bool {
        !self.bold
            && !self.italic
            && !self.strikethrough
            && !self.underline
            && !self.code
            && self.color == Color::Default
    }
}

/// One styled run of inline text within a block.
///
/// The wire representation carries a `text`/`mention`/`equation` payload
/// too, but `plain_text` is the API's own fallback rendering of every
/// variant, and it is all this site needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichTextItem {
    pub plain_text: String,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub annotations: Annotations,
}

impl RichTextItem {
    /// Create a plain unstyled span — the most common variant, and the
    /// vocabulary for building content in tests.
    pub fn plain(text: &str) -> Self {
        Self {
            plain_text: text.to_string(),
            href: None,
            annotations: Annotations::default(),
        }
    }

    /// Create a hyperlinked span.
    pub fn link(text: &str, href: &str) -> Self {
        Self {
            plain_text: text.to_string(),
            href: Some(href.to_string()),
            annotations: Annotations::default(),
        }
    }
}

/// Concatenates the plain text of a span run, dropping all styling.
///
/// Used wherever markup cannot nest: headings, code content, captions,
/// page titles.
pub fn plain_text_of(items: &[RichTextItem]) -> String {
    items
        .iter()
        .map(|item| item.plain_text.as_str())
        .collect::<Vec<_>>()
        .join("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_span_has_no_styling() {
        assert!(RichTextItem::plain("hello").annotations.is_plain());
    }

    #[test]
    fn test_plain_text_concatenation() {
        let items = vec![RichTextItem::plain("Hello "), RichTextItem::plain("World")];
        assert_eq!(plain_text_of(&items), "Hello World");
    }
}
