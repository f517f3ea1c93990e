// src/render/rich_text.rs
//! Inline span rendering.
//!
//! Each annotation wraps the span in its semantic element; a span with
//! no annotations and no link renders as bare escaped text with no
//! wrapper at all.

use crate::types::{Annotations, RichTextItem};
use maud::{html, Markup};
use url::Url;

/// Renders a run of spans in order.
pub fn render_spans(items: &[RichTextItem]) -> Markup {
    html! {
        @for item in items {
            (render_span(item))
        }
    }
}

fn render_span(item: &RichTextItem) -> Markup {
    let base = match item.href.as_deref().and_then(safe_href) {
        Some(href) => html! { a href=(href) { (item.plain_text) } },
        None => html! { (item.plain_text) },
    };
    apply_annotations(base, &item.annotations)
}

fn apply_annotations(inner: Markup, annotations: &Annotations) -> Markup {
    let mut markup = inner;
    if annotations.code {
        markup = html! { code { (markup) } };
    }
    if annotations.underline {
        markup = html! { u { (markup) } };
    }
    if annotations.strikethrough {
        markup = html! { del { (markup) } };
    }
    if annotations.italic {
        markup = html! { em { (markup) } };
    }
    if annotations.bold {
        markup = html! { strong { (markup) } };
    }
    if let Some(class) = annotations.color.css_class() {
        markup = html! { span class=(class) { (markup) } };
    }
    markup
}

/// Accepts only link targets with a scheme safe to emit into an href.
fn safe_href(href: &str) -> Option<&str> {
    let parsed = Url::parse(href).ok()?;
    match parsed.scheme() {
        "http" | "https" | "mailto" => Some(href),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_span_has_no_wrapper() {
        let items = vec![RichTextItem::plain("just text")];
        assert_eq!(render_spans(&items).into_string(), "just text");
    }

    #[test]
    fn test_plain_text_is_escaped() {
        let items = vec![RichTextItem::plain("a < b & c")];
        assert_eq!(render_spans(&items).into_string(), "a &lt; b &amp; c");
    }

    #[test]
    fn test_link_span() {
        let items = vec![RichTextItem::link("docs", "https://example.com/docs")];
        assert_eq!(
            render_spans(&items).into_string(),
            "<a href=\"https://example.com/docs\">docs</a>"
        );
    }

    #[test]
    fn test_unsafe_link_scheme_renders_as_text() {
        let items = vec![RichTextItem::link("click", "javascript:alert(1)")];
        assert_eq!(render_spans(&items).into_string(), "click");
    }

    #[test]
    fn test_annotations_combine() {
        let mut item = RichTextItem::plain("hot");
        item.annotations.bold = true;
        item.annotations.italic = true;
        assert_eq!(
            render_spans(&[item]).into_string(),
            "<strong><em>hot</em></strong>"
        );
    }

    #[test]
    fn test_color_wrapper() {
        let mut item = RichTextItem::plain("warn");
        item.annotations.color = Color::Red;
        assert_eq!(
            render_spans(&[item]).into_string(),
            "<span class=\"color-red\">warn</span>"
        );
    }
}
