// src/render/markdown_html.rs
//! Generic markdown-to-HTML rendering — the second half of the
//! alternate strategy.
//!
//! pulldown-cmark does the heavy lifting, configured with the tables
//! and strikethrough extensions. Two event overrides: fenced code
//! blocks go through syntect instead of the stock `<pre>`, and images
//! render through the fixed-dimension component.

use super::highlight::highlighted_code_block;
use crate::constants::{DEFAULT_CODE_LANGUAGE, IMAGE_DISPLAY_HEIGHT, IMAGE_DISPLAY_WIDTH};
use maud::{html, Markup, PreEscaped};
use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd};

/// Renders a markdown string to HTML markup.
pub fn render_markdown(content: &str, theme: &str) -> Markup {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let mut events = Vec::new();
    let mut code: Option<CodeCapture> = None;
    let mut image: Option<ImageCapture> = None;

    for event in Parser::new_ext(content, options) {
        match event {
            Event::Start(Tag::CodeBlock(ref kind)) => {
                let language = match kind {
                    CodeBlockKind::Fenced(fence) if !fence.is_empty() => fence.to_string(),
                    _ => DEFAULT_CODE_LANGUAGE.to_string(),
                };
                code = Some(CodeCapture {
                    language,
                    content: String::new(),
                });
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some(capture) = code.take() {
                    let fragment =
                        highlighted_code_block(&capture.language, &capture.content, theme);
                    events.push(Event::Html(fragment.into()));
                }
            }
            Event::Start(Tag::Image { dest_url, .. }) => {
                image = Some(ImageCapture {
                    src: dest_url.to_string(),
                    alt: String::new(),
                });
            }
            Event::End(TagEnd::Image) => {
                if let Some(capture) = image.take() {
                    let fragment = fixed_image(&capture.src, &capture.alt).into_string();
                    events.push(Event::Html(fragment.into()));
                }
            }
            Event::Text(text) => {
                if let Some(capture) = code.as_mut() {
                    capture.content.push_str(&text);
                } else if let Some(capture) = image.as_mut() {
                    capture.alt.push_str(&text);
                } else {
                    events.push(Event::Text(text));
                }
            }
            other => events.push(other),
        }
    }

    let mut html_output = String::new();
    pulldown_cmark::html::push_html(&mut html_output, events.into_iter());
    PreEscaped(html_output)
}

struct CodeCapture {
    language: String,
    content: String,
}

struct ImageCapture {
    src: String,
    alt: String,
}

/// The fixed-dimension image component.
fn fixed_image(src: &str, alt: &str) -> Markup {
    html! {
        figure class="block-image" {
            img src=(src) alt=(alt) width=(IMAGE_DISPLAY_WIDTH) height=(IMAGE_DISPLAY_HEIGHT);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_SYNTAX_THEME;

    #[test]
    fn test_tables_extension_enabled() {
        let md = "| a | b |\n|---|---|\n| 1 | 2 |\n";
        let html = render_markdown(md, DEFAULT_SYNTAX_THEME).into_string();
        assert!(html.contains("<table>"));
    }

    #[test]
    fn test_strikethrough_extension_enabled() {
        let html = render_markdown("~~gone~~", DEFAULT_SYNTAX_THEME).into_string();
        assert!(html.contains("<del>"));
    }

    #[test]
    fn test_code_block_is_highlighted() {
        let md = "```rust\nfn main() {}\n```\n";
        let html = render_markdown(md, DEFAULT_SYNTAX_THEME).into_string();
        assert!(html.contains("data-language=\"rust\""));
        // syntect output wraps tokens in spans; the stock renderer would not.
        assert!(html.contains("<span"));
    }

    #[test]
    fn test_image_renders_with_fixed_dimensions() {
        let md = "![a caption](https://example.com/pic.png)";
        let html = render_markdown(md, DEFAULT_SYNTAX_THEME).into_string();
        assert!(html.contains("src=\"https://example.com/pic.png\""));
        assert!(html.contains("width=\"800\""));
        assert!(html.contains("height=\"400\""));
        assert!(html.contains("alt=\"a caption\""));
    }
}
