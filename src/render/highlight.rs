// src/render/highlight.rs
//! Syntax highlighting for fenced code blocks on the markdown path.

use crate::constants::DEFAULT_SYNTAX_THEME;
use maud::html;
use std::sync::OnceLock;
use syntect::easy::HighlightLines;
use syntect::highlighting::ThemeSet;
use syntect::html::{styled_line_to_highlighted_html, IncludeBackground};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

static SYNTAX_SET: OnceLock<SyntaxSet> = OnceLock::new();
static THEME_SET: OnceLock<ThemeSet> = OnceLock::new();

fn syntax_set() -> &'static SyntaxSet {
    SYNTAX_SET.get_or_init(SyntaxSet::load_defaults_newlines)
}

fn theme_set() -> &'static ThemeSet {
    THEME_SET.get_or_init(ThemeSet::load_defaults)
}

/// Renders a complete highlighted `<pre><code>` fragment.
///
/// Language detection tries the fence token, then the syntax name and
/// extension tables, then the first line of content, before giving up
/// and highlighting as plain text. An unknown theme falls back to the
/// default rather than failing the page.
pub fn highlighted_code_block(language: &str, content: &str, theme_name: &str) -> String {
    let ss = syntax_set();
    let syntax = ss
        .find_syntax_by_token(language)
        .or_else(|| ss.find_syntax_by_name(language))
        .or_else(|| ss.find_syntax_by_extension(language))
        .or_else(|| ss.find_syntax_by_first_line(content))
        .unwrap_or_else(|| ss.find_syntax_plain_text());

    let ts = theme_set();
    let theme = ts.themes.get(theme_name).unwrap_or_else(|| {
        log::warn!(
            "Syntax theme '{}' not found; falling back to '{}'",
            theme_name,
            DEFAULT_SYNTAX_THEME
        );
        &ts.themes[DEFAULT_SYNTAX_THEME]
    });

    let mut highlighter = HighlightLines::new(syntax, theme);
    let mut body = String::new();
    for line in LinesWithEndings::from(content) {
        let highlighted = highlighter
            .highlight_line(line, ss)
            .and_then(|regions| styled_line_to_highlighted_html(&regions, IncludeBackground::No));
        match highlighted {
            Ok(hl) => body.push_str(&hl),
            Err(err) => {
                // Highlighting is cosmetic; fall back to escaped text.
                log::warn!("Highlighting failed: {}", err);
                body.push_str(&html! { (line) }.into_string());
            }
        }
    }

    let markup = html! {
        pre data-language=(language) {
            code data-language=(language) { (maud::PreEscaped(body)) }
        }
    };
    let mut fragment = markup.into_string();
    fragment.push('\n');
    fragment
}
