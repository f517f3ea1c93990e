// src/site/layout.rs
//! Page chrome shared by every route.

use maud::{html, Markup, PreEscaped, DOCTYPE};

/// The site's one stylesheet, inlined into every page.
const STYLESHEET: &str = r#"
:root { color-scheme: light dark; }
body {
  max-width: 48rem;
  margin: 0 auto;
  padding: 2rem 1rem;
  font-family: system-ui, sans-serif;
  line-height: 1.6;
}
article header { margin-bottom: 2rem; }
article header time { color: #888; }
pre { padding: 1rem; border-radius: 6px; overflow-x: auto; background: #1c1c1c; color: #eee; }
blockquote { border-left: 4px solid #ccc; margin-left: 0; padding-left: 1rem; font-style: italic; }
.callout { display: flex; gap: 0.5rem; padding: 1rem; border-left: 4px solid #68a; background: rgba(100, 140, 180, 0.1); }
.block-image img { max-width: 100%; height: auto; object-fit: contain; border-radius: 6px; }
.block-image figcaption { color: #888; font-size: 0.9rem; text-align: center; }
.block-embed { width: 100%; height: 24rem; border: 1px solid #ccc; border-radius: 6px; }
.block-children { margin-left: 1rem; }
.unsupported-block { padding: 0.5rem 1rem; border-radius: 6px; background: rgba(128, 128, 128, 0.15); color: #888; font-size: 0.9rem; }
.color-gray { color: gray; } .color-brown { color: brown; } .color-orange { color: orange; }
.color-yellow { color: #b8a500; } .color-green { color: green; } .color-blue { color: #2668c6; }
.color-purple { color: purple; } .color-pink { color: #c2557f; } .color-red { color: #c62828; }
.bg-gray { background: rgba(128,128,128,0.25); } .bg-brown { background: rgba(160,110,70,0.25); }
.bg-orange { background: rgba(240,150,50,0.25); } .bg-yellow { background: rgba(230,210,60,0.25); }
.bg-green { background: rgba(80,170,90,0.25); } .bg-blue { background: rgba(70,130,210,0.25); }
.bg-purple { background: rgba(150,90,200,0.25); } .bg-pink { background: rgba(220,110,160,0.25); }
.bg-red { background: rgba(210,70,70,0.25); }
"#;

/// Wraps route content in the shared document shell.
pub fn layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                style { (PreEscaped(STYLESHEET)) }
            }
            body {
                main { (content) }
            }
        }
    }
}

/// The generic not-found page every fetch failure collapses into.
pub fn not_found_page() -> Markup {
    layout(
        "Not Found",
        html! {
            h1 { "Page not found" }
            p { "This page doesn't exist or couldn't be loaded." }
            p { a href="/" { "Back to the front page" } }
        },
    )
}
