// src/render/html.rs
//! The block renderer — a pure function from blocks to markup.
//!
//! Dispatch is an exhaustive match over the closed block set; adding a
//! variant without a rendering rule is a compile error. Children were
//! resolved at fetch time, so recursion here re-runs only group→render.

use super::group::{group_blocks, ListKind, RenderNode};
use super::rich_text::render_spans;
use crate::constants::{
    DEFAULT_CALLOUT_ICON, DEFAULT_CODE_LANGUAGE, IMAGE_DISPLAY_HEIGHT, IMAGE_DISPLAY_WIDTH,
};
use crate::model::{Block, Icon};
use crate::types::plain_text_of;
use maud::{html, Markup};

/// Renders an ordered block sequence: group list runs, then render each
/// node in position.
pub fn render_blocks(blocks: &[Block]) -> Markup {
    let nodes = group_blocks(blocks);
    html! {
        @for node in &nodes {
            (render_node(node))
        }
    }
}

fn render_node(node: &RenderNode) -> Markup {
    match node {
        RenderNode::Single(block) => render_block(block),
        RenderNode::List { kind, items } => match kind {
            ListKind::Bulleted => html! {
                ul {
                    @for item in items { (render_list_item(item)) }
                }
            },
            ListKind::Numbered => html! {
                ol {
                    @for item in items { (render_list_item(item)) }
                }
            },
        },
    }
}

/// Renders a single non-grouped block.
pub fn render_block(block: &Block) -> Markup {
    match block {
        Block::Paragraph(b) => html! {
            p { (render_spans(&b.content.rich_text)) }
            @if !b.common.children.is_empty() {
                div class="block-children" { (render_blocks(&b.common.children)) }
            }
        },
        // Headings drop styling and links; only the text survives.
        Block::Heading1(b) => html! { h1 { (plain_text_of(&b.content.rich_text)) } },
        Block::Heading2(b) => html! { h2 { (plain_text_of(&b.content.rich_text)) } },
        Block::Heading3(b) => html! { h3 { (plain_text_of(&b.content.rich_text)) } },
        // List items reaching this path were not grouped (single item
        // inside another container); render them as a one-item list.
        Block::BulletedListItem(_) => html! { ul { (render_list_item(block)) } },
        Block::NumberedListItem(_) => html! { ol { (render_list_item(block)) } },
        Block::Code(b) => {
            let language = b.language.as_deref().unwrap_or(DEFAULT_CODE_LANGUAGE);
            html! {
                pre {
                    code class=(format!("language-{}", language)) {
                        (plain_text_of(&b.content.rich_text))
                    }
                }
            }
        }
        Block::Quote(b) => html! {
            blockquote {
                (render_spans(&b.content.rich_text))
                @if !b.common.children.is_empty() {
                    (render_blocks(&b.common.children))
                }
            }
        },
        Block::Divider(_) => html! { hr; },
        Block::Image(b) => {
            let alt = plain_text_of(&b.caption);
            html! {
                figure class="block-image" {
                    img src=(b.image.url()) alt=(alt)
                        width=(IMAGE_DISPLAY_WIDTH) height=(IMAGE_DISPLAY_HEIGHT);
                    @if !b.caption.is_empty() {
                        figcaption { (render_spans(&b.caption)) }
                    }
                }
            }
        }
        Block::Toggle(b) => html! {
            details {
                summary { (render_spans(&b.content.rich_text)) }
                (render_blocks(&b.common.children))
            }
        },
        Block::Callout(b) => {
            let glyph = match &b.icon {
                Some(Icon::Emoji { emoji }) => emoji.as_str(),
                _ => DEFAULT_CALLOUT_ICON,
            };
            html! {
                aside class="callout" {
                    span class="callout-icon" { (glyph) }
                    div class="callout-body" {
                        (render_spans(&b.content.rich_text))
                        @if !b.common.children.is_empty() {
                            (render_blocks(&b.common.children))
                        }
                    }
                }
            }
        }
        Block::Embed(b) => html! {
            iframe class="block-embed" src=(b.url) title="Embedded content" {}
        },
        Block::ChildPage(b) => html! {
            p class="child-page" {
                a href=(format!("/{}", b.common.id.as_str())) { (b.title) }
            }
        },
        Block::Unsupported(b) => html! {
            div class="unsupported-block" {
                p { "Unsupported block type: " (b.block_type) }
            }
        },
    }
}

fn render_list_item(block: &Block) -> Markup {
    let (content, children) = match block {
        Block::BulletedListItem(b) => (&b.content, &b.common.children),
        Block::NumberedListItem(b) => (&b.content, &b.common.children),
        // Unreachable by construction; render the block itself rather
        // than lose content.
        other => return render_block(other),
    };
    html! {
        li {
            (render_spans(&content.rich_text))
            @if !children.is_empty() {
                (render_blocks(children))
            }
        }
    }
}
