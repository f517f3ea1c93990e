// src/render/markdown.rs
//! Block tree to markdown conversion — the first half of the alternate
//! rendering strategy.
//!
//! The output is plain GFM-flavored markdown: annotations become
//! emphasis markers, list runs become `- `/`1. ` items with two-space
//! indents for nesting, and code blocks become language-tagged fences.

use super::group::{group_blocks, ListKind, RenderNode};
use crate::constants::DEFAULT_CODE_LANGUAGE;
use crate::model::{Block, Icon, TextBlockContent};
use crate::types::{plain_text_of, RichTextItem};

/// Converts a fully resolved block tree to one markdown string.
pub fn blocks_to_markdown(blocks: &[Block]) -> String {
    let mut out = String::new();
    push_blocks(&mut out, blocks, 0);
    out
}

fn push_blocks(out: &mut String, blocks: &[Block], depth: usize) {
    for node in group_blocks(blocks) {
        match node {
            RenderNode::Single(block) => push_block(out, block, depth),
            RenderNode::List { kind, items } => {
                for (ordinal, item) in items.iter().enumerate() {
                    push_list_item(out, item, kind, ordinal + 1, depth);
                }
                if depth == 0 {
                    out.push('\n');
                }
            }
        }
    }
}

fn push_block(out: &mut String, block: &Block, depth: usize) {
    let indent = "  ".repeat(depth);
    match block {
        Block::Paragraph(b) => {
            push_line(out, &indent, &spans_to_markdown(&b.content.rich_text));
            out.push('\n');
            push_blocks(out, &b.common.children, depth);
        }
        Block::Heading1(b) => push_heading(out, &indent, 1, &b.content),
        Block::Heading2(b) => push_heading(out, &indent, 2, &b.content),
        Block::Heading3(b) => push_heading(out, &indent, 3, &b.content),
        Block::Code(b) => {
            let language = b.language.as_deref().unwrap_or(DEFAULT_CODE_LANGUAGE);
            push_line(out, &indent, &format!("```{}", language));
            for line in plain_text_of(&b.content.rich_text).lines() {
                push_line(out, &indent, line);
            }
            push_line(out, &indent, "```");
            if !b.caption.is_empty() {
                push_line(out, &indent, &format!("*{}*", plain_text_of(&b.caption)));
            }
            out.push('\n');
        }
        Block::Quote(b) => {
            push_line(
                out,
                &indent,
                &format!("> {}", spans_to_markdown(&b.content.rich_text)),
            );
            out.push('\n');
            push_blocks(out, &b.common.children, depth);
        }
        Block::Divider(_) => {
            push_line(out, &indent, "---");
            out.push('\n');
        }
        Block::Image(b) => {
            let alt = plain_text_of(&b.caption);
            push_line(out, &indent, &format!("![{}]({})", alt, b.image.url()));
            if !b.caption.is_empty() {
                push_line(out, &indent, &format!("*{}*", alt));
            }
            out.push('\n');
        }
        Block::Toggle(b) => {
            push_line(
                out,
                &indent,
                &format!("**{}**", plain_text_of(&b.content.rich_text)),
            );
            out.push('\n');
            push_blocks(out, &b.common.children, depth);
        }
        Block::Callout(b) => {
            let glyph = match &b.icon {
                Some(Icon::Emoji { emoji }) => emoji.clone(),
                _ => crate::constants::DEFAULT_CALLOUT_ICON.to_string(),
            };
            push_line(
                out,
                &indent,
                &format!("> {} {}", glyph, spans_to_markdown(&b.content.rich_text)),
            );
            out.push('\n');
            push_blocks(out, &b.common.children, depth);
        }
        Block::Embed(b) => {
            push_line(out, &indent, &format!("[Embed]({})", b.url));
            out.push('\n');
        }
        Block::ChildPage(b) => {
            push_line(
                out,
                &indent,
                &format!("[{}](/{})", b.title, b.common.id.as_str()),
            );
            out.push('\n');
        }
        Block::Unsupported(b) => {
            push_line(
                out,
                &indent,
                &format!("[Unsupported block type: {}]", b.block_type),
            );
            out.push('\n');
        }
        // Stray list items outside a grouped run still render as items.
        Block::BulletedListItem(_) => push_list_item(out, block, ListKind::Bulleted, 1, depth),
        Block::NumberedListItem(_) => push_list_item(out, block, ListKind::Numbered, 1, depth),
    }
}

fn push_list_item(out: &mut String, block: &Block, kind: ListKind, ordinal: usize, depth: usize) {
    let (content, children) = match block {
        Block::BulletedListItem(b) => (&b.content, &b.common.children),
        Block::NumberedListItem(b) => (&b.content, &b.common.children),
        other => return push_block(out, other, depth),
    };
    let indent = "  ".repeat(depth);
    let marker = match kind {
        ListKind::Bulleted => "- ".to_string(),
        ListKind::Numbered => format!("{}. ", ordinal),
    };
    push_line(
        out,
        &indent,
        &format!("{}{}", marker, spans_to_markdown(&content.rich_text)),
    );
    push_blocks(out, children, depth + 1);
}

fn push_heading(out: &mut String, indent: &str, level: usize, content: &TextBlockContent) {
    // Headings drop styling, matching the primary renderer.
    push_line(
        out,
        indent,
        &format!("{} {}", "#".repeat(level), plain_text_of(&content.rich_text)),
    );
    out.push('\n');
}

fn push_line(out: &mut String, indent: &str, line: &str) {
    out.push_str(indent);
    out.push_str(line);
    out.push('\n');
}

/// Renders a span run with markdown emphasis markers.
fn spans_to_markdown(items: &[RichTextItem]) -> String {
    items.iter().map(span_to_markdown).collect()
}

fn span_to_markdown(item: &RichTextItem) -> String {
    let mut text = item.plain_text.clone();
    let a = &item.annotations;
    if a.code {
        text = format!("`{}`", text);
    }
    if a.strikethrough {
        text = format!("~~{}~~", text);
    }
    if a.italic {
        text = format!("*{}*", text);
    }
    if a.bold {
        text = format!("**{}**", text);
    }
    if a.underline {
        // Markdown has no underline; inline HTML survives the renderer.
        text = format!("<u>{}</u>", text);
    }
    if let Some(href) = &item.href {
        text = format!("[{}]({})", text, href);
    }
    text
}
