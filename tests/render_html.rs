//! End-to-end rendering scenarios for the primary (block) strategy.

use notionfolio::{
    render_blocks, Block, BlockCommon, BulletedListItemBlock, CalloutBlock, CodeBlock, EmbedBlock,
    ExternalFile, FileObject, Icon, ImageBlock, NumberedListItemBlock, ParagraphBlock, QuoteBlock,
    RichTextItem, TextBlockContent, ToggleBlock, UnsupportedBlock,
};
use pretty_assertions::assert_eq;

fn spans(text: &str) -> TextBlockContent {
    TextBlockContent::from_spans(vec![RichTextItem::plain(text)])
}

fn bulleted(text: &str) -> Block {
    Block::BulletedListItem(BulletedListItemBlock {
        common: BlockCommon::default(),
        content: spans(text),
    })
}

fn numbered(text: &str) -> Block {
    Block::NumberedListItem(NumberedListItemBlock {
        common: BlockCommon::default(),
        content: spans(text),
    })
}

fn paragraph(text: &str) -> Block {
    Block::Paragraph(ParagraphBlock {
        common: BlockCommon::default(),
        content: spans(text),
    })
}

#[test]
fn test_list_run_then_paragraph() {
    let blocks = vec![bulleted("A"), bulleted("B"), paragraph("C")];
    let html = render_blocks(&blocks).into_string();
    assert_eq!(html, "<ul><li>A</li><li>B</li></ul><p>C</p>");
}

#[test]
fn test_numbered_run_renders_ordered_list() {
    let blocks = vec![numbered("first"), numbered("second")];
    let html = render_blocks(&blocks).into_string();
    assert_eq!(html, "<ol><li>first</li><li>second</li></ol>");
}

#[test]
fn test_unsupported_type_is_visibly_reported() {
    let blocks = vec![Block::Unsupported(UnsupportedBlock {
        common: BlockCommon::default(),
        block_type: "unsupported_type".to_string(),
    })];
    let html = render_blocks(&blocks).into_string();
    assert!(html.contains("unsupported_type"));
    assert!(html.contains("Unsupported block type"));
}

#[test]
fn test_code_without_language_defaults_to_text() {
    let blocks = vec![Block::Code(CodeBlock {
        common: BlockCommon::default(),
        language: None,
        caption: vec![],
        content: spans("println!(\"hi\");"),
    })];
    let html = render_blocks(&blocks).into_string();
    assert!(html.contains("class=\"language-text\""));
}

#[test]
fn test_code_with_language_keeps_it() {
    let blocks = vec![Block::Code(CodeBlock {
        common: BlockCommon::default(),
        language: Some("rust".to_string()),
        caption: vec![],
        content: spans("fn main() {}"),
    })];
    let html = render_blocks(&blocks).into_string();
    assert!(html.contains("class=\"language-rust\""));
}

#[test]
fn test_external_image_uses_external_url() {
    let blocks = vec![Block::Image(ImageBlock {
        common: BlockCommon::default(),
        image: FileObject::External {
            external: ExternalFile {
                url: "https://images.example.com/a.png".to_string(),
            },
        },
        caption: vec![RichTextItem::plain("the caption")],
    })];
    let html = render_blocks(&blocks).into_string();
    assert!(html.contains("src=\"https://images.example.com/a.png\""));
    assert!(html.contains("<figcaption>the caption</figcaption>"));
}

#[test]
fn test_image_without_caption_has_no_figcaption() {
    let blocks = vec![Block::Image(ImageBlock {
        common: BlockCommon::default(),
        image: FileObject::External {
            external: ExternalFile {
                url: "https://images.example.com/a.png".to_string(),
            },
        },
        caption: vec![],
    })];
    let html = render_blocks(&blocks).into_string();
    assert!(!html.contains("figcaption"));
}

#[test]
fn test_toggle_renders_disclosure_with_children() {
    let child = paragraph("hidden detail");
    let blocks = vec![Block::Toggle(ToggleBlock {
        common: BlockCommon::default().with_children(vec![child]),
        content: spans("Click me"),
    })];
    let html = render_blocks(&blocks).into_string();
    assert_eq!(
        html,
        "<details><summary>Click me</summary><p>hidden detail</p></details>"
    );
}

#[test]
fn test_callout_icon_fallback() {
    let with_emoji = Block::Callout(CalloutBlock {
        common: BlockCommon::default(),
        icon: Some(Icon::Emoji {
            emoji: "🔥".to_string(),
        }),
        content: spans("hot tip"),
    });
    let html = render_blocks(&[with_emoji]).into_string();
    assert!(html.contains("🔥"));

    let without_icon = Block::Callout(CalloutBlock {
        common: BlockCommon::default(),
        icon: None,
        content: spans("plain tip"),
    });
    let html = render_blocks(&[without_icon]).into_string();
    assert!(html.contains("📝"));
}

#[test]
fn test_quote_and_divider_and_embed() {
    let blocks = vec![
        Block::Quote(QuoteBlock {
            common: BlockCommon::default(),
            content: spans("wise words"),
        }),
        Block::Divider(notionfolio::DividerBlock {
            common: BlockCommon::default(),
        }),
        Block::Embed(EmbedBlock {
            common: BlockCommon::default(),
            url: "https://example.com/widget".to_string(),
        }),
    ];
    let html = render_blocks(&blocks).into_string();
    assert!(html.contains("<blockquote>wise words</blockquote>"));
    assert!(html.contains("<hr>"));
    assert!(html.contains("<iframe class=\"block-embed\" src=\"https://example.com/widget\""));
}

#[test]
fn test_nested_list_items_render_nested_lists() {
    let inner = bulleted("inner");
    let outer = Block::BulletedListItem(BulletedListItemBlock {
        common: BlockCommon::default().with_children(vec![inner]),
        content: spans("outer"),
    });
    let html = render_blocks(&[outer]).into_string();
    assert_eq!(
        html,
        "<ul><li>outer<ul><li>inner</li></ul></li></ul>"
    );
}

#[test]
fn test_heading_drops_styling() {
    let mut styled = RichTextItem::plain("Loud Title");
    styled.annotations.bold = true;
    let blocks = vec![Block::Heading2(notionfolio::Heading2Block {
        common: BlockCommon::default(),
        content: TextBlockContent::from_spans(vec![styled]),
    })];
    let html = render_blocks(&blocks).into_string();
    assert_eq!(html, "<h2>Loud Title</h2>");
}
