// src/api/responses.rs
//! Wire types for the two Notion endpoints this site consumes, and
//! their conversion into the domain model.
//!
//! Block payloads decode through a two-stage enum: the tagged
//! [`KnownPayload`] covers every type the renderer understands, and an
//! untagged fallback captures anything else with its raw type tag so
//! unknown blocks surface as [`Block::Unsupported`] instead of failing
//! the whole page.

use crate::model::{
    Block, BlockCommon, BulletedListItemBlock, CalloutBlock, ChildPageBlock, CodeBlock,
    DividerBlock, EmbedBlock, FileObject, Heading1Block, Heading2Block, Heading3Block, Icon,
    ImageBlock, NumberedListItemBlock, Page, PageTitle, ParagraphBlock, QuoteBlock,
    TextBlockContent, ToggleBlock, UnsupportedBlock,
};
use crate::types::{BlockId, Color, PageId, RichTextItem};
use serde::Deserialize;
use std::collections::HashMap;

// ---------------------------------------------------------------------------
// List-children endpoint
// ---------------------------------------------------------------------------

/// One page of `GET /blocks/{id}/children`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListChildrenResponse {
    pub object: String,
    pub results: Vec<WireBlock>,
    pub next_cursor: Option<String>,
    pub has_more: bool,
}

/// A single block as the API serializes it.
#[derive(Debug, Clone, Deserialize)]
pub struct WireBlock {
    pub id: BlockId,
    #[serde(default)]
    pub has_children: bool,
    #[serde(default)]
    pub archived: bool,
    #[serde(flatten)]
    pub payload: WirePayload,
}

/// The type-tagged payload, with a fallback for tags we don't model.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum WirePayload {
    Known(KnownPayload),
    Unknown(UnknownPayload),
}

/// Payloads for the closed set of supported type tags. The invariant of
/// the wire format — the payload lives under a key equal to the type tag
/// — maps directly onto serde's internally tagged representation.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum KnownPayload {
    #[serde(rename = "paragraph")]
    Paragraph { paragraph: WireText },
    #[serde(rename = "heading_1")]
    Heading1 { heading_1: WireText },
    #[serde(rename = "heading_2")]
    Heading2 { heading_2: WireText },
    #[serde(rename = "heading_3")]
    Heading3 { heading_3: WireText },
    #[serde(rename = "bulleted_list_item")]
    BulletedListItem { bulleted_list_item: WireText },
    #[serde(rename = "numbered_list_item")]
    NumberedListItem { numbered_list_item: WireText },
    #[serde(rename = "code")]
    Code { code: WireCode },
    #[serde(rename = "quote")]
    Quote { quote: WireText },
    #[serde(rename = "divider")]
    Divider { divider: WireEmpty },
    #[serde(rename = "image")]
    Image { image: WireImage },
    #[serde(rename = "toggle")]
    Toggle { toggle: WireText },
    #[serde(rename = "callout")]
    Callout { callout: WireCallout },
    #[serde(rename = "embed")]
    Embed { embed: WireEmbed },
    #[serde(rename = "child_page")]
    ChildPage { child_page: WireChildPage },
}

/// Fallback payload carrying only the unrecognized tag.
#[derive(Debug, Clone, Deserialize)]
pub struct UnknownPayload {
    #[serde(rename = "type", default)]
    pub block_type: String,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct WireText {
    #[serde(default)]
    pub rich_text: Vec<RichTextItem>,
    #[serde(default)]
    pub color: Color,
}

impl WireText {
    fn into_content(self) -> TextBlockContent {
        TextBlockContent {
            rich_text: self.rich_text,
            color: self.color,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireCode {
    #[serde(default)]
    pub rich_text: Vec<RichTextItem>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub caption: Vec<RichTextItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireEmpty {}

#[derive(Debug, Clone, Deserialize)]
pub struct WireImage {
    #[serde(flatten)]
    pub source: FileObject,
    #[serde(default)]
    pub caption: Vec<RichTextItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireCallout {
    #[serde(default)]
    pub rich_text: Vec<RichTextItem>,
    #[serde(default)]
    pub icon: Option<Icon>,
    #[serde(default)]
    pub color: Color,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireEmbed {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireChildPage {
    pub title: String,
}

impl WireBlock {
    /// Converts a wire block into the domain model, with children left
    /// unresolved (the fetcher attaches them separately).
    pub fn into_domain(self) -> Block {
        let common = BlockCommon {
            id: self.id,
            children: Vec::new(),
            has_children: self.has_children,
            archived: self.archived,
        };

        match self.payload {
            WirePayload::Known(known) => match known {
                KnownPayload::Paragraph { paragraph } => Block::Paragraph(ParagraphBlock {
                    common,
                    content: paragraph.into_content(),
                }),
                KnownPayload::Heading1 { heading_1 } => Block::Heading1(Heading1Block {
                    common,
                    content: heading_1.into_content(),
                }),
                KnownPayload::Heading2 { heading_2 } => Block::Heading2(Heading2Block {
                    common,
                    content: heading_2.into_content(),
                }),
                KnownPayload::Heading3 { heading_3 } => Block::Heading3(Heading3Block {
                    common,
                    content: heading_3.into_content(),
                }),
                KnownPayload::BulletedListItem { bulleted_list_item } => {
                    Block::BulletedListItem(BulletedListItemBlock {
                        common,
                        content: bulleted_list_item.into_content(),
                    })
                }
                KnownPayload::NumberedListItem { numbered_list_item } => {
                    Block::NumberedListItem(NumberedListItemBlock {
                        common,
                        content: numbered_list_item.into_content(),
                    })
                }
                KnownPayload::Code { code } => Block::Code(CodeBlock {
                    common,
                    language: code.language,
                    caption: code.caption,
                    content: TextBlockContent::from_spans(code.rich_text),
                }),
                KnownPayload::Quote { quote } => Block::Quote(QuoteBlock {
                    common,
                    content: quote.into_content(),
                }),
                KnownPayload::Divider { .. } => Block::Divider(DividerBlock { common }),
                KnownPayload::Image { image } => Block::Image(ImageBlock {
                    common,
                    image: image.source,
                    caption: image.caption,
                }),
                KnownPayload::Toggle { toggle } => Block::Toggle(ToggleBlock {
                    common,
                    content: toggle.into_content(),
                }),
                KnownPayload::Callout { callout } => Block::Callout(CalloutBlock {
                    common,
                    icon: callout.icon,
                    content: TextBlockContent {
                        rich_text: callout.rich_text,
                        color: callout.color,
                    },
                }),
                KnownPayload::Embed { embed } => Block::Embed(EmbedBlock {
                    common,
                    url: embed.url,
                }),
                KnownPayload::ChildPage { child_page } => Block::ChildPage(ChildPageBlock {
                    common,
                    title: child_page.title,
                }),
            },
            WirePayload::Unknown(unknown) => Block::Unsupported(UnsupportedBlock {
                common,
                block_type: unknown.block_type,
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Retrieve-page endpoint
// ---------------------------------------------------------------------------

/// `GET /pages/{id}` — only the fields the site displays.
#[derive(Debug, Clone, Deserialize)]
pub struct WirePage {
    pub id: PageId,
    pub created_time: chrono::DateTime<chrono::Utc>,
    #[serde(default)]
    pub properties: HashMap<String, WireProperty>,
}

/// A page property, decoded just far enough to find the title.
#[derive(Debug, Clone, Deserialize)]
pub struct WireProperty {
    #[serde(rename = "type")]
    pub property_type: String,
    #[serde(default)]
    pub title: Option<Vec<RichTextItem>>,
}

impl WirePage {
    /// Converts into the domain page. A missing or empty title property
    /// is recovered locally with the fallback label, never an error.
    pub fn into_domain(self) -> Page {
        let title = self
            .properties
            .values()
            .find(|prop| prop.property_type == "title")
            .and_then(|prop| prop.title.as_deref())
            .map(PageTitle::from_spans)
            .unwrap_or_else(PageTitle::untitled);

        Page {
            id: self.id,
            title,
            created_time: self.created_time,
        }
    }
}

// ---------------------------------------------------------------------------
// Error bodies
// ---------------------------------------------------------------------------

/// Error response from the Notion API.
#[derive(Debug, Clone, Deserialize)]
pub struct NotionError {
    pub code: String,
    pub message: String,
}
