//! Domain model: the closed block set, pages, and listing entries.
//!
//! Everything here is immutable, request-scoped value data — fetched,
//! rendered, and dropped. Nothing outlives a single page request.

mod block;
pub mod blocks;
pub mod common;

pub use block::Block;
pub use blocks::*;
pub use common::BlockCommon;

use crate::types::{PageId, RichTextItem};
use serde::{Deserialize, Serialize};

/// A Notion page's metadata: identity, display title, creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: PageId,
    pub title: PageTitle,
    pub created_time: chrono::DateTime<chrono::Utc>,
}

/// Page title, concatenated from the title property's spans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageTitle(String);

impl PageTitle {
    pub fn new(title: impl Into<String>) -> Self {
        Self(title.into())
    }

    /// Fallback label for pages whose title property is absent or empty.
    pub fn untitled() -> Self {
        Self("Untitled".to_string())
    }

    /// Builds a title from the title property's spans, falling back to
    /// the default label when there is nothing to show.
    pub fn from_spans(items: &[RichTextItem]) -> Self {
        let text = crate::types::plain_text_of(items);
        if text.trim().is_empty() {
            Self::untitled()
        } else {
            Self(text)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PageTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry on the listing route: a subpage of the configured root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSummary {
    pub id: PageId,
    pub title: String,
}

impl PageSummary {
    /// Collects the `child_page` blocks out of a root's children, in
    /// order. Other block types on the root page are not listed.
    pub fn collect(blocks: &[Block]) -> Vec<PageSummary> {
        blocks
            .iter()
            .filter_map(|block| match block {
                Block::ChildPage(child) => Some(PageSummary {
                    id: PageId::from(&child.common.id),
                    title: child.title.clone(),
                }),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BlockId;

    fn child_page(title: &str) -> Block {
        Block::ChildPage(ChildPageBlock {
            common: BlockCommon::new(BlockId::new_v4()),
            title: title.to_string(),
        })
    }

    #[test]
    fn test_title_fallback() {
        assert_eq!(PageTitle::from_spans(&[]).as_str(), "Untitled");
        let spans = vec![RichTextItem::plain("My Page")];
        assert_eq!(PageTitle::from_spans(&spans).as_str(), "My Page");
    }

    #[test]
    fn test_listing_keeps_only_child_pages() {
        let blocks = vec![
            child_page("First"),
            Block::Divider(DividerBlock {
                common: BlockCommon::default(),
            }),
            child_page("Second"),
        ];
        let summaries = PageSummary::collect(&blocks);
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].title, "First");
        assert_eq!(summaries[1].title, "Second");
    }
}
