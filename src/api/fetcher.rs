// src/api/fetcher.rs
//! Recursive block tree assembly.
//!
//! One level of children comes back from a paginated list call; any
//! returned block whose has-children flag is set needs its own subtree
//! resolved. Sibling subtrees are fetched concurrently and reattached
//! by index, so the final ordering always matches API return order
//! regardless of completion order.

use super::NotionRepository;
use crate::constants::NOTION_MAX_FETCH_DEPTH;
use crate::error::AppError;
use crate::model::Block;
use crate::types::{NotionId, PageId};
use futures::future::{self, BoxFuture};
use std::sync::Arc;

/// Resolves complete block trees through a [`NotionRepository`].
#[derive(Clone)]
pub struct BlockFetcher {
    repo: Arc<dyn NotionRepository>,
}

impl BlockFetcher {
    pub fn new(repo: Arc<dyn NotionRepository>) -> Self {
        Self { repo }
    }

    /// Fetches the complete, fully resolved block tree of a page.
    ///
    /// Any API failure anywhere in the tree propagates — there is no
    /// partial-result recovery.
    pub async fn fetch_page_tree(&self, page: &PageId) -> Result<Vec<Block>, AppError> {
        self.fetch_subtree(NotionId::from(page), NOTION_MAX_FETCH_DEPTH)
            .await
    }

    fn fetch_subtree(
        &self,
        parent: NotionId,
        depth_remaining: u8,
    ) -> BoxFuture<'_, Result<Vec<Block>, AppError>> {
        Box::pin(async move {
            let mut blocks = self.repo.retrieve_children(&parent).await?;

            if depth_remaining == 0 {
                log::warn!(
                    "Reached maximum fetch depth under {}; deeper content is left unresolved",
                    parent.as_str()
                );
                return Ok(blocks);
            }

            let pending: Vec<(usize, NotionId)> = blocks
                .iter()
                .enumerate()
                .filter(|(_, block)| block.has_children())
                .map(|(index, block)| (index, NotionId::from(block.id())))
                .collect();

            if pending.is_empty() {
                return Ok(blocks);
            }

            let subtrees = future::try_join_all(pending.into_iter().map(|(index, id)| {
                async move {
                    let children = self.fetch_subtree(id, depth_remaining - 1).await?;
                    Ok::<_, AppError>((index, children))
                }
            }))
            .await?;

            for (index, children) in subtrees {
                blocks[index].set_children(children);
            }

            Ok(blocks)
        })
    }
}
