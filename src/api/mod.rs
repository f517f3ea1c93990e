// src/api/mod.rs
//! Notion API interaction — the ability to retrieve content from a workspace.
//!
//! This module keeps a clear separation between I/O (client), parsing
//! (parser/responses), and traversal (fetcher). Route handlers depend on
//! the [`NotionRepository`] trait, never on HTTP details.

pub mod cache;
pub mod client;
pub mod fetcher;
pub mod pagination;
pub mod parser;
pub mod responses;

use crate::error::AppError;
use crate::model::{Block, Page};
use crate::types::{NotionId, PageId};

/// The ability to retrieve content from a Notion workspace.
///
/// Tests substitute an in-memory implementation; production wires in the
/// HTTP client.
#[async_trait::async_trait]
pub trait NotionRepository: Send + Sync {
    /// Retrieves a page's metadata (title, creation time).
    async fn retrieve_page(&self, id: &PageId) -> Result<Page, AppError>;

    /// Retrieves one level of a block's (or page's) children, exhausting
    /// pagination. Children of the returned blocks are NOT resolved.
    async fn retrieve_children(&self, parent: &NotionId) -> Result<Vec<Block>, AppError>;
}

// Re-export the public interface
pub use cache::ListingCache;
pub use client::NotionHttpClient;
pub use fetcher::BlockFetcher;
