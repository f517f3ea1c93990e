// src/lib.rs
//! notionfolio library — serves Notion pages as a small personal site.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling** — `AppError`, `ValidationError`
//! - **Configuration** — `SiteConfig`, `RenderStrategy`
//! - **Domain model** — `Page`, `Block` and its payload structs
//! - **Domain types** — `NotionId`, `PageId`, `BlockId`, `ApiKey`, rich text
//! - **API client** — `NotionRepository`, `NotionHttpClient`, `BlockFetcher`
//! - **Rendering** — `render_blocks`, `blocks_to_markdown`, `render_markdown`
//! - **Route surface** — `router`, `AppState`

pub mod api;
pub mod config;
pub mod constants;
pub mod error;
pub mod model;
pub mod render;
pub mod site;
pub mod types;

// --- Error Handling ---
pub use crate::error::{AppError, NotionErrorCode};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{CommandLineInput, RenderStrategy, SiteConfig};

// --- Domain Model ---
pub use crate::model::{Block, BlockCommon, Page, PageSummary, PageTitle};

// --- Block Types ---
pub use crate::model::blocks::{
    BulletedListItemBlock, CalloutBlock, ChildPageBlock, CodeBlock, DividerBlock, EmbedBlock,
    ExternalFile, FileObject, Heading1Block, Heading2Block, Heading3Block, Icon, ImageBlock,
    NumberedListItemBlock, ParagraphBlock, QuoteBlock, TextBlockContent, ToggleBlock,
    UnsupportedBlock, UploadedFile,
};

// --- Domain Types ---
pub use crate::types::{plain_text_of, Annotations, ApiKey, BlockId, Color, NotionId, PageId, RichTextItem};

// --- API Client ---
pub use crate::api::{
    cache::ListingCache,
    client::{ApiResponse, NotionHttpClient},
    fetcher::BlockFetcher,
    pagination::{fetch_all_pages, PaginatedResponse, PaginationResult},
    parser::{parse_children_response, parse_page_response},
    NotionRepository,
};

// --- Rendering ---
pub use crate::render::{
    blocks_to_markdown, group_blocks, render_blocks, render_markdown, render_spans, ListKind,
    RenderNode,
};

// --- Route Surface ---
pub use crate::site::{router, AppState};
