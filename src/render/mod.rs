//! Rendering — block trees to markup.
//!
//! Two mutually exclusive strategies share this module: the primary
//! block renderer ([`html`]) walks the tree directly, and the alternate
//! markdown path ([`markdown`] + [`markdown_html`]) converts the tree
//! to a markdown string and renders that. The grouping pass and span
//! rendering are shared plumbing.

pub mod group;
pub mod highlight;
pub mod html;
pub mod markdown;
pub mod markdown_html;
pub mod rich_text;

pub use group::{group_blocks, ListKind, RenderNode};
pub use html::render_blocks;
pub use markdown::blocks_to_markdown;
pub use markdown_html::render_markdown;
pub use rich_text::render_spans;
