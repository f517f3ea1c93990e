// src/constants.rs
//! Domain constants that define the operational boundaries of the system.
//!
//! Each constant is named for the domain concept it constrains, not its
//! technical role.

// ---------------------------------------------------------------------------
// Notion API boundaries
// ---------------------------------------------------------------------------

/// How many objects the Notion API returns per page of results.
///
/// The Notion API maximum is 100. We use the maximum to minimize
/// round-trips while walking block trees.
pub const NOTION_API_PAGE_SIZE: usize = 100;

/// Maximum nesting depth when recursively resolving block children.
///
/// Notion pages can nest arbitrarily deep. This limit prevents runaway
/// recursion on pathological trees; 50 levels is far deeper than any
/// real page.
pub const NOTION_MAX_FETCH_DEPTH: u8 = 50;

// ---------------------------------------------------------------------------
// Rendering boundaries
// ---------------------------------------------------------------------------

/// Language tag used for code blocks that declare none.
pub const DEFAULT_CODE_LANGUAGE: &str = "text";

/// Glyph shown for callouts whose icon is not an emoji.
pub const DEFAULT_CALLOUT_ICON: &str = "📝";

/// Display dimensions for images, in CSS pixels. The stylesheet
/// letterboxes the actual bitmap inside this box.
pub const IMAGE_DISPLAY_WIDTH: u32 = 800;
pub const IMAGE_DISPLAY_HEIGHT: u32 = 400;

/// Syntect theme used when none is configured.
pub const DEFAULT_SYNTAX_THEME: &str = "base16-ocean.dark";

// ---------------------------------------------------------------------------
// Serving boundaries
// ---------------------------------------------------------------------------

/// How long the front-page listing stays valid before the next request
/// re-fetches it from Notion, in seconds.
pub const LISTING_REVALIDATE_SECS: u64 = 60;

// ---------------------------------------------------------------------------
// Error display
// ---------------------------------------------------------------------------

/// Maximum characters shown when previewing unparseable response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 500;
