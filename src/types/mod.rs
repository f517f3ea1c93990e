//! Domain types shared across the crate: identifiers, credentials,
//! colors, and rich text.

mod api_key;
mod colors;
mod ids;
mod rich_text;

pub use api_key::ApiKey;
pub use colors::Color;
pub use ids::{BlockId, NotionId, PageId};
pub use rich_text::{plain_text_of, Annotations, RichTextItem};

use thiserror::Error;

/// Validation failures for domain type constructors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid API key: {reason}")]
    InvalidApiKey { reason: String },

    #[error("Invalid Notion ID: {0}")]
    InvalidId(String),
}
