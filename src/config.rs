// src/config.rs
use crate::constants::{DEFAULT_SYNTAX_THEME, LISTING_REVALIDATE_SECS};
use crate::error::AppError;
use crate::types::{ApiKey, PageId};
use clap::{Parser, ValueEnum};

/// Which of the two rendering strategies serves page content.
///
/// The strategies are alternatives for the same problem, never
/// composed: one process renders every page the same way.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderStrategy {
    /// Render fetched blocks directly to markup (default).
    #[default]
    Blocks,
    /// Convert blocks to markdown, then render the markdown.
    Markdown,
}

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Address to bind the server to
    #[arg(long, default_value = "127.0.0.1")]
    pub bind: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 3000)]
    pub port: u16,

    /// Rendering strategy for page content
    #[arg(long, value_enum, default_value_t = RenderStrategy::Blocks)]
    pub strategy: RenderStrategy,

    /// Syntect theme for highlighted code (markdown strategy only)
    #[arg(long, default_value = DEFAULT_SYNTAX_THEME)]
    pub syntax_theme: String,

    /// Seconds the front-page listing stays cached before re-fetching
    #[arg(long, default_value_t = LISTING_REVALIDATE_SECS)]
    pub revalidate: u64,

    /// Site title shown on the listing page
    #[arg(long, default_value = "My Portfolio")]
    pub title: String,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Resolved site configuration — CLI flags plus environment credentials,
/// validated and ready to serve.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub api_key: ApiKey,
    pub root_page: PageId,
    pub bind: String,
    pub port: u16,
    pub strategy: RenderStrategy,
    pub syntax_theme: String,
    pub revalidate_secs: u64,
    pub site_title: String,
    pub verbose: bool,
}

impl SiteConfig {
    /// Resolves a complete configuration from CLI input and environment.
    ///
    /// `NOTION_API_KEY` and `NOTION_ROOT_PAGE_ID` come from the
    /// environment; the root page id accepts any format `PageId` parses,
    /// including a pasted Notion URL.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        let api_key_str = std::env::var("NOTION_API_KEY").map_err(|_| {
            AppError::MissingConfiguration(
                "NOTION_API_KEY environment variable not set".to_string(),
            )
        })?;
        let api_key = ApiKey::new(api_key_str)?;

        let root_page_str = std::env::var("NOTION_ROOT_PAGE_ID").map_err(|_| {
            AppError::MissingConfiguration(
                "NOTION_ROOT_PAGE_ID environment variable not set".to_string(),
            )
        })?;
        let root_page = PageId::parse(&root_page_str)?;

        Ok(SiteConfig {
            api_key,
            root_page,
            bind: cli.bind,
            port: cli.port,
            strategy: cli.strategy,
            syntax_theme: cli.syntax_theme,
            revalidate_secs: cli.revalidate,
            site_title: cli.title,
            verbose: cli.verbose,
        })
    }

    /// The socket address string to bind.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

#[cfg(test)]
impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            api_key: ApiKey::new_unchecked("secret_testing_key_only"),
            root_page: PageId::parse("12345678123456781234567812345678")
                .expect("example page id is valid"),
            bind: "127.0.0.1".to_string(),
            port: 3000,
            strategy: RenderStrategy::Blocks,
            syntax_theme: DEFAULT_SYNTAX_THEME.to_string(),
            revalidate_secs: LISTING_REVALIDATE_SECS,
            site_title: "My Portfolio".to_string(),
            verbose: false,
        }
    }
}
