// src/site/routes.rs
//! The two routes: a listing of the root's subpages, and a detail view
//! per page. Every fetch failure collapses into the same not-found
//! response; the distinctions only reach the log.

use super::layout::{layout, not_found_page};
use crate::api::{BlockFetcher, ListingCache, NotionRepository};
use crate::config::{RenderStrategy, SiteConfig};
use crate::error::AppError;
use crate::model::{Page, PageSummary};
use crate::render;
use crate::types::{NotionId, PageId};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use maud::{html, Markup};
use std::sync::Arc;

/// Everything a request handler needs, shared across requests.
pub struct AppState {
    pub repo: Arc<dyn NotionRepository>,
    pub fetcher: BlockFetcher,
    pub listing_cache: ListingCache,
    pub config: SiteConfig,
}

impl AppState {
    pub fn new(repo: Arc<dyn NotionRepository>, config: SiteConfig) -> Self {
        Self {
            fetcher: BlockFetcher::new(repo.clone()),
            listing_cache: ListingCache::new(config.revalidate_secs),
            repo,
            config,
        }
    }
}

/// Builds the site router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(listing))
        .route("/{page_id}", get(page_detail))
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Listing route
// ---------------------------------------------------------------------------

async fn listing(State(state): State<Arc<AppState>>) -> Response {
    match load_listing(&state).await {
        Ok(pages) => page_response(layout(
            &state.config.site_title,
            listing_view(&state.config.site_title, &pages),
        )),
        Err(err) => {
            log::error!("Failed to load listing: {}", err);
            not_found_response()
        }
    }
}

/// Loads the listing through the revalidation window: serve the cached
/// entries while they are fresh, re-fetch once they expire.
async fn load_listing(state: &AppState) -> Result<Vec<PageSummary>, AppError> {
    if let Some(pages) = state.listing_cache.get() {
        log::debug!("Listing served from revalidation window");
        return Ok(pages);
    }

    let root = NotionId::from(&state.config.root_page);
    let blocks = state.repo.retrieve_children(&root).await?;
    let pages = PageSummary::collect(&blocks);
    log::info!("Listing re-fetched: {} subpage(s)", pages.len());

    state.listing_cache.put(pages.clone());
    Ok(pages)
}

fn listing_view(site_title: &str, pages: &[PageSummary]) -> Markup {
    html! {
        h1 { (site_title) }
        ul {
            @for page in pages {
                li {
                    a href=(format!("/{}", page.id.as_str())) { (page.title) }
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Detail route
// ---------------------------------------------------------------------------

async fn page_detail(
    State(state): State<Arc<AppState>>,
    Path(page_id): Path<String>,
) -> Response {
    let page_id = match PageId::parse(&page_id) {
        Ok(id) => id,
        Err(err) => {
            log::debug!("Rejected page id '{}': {}", page_id, err);
            return not_found_response();
        }
    };

    match load_page(&state, &page_id).await {
        Ok(markup) => page_response(markup),
        Err(err) => {
            if err.is_not_found() {
                log::info!("Page {} not found upstream", page_id);
            } else {
                log::error!("Failed to load page {}: {}", page_id, err);
            }
            not_found_response()
        }
    }
}

async fn load_page(state: &AppState, page_id: &PageId) -> Result<Markup, AppError> {
    let page = state.repo.retrieve_page(page_id).await?;
    let blocks = state.fetcher.fetch_page_tree(page_id).await?;

    let content = match state.config.strategy {
        RenderStrategy::Blocks => render::render_blocks(&blocks),
        RenderStrategy::Markdown => {
            let markdown = render::blocks_to_markdown(&blocks);
            render::render_markdown(&markdown, &state.config.syntax_theme)
        }
    };

    Ok(layout(page.title.as_str(), article_view(&page, content)))
}

fn article_view(page: &Page, content: Markup) -> Markup {
    let created = page.created_time.format("%B %-d, %Y").to_string();
    html! {
        article {
            header {
                h1 { (page.title.as_str()) }
                time datetime=(page.created_time.to_rfc3339()) { (created) }
            }
            (content)
        }
    }
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

fn page_response(markup: Markup) -> Response {
    Html(markup.into_string()).into_response()
}

fn not_found_response() -> Response {
    (StatusCode::NOT_FOUND, Html(not_found_page().into_string())).into_response()
}
