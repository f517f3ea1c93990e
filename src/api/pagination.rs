// src/api/pagination.rs
//! Cursor-driven pagination over Notion list endpoints.

use crate::error::AppError;

/// One page of results from a paginated endpoint.
#[derive(Debug, Clone)]
pub struct PaginatedResponse<T> {
    pub results: Vec<T>,
    pub next_cursor: Option<String>,
    pub has_more: bool,
}

/// The concatenation of every page of a paginated listing.
#[derive(Debug, Clone)]
pub struct PaginationResult<T> {
    pub items: Vec<T>,
    pub pages_fetched: usize,
}

/// Fetches every page of a paginated endpoint, following the cursor
/// until the API reports no more results.
///
/// `fetch_fn` receives the continuation cursor (`None` on the first
/// call) and returns one page. Results are concatenated in API return
/// order. Any page failure aborts the whole operation.
pub async fn fetch_all_pages<T, F, Fut>(mut fetch_fn: F) -> Result<PaginationResult<T>, AppError>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: std::future::Future<Output = Result<PaginatedResponse<T>, AppError>>,
{
    let mut all_items = Vec::new();
    let mut cursor = None;
    let mut pages_fetched = 0usize;

    loop {
        let response = fetch_fn(cursor).await?;

        let has_more = response.has_more;
        cursor = response.next_cursor.clone();
        all_items.extend(response.results);
        pages_fetched += 1;

        if !has_more || cursor.is_none() {
            break;
        }
    }

    Ok(PaginationResult {
        items: all_items,
        pages_fetched,
    })
}
