// src/api/parser.rs
//! Status-aware decoding of Notion API response bodies.
//!
//! Successful bodies decode through the wire types in
//! [`responses`](super::responses); error bodies decode into the typed
//! [`NotionErrorCode`](crate::error::NotionErrorCode) vocabulary, with
//! an HTTP-status fallback when the body is unparseable.

use super::client::ApiResponse;
use super::pagination::PaginatedResponse;
use super::responses::{ListChildrenResponse, NotionError, WirePage};
use crate::constants::ERROR_BODY_PREVIEW_LENGTH;
use crate::error::{AppError, NotionErrorCode};
use crate::model::{Block, Page};
use reqwest::StatusCode;

/// Decodes any Notion API response, routing by HTTP status.
pub fn parse_api_response<T>(result: ApiResponse<String>) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    if result.status.is_success() {
        parse_success_body(&result.data, &result.url)
    } else {
        parse_error_body(&result.data, result.status, &result.url)
    }
}

fn parse_success_body<T>(body: &str, url: &str) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(body).map_err(|e| {
        log::error!("Failed to parse response from {}: {}", url, e);

        let preview = if body.len() > ERROR_BODY_PREVIEW_LENGTH {
            format!("{}...", &body[..ERROR_BODY_PREVIEW_LENGTH])
        } else {
            body.to_string()
        };

        AppError::MalformedResponse(format!("{} (body: {})", e, preview))
    })
}

fn parse_error_body<T>(body: &str, status: StatusCode, url: &str) -> Result<T, AppError> {
    // The API usually explains itself; fall back to the bare status when
    // it doesn't.
    if let Ok(notion_error) = serde_json::from_str::<NotionError>(body) {
        return Err(AppError::NotionService {
            code: NotionErrorCode::from_api_response(&notion_error.code),
            message: notion_error.message,
            status,
        });
    }

    Err(AppError::NotionService {
        code: NotionErrorCode::from_http_status(status.as_u16()),
        message: format!("HTTP {} from {}", status, url),
        status,
    })
}

/// Decodes a retrieve-page response into the domain page.
pub fn parse_page_response(result: ApiResponse<String>) -> Result<Page, AppError> {
    let wire: WirePage = parse_api_response(result)?;
    Ok(wire.into_domain())
}

/// Decodes one page of a list-children response into domain blocks,
/// preserving the pagination cursor.
pub fn parse_children_response(
    result: ApiResponse<String>,
) -> Result<PaginatedResponse<Block>, AppError> {
    let wire: ListChildrenResponse = parse_api_response(result)?;
    Ok(PaginatedResponse {
        results: wire
            .results
            .into_iter()
            .map(|block| block.into_domain())
            .collect(),
        next_cursor: wire.next_cursor,
        has_more: wire.has_more,
    })
}
