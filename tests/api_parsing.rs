//! Wire parsing against captured API response shapes.

use notionfolio::{
    parse_children_response, parse_page_response, ApiResponse, AppError, Block, FileObject,
    NotionErrorCode,
};
use pretty_assertions::assert_eq;
use reqwest::StatusCode;

fn ok_response(body: &str) -> ApiResponse<String> {
    ApiResponse {
        data: body.to_string(),
        status: StatusCode::OK,
        url: "test://fixture".to_string(),
    }
}

#[test]
fn test_parse_mixed_block_types() {
    let body = include_str!("fixtures/api_responses/blocks_mixed.json");
    let parsed = parse_children_response(ok_response(body)).unwrap();

    assert!(!parsed.has_more);
    assert!(parsed.next_cursor.is_none());
    assert_eq!(parsed.results.len(), 5);

    match &parsed.results[0] {
        Block::Paragraph(p) => {
            assert_eq!(p.content.rich_text.len(), 1);
            assert_eq!(p.content.rich_text[0].plain_text, "Hello from Notion.");
        }
        other => panic!("expected paragraph, got {}", other.block_type()),
    }
}

#[test]
fn test_code_block_without_language() {
    let body = include_str!("fixtures/api_responses/blocks_mixed.json");
    let parsed = parse_children_response(ok_response(body)).unwrap();

    match &parsed.results[1] {
        Block::Code(code) => {
            assert_eq!(code.language, None);
            assert_eq!(code.content.rich_text[0].plain_text, "cargo run");
        }
        other => panic!("expected code, got {}", other.block_type()),
    }
}

#[test]
fn test_external_image_source() {
    let body = include_str!("fixtures/api_responses/blocks_mixed.json");
    let parsed = parse_children_response(ok_response(body)).unwrap();

    match &parsed.results[2] {
        Block::Image(image) => {
            assert!(matches!(image.image, FileObject::External { .. }));
            assert_eq!(image.image.url(), "https://images.example.com/sunset.jpg");
            assert_eq!(image.caption[0].plain_text, "A sunset");
        }
        other => panic!("expected image, got {}", other.block_type()),
    }
}

#[test]
fn test_has_children_flag_survives() {
    let body = include_str!("fixtures/api_responses/blocks_mixed.json");
    let parsed = parse_children_response(ok_response(body)).unwrap();

    let item = &parsed.results[3];
    assert!(item.has_children());
    // Children are resolved by the fetcher, not the parser.
    assert!(item.children().is_empty());
}

#[test]
fn test_unknown_block_type_becomes_unsupported() {
    let body = include_str!("fixtures/api_responses/blocks_mixed.json");
    let parsed = parse_children_response(ok_response(body)).unwrap();

    match &parsed.results[4] {
        Block::Unsupported(unsupported) => {
            assert_eq!(unsupported.block_type, "synced_block");
        }
        other => panic!("expected unsupported, got {}", other.block_type()),
    }
}

#[test]
fn test_parse_page_title_and_created_time() {
    let body = include_str!("fixtures/api_responses/page.json");
    let page = parse_page_response(ok_response(body)).unwrap();

    assert_eq!(page.id.as_str(), "598337872cf94fdf8782e53db20768a5");
    // Title concatenates the property's spans, styling dropped.
    assert_eq!(page.title.as_str(), "My First Post");
    assert_eq!(page.created_time.to_rfc3339(), "2024-01-15T08:30:00+00:00");
}

#[test]
fn test_missing_title_falls_back_to_untitled() {
    let body = include_str!("fixtures/api_responses/page_untitled.json");
    let page = parse_page_response(ok_response(body)).unwrap();

    assert_eq!(page.title.as_str(), "Untitled");
}

#[test]
fn test_error_body_parses_into_typed_code() {
    let body = include_str!("fixtures/api_responses/error_not_found.json");
    let result = parse_children_response(ApiResponse {
        data: body.to_string(),
        status: StatusCode::NOT_FOUND,
        url: "test://fixture".to_string(),
    });

    match result {
        Err(AppError::NotionService { code, message, .. }) => {
            assert_eq!(code, NotionErrorCode::ObjectNotFound);
            assert!(message.contains("Could not find block"));
        }
        other => panic!("expected NotionService error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_unparseable_error_body_falls_back_to_status() {
    let result = parse_children_response(ApiResponse {
        data: "<html>bad gateway</html>".to_string(),
        status: StatusCode::BAD_GATEWAY,
        url: "test://fixture".to_string(),
    });

    match result {
        Err(AppError::NotionService { code, .. }) => {
            assert_eq!(code, NotionErrorCode::HttpStatus(502));
        }
        other => panic!("expected NotionService error, got {:?}", other.map(|_| ())),
    }
}
