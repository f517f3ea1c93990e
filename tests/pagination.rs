//! Cursor-following behavior of the pagination loop.

use notionfolio::{fetch_all_pages, PaginatedResponse};
use pretty_assertions::assert_eq;
use std::cell::RefCell;

#[tokio::test]
async fn test_two_page_listing_issues_exactly_two_calls() {
    let calls = RefCell::new(Vec::new());

    let result = fetch_all_pages(|cursor| {
        calls.borrow_mut().push(cursor.clone());
        async move {
            Ok(match cursor.as_deref() {
                None => PaginatedResponse {
                    results: vec!["a", "b"],
                    next_cursor: Some("cur1".to_string()),
                    has_more: true,
                },
                Some("cur1") => PaginatedResponse {
                    results: vec!["c"],
                    next_cursor: None,
                    has_more: false,
                },
                Some(other) => panic!("unexpected cursor {}", other),
            })
        }
    })
    .await
    .unwrap();

    // Exactly two list calls: the initial one, then the continuation.
    assert_eq!(*calls.borrow(), vec![None, Some("cur1".to_string())]);
    assert_eq!(result.pages_fetched, 2);
    // Both pages' results, concatenated in order.
    assert_eq!(result.items, vec!["a", "b", "c"]);
}

#[tokio::test]
async fn test_single_page_listing_stops_immediately() {
    let mut calls = 0u32;

    let result = fetch_all_pages(|_cursor| {
        calls += 1;
        async move {
            Ok(PaginatedResponse {
                results: vec![1, 2, 3],
                next_cursor: None,
                has_more: false,
            })
        }
    })
    .await
    .unwrap();

    assert_eq!(calls, 1);
    assert_eq!(result.items, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_page_failure_aborts_the_listing() {
    let result: Result<_, _> = fetch_all_pages(|cursor| async move {
        match cursor {
            None => Ok(PaginatedResponse {
                results: vec!["first"],
                next_cursor: Some("cur1".to_string()),
                has_more: true,
            }),
            Some(_) => Err(notionfolio::AppError::MalformedResponse(
                "truncated body".to_string(),
            )),
        }
    })
    .await;

    assert!(result.is_err());
}
