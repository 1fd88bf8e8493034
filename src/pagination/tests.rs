//! Tests for pagination module

use super::*;
use pretty_assertions::assert_eq;
use reqwest::header::{HeaderMap, HeaderValue};
use test_case::test_case;

// ============================================================================
// Link Header Tests
// ============================================================================

#[test]
fn test_parse_link_header() {
    let header = r#"<https://api.github.com/search/repositories?page=2&per_page=100&q=org%3Agithub>; rel="next", <https://api.github.com/search/repositories?page=10&per_page=100&q=org%3Agithub>; rel="last""#;

    assert_eq!(
        parse_link_header(header, "next").as_deref(),
        Some("https://api.github.com/search/repositories?page=2&per_page=100&q=org%3Agithub")
    );
    assert_eq!(
        parse_link_header(header, "last").as_deref(),
        Some("https://api.github.com/search/repositories?page=10&per_page=100&q=org%3Agithub")
    );
    assert!(parse_link_header(header, "prev").is_none());
}

#[test]
fn test_cursor_from_link() {
    let cursor = Cursor::from_link(
        r#"<https://api.github.com/search/repositories?page=2&per_page=100&q=org%3Agithub>; rel="next""#,
    );
    assert_eq!(
        cursor,
        Cursor {
            page: Some(2),
            per_page: Some(100),
            has_next: true,
        }
    );
}

#[test]
fn test_cursor_last_page() {
    // Last page only links backwards
    let cursor = Cursor::from_link(
        r#"<https://api.github.com/search/repositories?page=1&per_page=30>; rel="prev", <https://api.github.com/search/repositories?page=1&per_page=30>; rel="first""#,
    );
    assert!(!cursor.has_next);
    assert_eq!(cursor, Cursor::end());
}

#[test]
fn test_cursor_from_headers() {
    let mut headers = HeaderMap::new();
    assert_eq!(Cursor::from_headers(&headers), Cursor::end());

    headers.insert(
        "link",
        HeaderValue::from_static(r#"<https://enterprise.com/api/v3/search/issues?per_page=50&page=7>; rel="next""#),
    );
    let cursor = Cursor::from_headers(&headers);
    assert!(cursor.has_next);
    assert_eq!(cursor.page, Some(7));
    assert_eq!(cursor.per_page, Some(50));
}

#[test]
fn test_cursor_next_without_page_param() {
    let cursor = Cursor::from_link(r#"<https://api.github.com/search/code?after=abc>; rel="next""#);
    assert!(cursor.has_next);
    assert!(cursor.page.is_none());
}

// ============================================================================
// PaginationState Tests
// ============================================================================

fn next(page: u32) -> Cursor {
    Cursor {
        page: Some(page),
        per_page: None,
        has_next: true,
    }
}

#[test_case(30, 30 ; "limit below max page")]
#[test_case(100, 100 ; "limit at max page")]
#[test_case(250, 100 ; "limit above max page")]
#[test_case(0, 100 ; "no limit")]
fn test_first_page_size(limit: usize, expected: usize) {
    let state = PaginationState::new(limit);
    assert_eq!(state.first_page(), PageRequest::new(1, expected));
}

#[test]
fn test_per_page_shrinks_to_remaining() {
    let mut state = PaginationState::new(30);

    let planned = state.record_page(1, 2, &next(2));
    assert_eq!(planned, NextPage::Continue(PageRequest::new(2, 29)));
    assert_eq!(state.fetched(), 1);
    assert_eq!(state.remaining(), 29);
}

#[test]
fn test_stops_at_limit() {
    let mut state = PaginationState::new(150);

    assert_eq!(
        state.record_page(100, 1000, &next(2)),
        NextPage::Continue(PageRequest::new(2, 50))
    );
    assert_eq!(state.record_page(50, 1000, &next(3)), NextPage::Done);
    assert_eq!(state.fetched(), 150);
}

#[test]
fn test_stops_without_next_link() {
    let mut state = PaginationState::new(30);
    assert_eq!(state.record_page(12, 1000, &Cursor::end()), NextPage::Done);
}

#[test]
fn test_stops_on_empty_page() {
    let mut state = PaginationState::new(0);
    assert_eq!(state.record_page(0, 1000, &next(2)), NextPage::Done);
}

#[test]
fn test_unlimited_runs_until_total() {
    let mut state = PaginationState::new(0);

    assert_eq!(
        state.record_page(100, 150, &next(2)),
        NextPage::Continue(PageRequest::new(2, 100))
    );
    assert_eq!(state.record_page(50, 150, &next(3)), NextPage::Done);
    assert_eq!(state.fetched(), 150);
}

#[test]
fn test_unreported_total_does_not_stop() {
    let mut state = PaginationState::new(30);
    assert_eq!(
        state.record_page(1, 0, &next(2)),
        NextPage::Continue(PageRequest::new(2, 29))
    );
}

#[test]
fn test_missing_page_number_advances_by_one() {
    let mut state = PaginationState::new(0);
    let cursor = Cursor {
        page: None,
        per_page: None,
        has_next: true,
    };
    assert_eq!(
        state.record_page(100, 1000, &cursor),
        NextPage::Continue(PageRequest::new(2, 100))
    );
}
