//! Link header parsing (RFC 8288)
//!
//! Format: `Link: <https://api.github.com/...?page=2>; rel="next", ...`

use super::types::Cursor;
use reqwest::header::{HeaderMap, LINK};
use url::Url;

/// Parse a Link header and extract the URL for the given rel
pub fn parse_link_header(header: &str, target_rel: &str) -> Option<String> {
    for part in header.split(',') {
        let part = part.trim();
        let mut url = None;
        let mut rel = None;

        for segment in part.split(';') {
            let segment = segment.trim();
            if segment.starts_with('<') && segment.ends_with('>') {
                url = Some(&segment[1..segment.len() - 1]);
            } else if let Some(stripped) = segment.strip_prefix("rel=") {
                rel = Some(stripped.trim_matches('"').trim_matches('\''));
            }
        }

        if let (Some(u), Some(r)) = (url, rel) {
            // rel may hold several space-separated relation types
            if r.split_whitespace().any(|r| r == target_rel) {
                return Some(u.to_string());
            }
        }
    }

    None
}

impl Cursor {
    /// Derive the cursor from a response's headers
    pub fn from_headers(headers: &HeaderMap) -> Self {
        headers
            .get(LINK)
            .and_then(|v| v.to_str().ok())
            .map(Self::from_link)
            .unwrap_or_else(Self::end)
    }

    /// Derive the cursor from a raw Link header value
    pub fn from_link(header: &str) -> Self {
        let Some(next) = parse_link_header(header, "next") else {
            return Self::end();
        };

        let mut cursor = Self {
            has_next: true,
            ..Self::end()
        };
        if let Ok(url) = Url::parse(&next) {
            for (key, value) in url.query_pairs() {
                match key.as_ref() {
                    "page" => cursor.page = value.parse().ok(),
                    "per_page" => cursor.per_page = value.parse().ok(),
                    _ => {}
                }
            }
        }
        cursor
    }
}
