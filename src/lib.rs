// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

//! # hubsearch
//!
//! Client-side query engine for a code-hosting platform's search API.
//!
//! ## Features
//!
//! - **Typed queries**: keywords plus typed qualifiers (`stars:>=5`, `topic:cli`, ...)
//! - **Limit-aware pagination**: follows `Link: rel="next"` and shrinks `per_page`
//!   so no more than the requested number of items is fetched
//! - **Readable errors**: validation failures become `Invalid search query "..."`
//! - **Web URLs**: renders the browser search page for the same query
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use hubsearch::{HttpClient, Qualifiers, Query, SearchKind, Searcher, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let searcher = Searcher::default_host(HttpClient::new()?)?;
//!     let query = Query::new(SearchKind::Repositories)
//!         .keyword("terminal")
//!         .qualifiers(Qualifiers {
//!             stars: Some(">=100".to_string()),
//!             ..Default::default()
//!         })
//!         .limit(50);
//!
//!     let result = searcher.repositories(&query).await?;
//!     println!("{} of {} matches", result.items.len(), result.total);
//!     println!("{}", searcher.url(&query));
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Query ──▶ query (q + params) ──▶ search::Searcher ──▶ http::HttpClient
//!                                        │    ▲
//!                       error::ApiError ◀┘    └── pagination (Cursor, PaginationState)
//! ```

#![warn(clippy::all)]

/// Error types and service error translation
pub mod error;

/// HTTP transport
pub mod http;

/// Cursor and page planning
pub mod pagination;

/// Query and qualifier encoding
pub mod query;

/// Paginated searcher and URL renderer
pub mod search;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{ApiError, Error, Result};
pub use http::{HttpClient, HttpClientConfig};
pub use query::{Qualifiers, Query, SearchKind};
pub use search::{SearchResult, Searcher, DEFAULT_HOST};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
