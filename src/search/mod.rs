//! Searcher
//!
//! Issues paginated search requests against one host and renders the
//! equivalent browser URL.
//!
//! # Host routing
//!
//! | host               | API prefix                        | web URL                         |
//! |--------------------|-----------------------------------|---------------------------------|
//! | `github.com`       | `https://api.github.com/`         | `https://github.com/search`     |
//! | `github.localhost` | `http://api.github.localhost/`    | `https://github.localhost/search` |
//! | anything else      | `https://<host>/api/v3/`          | `https://<host>/search`         |

mod types;

pub use types::{
    Code, Commit, CommitInfo, CommitRef, CommitUser, Issue, Label, License, PullRequestLinks,
    Repository, SearchResult, TextMatch, User,
};

use crate::error::{ApiError, Error, Result};
use crate::http::HttpClient;
use crate::pagination::{Cursor, NextPage, PageRequest, PaginationState};
use crate::query::{encode_params, Query, SearchKind};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

/// Host used when the caller does not pick one
pub const DEFAULT_HOST: &str = "github.com";

const LOCAL_HOST: &str = "github.localhost";

/// Searches one host's search API
#[derive(Debug, Clone)]
pub struct Searcher {
    client: HttpClient,
    host: String,
    api_base: Url,
}

impl Searcher {
    /// Create a searcher for `host`
    pub fn new(client: HttpClient, host: impl AsRef<str>) -> Result<Self> {
        let host = normalize_host(host.as_ref());
        if host.is_empty() {
            return Err(Error::config("host must not be empty"));
        }
        let api_base = Url::parse(&rest_prefix(&host))?;
        Ok(Self {
            client,
            host,
            api_base,
        })
    }

    /// Create a searcher for [`DEFAULT_HOST`]
    pub fn default_host(client: HttpClient) -> Result<Self> {
        Self::new(client, DEFAULT_HOST)
    }

    /// Send API requests to `base` instead of the host's standard prefix.
    ///
    /// The rendered web URL still uses the host.
    pub fn with_api_base(mut self, base: &str) -> Result<Self> {
        let mut base = base.to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        self.api_base = Url::parse(&base)?;
        Ok(self)
    }

    /// Normalized host name
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Prefix that search paths are resolved against
    pub fn api_base(&self) -> &Url {
        &self.api_base
    }

    /// Full request URL for one page of `query`
    pub fn search_url(&self, query: &Query, page: PageRequest) -> Result<Url> {
        let mut url = self.api_base.join(&format!("search/{}", query.kind))?;
        url.set_query(Some(&encode_params(&query.params(page))));
        Ok(url)
    }

    /// Browser URL showing the same search. No request is made.
    pub fn url(&self, query: &Query) -> String {
        format!(
            "https://{}/search?{}",
            self.host,
            encode_params(&query.web_params())
        )
    }

    /// Search repositories
    pub async fn repositories(&self, query: &Query) -> Result<SearchResult<Repository>> {
        self.search(&with_kind(query, SearchKind::Repositories)).await
    }

    /// Search issues and pull requests
    pub async fn issues(&self, query: &Query) -> Result<SearchResult<Issue>> {
        self.search(&with_kind(query, SearchKind::Issues)).await
    }

    /// Search code
    pub async fn code(&self, query: &Query) -> Result<SearchResult<Code>> {
        self.search(&with_kind(query, SearchKind::Code)).await
    }

    /// Search commits
    pub async fn commits(&self, query: &Query) -> Result<SearchResult<Commit>> {
        self.search(&with_kind(query, SearchKind::Commits)).await
    }

    /// Run `query`, following `rel="next"` links until the limit is met or
    /// the service has no further page.
    ///
    /// Pages are fetched strictly one after another. Any failure aborts the
    /// whole search and discards items already collected. Dropping the
    /// returned future cancels the request in flight.
    pub async fn search<T: DeserializeOwned>(&self, query: &Query) -> Result<SearchResult<T>> {
        let mut state = PaginationState::new(query.limit);
        let mut result = SearchResult::default();
        let mut request = state.first_page();

        loop {
            let (mut page, cursor) = self.fetch_page::<T>(query, request).await?;
            page.items.truncate(state.remaining());

            let received = page.items.len();
            result.total = page.total;
            result.incomplete_results = page.incomplete_results;
            result.items.append(&mut page.items);

            debug!(
                "{} page {}: {} items ({} of {} total)",
                query.kind,
                request.page,
                received,
                state.fetched() + received,
                result.total
            );

            match state.record_page(received, result.total, &cursor) {
                NextPage::Continue(next) => request = next,
                NextPage::Done => break,
            }
        }

        Ok(result)
    }

    /// Fetch and decode a single page
    async fn fetch_page<T: DeserializeOwned>(
        &self,
        query: &Query,
        page: PageRequest,
    ) -> Result<(SearchResult<T>, Cursor)> {
        let url = self.search_url(query, page)?;
        let response = self.client.get(&url).await?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::from_response(status, &headers, &body, url).into());
        }

        let decoded: SearchResult<T> =
            serde_json::from_str(&body).map_err(|e| Error::decode(url.as_str(), e))?;
        Ok((decoded, Cursor::from_headers(&headers)))
    }
}

fn with_kind(query: &Query, kind: SearchKind) -> Query {
    Query {
        kind,
        ..query.clone()
    }
}

/// Lowercase `host` and fold subdomains of the well-known hosts
pub fn normalize_host(host: &str) -> String {
    let host = host.trim().trim_end_matches('/').to_ascii_lowercase();
    if host.ends_with(&format!(".{DEFAULT_HOST}")) {
        return DEFAULT_HOST.to_string();
    }
    if host.ends_with(&format!(".{LOCAL_HOST}")) {
        return LOCAL_HOST.to_string();
    }
    host
}

/// REST API prefix for a normalized host
pub fn rest_prefix(host: &str) -> String {
    match host {
        DEFAULT_HOST => format!("https://api.{DEFAULT_HOST}/"),
        LOCAL_HOST => format!("http://api.{LOCAL_HOST}/"),
        _ => format!("https://{host}/api/v3/"),
    }
}
