//! Query encoding
//!
//! Turns a structured [`Query`] into the service's `q` grammar and the full
//! parameter set for one page request.
//!
//! # Overview
//!
//! - [`Qualifiers`] render as `name:value` tokens in a fixed schema order
//! - [`Query::q`] joins keywords (caller order) and qualifier tokens
//! - [`Query::params`] adds `page`, `per_page`, `order` and `sort`
//! - [`encode_params`] applies form percent-encoding (space becomes `+`)

mod qualifiers;

pub use qualifiers::Qualifiers;

use crate::pagination::PageRequest;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::form_urlencoded;

/// Entity type being searched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
    #[default]
    Repositories,
    Issues,
    Code,
    Commits,
}

impl SearchKind {
    /// Path segment and `type` parameter for this kind
    pub fn as_str(self) -> &'static str {
        match self {
            SearchKind::Repositories => "repositories",
            SearchKind::Issues => "issues",
            SearchKind::Code => "code",
            SearchKind::Commits => "commits",
        }
    }
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchKind {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "repositories" => Ok(SearchKind::Repositories),
            "issues" => Ok(SearchKind::Issues),
            "code" => Ok(SearchKind::Code),
            "commits" => Ok(SearchKind::Commits),
            other => Err(crate::Error::config(format!("unknown search kind '{other}'"))),
        }
    }
}

/// A search request as built by the caller.
///
/// The encoder never mutates a `Query`; per-page values travel separately
/// in a [`PageRequest`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    /// Free-text terms, kept in caller order
    pub keywords: Vec<String>,
    /// Structured filters
    pub qualifiers: Qualifiers,
    /// Target entity type
    pub kind: SearchKind,
    /// Maximum number of items to return; 0 means no limit
    pub limit: usize,
    /// Sort direction token, omitted when empty
    pub order: String,
    /// Sort field token, omitted when empty
    pub sort: String,
}

impl Query {
    /// Create an empty query for the given kind
    pub fn new(kind: SearchKind) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }

    /// Add a keyword
    #[must_use]
    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keywords.push(keyword.into());
        self
    }

    /// Set the qualifiers
    #[must_use]
    pub fn qualifiers(mut self, qualifiers: Qualifiers) -> Self {
        self.qualifiers = qualifiers;
        self
    }

    /// Set the result limit (0 = no limit)
    #[must_use]
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Set the sort direction
    #[must_use]
    pub fn order(mut self, order: impl Into<String>) -> Self {
        self.order = order.into();
        self
    }

    /// Set the sort field
    #[must_use]
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = sort.into();
        self
    }

    /// The `q` parameter: keywords first, then qualifier tokens, single-space separated
    pub fn q(&self) -> String {
        let keywords = self
            .keywords
            .iter()
            .map(|k| k.trim())
            .filter(|k| !k.is_empty());
        let tokens = self.qualifiers.tokens();

        let mut q = String::new();
        for part in keywords.chain(tokens.iter().map(String::as_str)) {
            if !q.is_empty() {
                q.push(' ');
            }
            q.push_str(part);
        }
        q.trim().to_string()
    }

    /// Ordered parameter set for one page request
    pub fn params(&self, page: PageRequest) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("q", self.q()),
            ("page", page.page.to_string()),
            ("per_page", page.per_page.to_string()),
        ];
        if !self.order.is_empty() {
            params.push(("order", self.order.clone()));
        }
        if !self.sort.is_empty() {
            params.push(("sort", self.sort.clone()));
        }
        params
    }

    /// Parameters for the browser search page, sorted by name
    pub fn web_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("q", self.q()), ("type", self.kind.to_string())];
        if !self.order.is_empty() {
            params.push(("order", self.order.clone()));
        }
        if !self.sort.is_empty() {
            params.push(("sort", self.sort.clone()));
        }
        params.sort_by_key(|(name, _)| *name);
        params
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.q())
    }
}

/// Form-encode parameters in the given order
pub fn encode_params(params: &[(&str, String)]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params.iter().map(|(k, v)| (*k, v.as_str())))
        .finish()
}

#[cfg(test)]
mod tests;
