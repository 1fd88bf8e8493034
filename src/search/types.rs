//! Search result types
//!
//! Field names follow the REST search API's JSON. Everything except the
//! identifying fields is optional or defaulted so partial payloads decode.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Aggregated result of a (possibly multi-page) search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult<T> {
    /// Service aborted the search early, e.g. on timeout
    #[serde(default)]
    pub incomplete_results: bool,
    /// Matched entities, in service order
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    /// Total matches reported by the service, independent of `items.len()`
    #[serde(rename = "total_count", default)]
    pub total: u64,
}

impl<T> Default for SearchResult<T> {
    fn default() -> Self {
        Self {
            incomplete_results: false,
            items: Vec::new(),
            total: 0,
        }
    }
}

impl<T> SearchResult<T> {
    /// Number of items fetched
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if no items were fetched
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Account that owns or authored something
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub login: String,
    #[serde(default)]
    pub id: u64,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub html_url: String,
}

/// License summary attached to a repository
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub name: String,
}

/// Repository search hit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    #[serde(default)]
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub owner: User,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub html_url: String,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub license: Option<License>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub visibility: Option<String>,
    #[serde(rename = "private", default)]
    pub is_private: bool,
    #[serde(rename = "fork", default)]
    pub is_fork: bool,
    #[serde(rename = "archived", default)]
    pub is_archived: bool,
    #[serde(rename = "stargazers_count", default)]
    pub stars: u64,
    #[serde(rename = "forks_count", default)]
    pub forks: u64,
    #[serde(rename = "watchers_count", default)]
    pub watchers: u64,
    #[serde(rename = "open_issues_count", default)]
    pub open_issues: u64,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub default_branch: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub pushed_at: Option<DateTime<Utc>>,
}

/// Issue label
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub name: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Marker present on issues that are pull requests
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PullRequestLinks {
    #[serde(default)]
    pub html_url: String,
    #[serde(default)]
    pub merged_at: Option<DateTime<Utc>>,
}

/// Issue or pull request search hit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    #[serde(default)]
    pub id: u64,
    pub number: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub state_reason: Option<String>,
    #[serde(default)]
    pub html_url: String,
    #[serde(default)]
    pub repository_url: String,
    #[serde(default)]
    pub user: User,
    #[serde(default)]
    pub assignees: Vec<User>,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(rename = "comments", default)]
    pub comments_count: u64,
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub pull_request: Option<PullRequestLinks>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub closed_at: Option<DateTime<Utc>>,
}

impl Issue {
    /// Check if this hit is a pull request
    pub fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }
}

/// Author or committer identity of a commit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommitUser {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

/// Git-level commit information
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommitInfo {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub comment_count: u64,
    #[serde(default)]
    pub author: CommitUser,
    #[serde(default)]
    pub committer: CommitUser,
}

/// Commit search hit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Commit {
    pub sha: String,
    #[serde(default)]
    pub html_url: String,
    #[serde(default)]
    pub commit: CommitInfo,
    #[serde(default)]
    pub author: Option<User>,
    #[serde(default)]
    pub committer: Option<User>,
    #[serde(default)]
    pub parents: Vec<CommitRef>,
    #[serde(default)]
    pub repository: Repository,
}

/// Reference to a parent commit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRef {
    pub sha: String,
    #[serde(default)]
    pub html_url: String,
}

/// Fragment of a file that matched the query
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextMatch {
    #[serde(default)]
    pub fragment: String,
    #[serde(default)]
    pub property: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

/// Code search hit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Code {
    pub name: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub sha: String,
    #[serde(default)]
    pub html_url: String,
    #[serde(default)]
    pub repository: Repository,
    #[serde(default)]
    pub text_matches: Vec<TextMatch>,
}
