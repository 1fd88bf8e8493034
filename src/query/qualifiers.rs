//! Typed search qualifiers
//!
//! Each qualifier renders as a `name:value` token. Tokens come out in schema
//! order (alphabetical by qualifier name), never in insertion order.

/// Structured filter set appended to the free-text keywords of a query.
///
/// Unset fields contribute nothing to the query string. Comparison values
/// such as `">=5"` or `"2024-01-01..2024-02-01"` are passed through as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Qualifiers {
    pub archived: Option<bool>,
    pub assignee: Option<String>,
    pub author: Option<String>,
    pub author_date: Option<String>,
    pub author_email: Option<String>,
    pub author_name: Option<String>,
    pub base: Option<String>,
    pub closed: Option<String>,
    pub commenter: Option<String>,
    pub comments: Option<String>,
    pub committer: Option<String>,
    pub committer_date: Option<String>,
    pub committer_email: Option<String>,
    pub committer_name: Option<String>,
    pub created: Option<String>,
    pub draft: Option<bool>,
    pub extension: Option<String>,
    pub filename: Option<String>,
    pub followers: Option<String>,
    pub fork: Option<String>,
    pub forks: Option<String>,
    pub good_first_issues: Option<String>,
    pub hash: Option<String>,
    pub head: Option<String>,
    pub help_wanted_issues: Option<String>,
    pub r#in: Vec<String>,
    pub interactions: Option<String>,
    pub involves: Option<String>,
    pub is: Vec<String>,
    pub label: Vec<String>,
    pub language: Option<String>,
    pub license: Vec<String>,
    pub mentions: Option<String>,
    pub merged: Option<String>,
    pub milestone: Option<String>,
    pub no: Vec<String>,
    pub org: Option<String>,
    pub parent: Option<String>,
    pub path: Option<String>,
    pub project: Option<String>,
    pub pushed: Option<String>,
    pub reactions: Option<String>,
    pub repo: Vec<String>,
    pub review: Option<String>,
    pub review_requested: Option<String>,
    pub reviewed_by: Option<String>,
    pub size: Option<String>,
    pub stars: Option<String>,
    pub state: Option<String>,
    pub status: Option<String>,
    pub team: Option<String>,
    pub team_review_requested: Option<String>,
    pub topic: Vec<String>,
    pub topics: Option<String>,
    pub tree: Option<String>,
    pub r#type: Option<String>,
    pub updated: Option<String>,
    pub user: Vec<String>,
}

/// Borrowed view of one qualifier field
#[derive(Debug, Clone, Copy)]
enum Field<'a> {
    Flag(Option<bool>),
    Single(Option<&'a str>),
    Multi(&'a [String]),
}

fn single(value: &Option<String>) -> Field<'_> {
    Field::Single(value.as_deref())
}

impl Qualifiers {
    /// Render every set qualifier as a `name:value` token.
    ///
    /// Multi-valued qualifiers yield one token per non-empty element, in
    /// element order. Values are not quoted or escaped here.
    pub fn tokens(&self) -> Vec<String> {
        let mut tokens = Vec::new();
        for (name, field) in self.fields() {
            match field {
                Field::Flag(Some(flag)) => tokens.push(format!("{name}:{flag}")),
                Field::Single(Some(value)) if !value.is_empty() => {
                    tokens.push(format!("{name}:{value}"));
                }
                Field::Multi(values) => tokens.extend(
                    values
                        .iter()
                        .filter(|v| !v.is_empty())
                        .map(|v| format!("{name}:{v}")),
                ),
                _ => {}
            }
        }
        tokens
    }

    /// Check if no qualifier is set
    pub fn is_empty(&self) -> bool {
        self.tokens().is_empty()
    }

    fn fields(&self) -> [(&'static str, Field<'_>); 58] {
        [
            ("archived", Field::Flag(self.archived)),
            ("assignee", single(&self.assignee)),
            ("author", single(&self.author)),
            ("author-date", single(&self.author_date)),
            ("author-email", single(&self.author_email)),
            ("author-name", single(&self.author_name)),
            ("base", single(&self.base)),
            ("closed", single(&self.closed)),
            ("commenter", single(&self.commenter)),
            ("comments", single(&self.comments)),
            ("committer", single(&self.committer)),
            ("committer-date", single(&self.committer_date)),
            ("committer-email", single(&self.committer_email)),
            ("committer-name", single(&self.committer_name)),
            ("created", single(&self.created)),
            ("draft", Field::Flag(self.draft)),
            ("extension", single(&self.extension)),
            ("filename", single(&self.filename)),
            ("followers", single(&self.followers)),
            ("fork", single(&self.fork)),
            ("forks", single(&self.forks)),
            ("good-first-issues", single(&self.good_first_issues)),
            ("hash", single(&self.hash)),
            ("head", single(&self.head)),
            ("help-wanted-issues", single(&self.help_wanted_issues)),
            ("in", Field::Multi(&self.r#in)),
            ("interactions", single(&self.interactions)),
            ("involves", single(&self.involves)),
            ("is", Field::Multi(&self.is)),
            ("label", Field::Multi(&self.label)),
            ("language", single(&self.language)),
            ("license", Field::Multi(&self.license)),
            ("mentions", single(&self.mentions)),
            ("merged", single(&self.merged)),
            ("milestone", single(&self.milestone)),
            ("no", Field::Multi(&self.no)),
            ("org", single(&self.org)),
            ("parent", single(&self.parent)),
            ("path", single(&self.path)),
            ("project", single(&self.project)),
            ("pushed", single(&self.pushed)),
            ("reactions", single(&self.reactions)),
            ("repo", Field::Multi(&self.repo)),
            ("review", single(&self.review)),
            ("review-requested", single(&self.review_requested)),
            ("reviewed-by", single(&self.reviewed_by)),
            ("size", single(&self.size)),
            ("stars", single(&self.stars)),
            ("state", single(&self.state)),
            ("status", single(&self.status)),
            ("team", single(&self.team)),
            ("team-review-requested", single(&self.team_review_requested)),
            ("topic", Field::Multi(&self.topic)),
            ("topics", single(&self.topics)),
            ("tree", single(&self.tree)),
            ("type", single(&self.r#type)),
            ("updated", single(&self.updated)),
            ("user", Field::Multi(&self.user)),
        ]
    }
}
