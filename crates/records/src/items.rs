//! Fetched GitHub domain objects.
//!
//! These are the shapes the transport port yields after a search call. They
//! are eager values: every nested field was resolved by the transport before
//! the item entered the page stream, so projection never performs I/O.
//!
//! A page of generic search results is heterogeneous in principle — the
//! transport hands back [`SearchItem`]s and the projector dispatches on the
//! variant. Items of a kind the projector does not understand travel as
//! [`SearchItem::Unsupported`] and are skipped downstream; the skip is
//! explicit, not a silent null.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Shared fragments
// ---------------------------------------------------------------------------

/// A user or organization account, reduced to its login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// The account's login name.
    pub login: String,
}

impl Account {
    /// Creates an account from a login.
    pub fn new(login: impl Into<String>) -> Self {
        Self {
            login: login.into(),
        }
    }
}

/// An issue or pull-request label, reduced to its name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// The label text.
    pub name: String,
}

impl Label {
    /// Creates a label from its name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A lightweight reference to the repository an item belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoRef {
    /// Repository name (without owner).
    pub name: String,
    /// Browser URL of the repository.
    pub html_url: String,
}

// ---------------------------------------------------------------------------
// Primary search items
// ---------------------------------------------------------------------------

/// A user account returned by user search.
///
/// Profile fields beyond `login`/`html_url` require an authenticated fetch;
/// the transport leaves them `None`/zero when running anonymously.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub login: String,
    pub html_url: String,
    pub name: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub public_repos: u32,
    /// Total private repositories; only visible to the account itself.
    pub total_private_repos: Option<u32>,
    pub followers: u32,
    pub following: u32,
    /// `"User"` or `"Organization"`.
    #[serde(rename = "type")]
    pub account_type: Option<String>,
}

/// A repository returned by repository search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    pub full_name: String,
    pub html_url: String,
    pub description: Option<String>,
    pub forks_count: u32,
    pub stargazers_count: u32,
    pub open_issues_count: u32,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub language: Option<String>,
    /// Owner account; resolving it takes a second API call, so the transport
    /// only populates it for authenticated runs.
    pub owner: Option<Account>,
    /// Count of open pull requests; same second-call rule as `owner`.
    pub open_pull_requests: Option<u32>,
}

/// An issue returned by issue search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub number: u64,
    pub title: String,
    /// `"open"` or `"closed"`.
    pub state: String,
    pub state_reason: Option<String>,
    /// The account that opened the issue.
    pub user: Account,
    pub assignee: Option<Account>,
    pub assignees: Vec<Account>,
    pub created_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
    pub closed_by: Option<Account>,
    pub comments: u32,
    pub labels: Vec<Label>,
    pub html_url: String,
    /// Backing repository; populated by the transport for authenticated runs.
    pub repository: Option<RepoRef>,
}

/// A pull request returned by pull-request search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    pub title: String,
    pub state: String,
    pub state_reason: Option<String>,
    pub user: Account,
    pub assignee: Option<Account>,
    pub assignees: Vec<Account>,
    pub created_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
    pub closed_by: Option<Account>,
    pub comments: u32,
    pub labels: Vec<Label>,
    /// Ref name of the branch being merged into.
    pub base: Option<String>,
    /// Ref name of the branch the change comes from.
    pub head: Option<String>,
    pub html_url: String,
    pub repository: Option<RepoRef>,
}

/// One item from a generic search page.
///
/// The tag makes the dynamic kind explicit; the projector matches on it
/// exhaustively.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SearchItem {
    User(User),
    Repository(Repository),
    PullRequest(PullRequest),
    Issue(Issue),
    /// A shape this core does not project. Carried through so the skip is
    /// observable (logged and counted) instead of silently dropped.
    Unsupported(serde_json::Value),
}

// ---------------------------------------------------------------------------
// Typed items for the commit and code search tasks
// ---------------------------------------------------------------------------

/// A commit returned by commit search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Commit {
    pub sha: String,
    pub author: Option<Account>,
    pub committer: Option<Account>,
    pub authored_date: Option<DateTime<Utc>>,
    pub commit_date: Option<DateTime<Utc>>,
    /// Name of the repository the commit belongs to.
    pub repository: Option<String>,
    pub message: Option<String>,
    pub lines_changed: u32,
    pub lines_added: u32,
    pub lines_deleted: u32,
    pub tree_sha: Option<String>,
    pub tree_url: Option<String>,
    /// Context of the most recent commit status, if any.
    pub last_status: Option<String>,
    pub html_url: Option<String>,
}

/// A file hit returned by code search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeHit {
    pub repository: Option<RepoRef>,
    pub name: Option<String>,
    pub sha: Option<String>,
    pub target: Option<String>,
    #[serde(rename = "type")]
    pub content_type: Option<String>,
    pub download_url: Option<String>,
    pub git_url: Option<String>,
    pub encoding: Option<String>,
    pub path: Option<String>,
    pub html_url: Option<String>,
}
