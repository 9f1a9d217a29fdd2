//! Port traits for the external collaborators a task run consumes.
//!
//! The transport owns everything protocol-shaped: issuing the actual GitHub
//! API calls, authentication, rate limiting, and pagination mechanics. Tasks
//! only see ordered pages of already-resolved domain objects. The blob store
//! owns durability; tasks hand it a finished local file and keep the opaque
//! reference it returns.

use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use query::SearchQuery;
use records::{CodeHit, Commit, SearchItem};

use crate::errors::{StorageError, TransportError};

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

/// An ordered, lazily fetched sequence of result pages.
///
/// `next_page` is pull-based: the next page is fetched only when the caller
/// asks for it, after exhausting the previous one. `Ok(None)` marks
/// exhaustion; any `Err` aborts the surrounding run.
#[async_trait]
pub trait PageStream<T>: Send {
    /// Fetches the next page, `None` when the sequence is exhausted.
    async fn next_page(&mut self) -> Result<Option<Vec<T>>, TransportError>;
}

/// Boxed page stream, as returned by the transport.
pub type Pages<T> = Box<dyn PageStream<T>>;

/// A [`PageStream`] over pages that are already in memory.
///
/// Transports that receive the full result set in one response wrap it here;
/// tests use it as the standard fake.
pub struct StaticPages<T> {
    pages: std::vec::IntoIter<Vec<T>>,
}

impl<T> StaticPages<T> {
    /// Wraps pre-fetched pages; they are yielded in the given order.
    pub fn new(pages: Vec<Vec<T>>) -> Self {
        Self {
            pages: pages.into_iter(),
        }
    }
}

#[async_trait]
impl<T: Send + 'static> PageStream<T> for StaticPages<T> {
    async fn next_page(&mut self) -> Result<Option<Vec<T>>, TransportError> {
        Ok(self.pages.next())
    }
}

// ---------------------------------------------------------------------------
// Search transport
// ---------------------------------------------------------------------------

/// The external component that actually runs GitHub search calls.
///
/// Every method takes an already rendered [`SearchQuery`] and returns an
/// order-preserving page stream. Retry/backoff, if any, happens inside the
/// implementation — callers treat every error as final.
#[async_trait]
pub trait SearchTransport: Send + Sync {
    /// Searches issues. Pages yield [`SearchItem::Issue`] values.
    async fn search_issues(&self, query: &SearchQuery)
        -> Result<Pages<SearchItem>, TransportError>;

    /// Searches pull requests. Pages yield [`SearchItem::PullRequest`] values.
    async fn search_pulls(&self, query: &SearchQuery)
        -> Result<Pages<SearchItem>, TransportError>;

    /// Searches user accounts. Pages yield [`SearchItem::User`] values.
    async fn search_users(&self, query: &SearchQuery)
        -> Result<Pages<SearchItem>, TransportError>;

    /// Searches repositories. Pages yield [`SearchItem::Repository`] values.
    async fn search_repositories(
        &self,
        query: &SearchQuery,
    ) -> Result<Pages<SearchItem>, TransportError>;

    /// Searches commits.
    async fn search_commits(&self, query: &SearchQuery) -> Result<Pages<Commit>, TransportError>;

    /// Searches file contents.
    async fn search_code(&self, query: &SearchQuery) -> Result<Pages<CodeHit>, TransportError>;
}

// ---------------------------------------------------------------------------
// Repository CRUD operations
// ---------------------------------------------------------------------------

/// Request to open a new issue.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewIssue {
    pub title: String,
    pub body: Option<String>,
    pub labels: Vec<String>,
    pub assignees: Vec<String>,
}

/// A freshly created issue, as reported back by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedIssue {
    pub url: String,
    pub number: u64,
}

/// A freshly created issue comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedComment {
    pub issue_url: String,
    pub comment_url: String,
}

/// Request to open a new pull request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewPullRequest {
    pub title: String,
    /// Branch the change comes from.
    pub head: String,
    /// Branch the change merges into.
    pub base: String,
    pub body: Option<String>,
    pub maintainer_can_modify: bool,
    pub draft: bool,
}

/// A freshly created pull request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedPullRequest {
    pub issue_url: String,
    pub pull_request_url: String,
}

/// The external component performing mutating repository operations.
#[async_trait]
pub trait RepoOps: Send + Sync {
    /// Opens an issue in `repository` (`owner/name`).
    async fn create_issue(
        &self,
        repository: &str,
        issue: NewIssue,
    ) -> Result<CreatedIssue, TransportError>;

    /// Comments on an existing issue.
    async fn comment_on_issue(
        &self,
        repository: &str,
        issue_number: u64,
        body: &str,
    ) -> Result<CreatedComment, TransportError>;

    /// Returns whether the current credential may open pull requests.
    async fn has_pull_access(&self, repository: &str) -> Result<bool, TransportError>;

    /// Opens a pull request in `repository`.
    async fn create_pull_request(
        &self,
        repository: &str,
        pull: NewPullRequest,
    ) -> Result<CreatedPullRequest, TransportError>;

    /// Triggers a `workflow_dispatch` event for a workflow on a ref.
    async fn dispatch_workflow(
        &self,
        repository: &str,
        workflow_id: &str,
        git_ref: &str,
        inputs: &serde_json::Map<String, serde_json::Value>,
    ) -> Result<(), TransportError>;
}

// ---------------------------------------------------------------------------
// Blob storage
// ---------------------------------------------------------------------------

/// The opaque reference a stored artifact is retained under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredObject {
    /// URI assigned by the store; the only artifact the caller keeps.
    pub uri: String,
}

/// The external component that durably stores a finished artifact file.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Persists the local file and returns its reference.
    async fn put_file(&self, file: &Path) -> Result<StoredObject, StorageError>;
}
