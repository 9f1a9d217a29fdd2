//! Issue tasks: search, create, comment.

use serde::Deserialize;

use query::{IssueSort, Order, QueryError, SearchQuery, SearchQueryBuilder};
use records::AccessLevel;

use crate::errors::TaskError;
use crate::executor::run_search;
use crate::ports::{BlobStore, NewIssue, RepoOps, SearchTransport};
use crate::writer::FileOutput;

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Searches GitHub issues and writes the matches to blob storage.
///
/// Without a credential the search runs anonymously and yields records with
/// fewer populated fields.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Search {
    /// Free-form search keywords and qualifiers.
    pub query: Option<String>,
    /// Restrict to issues mentioning this user.
    pub mentions: Option<String>,
    /// Restrict to open issues.
    pub open: Option<bool>,
    /// Restrict to closed issues.
    pub closed: Option<bool>,
    /// Restrict to merged issues.
    pub merged: Option<bool>,
    /// Sort key; created time by default.
    pub sort: IssueSort,
    /// Sort direction; ascending by default.
    pub order: Order,
}

impl Search {
    /// Runs the search and returns the artifact reference.
    pub async fn run(
        &self,
        transport: &dyn SearchTransport,
        store: &dyn BlobStore,
        access: AccessLevel,
    ) -> Result<FileOutput, TaskError> {
        let query = self.build_query()?;
        tracing::info!(query = %query.q, "searching issues");
        let pages = transport.search_issues(&query).await?;
        run_search(pages, access, store).await
    }

    fn build_query(&self) -> Result<SearchQuery, QueryError> {
        let mut builder = SearchQueryBuilder::<IssueSort>::new();
        builder.sort(self.sort).order(self.order);

        if let Some(query) = &self.query {
            builder.text(query);
        }
        if let Some(mentions) = &self.mentions {
            builder.qualifier("mentions", mentions)?;
        }
        if self.open == Some(true) {
            builder.qualifier("is", "open")?;
        }
        if self.closed == Some(true) {
            builder.qualifier("is", "closed")?;
        }
        if self.merged == Some(true) {
            builder.qualifier("is", "merged")?;
        }

        Ok(builder.build())
    }
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

/// Opens a new issue in a repository.
#[derive(Debug, Clone, Deserialize)]
pub struct Create {
    /// Target repository as `owner/name`.
    pub repository: String,
    /// Issue title.
    pub title: String,
    /// Issue body.
    #[serde(default)]
    pub body: Option<String>,
    /// Labels to attach.
    #[serde(default)]
    pub labels: Vec<String>,
    /// Logins to assign.
    #[serde(default)]
    pub assignees: Vec<String>,
}

/// Output of [`Create`].
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct CreateOutput {
    pub issue_url: String,
    pub issue_number: u64,
}

impl Create {
    /// Creates the issue and returns its URL and number.
    pub async fn run(&self, ops: &dyn RepoOps) -> Result<CreateOutput, TaskError> {
        let created = ops
            .create_issue(
                &self.repository,
                NewIssue {
                    title: self.title.clone(),
                    body: self.body.clone(),
                    labels: self.labels.clone(),
                    assignees: self.assignees.clone(),
                },
            )
            .await?;

        tracing::info!(repository = %self.repository, number = created.number, "created issue");
        Ok(CreateOutput {
            issue_url: created.url,
            issue_number: created.number,
        })
    }
}

// ---------------------------------------------------------------------------
// Comment
// ---------------------------------------------------------------------------

/// Adds a comment to an existing issue.
#[derive(Debug, Clone, Deserialize)]
pub struct Comment {
    /// Target repository as `owner/name`.
    pub repository: String,
    /// Number of the issue to comment on.
    pub issue_number: u64,
    /// Comment body.
    pub body: String,
}

/// Output of [`Comment`].
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct CommentOutput {
    pub issue_url: String,
    pub comment_url: String,
}

impl Comment {
    /// Posts the comment and returns the issue and comment URLs.
    pub async fn run(&self, ops: &dyn RepoOps) -> Result<CommentOutput, TaskError> {
        let created = ops
            .comment_on_issue(&self.repository, self.issue_number, &self.body)
            .await?;

        Ok(CommentOutput {
            issue_url: created.issue_url,
            comment_url: created.comment_url,
        })
    }
}
