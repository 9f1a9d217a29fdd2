//! Pull-request tasks: search and create.

use serde::{Deserialize, Serialize};

use query::{IssueSort, Order, QueryError, SearchQuery, SearchQueryBuilder};
use records::AccessLevel;

use crate::errors::TaskError;
use crate::executor::run_search;
use crate::ports::{BlobStore, NewPullRequest, RepoOps, SearchTransport};
use crate::writer::FileOutput;

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Searches GitHub pull requests and writes the matches to blob storage.
///
/// Pull requests share the issue sort keys (created, updated, comments).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Search {
    /// Free-form search keywords and qualifiers.
    pub query: Option<String>,
    /// Restrict to pull requests mentioning this user.
    pub mentions: Option<String>,
    /// Restrict to open pull requests.
    pub open: Option<bool>,
    /// Restrict to closed pull requests.
    pub closed: Option<bool>,
    /// Restrict to merged pull requests.
    pub merged: Option<bool>,
    /// Restrict to draft pull requests.
    pub draft: Option<bool>,
    /// Restrict to pull requests assigned to this user.
    pub assigned: Option<String>,
    /// Restrict to pull requests whose title contains this text.
    pub title: Option<String>,
    /// Close-date filter; supports `>`, `<`, and `..` ranges.
    pub closed_at: Option<String>,
    /// Create-date filter; supports `>`, `<`, and `..` ranges.
    pub created_at: Option<String>,
    /// Update-date filter; supports `>`, `<`, and `..` ranges.
    pub updated_at: Option<String>,
    /// Restrict to pull requests containing this commit SHA (min. 7 chars).
    pub commit: Option<String>,
    /// Restrict to one repository (`owner/name`).
    pub repository: Option<String>,
    /// Restrict by the branch being merged into.
    pub base: Option<String>,
    /// Restrict by the branch the change comes from.
    pub head: Option<String>,
    /// Restrict to pull requests opened by the authenticated user.
    pub created_by_me: Option<bool>,
    /// Restrict to pull requests opened by this user or integration.
    pub author: Option<String>,
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
        tracing::info!(query = %query.q, "searching pull requests");
        let pages = transport.search_pulls(&query).await?;
        run_search(pages, access, store).await
    }

    fn build_query(&self) -> Result<SearchQuery, QueryError> {
        let mut builder = SearchQueryBuilder::<IssueSort>::new();
        builder.sort(self.sort).order(self.order);

        if let Some(query) = &self.query {
            builder.text(query);
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
        if self.draft == Some(true) {
            builder.qualifier("is", "draft")?;
        }
        if let Some(mentions) = &self.mentions {
            builder.qualifier("mentions", mentions)?;
        }
        if let Some(assigned) = &self.assigned {
            builder.qualifier("assignee", assigned)?;
        }
        if let Some(title) = &self.title {
            builder.text(title);
            builder.qualifier("in", "title")?;
        }
        if let Some(closed_at) = &self.closed_at {
            builder.qualifier("closed", closed_at)?;
        }
        if let Some(created_at) = &self.created_at {
            builder.qualifier("created", created_at)?;
        }
        if let Some(updated_at) = &self.updated_at {
            builder.qualifier("updated", updated_at)?;
        }
        if let Some(commit) = &self.commit {
            builder.qualifier("SHA", commit)?;
        }
        if let Some(repository) = &self.repository {
            builder.qualifier("repo", repository)?;
        }
        if let Some(base) = &self.base {
            builder.qualifier("base", base)?;
        }
        if let Some(head) = &self.head {
            builder.qualifier("head", head)?;
        }
        if self.created_by_me == Some(true) {
            builder.qualifier("author", "@me")?;
        }
        if let Some(author) = &self.author {
            builder.qualifier("author", author)?;
        }

        Ok(builder.build())
    }
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

/// Opens a pull request merging one branch into another.
#[derive(Debug, Clone, Deserialize)]
pub struct Create {
    /// Target repository as `owner/name`.
    pub repository: String,
    /// Branch the change comes from.
    pub source_branch: String,
    /// Branch the change merges into.
    pub target_branch: String,
    /// Pull-request title.
    pub title: String,
    /// Pull-request body.
    #[serde(default)]
    pub body: Option<String>,
    /// Whether maintainers may push to the source branch.
    #[serde(default)]
    pub maintainer_can_modify: bool,
    /// Whether to open as a draft.
    #[serde(default)]
    pub draft: bool,
}

/// Output of [`Create`]. Both URLs are absent when the credential lacks
/// pull access to the repository — that case is degraded, not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateOutput {
    pub issue_url: Option<String>,
    pub pull_request_url: Option<String>,
}

impl Create {
    /// Creates the pull request, or returns an empty output when pull
    /// access is missing.
    pub async fn run(&self, ops: &dyn RepoOps) -> Result<CreateOutput, TaskError> {
        if !ops.has_pull_access(&self.repository).await? {
            tracing::warn!(repository = %self.repository, "no pull access; skipping pull request creation");
            return Ok(CreateOutput::default());
        }

        let created = ops
            .create_pull_request(
                &self.repository,
                NewPullRequest {
                    title: self.title.clone(),
                    head: self.source_branch.clone(),
                    base: self.target_branch.clone(),
                    body: self.body.clone(),
                    maintainer_can_modify: self.maintainer_can_modify,
                    draft: self.draft,
                },
            )
            .await?;

        tracing::info!(repository = %self.repository, url = %created.pull_request_url, "created pull request");
        Ok(CreateOutput {
            issue_url: Some(created.issue_url),
            pull_request_url: Some(created.pull_request_url),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualifiers_render_in_call_order() {
        let search = Search {
            query: Some("fix login".into()),
            open: Some(true),
            repository: Some("acme/widget".into()),
            base: Some("main".into()),
            head: Some("feature/login".into()),
            sort: IssueSort::Updated,
            order: Order::Descending,
            ..Search::default()
        };

        let query = search.build_query().unwrap();
        assert_eq!(
            query.q,
            "fix login is:open repo:acme/widget base:main head:feature/login"
        );
        assert_eq!(query.sort, "updated");
        assert_eq!(query.order, Order::Descending);
    }

    #[test]
    fn title_adds_text_and_in_qualifier() {
        let search = Search {
            title: Some("login".into()),
            ..Search::default()
        };

        assert_eq!(search.build_query().unwrap().q, "login in:title");
    }

    #[test]
    fn created_by_me_uses_the_me_author() {
        let search = Search {
            created_by_me: Some(true),
            ..Search::default()
        };

        assert_eq!(search.build_query().unwrap().q, "author:@me");
    }

    #[test]
    fn commit_qualifier_is_upper_sha() {
        let search = Search {
            commit: Some("abc1234".into()),
            ..Search::default()
        };

        assert_eq!(search.build_query().unwrap().q, "SHA:abc1234");
    }
}
