//! Commit search task.
//!
//! Commit search is the one endpoint GitHub refuses to answer anonymously,
//! so an unauthenticated run short-circuits to an empty output without
//! touching the transport.

use serde::Deserialize;

use query::{CommitSort, Order, QueryError, SearchQuery, SearchQueryBuilder};
use records::{AccessLevel, CommitDetail};

use crate::errors::TaskError;
use crate::executor::run_projected;
use crate::ports::{BlobStore, SearchTransport};
use crate::writer::FileOutput;

/// Searches GitHub commits and writes the matches to blob storage.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Search {
    /// Free-form search keywords and qualifiers.
    pub query: Option<String>,
    /// Restrict to one repository (`owner/name`).
    pub repository: Option<String>,
    /// Restrict by repository visibility (`public`/`private`).
    pub is: Option<String>,
    /// Restrict to commits with this SHA-1 hash.
    pub hash: Option<String>,
    /// Restrict to commits whose parent has this SHA-1 hash.
    pub parent: Option<String>,
    /// Restrict to commits with this git tree hash.
    pub tree: Option<String>,
    /// Restrict to repositories owned by this user.
    pub user: Option<String>,
    /// Restrict to repositories owned by this organization.
    pub org: Option<String>,
    /// Restrict by commit author login.
    pub author: Option<String>,
    /// Author-date filter; supports `>`, `<`, and `..` ranges.
    pub author_date: Option<String>,
    /// Restrict by the author's full email address.
    pub author_email: Option<String>,
    /// Restrict by the author's name.
    pub author_name: Option<String>,
    /// Restrict by committer login.
    pub committer: Option<String>,
    /// Committer-date filter; supports `>`, `<`, and `..` ranges.
    pub committer_date: Option<String>,
    /// Restrict by the committer's full email address.
    pub committer_email: Option<String>,
    /// Restrict by the committer's name.
    pub committer_name: Option<String>,
    /// Include (`true`) or exclude (`false`) merge commits.
    pub merge: Option<bool>,
    /// Sort key; committer date by default.
    pub sort: CommitSort,
    /// Sort direction; ascending by default.
    pub order: Order,
}

impl Search {
    /// Runs the search and returns the artifact reference.
    ///
    /// Under [`AccessLevel::Anonymous`] this returns [`FileOutput::empty`]
    /// immediately — no transport call, no artifact.
    pub async fn run(
        &self,
        transport: &dyn SearchTransport,
        store: &dyn BlobStore,
        access: AccessLevel,
    ) -> Result<FileOutput, TaskError> {
        if !access.is_authenticated() {
            tracing::warn!("commit search requires authentication; returning empty output");
            return Ok(FileOutput::empty());
        }

        let query = self.build_query()?;
        tracing::info!(query = %query.q, "searching commits");
        let pages = transport.search_commits(&query).await?;
        run_projected(pages, |commit| CommitDetail::from_item(commit, access), store).await
    }

    fn build_query(&self) -> Result<SearchQuery, QueryError> {
        let mut builder = SearchQueryBuilder::<CommitSort>::new();
        builder.sort(self.sort).order(self.order);

        if let Some(query) = &self.query {
            builder.text(query);
        }
        if let Some(repository) = &self.repository {
            builder.qualifier("repo", repository)?;
        }
        if let Some(is) = &self.is {
            builder.qualifier("is", is)?;
        }
        if let Some(hash) = &self.hash {
            builder.qualifier("hash", hash)?;
        }
        if let Some(parent) = &self.parent {
            builder.qualifier("parent", parent)?;
        }
        if let Some(tree) = &self.tree {
            builder.qualifier("tree", tree)?;
        }
        if let Some(user) = &self.user {
            builder.qualifier("user", user)?;
        }
        if let Some(org) = &self.org {
            builder.qualifier("org", org)?;
        }
        if let Some(author) = &self.author {
            builder.qualifier("author", author)?;
        }
        if let Some(author_date) = &self.author_date {
            builder.qualifier("author-date", author_date)?;
        }
        if let Some(author_email) = &self.author_email {
            builder.qualifier("author-email", author_email)?;
        }
        if let Some(author_name) = &self.author_name {
            builder.qualifier("author-name", author_name)?;
        }
        if let Some(committer) = &self.committer {
            builder.qualifier("committer", committer)?;
        }
        if let Some(committer_date) = &self.committer_date {
            builder.qualifier("committer-date", committer_date)?;
        }
        if let Some(committer_email) = &self.committer_email {
            builder.qualifier("committer-email", committer_email)?;
        }
        if let Some(committer_name) = &self.committer_name {
            builder.qualifier("committer-name", committer_name)?;
        }
        if let Some(merge) = self.merge {
            builder.qualifier("merge", if merge { "true" } else { "false" })?;
        }

        Ok(builder.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_qualifiers_render_with_dashed_names() {
        let search = Search {
            query: Some("Initial".into()),
            repository: Some("acme/widget".into()),
            author_date: Some(">2024-01-01".into()),
            merge: Some(false),
            ..Search::default()
        };

        let query = search.build_query().unwrap();
        assert_eq!(
            query.q,
            "Initial repo:acme/widget author-date:>2024-01-01 merge:false"
        );
        assert_eq!(query.sort, "committer-date");
    }

    #[test]
    fn sort_can_switch_to_author_date() {
        let search = Search {
            sort: CommitSort::AuthorDate,
            ..Search::default()
        };

        assert_eq!(search.build_query().unwrap().sort, "author-date");
    }
}
