//! Code (file content) search task.

use serde::{Deserialize, Serialize};

use query::{CodeSort, Order, QueryError, SearchQuery, SearchQueryBuilder};
use records::CodeDetail;

use crate::errors::TaskError;
use crate::executor::run_projected;
use crate::ports::{BlobStore, SearchTransport};
use crate::writer::FileOutput;

/// Whether forks participate in code search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fork {
    /// Search parents and forks alike (`fork:true`).
    ParentAndForks,
    /// Search forks only (`fork:only`).
    ForksOnly,
    /// Search parents only — the API default, so no qualifier is emitted.
    ParentOnly,
}

impl Fork {
    fn qualifier_value(self) -> Option<&'static str> {
        match self {
            Fork::ParentAndForks => Some("true"),
            Fork::ForksOnly => Some("only"),
            Fork::ParentOnly => None,
        }
    }
}

/// Searches file contents and writes the hits to blob storage.
///
/// Code hits carry no access-gated fields; anonymous and authenticated runs
/// produce identical records.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Search {
    /// Free-form search keywords and qualifiers.
    pub query: Option<String>,
    /// Restrict to one repository (`owner/name`).
    pub repository: Option<String>,
    /// Restrict to repositories owned by this user.
    pub user: Option<String>,
    /// Restrict matching to `file` or `path` (`in:` syntax).
    pub r#in: Option<String>,
    /// Restrict by language.
    pub language: Option<String>,
    /// Restrict by file extension.
    pub extension: Option<String>,
    /// Fork participation; parents only by default.
    pub fork: Option<Fork>,
    /// Restrict by file name.
    pub filename: Option<String>,
    /// Restrict by path prefix.
    pub path: Option<String>,
    /// File-size filter in bytes; supports `>`, `<`, and `..` ranges.
    pub size: Option<String>,
    /// Sort key; best match by default.
    pub sort: CodeSort,
    /// Sort direction; ascending by default.
    pub order: Order,
}

impl Search {
    /// Runs the search and returns the artifact reference.
    pub async fn run(
        &self,
        transport: &dyn SearchTransport,
        store: &dyn BlobStore,
    ) -> Result<FileOutput, TaskError> {
        let query = self.build_query()?;
        tracing::info!(query = %query.q, "searching code");
        let pages = transport.search_code(&query).await?;
        run_projected(pages, CodeDetail::from_item, store).await
    }

    fn build_query(&self) -> Result<SearchQuery, QueryError> {
        let mut builder = SearchQueryBuilder::<CodeSort>::new();
        builder.sort(self.sort).order(self.order);

        if let Some(query) = &self.query {
            builder.text(query);
        }
        if let Some(repository) = &self.repository {
            builder.qualifier("repo", repository)?;
        }
        if let Some(user) = &self.user {
            builder.qualifier("user", user)?;
        }
        if let Some(scope) = &self.r#in {
            builder.qualifier("in", scope)?;
        }
        if let Some(language) = &self.language {
            builder.qualifier("language", language)?;
        }
        if let Some(extension) = &self.extension {
            builder.qualifier("extension", extension)?;
        }
        if let Some(value) = self.fork.and_then(Fork::qualifier_value) {
            builder.qualifier("fork", value)?;
        }
        if let Some(filename) = &self.filename {
            builder.qualifier("filename", filename)?;
        }
        if let Some(path) = &self.path {
            builder.qualifier("path", path)?;
        }
        if let Some(size) = &self.size {
            builder.qualifier("size", size)?;
        }

        Ok(builder.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fork_default_emits_no_qualifier() {
        let search = Search {
            fork: Some(Fork::ParentOnly),
            language: Some("rust".into()),
            ..Search::default()
        };

        assert_eq!(search.build_query().unwrap().q, "language:rust");
    }

    #[test]
    fn forks_only_is_fork_only() {
        let search = Search {
            fork: Some(Fork::ForksOnly),
            ..Search::default()
        };

        assert_eq!(search.build_query().unwrap().q, "fork:only");
    }

    #[test]
    fn filename_and_size_are_qualifiers() {
        let search = Search {
            filename: Some("Cargo.toml".into()),
            size: Some("<1000".into()),
            ..Search::default()
        };

        assert_eq!(
            search.build_query().unwrap().q,
            "filename:Cargo.toml size:<1000"
        );
    }
}
