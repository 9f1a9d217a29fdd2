//! Repository search task.

use serde::{Deserialize, Serialize};

use query::{Order, QueryError, RepositorySort, SearchQuery, SearchQueryBuilder};
use records::AccessLevel;

use crate::errors::TaskError;
use crate::executor::run_search;
use crate::ports::{BlobStore, SearchTransport};
use crate::writer::FileOutput;

/// Repository visibility filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Public repositories only.
    Public,
    /// Private repositories visible to the credential.
    Private,
    /// Internal repositories only.
    Internal,
}

impl Visibility {
    fn wire_name(self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Private => "private",
            Visibility::Internal => "internal",
        }
    }
}

/// Searches GitHub repositories and writes the matches to blob storage.
///
/// Owner login and open-pull-request count only appear in the records when
/// the run is authenticated.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Search {
    /// Free-form search keywords and qualifiers.
    pub query: Option<String>,
    /// Restrict to one repository (`owner/name`).
    pub repository: Option<String>,
    /// Restrict by primary language.
    pub language: Option<String>,
    /// Create-date filter; supports `>`, `<`, and `..` ranges.
    pub created: Option<String>,
    /// Star-count filter; supports `>`, `<`, and `..` ranges.
    pub stars: Option<String>,
    /// Restrict to repositories owned by this user.
    pub user: Option<String>,
    /// Restrict by topic.
    pub topic: Option<String>,
    /// Restrict by visibility.
    pub visibility: Option<Visibility>,
    /// Sort key; last update by default.
    pub sort: RepositorySort,
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
        tracing::info!(query = %query.q, "searching repositories");
        let pages = transport.search_repositories(&query).await?;
        run_search(pages, access, store).await
    }

    fn build_query(&self) -> Result<SearchQuery, QueryError> {
        let mut builder = SearchQueryBuilder::<RepositorySort>::new();
        builder.sort(self.sort).order(self.order);

        if let Some(visibility) = self.visibility {
            builder.qualifier("is", visibility.wire_name())?;
        }
        if let Some(query) = &self.query {
            builder.text(query);
        }
        if let Some(language) = &self.language {
            builder.qualifier("language", language)?;
        }
        if let Some(created) = &self.created {
            builder.qualifier("created", created)?;
        }
        if let Some(repository) = &self.repository {
            builder.qualifier("repo", repository)?;
        }
        if let Some(stars) = &self.stars {
            builder.qualifier("stars", stars)?;
        }
        if let Some(user) = &self.user {
            builder.qualifier("user", user)?;
        }
        if let Some(topic) = &self.topic {
            builder.qualifier("topic", topic)?;
        }

        Ok(builder.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visibility_renders_as_is_qualifier() {
        let search = Search {
            user: Some("acme".into()),
            language: Some("rust".into()),
            visibility: Some(Visibility::Public),
            sort: RepositorySort::Stars,
            order: Order::Descending,
            ..Search::default()
        };

        let query = search.build_query().unwrap();
        assert_eq!(query.q, "is:public language:rust user:acme");
        assert_eq!(query.sort, "stars");
        assert_eq!(query.order, Order::Descending);
    }

    #[test]
    fn star_and_topic_filters_are_qualifiers() {
        let search = Search {
            stars: Some(">=100".into()),
            topic: Some("cli".into()),
            ..Search::default()
        };

        assert_eq!(search.build_query().unwrap().q, "stars:>=100 topic:cli");
    }
}
