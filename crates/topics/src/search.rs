//! Topic search task.

use serde::{Deserialize, Serialize};

use query::{Order, QueryError, QueryTermSet};
use tasks::{BlobStore, FileOutput, ResultStreamWriter, TaskError};

use crate::client::TopicFinder;

/// Curation/featuring filter for topic search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Is {
    /// Topics curated by the community.
    Curated,
    /// Topics featured on github.com/topics.
    Featured,
    /// Topics not curated.
    NotCurated,
    /// Topics not featured.
    NotFeatured,
}

impl Is {
    fn wire_name(self) -> &'static str {
        match self {
            Is::Curated => "curated",
            Is::Featured => "featured",
            Is::NotCurated => "not-curated",
            Is::NotFeatured => "not-featured",
        }
    }
}

/// Searches GitHub topics and writes the matches to blob storage.
///
/// The response arrives in a single envelope rather than a page stream, but
/// the items are persisted the same way as every other search: one JSON
/// line per topic, in response order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Search {
    /// Free-form search keywords and qualifiers.
    pub query: Option<String>,
    /// Curation/featuring filter.
    pub is: Option<Is>,
    /// Repository-count filter; supports `>`, `<`, and `..` ranges.
    pub repositories: Option<String>,
    /// Create-date filter; supports `>`, `<`, and `..` ranges.
    pub created: Option<String>,
    /// Sort direction; ascending by default.
    pub order: Order,
}

impl Search {
    /// Runs the search and returns the artifact reference.
    pub async fn run(
        &self,
        finder: &dyn TopicFinder,
        store: &dyn BlobStore,
    ) -> Result<FileOutput, TaskError> {
        let query = self.build_terms()?.render();
        tracing::info!(query = %query, "searching topics");

        let response = finder.search(&query, self.order).await?;
        if response.incomplete_results {
            tracing::warn!(
                total = response.total_count,
                "topic search timed out server-side; results are a subset"
            );
        }

        let mut writer = ResultStreamWriter::new()?;
        for topic in &response.items {
            writer.append(topic)?;
        }
        writer.finish(store).await
    }

    fn build_terms(&self) -> Result<QueryTermSet, QueryError> {
        let mut terms = QueryTermSet::new();
        if let Some(query) = &self.query {
            terms.add_free_text(query);
        }
        if let Some(is) = self.is {
            terms.add_or_replace("is", is.wire_name())?;
        }
        if let Some(repositories) = &self.repositories {
            terms.add_or_replace("repositories", repositories)?;
        }
        if let Some(created) = &self.created {
            terms.add_or_replace("created", created)?;
        }
        Ok(terms)
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use tasks::{StorageError, StoredObject, TransportError};

    use crate::model::{Topic, TopicSearchResponse};

    use super::*;

    /// Answers with a canned response and records the query it was asked.
    #[derive(Default)]
    struct FakeFinder {
        items: Vec<Topic>,
        fail_status: Option<u16>,
        asked: Mutex<Vec<(String, Order)>>,
    }

    impl FakeFinder {
        fn with_topics(names: &[&str]) -> Self {
            Self {
                items: names.iter().map(|name| topic(name)).collect(),
                ..Self::default()
            }
        }

        fn failing(status: u16) -> Self {
            Self {
                fail_status: Some(status),
                ..Self::default()
            }
        }
    }

    #[async_trait]
    impl TopicFinder for FakeFinder {
        async fn search(
            &self,
            query: &str,
            order: Order,
        ) -> Result<TopicSearchResponse, TransportError> {
            self.asked.lock().unwrap().push((query.to_owned(), order));
            if let Some(status) = self.fail_status {
                return Err(TransportError::Status {
                    status,
                    message: "rate limited".into(),
                });
            }
            Ok(TopicSearchResponse {
                total_count: self.items.len() as u64,
                incomplete_results: false,
                items: self.items.clone(),
            })
        }
    }

    /// Keeps the uploaded artifact body in memory.
    #[derive(Default)]
    struct MemoryStore {
        body: Mutex<Option<String>>,
    }

    #[async_trait]
    impl BlobStore for MemoryStore {
        async fn put_file(&self, file: &Path) -> Result<StoredObject, StorageError> {
            *self.body.lock().unwrap() = Some(std::fs::read_to_string(file)?);
            Ok(StoredObject {
                uri: "memory://topics".to_owned(),
            })
        }
    }

    fn topic(name: &str) -> Topic {
        Topic {
            name: name.to_owned(),
            display_name: None,
            short_description: None,
            description: None,
            created_by: None,
            released: None,
            created_at: None,
            updated_at: None,
            featured: false,
            curated: false,
            score: None,
        }
    }

    #[tokio::test]
    async fn renders_free_text_before_qualifiers() {
        let finder = FakeFinder::with_topics(&[]);
        let store = MemoryStore::default();

        let task = Search {
            query: Some("micronaut framework".into()),
            is: Some(Is::NotCurated),
            repositories: Some(">100".into()),
            order: Order::Descending,
            ..Search::default()
        };
        task.run(&finder, &store).await.unwrap();

        let asked = finder.asked.lock().unwrap();
        assert_eq!(
            asked[0],
            (
                "micronaut framework is:not-curated repositories:>100".to_owned(),
                Order::Descending
            )
        );
    }

    #[test]
    fn typed_filters_render_like_the_inline_query() {
        let typed = Search {
            is: Some(Is::Curated),
            repositories: Some(">100".into()),
            ..Search::default()
        };
        let inline = Search {
            query: Some("is:curated repositories:>100".into()),
            ..Search::default()
        };

        assert_eq!(
            typed.build_terms().unwrap().render(),
            inline.build_terms().unwrap().render()
        );
    }

    #[tokio::test]
    async fn topics_are_written_in_response_order() {
        let finder = FakeFinder::with_topics(&["rust", "tokio", "serde"]);
        let store = MemoryStore::default();

        let output = Search::default().run(&finder, &store).await.unwrap();
        assert_eq!(output.uri.as_deref(), Some("memory://topics"));

        let body = store.body.lock().unwrap().take().unwrap();
        let names: Vec<String> = body
            .lines()
            .map(|line| {
                serde_json::from_str::<serde_json::Value>(line).unwrap()["name"]
                    .as_str()
                    .unwrap()
                    .to_owned()
            })
            .collect();
        assert_eq!(names, vec!["rust", "tokio", "serde"]);
    }

    #[tokio::test]
    async fn empty_response_still_yields_an_artifact() {
        let finder = FakeFinder::with_topics(&[]);
        let store = MemoryStore::default();

        let output = Search::default().run(&finder, &store).await.unwrap();
        assert!(output.uri.is_some());
        assert_eq!(store.body.lock().unwrap().take().unwrap(), "");
    }

    #[tokio::test]
    async fn non_ok_status_aborts_without_an_artifact() {
        let finder = FakeFinder::failing(403);
        let store = MemoryStore::default();

        let error = Search::default().run(&finder, &store).await.unwrap_err();
        assert!(matches!(
            error,
            TaskError::Transport(TransportError::Status { status: 403, .. })
        ));
        assert!(store.body.lock().unwrap().is_none());
    }

    #[test]
    fn all_is_filters_have_dashed_wire_names() {
        assert_eq!(Is::Curated.wire_name(), "curated");
        assert_eq!(Is::NotCurated.wire_name(), "not-curated");
        assert_eq!(Is::Featured.wire_name(), "featured");
        assert_eq!(Is::NotFeatured.wire_name(), "not-featured");
    }
}
