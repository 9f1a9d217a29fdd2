//! User search task.

use serde::{Deserialize, Serialize};

use query::{Order, QueryError, SearchQuery, SearchQueryBuilder, UserSort};
use records::AccessLevel;

use crate::errors::TaskError;
use crate::executor::run_search;
use crate::ports::{BlobStore, SearchTransport};
use crate::writer::FileOutput;

/// Restricts user search to personal accounts or organizations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    /// Personal accounts only.
    User,
    /// Organization accounts only.
    Organization,
}

impl AccountType {
    fn wire_name(self) -> &'static str {
        match self {
            AccountType::User => "user",
            AccountType::Organization => "org",
        }
    }
}

/// Searches GitHub user accounts and writes the matches to blob storage.
///
/// Anonymous runs yield records reduced to login and profile URL.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Search {
    /// Free-form search keywords and qualifiers.
    pub query: Option<String>,
    /// Restrict by language of owned repositories.
    pub language: Option<String>,
    /// Join-date filter; supports `>`, `<`, and `..` ranges.
    pub created: Option<String>,
    /// Restrict by number of owned repositories.
    pub repositories: Option<u32>,
    /// Restrict matching to login, full name, or public email (`in:` syntax).
    pub r#in: Option<String>,
    /// Restrict by profile location.
    pub location: Option<String>,
    /// Restrict by follower count; supports `>`, `<`, and `..` ranges.
    pub followers: Option<String>,
    /// Restrict to personal accounts or organizations.
    pub account_type: Option<AccountType>,
    /// Sort key; join date by default.
    pub sort: UserSort,
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
        tracing::info!(query = %query.q, "searching users");
        let pages = transport.search_users(&query).await?;
        run_search(pages, access, store).await
    }

    fn build_query(&self) -> Result<SearchQuery, QueryError> {
        let mut builder = SearchQueryBuilder::<UserSort>::new();
        builder.sort(self.sort).order(self.order);

        if let Some(query) = &self.query {
            builder.text(query);
        }
        if let Some(language) = &self.language {
            builder.qualifier("language", language)?;
        }
        if let Some(created) = &self.created {
            builder.qualifier("created", created)?;
        }
        if let Some(repositories) = self.repositories {
            builder.qualifier("repos", &repositories.to_string())?;
        }
        if let Some(scope) = &self.r#in {
            builder.qualifier("in", scope)?;
        }
        if let Some(location) = &self.location {
            builder.qualifier("location", location)?;
        }
        if let Some(followers) = &self.followers {
            builder.qualifier("followers", followers)?;
        }
        if let Some(account_type) = self.account_type {
            builder.qualifier("type", account_type.wire_name())?;
        }

        Ok(builder.build())
    }
}
