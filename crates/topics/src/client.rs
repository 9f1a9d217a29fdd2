//! Direct REST client for the topic search endpoint.
//!
//! Topic search is the one operation that bypasses the generic transport
//! port: the endpoint has no typed SDK surface, so this client speaks the
//! REST contract itself. One GET per search, no retry — any non-200 answer
//! is final and aborts the surrounding task run.

use async_trait::async_trait;
use reqwest::header;
use reqwest::StatusCode;

use query::Order;
use tasks::TransportError;

use crate::model::TopicSearchResponse;

/// Media type GitHub's REST API expects in `Accept`.
pub const MEDIA_TYPE: &str = "application/vnd.github+json";

/// Header carrying the pinned REST API revision.
pub const API_VERSION_HEADER: &str = "X-GitHub-Api-Version";

/// The REST API revision this client is written against.
pub const API_VERSION: &str = "2022-11-28";

/// Default API root for github.com.
pub const DEFAULT_API_ROOT: &str = "https://api.github.com";

/// Renders the search URL for a rendered query string and order.
///
/// The query arrives space-joined from the term set; spaces become `+` so
/// the terms stay readable in logs and match what the endpoint parses.
/// The `order` parameter is always present, even for an empty query.
pub fn search_url(api_root: &str, query: &str, order: Order) -> String {
    format!(
        "{}/search/topics?q={}&order={}",
        api_root.trim_end_matches('/'),
        query.replace(' ', "+"),
        order.wire_name()
    )
}

// ---------------------------------------------------------------------------
// Finder port
// ---------------------------------------------------------------------------

/// The component that resolves a topic query into a response envelope.
///
/// [`TopicSearchClient`] is the production implementation; tests substitute
/// an in-memory fake.
#[async_trait]
pub trait TopicFinder: Send + Sync {
    /// Runs one topic search for the rendered query string.
    async fn search(
        &self,
        query: &str,
        order: Order,
    ) -> Result<TopicSearchResponse, TransportError>;
}

// ---------------------------------------------------------------------------
// HTTP client
// ---------------------------------------------------------------------------

/// HTTP implementation of [`TopicFinder`].
#[derive(Debug, Clone)]
pub struct TopicSearchClient {
    http: reqwest::Client,
    api_root: String,
    token: Option<String>,
}

impl TopicSearchClient {
    /// Creates a client against the github.com API root.
    ///
    /// With a token the request is sent authenticated; without one the
    /// search runs anonymously under the lower rate limit.
    pub fn new(token: Option<String>) -> Self {
        Self::with_api_root(DEFAULT_API_ROOT, token)
    }

    /// Creates a client against a custom API root (GitHub Enterprise).
    pub fn with_api_root(api_root: impl Into<String>, token: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_root: api_root.into(),
            token,
        }
    }
}

#[async_trait]
impl TopicFinder for TopicSearchClient {
    async fn search(
        &self,
        query: &str,
        order: Order,
    ) -> Result<TopicSearchResponse, TransportError> {
        let url = search_url(&self.api_root, query, order);
        tracing::debug!(%url, "requesting topic search");

        let mut request = self
            .http
            .get(&url)
            .header(header::ACCEPT, MEDIA_TYPE)
            .header(API_VERSION_HEADER, API_VERSION);
        if let Some(token) = &self.token {
            request = request.header(header::AUTHORIZATION, format!("token {token}"));
        }

        let response = request
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            let message = response.text().await.unwrap_or_default();
            return Err(TransportError::Status {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_encodes_spaces_as_plus_and_always_carries_order() {
        let url = search_url(
            DEFAULT_API_ROOT,
            "micronaut framework is:not-curated repositories:>100",
            Order::Descending,
        );

        assert_eq!(
            url,
            "https://api.github.com/search/topics?q=micronaut+framework+is:not-curated+repositories:>100&order=desc"
        );
    }

    #[test]
    fn empty_query_still_renders_order() {
        let url = search_url(DEFAULT_API_ROOT, "", Order::Ascending);
        assert_eq!(url, "https://api.github.com/search/topics?q=&order=asc");
    }

    #[test]
    fn trailing_slash_in_api_root_is_tolerated() {
        let url = search_url("https://github.example.com/api/v3/", "rust", Order::Ascending);
        assert_eq!(
            url,
            "https://github.example.com/api/v3/search/topics?q=rust&order=asc"
        );
    }
}
