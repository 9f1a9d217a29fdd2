//! Wire shapes of the topic search endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One topic from a search response.
///
/// Topics carry no access-gated fields; whatever the endpoint returns is
/// written to the artifact verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub name: String,
    pub display_name: Option<String>,
    pub short_description: Option<String>,
    pub description: Option<String>,
    pub created_by: Option<String>,
    /// Version in which the topic's subject was first released.
    pub released: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub curated: bool,
    pub score: Option<f64>,
}

/// The envelope the topic search endpoint responds with.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TopicSearchResponse {
    pub total_count: u64,
    /// Set when the query timed out server-side and the result set is a
    /// best-effort subset.
    #[serde(default)]
    pub incomplete_results: bool,
    pub items: Vec<Topic>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_deserializes_with_minimal_topic() {
        let body = serde_json::json!({
            "total_count": 1,
            "incomplete_results": false,
            "items": [{
                "name": "rust",
                "display_name": "Rust",
                "short_description": null,
                "description": "A systems language.",
                "created_by": "Graydon Hoare",
                "released": "2010",
                "created_at": "2017-01-20T12:00:00Z",
                "updated_at": null,
                "featured": true,
                "curated": true,
                "score": 1.0
            }]
        });

        let response: TopicSearchResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.total_count, 1);
        assert_eq!(response.items[0].name, "rust");
        assert!(response.items[0].featured);
    }

    #[test]
    fn missing_flags_default_to_false() {
        let body = serde_json::json!({
            "total_count": 0,
            "items": [{
                "name": "obscure",
                "display_name": null,
                "short_description": null,
                "description": null,
                "created_by": null,
                "released": null,
                "created_at": null,
                "updated_at": null,
                "score": null
            }]
        });

        let response: TopicSearchResponse = serde_json::from_value(body).unwrap();
        assert!(!response.incomplete_results);
        assert!(!response.items[0].curated);
    }
}
