//! Access-level gating for detail-record projection.
//!
//! GitHub answers anonymous searches with a reduced field set (and stricter
//! rate limits). Rather than re-checking "is this connection anonymous?"
//! inside every record constructor, the level is decided once per task run
//! and passed explicitly into the projector.

use serde::{Deserialize, Serialize};

/// Whether the originating GitHub call carried a credential.
///
/// Anonymous access is not an error; it silently yields detail records with
/// fewer populated fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessLevel {
    /// No credential; privileged fields stay unset.
    Anonymous,
    /// A credential was presented; the full field set is populated.
    Authenticated,
}

impl AccessLevel {
    /// Derives the level from an optional token: any non-blank token counts
    /// as authenticated.
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            Some(t) if !t.trim().is_empty() => AccessLevel::Authenticated,
            _ => AccessLevel::Anonymous,
        }
    }

    /// Returns `true` for [`AccessLevel::Authenticated`].
    pub fn is_authenticated(self) -> bool {
        matches!(self, AccessLevel::Authenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_or_missing_token_is_anonymous() {
        assert_eq!(AccessLevel::from_token(None), AccessLevel::Anonymous);
        assert_eq!(AccessLevel::from_token(Some("")), AccessLevel::Anonymous);
        assert_eq!(AccessLevel::from_token(Some("  ")), AccessLevel::Anonymous);
    }

    #[test]
    fn token_is_authenticated() {
        assert!(AccessLevel::from_token(Some("ghp_abc")).is_authenticated());
    }
}
