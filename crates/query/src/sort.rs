//! Entity-specific sort keys and the shared order direction.
//!
//! Each search endpoint accepts its own small set of sort keys; the wire
//! names are the lowercase snake forms GitHub's search API expects. The
//! default for each enum matches what the corresponding task assumes when
//! the caller leaves sorting unspecified.

use serde::{Deserialize, Serialize};

/// A sort key that can be rendered into its wire name.
///
/// Implemented by every entity-specific sort enum so the query builder can
/// stay generic over which entity is being searched.
pub trait SortKey {
    /// Returns the wire name the search API expects (e.g. `"committer-date"`).
    fn wire_name(&self) -> &'static str;
}

// ---------------------------------------------------------------------------
// Order direction
// ---------------------------------------------------------------------------

/// Direction applied to the active sort key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Order {
    /// Results in ascending order (default).
    #[default]
    Ascending,
    /// Results in descending order.
    Descending,
}

impl Order {
    /// Returns the wire name (`"asc"` / `"desc"`).
    pub fn wire_name(self) -> &'static str {
        match self {
            Order::Ascending => "asc",
            Order::Descending => "desc",
        }
    }
}

// ---------------------------------------------------------------------------
// Sort keys per entity
// ---------------------------------------------------------------------------

/// Sort keys for issue and pull-request search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueSort {
    /// By creation time (default).
    #[default]
    Created,
    /// By last update time.
    Updated,
    /// By number of comments.
    Comments,
}

impl SortKey for IssueSort {
    fn wire_name(&self) -> &'static str {
        match self {
            IssueSort::Created => "created",
            IssueSort::Updated => "updated",
            IssueSort::Comments => "comments",
        }
    }
}

/// Sort keys for commit search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommitSort {
    /// By the date the commit was committed (default).
    #[default]
    CommitterDate,
    /// By the date the commit was authored.
    AuthorDate,
}

impl SortKey for CommitSort {
    fn wire_name(&self) -> &'static str {
        match self {
            CommitSort::CommitterDate => "committer-date",
            CommitSort::AuthorDate => "author-date",
        }
    }
}

/// Sort keys for repository search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepositorySort {
    /// By last update time (default).
    #[default]
    Updated,
    /// By stargazer count.
    Stars,
    /// By fork count.
    Forks,
}

impl SortKey for RepositorySort {
    fn wire_name(&self) -> &'static str {
        match self {
            RepositorySort::Updated => "updated",
            RepositorySort::Stars => "stars",
            RepositorySort::Forks => "forks",
        }
    }
}

/// Sort keys for user search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserSort {
    /// By the date the account joined GitHub (default).
    #[default]
    Joined,
    /// By number of owned repositories.
    Repositories,
    /// By follower count.
    Followers,
}

impl SortKey for UserSort {
    fn wire_name(&self) -> &'static str {
        match self {
            UserSort::Joined => "joined",
            UserSort::Repositories => "repositories",
            UserSort::Followers => "followers",
        }
    }
}

/// Sort keys for code search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeSort {
    /// By relevance (default).
    #[default]
    BestMatch,
    /// By index recency.
    Indexed,
}

impl SortKey for CodeSort {
    fn wire_name(&self) -> &'static str {
        match self {
            CodeSort::BestMatch => "best-match",
            CodeSort::Indexed => "indexed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_use_dashed_lowercase() {
        assert_eq!(CommitSort::CommitterDate.wire_name(), "committer-date");
        assert_eq!(CodeSort::BestMatch.wire_name(), "best-match");
        assert_eq!(Order::Descending.wire_name(), "desc");
    }

    #[test]
    fn defaults_match_task_defaults() {
        assert_eq!(IssueSort::default(), IssueSort::Created);
        assert_eq!(CommitSort::default(), CommitSort::CommitterDate);
        assert_eq!(RepositorySort::default(), RepositorySort::Updated);
        assert_eq!(UserSort::default(), UserSort::Joined);
        assert_eq!(Order::default(), Order::Ascending);
    }
}
