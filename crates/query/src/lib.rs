//! Search-query domain for OctoFlow.
//!
//! This crate builds GitHub search query strings from qualifier terms
//! (`repo:owner/name`, `is:open`, date ranges, …) and free-text keywords.
//! It knows nothing about HTTP or pagination; the rendered [`SearchQuery`]
//! is handed to the transport port defined in the `tasks` crate.
//!
//! ## Architectural Layer
//!
//! **Business logic, leaf.** No I/O dependencies. Infrastructure crates
//! consume the query strings produced here; they never add qualifier rules.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`terms`] | [`QueryTermSet`] — ordered qualifier/value accumulation |
//! | [`builder`] | [`SearchQueryBuilder`] and the rendered [`SearchQuery`] |
//! | [`sort`] | Entity-specific sort-key enums and [`Order`] |

pub mod builder;
pub mod sort;
pub mod terms;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use builder::{SearchQuery, SearchQueryBuilder};
pub use sort::{CodeSort, CommitSort, IssueSort, Order, RepositorySort, SortKey, UserSort};
pub use terms::{QueryError, QueryTermSet};
