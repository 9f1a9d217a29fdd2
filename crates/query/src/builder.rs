//! The search-query builder and its rendered output.
//!
//! [`SearchQueryBuilder`] wraps a [`QueryTermSet`] together with the sort key
//! and order direction for one search invocation. It is built once per task
//! run, consumed by [`SearchQueryBuilder::build`], and the resulting
//! [`SearchQuery`] is immutable — the transport only ever sees the finished
//! value.

use serde::{Deserialize, Serialize};

use crate::sort::{Order, SortKey};
use crate::terms::{QueryError, QueryTermSet};

// ---------------------------------------------------------------------------
// Rendered query
// ---------------------------------------------------------------------------

/// A fully rendered search query, ready for the transport port.
///
/// `sort` carries the wire name of the chosen sort key so the transport does
/// not need to know which entity-specific enum produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// The space-joined query string (free text and qualifier terms).
    pub q: String,
    /// Wire name of the sort key (e.g. `"created"`, `"committer-date"`).
    pub sort: String,
    /// Direction applied to the sort key.
    pub order: Order,
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Accumulates qualifiers, free text, sort, and order for one search.
///
/// Generic over the entity's sort-key enum; the defaults of that enum and of
/// [`Order`] apply until overridden. Sort and order are single mutable
/// fields with last-write-wins semantics; qualifier terms follow
/// [`QueryTermSet`]'s replace/remove rules.
#[derive(Debug, Clone)]
pub struct SearchQueryBuilder<S: SortKey> {
    terms: QueryTermSet,
    sort: S,
    order: Order,
}

impl<S: SortKey + Default> Default for SearchQueryBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SortKey + Default> SearchQueryBuilder<S> {
    /// Creates a builder with the entity's default sort key and ascending order.
    pub fn new() -> Self {
        Self {
            terms: QueryTermSet::new(),
            sort: S::default(),
            order: Order::default(),
        }
    }
}

impl<S: SortKey> SearchQueryBuilder<S> {
    /// Asserts or retracts a qualifier term; see [`QueryTermSet::add_or_replace`].
    pub fn qualifier(&mut self, qualifier: &str, value: &str) -> Result<&mut Self, QueryError> {
        self.terms.add_or_replace(qualifier, value)?;
        Ok(self)
    }

    /// Appends free text (keywords or a pre-rendered sub-query) untouched.
    pub fn text(&mut self, text: &str) -> &mut Self {
        self.terms.add_free_text(text);
        self
    }

    /// Sets the sort key. Last write wins.
    pub fn sort(&mut self, sort: S) -> &mut Self {
        self.sort = sort;
        self
    }

    /// Sets the order direction. Last write wins.
    pub fn order(&mut self, order: Order) -> &mut Self {
        self.order = order;
        self
    }

    /// Renders the final [`SearchQuery`], consuming the builder.
    ///
    /// An empty term set is legal and produces an empty `q`, meaning "match
    /// all accessible items the endpoint can return".
    pub fn build(self) -> SearchQuery {
        let q = self.terms.render();
        tracing::debug!(query = %q, sort = self.sort.wire_name(), "rendered search query");
        SearchQuery {
            q,
            sort: self.sort.wire_name().to_owned(),
            order: self.order,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::{IssueSort, RepositorySort};

    #[test]
    fn builds_query_with_defaults() {
        let mut builder = SearchQueryBuilder::<IssueSort>::new();
        builder.qualifier("repo", "acme/widget").unwrap();
        builder.qualifier("is", "open").unwrap();

        let query = builder.build();
        assert_eq!(query.q, "repo:acme/widget is:open");
        assert_eq!(query.sort, "created");
        assert_eq!(query.order, Order::Ascending);
    }

    #[test]
    fn sort_and_order_are_last_write_wins() {
        let mut builder = SearchQueryBuilder::<RepositorySort>::new();
        builder
            .sort(RepositorySort::Stars)
            .order(Order::Descending)
            .sort(RepositorySort::Forks);

        let query = builder.build();
        assert_eq!(query.sort, "forks");
        assert_eq!(query.order, Order::Descending);
    }

    #[test]
    fn empty_builder_renders_empty_query() {
        let query = SearchQueryBuilder::<IssueSort>::new().build();
        assert_eq!(query.q, "");
    }

    #[test]
    fn free_text_and_qualifiers_combine() {
        let mut builder = SearchQueryBuilder::<IssueSort>::new();
        builder.text("Initial");
        builder.qualifier("repo", "acme/widget").unwrap();
        builder.qualifier("language", "rust").unwrap();

        assert_eq!(
            builder.build().q,
            "Initial repo:acme/widget language:rust"
        );
    }
}
