//! Ordered qualifier-term accumulation with replace/remove semantics.
//!
//! GitHub's search syntax allows a qualifier to repeat legally (e.g. several
//! `label:` terms), so [`QueryTermSet`] is not a map in the replace-on-insert
//! sense: adding a non-empty value always appends. The only way to retract a
//! qualifier is an explicit empty-value call, which drops every value recorded
//! under that qualifier. Callers that manage single-valued qualifiers (e.g.
//! `head:`) use this to reset state without tracking it externally.

use thiserror::Error;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors produced while assembling a query.
///
/// These are configuration errors: surfaced immediately, never retried.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    /// A qualifier name was empty or blank. Passing an empty qualifier is a
    /// programming error in the calling task, not a runtime condition.
    #[error("qualifier name must not be empty")]
    EmptyQualifier,
}

// ---------------------------------------------------------------------------
// QueryTermSet
// ---------------------------------------------------------------------------

/// An ordered collection of search qualifier terms plus free-text tokens.
///
/// Qualifiers are held as an ordered association from qualifier name to the
/// list of values asserted under it; free text is a separate ordered list.
/// Rendering emits free text first, then `name:value` terms grouped by
/// qualifier in first-insertion order — matching how the GitHub search box
/// reads (`micronaut framework is:not-curated repositories:>100`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryTermSet {
    qualifiers: Vec<(String, Vec<String>)>,
    free_text: Vec<String>,
}

impl QueryTermSet {
    /// Creates an empty term set. An empty set is legal and renders as `""`,
    /// meaning "match everything the endpoint can return".
    pub fn new() -> Self {
        Self::default()
    }

    /// Asserts `qualifier:value`, or retracts the qualifier when `value` is blank.
    ///
    /// - Non-empty `value`: appends to the qualifier's value list. Repeated
    ///   calls with the same qualifier accumulate; they do not replace.
    /// - Blank `value`: removes the qualifier and all its values. Removing an
    ///   absent qualifier is a no-op. A later re-assert places the qualifier
    ///   at the end of the insertion order.
    ///
    /// Returns [`QueryError::EmptyQualifier`] if `qualifier` is blank.
    pub fn add_or_replace(&mut self, qualifier: &str, value: &str) -> Result<(), QueryError> {
        let qualifier = qualifier.trim();
        if qualifier.is_empty() {
            return Err(QueryError::EmptyQualifier);
        }

        if value.trim().is_empty() {
            self.qualifiers.retain(|(name, _)| name != qualifier);
            return Ok(());
        }

        match self.qualifiers.iter_mut().find(|(name, _)| name == qualifier) {
            Some((_, values)) => values.push(value.to_owned()),
            None => self
                .qualifiers
                .push((qualifier.to_owned(), vec![value.to_owned()])),
        }
        Ok(())
    }

    /// Appends a raw free-text token (keyword or pre-rendered sub-query).
    ///
    /// The text is preserved verbatim; blank input is ignored.
    pub fn add_free_text(&mut self, text: &str) {
        if !text.trim().is_empty() {
            self.free_text.push(text.to_owned());
        }
    }

    /// Returns `true` if no terms or free text have been added.
    pub fn is_empty(&self) -> bool {
        self.qualifiers.is_empty() && self.free_text.is_empty()
    }

    /// Renders the accumulated terms into a single query string.
    ///
    /// Whitespace inside values is preserved verbatim; any encoding for URL
    /// embedding is the transport's concern. Rendering does not mutate the
    /// set, so repeated calls yield the same string.
    pub fn render(&self) -> String {
        let mut tokens: Vec<&str> = Vec::new();
        for text in &self.free_text {
            tokens.push(text);
        }

        let mut terms: Vec<String> = Vec::new();
        for (name, values) in &self.qualifiers {
            for value in values {
                terms.push(format!("{name}:{value}"));
            }
        }
        for term in &terms {
            tokens.push(term);
        }

        tokens.join(" ")
    }
}
