//! Result domain for OctoFlow.
//!
//! This crate holds the shapes a search page can yield ([`SearchItem`] and
//! the typed commit/code hits), the [`AccessLevel`] that gates privileged
//! fields, the normalized detail records written to storage, and the
//! projector that maps one to the other.
//!
//! ## Architectural Layer
//!
//! **Business logic.** Projection is a pure mapping with no I/O; transport
//! failures surface upstream through the page stream, never here.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`access`] | [`AccessLevel`] — anonymous vs. authenticated gating |
//! | [`items`] | Fetched GitHub domain objects and the [`SearchItem`] sum |
//! | [`details`] | Serialization-ready detail records per item kind |
//! | [`projector`] | [`project`] — item → detail record dispatch |

pub mod access;
pub mod details;
pub mod items;
pub mod projector;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use access::AccessLevel;
pub use details::{
    CodeDetail, CommitDetail, DetailRecord, IssueDetail, PullRequestDetail, RepositoryDetail,
    UserDetail,
};
pub use items::{Account, CodeHit, Commit, Issue, Label, PullRequest, RepoRef, Repository, SearchItem, User};
pub use projector::{project, Projection};
