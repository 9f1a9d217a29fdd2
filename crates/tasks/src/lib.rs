//! Task orchestration for OctoFlow.
//!
//! Each GitHub operation the workflow engine can schedule is a task type in
//! this crate: six search tasks (issues, pull requests, users, repositories,
//! commits, code), issue/pull-request creation, issue comments, and workflow
//! dispatch. Search tasks build a query with the `query` crate, drive the
//! transport port page by page, project each item with the `records` crate,
//! and stream the records to blob storage.
//!
//! ## Architectural Layer
//!
//! **Orchestration + port definitions.** This crate defines *what* it needs
//! from GitHub and from storage as traits ([`SearchTransport`], [`RepoOps`],
//! [`BlobStore`]); infrastructure crates supply the *how*. No HTTP code
//! lives here.
//!
//! ## Execution model
//!
//! Strictly sequential: one page at a time, items in arrival order, one
//! blocking-style write per record. Suspension points sit only at the
//! transport and storage calls. A run either completes with a valid
//! artifact reference or fails and discards everything — there is no
//! partial-success outcome.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`ports`] | Collaborator traits and their request/response types |
//! | [`writer`] | [`ResultStreamWriter`] — temp-file record sink |
//! | [`executor`] | [`run_search`] / [`run_projected`] driving loops |
//! | [`errors`] | Error taxonomy for a task run |
//! | [`issues`], [`pulls`], [`users`], [`repositories`], [`commits`], [`code`], [`workflows`] | Task types |

pub mod code;
pub mod commits;
pub mod errors;
pub mod executor;
pub mod issues;
pub mod ports;
pub mod pulls;
pub mod repositories;
pub mod users;
pub mod workflows;
pub mod writer;

// Re-export the pieces downstream crates wire together.
pub use errors::{StorageError, TaskError, TransportError};
pub use executor::{run_projected, run_search};
pub use ports::{
    BlobStore, CreatedComment, CreatedIssue, CreatedPullRequest, NewIssue, NewPullRequest,
    PageStream, Pages, RepoOps, SearchTransport, StaticPages, StoredObject,
};
pub use writer::{FileOutput, ResultStreamWriter};
