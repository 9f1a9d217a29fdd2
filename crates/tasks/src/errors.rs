//! Error taxonomy for a task run.
//!
//! Three layers, matching where a failure originates: the transport
//! collaborator ([`TransportError`]), the blob store ([`StorageError`]), and
//! the umbrella [`TaskError`] a task's `run` surfaces. Query configuration
//! errors fold in from the `query` crate.
//!
//! Nothing here is retried internally. A transport or projection failure
//! aborts the whole run and the partially written temp data is discarded;
//! retry/backoff, if wanted, belongs to the transport implementation or the
//! caller.

use thiserror::Error;

use query::QueryError;

// ---------------------------------------------------------------------------
// Collaborator errors
// ---------------------------------------------------------------------------

/// Failures reported by the search transport collaborator.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The API answered with a non-success HTTP status. Hard failure, no
    /// retry at this layer.
    #[error("GitHub API returned HTTP {status}: {message}")]
    Status {
        /// The HTTP status code received.
        status: u16,
        /// Response body or reason phrase, for the log line.
        message: String,
    },

    /// The request never produced a response (DNS, connect, timeout, …).
    #[error("network failure talking to GitHub: {0}")]
    Network(String),
}

/// Failures reported by the blob-store collaborator.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The store refused or failed to persist the artifact.
    #[error("blob store rejected the artifact: {0}")]
    Rejected(String),

    /// Reading the local temp file for upload failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// ---------------------------------------------------------------------------
// Task-level umbrella
// ---------------------------------------------------------------------------

/// Everything a single task run can fail with.
///
/// The caller receives either a valid artifact reference or one of these;
/// there is no partial-success outcome.
#[derive(Debug, Error)]
pub enum TaskError {
    /// Invalid task configuration (e.g. an empty qualifier name). Surfaced
    /// immediately, never retried.
    #[error(transparent)]
    Query(#[from] QueryError),

    /// The transport collaborator failed mid-run.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The blob store failed during finalization.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// A record could not be serialized into the artifact.
    #[error("failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Local I/O on the temporary sink failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
