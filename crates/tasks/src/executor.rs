//! Driving loops shared by the search tasks.
//!
//! [`run_search`] handles the generic heterogeneous stream (issues, pull
//! requests, users, repositories); [`run_projected`] handles typed streams
//! with a task-supplied projection (commits, code, topics). Both pull one
//! page at a time, process items in strict arrival order, and abort the
//! whole run on the first error — the partially written temp sink is
//! discarded with the writer.

use serde::Serialize;

use records::{project, AccessLevel, SearchItem};

use crate::errors::TaskError;
use crate::ports::{BlobStore, Pages};
use crate::writer::{FileOutput, ResultStreamWriter};

/// Projects and persists a heterogeneous search stream.
///
/// Items of a kind the projector does not support are skipped with a
/// warning; everything else is written in arrival order. An empty stream
/// still yields a valid (empty) artifact.
pub async fn run_search(
    mut pages: Pages<SearchItem>,
    access: AccessLevel,
    store: &dyn BlobStore,
) -> Result<FileOutput, TaskError> {
    let mut writer = ResultStreamWriter::new()?;
    let mut skipped = 0usize;

    while let Some(items) = pages.next_page().await? {
        for item in &items {
            match project(item, access) {
                records::Projection::Record(record) => writer.append(&record)?,
                records::Projection::Unsupported => {
                    skipped += 1;
                    tracing::warn!("skipping search result of unsupported kind");
                }
            }
        }
    }

    if skipped > 0 {
        tracing::info!(skipped, "search stream contained unprojected items");
    }
    writer.finish(store).await
}

/// Persists a typed search stream through a task-supplied projection.
pub async fn run_projected<T, R, F>(
    mut pages: Pages<T>,
    mut to_record: F,
    store: &dyn BlobStore,
) -> Result<FileOutput, TaskError>
where
    R: Serialize,
    F: FnMut(&T) -> R + Send,
{
    let mut writer = ResultStreamWriter::new()?;

    while let Some(items) = pages.next_page().await? {
        for item in &items {
            writer.append(&to_record(item))?;
        }
    }

    writer.finish(store).await
}
