//! Record-by-record artifact writer.
//!
//! Records stream into a scoped temporary file, one self-describing JSON
//! document per line, in strict append order. `finish` flushes the sink and
//! hands the file to the blob store; the temp file itself is removed on
//! every exit path, success or failure, because [`tempfile::NamedTempFile`]
//! unlinks on drop. One writer is owned by exactly one run invocation and
//! is never shared.

use std::io::{BufWriter, Write};

use serde::Serialize;
use tempfile::NamedTempFile;

use crate::errors::TaskError;
use crate::ports::BlobStore;

/// Reference to the stored result artifact.
///
/// `uri` is `None` only for runs that legitimately produce no artifact
/// (e.g. commit search without credentials); an empty result set still
/// yields a valid URI to an empty artifact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FileOutput {
    /// Opaque reference assigned by the blob store.
    pub uri: Option<String>,
}

impl FileOutput {
    /// Output of a run that produced no artifact at all.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Streams serialized records into a temporary sink.
pub struct ResultStreamWriter {
    sink: BufWriter<NamedTempFile>,
    records: usize,
}

impl ResultStreamWriter {
    /// Creates the writer and its scoped temp file.
    pub fn new() -> Result<Self, TaskError> {
        let file = NamedTempFile::new()?;
        Ok(Self {
            sink: BufWriter::new(file),
            records: 0,
        })
    }

    /// Appends one record as a single JSON line.
    ///
    /// Call order is write order; there is no buffering beyond the byte
    /// level, no reordering, and no parallelism.
    pub fn append<T: Serialize>(&mut self, record: &T) -> Result<(), TaskError> {
        serde_json::to_writer(&mut self.sink, record)?;
        self.sink.write_all(b"\n")?;
        self.records += 1;
        Ok(())
    }

    /// Number of records appended so far.
    pub fn records(&self) -> usize {
        self.records
    }

    /// Flushes the sink and hands the completed file to the blob store.
    ///
    /// Consumes the writer; the temp file is unlinked when this returns,
    /// whether storage succeeded or not. An empty writer still produces a
    /// valid (empty) artifact.
    pub async fn finish(self, store: &dyn BlobStore) -> Result<FileOutput, TaskError> {
        let file = self
            .sink
            .into_inner()
            .map_err(|e| TaskError::Io(e.into_error()))?;

        let stored = store.put_file(file.path()).await?;
        tracing::info!(records = self.records, uri = %stored.uri, "stored result artifact");
        Ok(FileOutput {
            uri: Some(stored.uri),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::errors::StorageError;
    use crate::ports::StoredObject;

    /// Captures the uploaded file's contents instead of storing them.
    struct CapturingStore {
        contents: Mutex<Option<String>>,
        path: Mutex<Option<PathBuf>>,
    }

    impl CapturingStore {
        fn new() -> Self {
            Self {
                contents: Mutex::new(None),
                path: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl BlobStore for CapturingStore {
        async fn put_file(&self, file: &Path) -> Result<StoredObject, StorageError> {
            let body = std::fs::read_to_string(file)?;
            *self.contents.lock().unwrap() = Some(body);
            *self.path.lock().unwrap() = Some(file.to_path_buf());
            Ok(StoredObject {
                uri: "memory://artifact".to_owned(),
            })
        }
    }

    #[tokio::test]
    async fn writes_one_json_line_per_record_in_order() {
        let store = CapturingStore::new();
        let mut writer = ResultStreamWriter::new().unwrap();
        writer.append(&serde_json::json!({"n": 1})).unwrap();
        writer.append(&serde_json::json!({"n": 2})).unwrap();
        writer.append(&serde_json::json!({"n": 3})).unwrap();

        let output = writer.finish(&store).await.unwrap();
        assert_eq!(output.uri.as_deref(), Some("memory://artifact"));

        let body = store.contents.lock().unwrap().take().unwrap();
        let numbers: Vec<i64> = body
            .lines()
            .map(|line| serde_json::from_str::<serde_json::Value>(line).unwrap()["n"]
                .as_i64()
                .unwrap())
            .collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn empty_writer_still_produces_a_valid_artifact() {
        let store = CapturingStore::new();
        let writer = ResultStreamWriter::new().unwrap();

        let output = writer.finish(&store).await.unwrap();
        assert!(output.uri.is_some());
        assert_eq!(store.contents.lock().unwrap().take().unwrap(), "");
    }

    #[tokio::test]
    async fn temp_file_is_removed_after_finish() {
        let store = CapturingStore::new();
        let mut writer = ResultStreamWriter::new().unwrap();
        writer.append(&serde_json::json!({"n": 1})).unwrap();
        writer.finish(&store).await.unwrap();

        let path = store.path.lock().unwrap().take().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn temp_file_is_removed_when_writer_is_dropped() {
        let writer = ResultStreamWriter::new().unwrap();
        let path = writer.sink.get_ref().path().to_path_buf();
        assert!(path.exists());
        drop(writer);
        assert!(!path.exists());
    }
}
