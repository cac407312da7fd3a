// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::runtime::{Handle, RuntimeFlavor};

use crate::analysis::AnalyzedString;
use crate::errors::ServiceError;
use crate::observability::messages::store::{SnapshotFailed, SnapshotLoaded};
use crate::observability::messages::StructuredLog;
use crate::store::InMemoryRecordStore;
use crate::traits::RecordStore;

/// Record store persisted as a JSON array of records.
///
/// The whole snapshot is rewritten (temp file + rename) while the write lock is
/// held, so the file always matches the in-memory state after each mutation.
#[derive(Debug)]
pub struct FileRecordStore {
    path: PathBuf,
    memory: InMemoryRecordStore,
}

impl FileRecordStore {
    /// Open the snapshot at `path`. A missing file starts an empty store.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ServiceError> {
        let path = path.as_ref().to_path_buf();
        let records = read_snapshot(&path)?;

        SnapshotLoaded {
            path: &path.to_string_lossy(),
            records: records.len(),
        }
        .log();

        Ok(Self {
            path,
            memory: InMemoryRecordStore::with_records(records),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn read_snapshot(path: &Path) -> Result<Vec<AnalyzedString>, ServiceError> {
    let content = match fs::read(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(snapshot_error(path, "read", &e)),
    };

    if content.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }

    serde_json::from_slice(&content).map_err(|e| snapshot_error(path, "parse", &e))
}

fn temp_path(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}

fn write_snapshot(path: &Path, records: &[AnalyzedString]) -> Result<(), ServiceError> {
    let body = serde_json::to_vec_pretty(records).map_err(|e| snapshot_error(path, "encode", &e))?;
    let tmp = temp_path(path);

    blocking(|| {
        fs::write(&tmp, body).map_err(|e| snapshot_error(path, "write", &e))?;
        fs::rename(&tmp, path).map_err(|e| {
            let _ = fs::remove_file(&tmp);
            snapshot_error(path, "rename", &e)
        })
    })
}

/// Run file I/O without stalling other tasks on a multi-threaded runtime.
/// `block_in_place` is not available on the current-thread runtime, where the
/// closure runs inline.
fn blocking<R>(f: impl FnOnce() -> R) -> R {
    match Handle::try_current() {
        Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
            tokio::task::block_in_place(f)
        }
        _ => f(),
    }
}

fn snapshot_error(path: &Path, operation: &str, error: &dyn std::error::Error) -> ServiceError {
    let path = path.to_string_lossy();
    SnapshotFailed {
        path: &path,
        operation,
        error,
    }
    .log();
    ServiceError::Storage(format!("snapshot {} failed for '{}': {}", operation, path, error))
}

#[async_trait]
impl RecordStore for FileRecordStore {
    async fn put(&self, record: AnalyzedString) -> Result<(), ServiceError> {
        self.memory
            .put_then(record, |records| write_snapshot(&self.path, records))
            .await
    }

    async fn insert(&self, record: AnalyzedString) -> Result<(), ServiceError> {
        self.memory
            .insert_then(record, |records| write_snapshot(&self.path, records))
            .await
    }

    async fn get(&self, id: &str) -> Result<AnalyzedString, ServiceError> {
        self.memory.get(id).await
    }

    async fn list(&self) -> Vec<AnalyzedString> {
        self.memory.list().await
    }

    async fn remove(&self, id: &str) -> Result<AnalyzedString, ServiceError> {
        self.memory
            .remove_then(id, |records| write_snapshot(&self.path, records))
            .await
    }

    async fn contains(&self, id: &str) -> bool {
        self.memory.contains(id).await
    }

    async fn len(&self) -> usize {
        self.memory.len().await
    }

    fn name(&self) -> &'static str {
        "file"
    }
}
