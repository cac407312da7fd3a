// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::analysis::AnalyzedString;
use crate::errors::ServiceError;
use crate::observability::messages::store::{RecordNotFound, RecordRemoved, RecordStored};
use crate::observability::messages::StructuredLog;
use crate::traits::RecordStore;

/// Records in insertion order plus an id -> position index.
#[derive(Debug, Default)]
struct Inner {
    records: Vec<AnalyzedString>,
    index: HashMap<String, usize>,
}

impl Inner {
    fn from_records(records: Vec<AnalyzedString>) -> Self {
        let mut inner = Inner::default();
        for record in records {
            inner.upsert(record);
        }
        inner
    }

    /// Insert or overwrite in place, returning the replaced record.
    fn upsert(&mut self, record: AnalyzedString) -> Option<AnalyzedString> {
        match self.index.get(&record.id) {
            Some(&pos) => Some(std::mem::replace(&mut self.records[pos], record)),
            None => {
                self.index.insert(record.id.clone(), self.records.len());
                self.records.push(record);
                None
            }
        }
    }

    fn remove(&mut self, id: &str) -> Option<(usize, AnalyzedString)> {
        let pos = self.index.remove(id)?;
        let removed = self.records.remove(pos);
        for slot in self.index.values_mut() {
            if *slot > pos {
                *slot -= 1;
            }
        }
        Some((pos, removed))
    }

    /// Put a removed record back at its old position.
    fn reinsert(&mut self, pos: usize, record: AnalyzedString) {
        for slot in self.index.values_mut() {
            if *slot >= pos {
                *slot += 1;
            }
        }
        self.index.insert(record.id.clone(), pos);
        self.records.insert(pos, record);
    }
}

fn not_found(id: &str) -> ServiceError {
    RecordNotFound { id }.log();
    ServiceError::NotFound(format!("no string with id '{}'", id))
}

/// Process-local record store.
///
/// Every mutating method takes the write lock for its whole duration; the
/// `*_then` variants run a hook (snapshot persistence) before releasing it and
/// undo the mutation if the hook fails.
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    inner: RwLock<Inner>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `records`, in order. Later duplicates
    /// overwrite earlier ones.
    pub fn with_records(records: Vec<AnalyzedString>) -> Self {
        Self {
            inner: RwLock::new(Inner::from_records(records)),
        }
    }

    pub(crate) async fn put_then<F>(
        &self,
        record: AnalyzedString,
        after: F,
    ) -> Result<(), ServiceError>
    where
        F: FnOnce(&[AnalyzedString]) -> Result<(), ServiceError>,
    {
        let mut inner = self.inner.write().await;
        let id = record.id.clone();
        let replaced = inner.upsert(record);

        if let Err(error) = after(inner.records.as_slice()) {
            match replaced {
                Some(previous) => {
                    inner.upsert(previous);
                }
                None => {
                    inner.remove(&id);
                }
            }
            return Err(error);
        }

        RecordStored {
            id: &id,
            overwritten: replaced.is_some(),
            total_records: inner.records.len(),
        }
        .log();
        Ok(())
    }

    pub(crate) async fn insert_then<F>(
        &self,
        record: AnalyzedString,
        after: F,
    ) -> Result<(), ServiceError>
    where
        F: FnOnce(&[AnalyzedString]) -> Result<(), ServiceError>,
    {
        let mut inner = self.inner.write().await;
        if inner.index.contains_key(&record.id) {
            return Err(ServiceError::Conflict(format!(
                "string with id '{}' already exists",
                record.id
            )));
        }

        let id = record.id.clone();
        inner.upsert(record);
        if let Err(error) = after(inner.records.as_slice()) {
            inner.remove(&id);
            return Err(error);
        }

        RecordStored {
            id: &id,
            overwritten: false,
            total_records: inner.records.len(),
        }
        .log();
        Ok(())
    }

    pub(crate) async fn remove_then<F>(
        &self,
        id: &str,
        after: F,
    ) -> Result<AnalyzedString, ServiceError>
    where
        F: FnOnce(&[AnalyzedString]) -> Result<(), ServiceError>,
    {
        let mut inner = self.inner.write().await;
        let (pos, removed) = inner.remove(id).ok_or_else(|| not_found(id))?;

        if let Err(error) = after(inner.records.as_slice()) {
            inner.reinsert(pos, removed);
            return Err(error);
        }

        RecordRemoved {
            id,
            total_records: inner.records.len(),
        }
        .log();
        Ok(removed)
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn put(&self, record: AnalyzedString) -> Result<(), ServiceError> {
        self.put_then(record, |_| Ok(())).await
    }

    async fn insert(&self, record: AnalyzedString) -> Result<(), ServiceError> {
        self.insert_then(record, |_| Ok(())).await
    }

    async fn get(&self, id: &str) -> Result<AnalyzedString, ServiceError> {
        let inner = self.inner.read().await;
        match inner.index.get(id) {
            Some(&pos) => Ok(inner.records[pos].clone()),
            None => Err(not_found(id)),
        }
    }

    async fn list(&self) -> Vec<AnalyzedString> {
        self.inner.read().await.records.clone()
    }

    async fn remove(&self, id: &str) -> Result<AnalyzedString, ServiceError> {
        self.remove_then(id, |_| Ok(())).await
    }

    async fn contains(&self, id: &str) -> bool {
        self.inner.read().await.index.contains_key(id)
    }

    async fn len(&self) -> usize {
        self.inner.read().await.records.len()
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
