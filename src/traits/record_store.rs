// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use crate::analysis::AnalyzedString;
use crate::errors::ServiceError;

/// Collection of analyzed records keyed by identifier.
///
/// Implementations guard mutation with a single exclusive section. Reads may run
/// concurrently with each other and always observe a consistent snapshot.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Insert a record, or overwrite the one with the same id in place.
    async fn put(&self, record: AnalyzedString) -> Result<(), ServiceError>;

    /// Insert a record only if no record with the same id exists; `Conflict`
    /// otherwise. The check and the write happen under one lock.
    async fn insert(&self, record: AnalyzedString) -> Result<(), ServiceError>;

    /// Fetch a record by id; `NotFound` when absent.
    async fn get(&self, id: &str) -> Result<AnalyzedString, ServiceError>;

    /// Snapshot of every record in insertion order.
    ///
    /// The returned vector is detached from the store, so iterating it is
    /// unaffected by concurrent writes and it can be walked any number of times.
    async fn list(&self) -> Vec<AnalyzedString>;

    /// Remove a record by id, returning it; `NotFound` when absent.
    async fn remove(&self, id: &str) -> Result<AnalyzedString, ServiceError>;

    async fn contains(&self, id: &str) -> bool;

    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    fn name(&self) -> &'static str;
}
