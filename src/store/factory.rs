// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::config::{StorageBackend, StorageConfig};
use crate::errors::ServiceError;
use crate::store::{FileRecordStore, InMemoryRecordStore};
use crate::traits::RecordStore;

/// Creates the configured record store.
pub struct StoreFactory;

impl StoreFactory {
    /// The `backend` field selects the implementation:
    /// - `memory` -> InMemoryRecordStore
    /// - `file` -> FileRecordStore at `path`
    pub fn from_config(config: &StorageConfig) -> Result<Arc<dyn RecordStore>, ServiceError> {
        match config.backend {
            StorageBackend::Memory => Ok(Arc::new(InMemoryRecordStore::new())),
            StorageBackend::File => {
                let path = config.path.as_deref().ok_or_else(|| {
                    ServiceError::Storage("file storage backend requires a path".to_string())
                })?;
                Ok(Arc::new(FileRecordStore::open(path)?))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_memory_store_by_default() {
        let store = StoreFactory::from_config(&StorageConfig::default()).unwrap();
        assert_eq!(store.name(), "memory");
    }

    #[test]
    fn creates_file_store() {
        let dir = tempfile::tempdir().unwrap();
        let config = StorageConfig {
            backend: StorageBackend::File,
            path: Some(dir.path().join("s.json").to_string_lossy().into_owned()),
        };

        let store = StoreFactory::from_config(&config).unwrap();
        assert_eq!(store.name(), "file");
    }

    #[test]
    fn file_store_without_path_fails() {
        let config = StorageConfig {
            backend: StorageBackend::File,
            path: None,
        };

        let result = StoreFactory::from_config(&config);
        assert!(matches!(result, Err(ServiceError::Storage(_))));
    }
}
