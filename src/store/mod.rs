// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Record store backends.
//!
//! Both backends implement [`RecordStore`](crate::traits::RecordStore) and are
//! created through [`StoreFactory`] from the `storage` config section:
//!
//! * **memory** - [`InMemoryRecordStore`], insertion-ordered, lost on restart
//! * **file** - [`FileRecordStore`], the in-memory store plus a JSON snapshot that
//!   is rewritten after every mutation and reloaded at start-up
//!
//! ```rust
//! use string_analyzer::analysis::StringMetrics;
//! use string_analyzer::store::InMemoryRecordStore;
//! use string_analyzer::traits::RecordStore;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let store = InMemoryRecordStore::new();
//! let record = StringMetrics::default().analyze("level");
//! store.put(record.clone()).await?;
//! assert_eq!(store.get(&record.id).await?.value, "level");
//! # Ok::<(), string_analyzer::errors::ServiceError>(())
//! # }).unwrap();
//! ```

pub mod factory;
pub mod file;
pub mod memory;

pub use factory::StoreFactory;
pub use file::FileRecordStore;
pub use memory::InMemoryRecordStore;
