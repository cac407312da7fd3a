// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! HTTP surface.
//!
//! | Method | Path | Purpose |
//! |--------|------|---------|
//! | GET | `/` | liveness banner |
//! | GET | `/health` | status and record count |
//! | POST | `/strings` | analyze and store `{"value": ...}` |
//! | GET | `/strings` | list, filtered by structured query parameters |
//! | GET | `/strings/filter-by-natural-language` | list, filtered by `?query=` free text |
//! | GET | `/strings/{key}` | fetch by id or raw value |
//! | DELETE | `/strings/{key}` | remove by id or raw value |

mod error;
mod handlers;
mod server;


use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::analysis::StringMetrics;
use crate::config::Config;
use crate::errors::ServiceError;
use crate::filter::FilterResolver;
use crate::store::StoreFactory;
use crate::traits::RecordStore;

pub use error::ApiError;
pub use server::serve;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
    pub metrics: StringMetrics,
    pub resolver: Arc<FilterResolver>,
}

impl AppState {
    pub fn new(store: Arc<dyn RecordStore>, metrics: StringMetrics) -> Self {
        Self {
            store,
            metrics,
            resolver: Arc::new(FilterResolver::new()),
        }
    }

    /// Build the store and analysis settings described by `config`.
    pub fn from_config(config: &Config) -> Result<Self, ServiceError> {
        let store = StoreFactory::from_config(&config.storage)?;
        Ok(Self::new(store, StringMetrics::new(config.analysis.palindrome)))
    }
}

pub fn router(state: AppState, max_payload_bytes: usize) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route(
            "/strings",
            get(handlers::list_strings).post(handlers::create_string),
        )
        .route(
            "/strings/filter-by-natural-language",
            get(handlers::filter_by_natural_language),
        )
        .route(
            "/strings/:key",
            get(handlers::get_string).delete(handlers::delete_string),
        )
        .layer(DefaultBodyLimit::max(max_payload_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
