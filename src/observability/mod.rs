// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! All diagnostic and operational log lines in the service go through message
//! types defined here. Each message is a small struct with a `Display`
//! implementation, which keeps wording out of the call sites and gives every
//! event a consistent set of structured fields.
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::analysis` - string analysis events
//! * `messages::store` - record store mutations, misses and snapshot I/O
//! * `messages::filter` - filter resolution and evaluation
//! * `messages::server` - configuration and HTTP listener lifecycle
//!
//! # Usage
//!
//! ```rust
//! use string_analyzer::observability::messages::{store::RecordNotFound, StructuredLog};
//!
//! RecordNotFound { id: "deadbeef" }.log();
//! ```

pub mod messages;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "string_analyzer=info,tower_http=info";

/// Install the global `tracing` subscriber (fmt output, `RUST_LOG` filtering).
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()))
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
