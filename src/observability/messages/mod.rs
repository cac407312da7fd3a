// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for the human-readable line and
//! [`StructuredLog`] to emit it at its fixed level with structured fields.
//! Spans are opened at the call sites that own a unit of work (request
//! handlers, filter resolution) with `#[tracing::instrument]`.
//!
//! # Organization
//!
//! * `analysis` - string analysis
//! * `store` - record store events
//! * `filter` - filter resolution and evaluation
//! * `server` - configuration and listener lifecycle
//!
//! # Usage Pattern
//!
//! ```rust
//! use string_analyzer::observability::messages::{filter::FilterApplied, StructuredLog};
//!
//! let msg = FilterApplied {
//!     mode: "structured",
//!     constraint_count: 2,
//!     candidates: 10,
//!     matched: 3,
//! };
//!
//! msg.log();
//! ```

pub mod analysis;
pub mod filter;
pub mod server;
pub mod store;

/// A log message that knows its own level and structured fields.
pub trait StructuredLog: std::fmt::Display {
    /// Emit the message as a tracing event.
    fn log(&self);
}
