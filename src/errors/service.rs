// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Request-scoped failures.
//!
//! Every variant is surfaced directly to the caller; nothing here is retried or
//! recovered from, and none of them take the process down.

/// Errors produced by analysis, storage and filtering operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ServiceError {
    /// Malformed or missing text
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Structured criteria referenced an unknown field or carried a bad value
    #[error("invalid filter: {0}")]
    InvalidFilter(String),

    /// Free text produced no recognisable constraint
    #[error("unable to interpret filter: {0}")]
    AmbiguousFilter(String),

    /// Identifier lookup miss
    #[error("not found: {0}")]
    NotFound(String),

    /// The text has already been analyzed and stored
    #[error("conflict: {0}")]
    Conflict(String),

    /// The persistent snapshot could not be read or written
    #[error("storage failure: {0}")]
    Storage(String),
}

impl ServiceError {
    /// Short machine-readable kind, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ServiceError::InvalidInput(_) => "invalid_input",
            ServiceError::InvalidFilter(_) => "invalid_filter",
            ServiceError::AmbiguousFilter(_) => "ambiguous_filter",
            ServiceError::NotFound(_) => "not_found",
            ServiceError::Conflict(_) => "conflict",
            ServiceError::Storage(_) => "storage",
        }
    }
}
