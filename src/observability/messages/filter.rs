// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for filter resolution and evaluation.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};

/// Filter input was turned into a predicate.
///
/// # Log Level
/// `debug!` - Routine, once per filter request
pub struct FilterResolved<'a> {
    pub mode: &'a str,
    pub constraint_count: usize,
}

impl Display for FilterResolved<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Resolved {} filter into {} constraints",
            self.mode, self.constraint_count
        )
    }
}

impl StructuredLog for FilterResolved<'_> {
    fn log(&self) {
        tracing::debug!(
            mode = self.mode,
            constraint_count = self.constraint_count,
            "{}", self
        );
    }
}

/// Filter input was rejected.
///
/// # Log Level
/// `warn!` - Client error worth noticing
///
/// # Example
/// ```
/// use string_analyzer::observability::messages::filter::FilterRejected;
/// use string_analyzer::errors::ServiceError;
///
/// let error = ServiceError::AmbiguousFilter("banana".to_string());
/// let msg = FilterRejected {
///     mode: "natural_language",
///     error: &error,
/// };
///
/// tracing::warn!("{}", msg);
/// ```
pub struct FilterRejected<'a> {
    pub mode: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for FilterRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Rejected {} filter: {}", self.mode, self.error)
    }
}

impl StructuredLog for FilterRejected<'_> {
    fn log(&self) {
        tracing::warn!(mode = self.mode, error = %self.error, "{}", self);
    }
}

/// A predicate was evaluated over the store contents.
///
/// # Log Level
/// `debug!` - Routine, once per filter request
pub struct FilterApplied<'a> {
    pub mode: &'a str,
    pub constraint_count: usize,
    pub candidates: usize,
    pub matched: usize,
}

impl Display for FilterApplied<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Applied {} filter ({} constraints): {}/{} records matched",
            self.mode, self.constraint_count, self.matched, self.candidates
        )
    }
}

impl StructuredLog for FilterApplied<'_> {
    fn log(&self) {
        tracing::debug!(
            mode = self.mode,
            constraint_count = self.constraint_count,
            candidates = self.candidates,
            matched = self.matched,
            "{}", self
        );
    }
}
