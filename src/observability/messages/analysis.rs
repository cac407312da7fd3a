// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for string analysis events.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};

/// A text was analyzed.
///
/// # Log Level
/// `debug!` - Routine, once per submitted string
///
/// # Example
/// ```
/// use string_analyzer::observability::messages::analysis::StringAnalyzed;
/// use std::time::Duration;
///
/// let msg = StringAnalyzed {
///     id: "ba7816bf",
///     length: 3,
///     word_count: 1,
///     duration: Duration::from_micros(12),
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct StringAnalyzed<'a> {
    pub id: &'a str,
    pub length: usize,
    pub word_count: usize,
    pub duration: std::time::Duration,
}

impl Display for StringAnalyzed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Analyzed string '{}': length={}, words={}, duration={:?}",
            self.id, self.length, self.word_count, self.duration
        )
    }
}

impl StructuredLog for StringAnalyzed<'_> {
    fn log(&self) {
        tracing::debug!(
            id = self.id,
            length = self.length,
            word_count = self.word_count,
            duration_us = self.duration.as_micros() as u64,
            "{}", self
        );
    }
}
