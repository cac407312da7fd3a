// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for record store events.
//!
//! This module contains message types for logging events related to:
//! * Record insertion, overwrite and removal
//! * Identifier lookup misses
//! * Snapshot loading and persistence failures

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};

/// A record was written to the store.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use string_analyzer::observability::messages::store::RecordStored;
///
/// let msg = RecordStored {
///     id: "ba7816bf",
///     overwritten: false,
///     total_records: 1,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct RecordStored<'a> {
    pub id: &'a str,
    pub overwritten: bool,
    pub total_records: usize,
}

impl Display for RecordStored<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let action = if self.overwritten { "Overwrote" } else { "Stored" };
        write!(
            f,
            "{} record '{}' ({} records total)",
            action, self.id, self.total_records
        )
    }
}

impl StructuredLog for RecordStored<'_> {
    fn log(&self) {
        tracing::info!(
            id = self.id,
            overwritten = self.overwritten,
            total_records = self.total_records,
            "{}", self
        );
    }
}

/// A record was removed from the store.
///
/// # Log Level
/// `info!` - Important operational event
pub struct RecordRemoved<'a> {
    pub id: &'a str,
    pub total_records: usize,
}

impl Display for RecordRemoved<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Removed record '{}' ({} records remaining)",
            self.id, self.total_records
        )
    }
}

impl StructuredLog for RecordRemoved<'_> {
    fn log(&self) {
        tracing::info!(id = self.id, total_records = self.total_records, "{}", self);
    }
}

/// An identifier lookup found nothing.
///
/// # Log Level
/// `debug!` - Expected client behaviour, not an operational problem
pub struct RecordNotFound<'a> {
    pub id: &'a str,
}

impl Display for RecordNotFound<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "No record with id '{}'", self.id)
    }
}

impl StructuredLog for RecordNotFound<'_> {
    fn log(&self) {
        tracing::debug!(id = self.id, "{}", self);
    }
}

/// A snapshot file was loaded at start-up.
///
/// # Log Level
/// `info!` - Important operational event
pub struct SnapshotLoaded<'a> {
    pub path: &'a str,
    pub records: usize,
}

impl Display for SnapshotLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Loaded {} records from snapshot '{}'", self.records, self.path)
    }
}

impl StructuredLog for SnapshotLoaded<'_> {
    fn log(&self) {
        tracing::info!(path = self.path, records = self.records, "{}", self);
    }
}

/// Reading or writing a snapshot failed.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use string_analyzer::observability::messages::store::SnapshotFailed;
///
/// let error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
/// let msg = SnapshotFailed {
///     path: "/var/lib/strings.json",
///     operation: "write",
///     error: &error,
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct SnapshotFailed<'a> {
    pub path: &'a str,
    pub operation: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for SnapshotFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Snapshot {} failed for '{}': {}",
            self.operation, self.path, self.error
        )
    }
}

impl StructuredLog for SnapshotFailed<'_> {
    fn log(&self) {
        tracing::error!(
            path = self.path,
            operation = self.operation,
            error = %self.error,
            "{}", self
        );
    }
}
