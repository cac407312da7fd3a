// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for configuration and HTTP listener lifecycle.

use crate::errors::ValidationError;
use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};

/// Configuration resolved and the service is about to bind.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ServerStarting<'a> {
    pub address: &'a str,
    pub storage_backend: &'a str,
    pub config_source: &'a str,
}

impl Display for ServerStarting<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Starting string analyzer on {} (storage={}, config={})",
            self.address, self.storage_backend, self.config_source
        )
    }
}

impl StructuredLog for ServerStarting<'_> {
    fn log(&self) {
        tracing::info!(
            address = self.address,
            storage_backend = self.storage_backend,
            config_source = self.config_source,
            "{}", self
        );
    }
}

/// The listener is bound and accepting connections.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ServerListening<'a> {
    pub address: &'a str,
}

impl Display for ServerListening<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Listening on http://{}", self.address)
    }
}

impl StructuredLog for ServerListening<'_> {
    fn log(&self) {
        tracing::info!(address = self.address, "{}", self);
    }
}

/// One configuration validation problem.
///
/// # Log Level
/// `error!` - The service will refuse to start
pub struct ConfigValidationFailed<'a> {
    pub error: &'a ValidationError,
}

impl Display for ConfigValidationFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Invalid configuration: {}", self.error)
    }
}

impl StructuredLog for ConfigValidationFailed<'_> {
    fn log(&self) {
        tracing::error!(error = %self.error, "{}", self);
    }
}

/// A request failed with a client- or server-facing error.
///
/// # Log Level
/// `warn!` for client errors, `error!` for server errors
pub struct RequestFailed<'a> {
    pub kind: &'a str,
    pub status: u16,
    pub error: &'a dyn std::error::Error,
}

impl Display for RequestFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Request failed with {} ({}): {}", self.status, self.kind, self.error)
    }
}

impl StructuredLog for RequestFailed<'_> {
    fn log(&self) {
        if self.status >= 500 {
            tracing::error!(kind = self.kind, status = self.status, error = %self.error, "{}", self);
        } else {
            tracing::warn!(kind = self.kind, status = self.status, error = %self.error, "{}", self);
        }
    }
}
