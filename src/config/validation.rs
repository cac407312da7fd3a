// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Configuration validation.
//!
//! All checks run and every problem is reported at once, so a broken config file
//! can be fixed in a single pass.

use crate::config::{Config, StorageBackend};
use crate::errors::ValidationError;
use crate::observability::messages::{server::ConfigValidationFailed, StructuredLog};

/// Validate a configuration, returning every problem found.
pub fn validate_config(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.server.host.trim().is_empty() {
        errors.push(ValidationError::EmptyHost);
    }

    if config.server.max_payload_bytes == 0 {
        errors.push(ValidationError::ZeroPayloadLimit);
    }

    let needs_path = matches!(config.storage.backend, StorageBackend::File);
    let has_path = config
        .storage
        .path
        .as_deref()
        .is_some_and(|p| !p.trim().is_empty());
    if needs_path && !has_path {
        errors.push(ValidationError::MissingStoragePath {
            backend: config.storage.backend.as_str().to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        for error in &errors {
            ConfigValidationFailed { error }.log();
        }
        Err(errors)
    }
}
