// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use std::path::PathBuf;

/// Problems found while validating a loaded configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// The server host is empty or whitespace
    EmptyHost,
    /// The request payload limit is zero, which would reject every request
    ZeroPayloadLimit,
    /// A storage backend that persists to disk was configured without a path
    MissingStoragePath {
        /// The backend name as written in the configuration
        backend: String,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyHost => write!(f, "server.host must not be empty"),
            ValidationError::ZeroPayloadLimit => {
                write!(f, "server.max_payload_bytes must be greater than zero")
            }
            ValidationError::MissingStoragePath { backend } => {
                write!(f, "storage backend '{}' requires storage.path", backend)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Errors raised while loading configuration from disk.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("unsupported config file extension {0:?} (expected .yaml, .yml or .toml)")]
    UnsupportedFormat(PathBuf),

    #[error("invalid value for environment variable {name}: {value:?}")]
    InvalidEnv { name: &'static str, value: String },

    #[error("configuration validation failed: {}", join_errors(.0))]
    Invalid(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
