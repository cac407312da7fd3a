// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::analysis::PalindromePolicy;
use crate::config::consts::{
    DEFAULT_HOST, DEFAULT_MAX_PAYLOAD_BYTES, DEFAULT_PORT, HOST_ENV, PORT_ENV,
};
use crate::config::validate_config;
use crate::errors::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Top-level service configuration.
///
/// Every section is optional; an empty file (or no file at all) yields the
/// built-in defaults.
///
/// # Example
/// ```yaml
/// server:
///   host: 127.0.0.1
///   port: 8080
///   max_payload_bytes: 65536
/// analysis:
///   palindrome:
///     case_sensitive: false
///     ignore_whitespace: false
/// storage:
///   backend: file
///   path: strings.json
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Requests with a larger body are rejected before they reach a handler
    pub max_payload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            max_payload_bytes: DEFAULT_MAX_PAYLOAD_BYTES,
        }
    }
}

impl ServerConfig {
    /// `host:port` string suitable for `TcpListener::bind`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Settings that change how strings are analyzed.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub palindrome: PalindromePolicy,
}

/// Where analyzed records live.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,
    /// Snapshot location for the `file` backend
    pub path: Option<String>,
}

/// Record store implementation.
///
/// # Variants
/// * `Memory` - process-local, lost on restart
/// * `File` - in-memory with a JSON snapshot rewritten after every mutation
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    #[default]
    Memory,
    File,
}

impl StorageBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageBackend::Memory => "memory",
            StorageBackend::File => "file",
        }
    }
}

impl Config {
    /// Apply `HOST` / `PORT` overrides from the process environment.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides_from(|name| std::env::var(name).ok())
    }

    /// Apply host/port overrides from an arbitrary variable lookup.
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(HOST_ENV) {
            self.server.host = host;
        }

        if let Some(port) = lookup(PORT_ENV) {
            self.server.port = port.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                name: PORT_ENV,
                value: port.clone(),
            })?;
        }

        Ok(())
    }
}

/// Load a config from a YAML or TOML file, chosen by extension.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("yaml") | Some("yml") => parse_yaml(&content),
        Some("toml") => Ok(toml::from_str(&content)?),
        _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
    }
}

fn parse_yaml(content: &str) -> Result<Config, ConfigError> {
    // serde_yaml rejects an empty document instead of falling back to defaults
    if content.trim().is_empty() {
        return Ok(Config::default());
    }
    Ok(serde_yaml::from_str(content)?)
}

/// Load (or default) the configuration, apply environment overrides and validate it.
pub fn load_and_validate_config<P: AsRef<Path>>(path: Option<P>) -> Result<Config, ConfigError> {
    let mut cfg = match path {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };

    cfg.apply_env_overrides()?;
    validate_config(&cfg).map_err(ConfigError::Invalid)?;

    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn write_temp(suffix: &str, body: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file
    }

    #[test]
    fn parse_full_yaml_config() {
        let yaml = r#"
server:
  host: 127.0.0.1
  port: 9090
  max_payload_bytes: 1024
analysis:
  palindrome:
    case_sensitive: true
    ignore_whitespace: true
storage:
  backend: file
  path: /tmp/strings.json
"#;

        let cfg: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 9090);
        assert_eq!(cfg.server.max_payload_bytes, 1024);
        assert!(cfg.analysis.palindrome.case_sensitive);
        assert!(cfg.analysis.palindrome.ignore_whitespace);
        assert_eq!(cfg.storage.backend, StorageBackend::File);
        assert_eq!(cfg.storage.path.as_deref(), Some("/tmp/strings.json"));
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let yaml = r#"
server:
  port: 3000
"#;

        let cfg: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.server.host, DEFAULT_HOST);
        assert_eq!(cfg.server.port, 3000);
        assert_eq!(cfg.server.max_payload_bytes, DEFAULT_MAX_PAYLOAD_BYTES);
        assert_eq!(cfg.analysis.palindrome, PalindromePolicy::default());
        assert_eq!(cfg.storage.backend, StorageBackend::Memory);
    }

    #[test]
    fn load_empty_yaml_file_is_default() {
        let file = write_temp(".yaml", "");
        let cfg = load_config(file.path()).unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn load_toml_file() {
        let file = write_temp(
            ".toml",
            r#"
[server]
port = 7000

[storage]
backend = "memory"
"#,
        );

        let cfg = load_config(file.path()).unwrap();
        assert_eq!(cfg.server.port, 7000);
        assert_eq!(cfg.storage.backend, StorageBackend::Memory);
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let file = write_temp(".ini", "port=1");
        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_config("/nonexistent/config.yaml").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/config.yaml"));
    }

    #[test]
    fn validation_failure_surfaces_from_loader() {
        let file = write_temp(
            ".yaml",
            r#"
storage:
  backend: file
"#,
        );

        let err = load_and_validate_config(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("requires storage.path"));
    }

    #[test]
    fn env_overrides_host_and_port() {
        let vars = HashMap::from([(HOST_ENV, "10.0.0.1"), (PORT_ENV, "8123")]);
        let mut cfg = Config::default();
        cfg.apply_overrides_from(|name| vars.get(name).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(cfg.server.host, "10.0.0.1");
        assert_eq!(cfg.server.port, 8123);
        assert_eq!(cfg.server.bind_address(), "10.0.0.1:8123");
    }

    #[test]
    fn env_override_rejects_bad_port() {
        let mut cfg = Config::default();
        let err = cfg
            .apply_overrides_from(|name| (name == PORT_ENV).then(|| "eighty".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv { name: PORT_ENV, .. }));
    }
}
