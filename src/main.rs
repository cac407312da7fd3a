// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;

use anyhow::Context;
use string_analyzer::api::{serve, AppState};
use string_analyzer::config::load_and_validate_config;
use string_analyzer::observability::init_tracing;

/// Resolves on Ctrl-C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    // Optional single argument: path to a YAML or TOML config file
    let config_path = env::args().nth(1);
    let config = load_and_validate_config(config_path.as_deref())
        .with_context(|| match &config_path {
            Some(path) => format!("Failed to load configuration from {}", path),
            None => "Failed to load default configuration".to_string(),
        })?;

    let state = AppState::from_config(&config).context("Failed to open record store")?;
    let source = config_path.as_deref().unwrap_or("defaults");

    serve(&config, state, source, shutdown_signal())
        .await
        .with_context(|| format!("Server on {} failed", config.server.bind_address()))?;

    Ok(())
}
