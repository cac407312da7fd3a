// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use tokio::net::TcpListener;

use crate::api::{router, AppState};
use crate::config::Config;
use crate::observability::messages::server::{ServerListening, ServerStarting};
use crate::observability::messages::StructuredLog;

/// Bind the configured address and serve until `shutdown` resolves.
///
/// `config_source` is only used for the start-up log line.
pub async fn serve<F>(
    config: &Config,
    state: AppState,
    config_source: &str,
    shutdown: F,
) -> std::io::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let address = config.server.bind_address();
    ServerStarting {
        address: &address,
        storage_backend: state.store.name(),
        config_source,
    }
    .log();

    let listener = TcpListener::bind(&address).await?;
    let local = listener.local_addr()?.to_string();
    ServerListening { address: &local }.log();

    let app = router(state, config.server.max_payload_bytes);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}
