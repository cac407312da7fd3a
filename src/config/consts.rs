// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Default bind address
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default listen port
pub const DEFAULT_PORT: u16 = 8000;
/// Default request body limit (64 KiB)
pub const DEFAULT_MAX_PAYLOAD_BYTES: usize = 64 * 1024;
/// Environment variable overriding `server.host`
pub const HOST_ENV: &str = "HOST";
/// Environment variable overriding `server.port`
pub const PORT_ENV: &str = "PORT";
