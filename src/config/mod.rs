// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod loader;
mod validation;

pub mod consts;

pub use loader::{
    load_and_validate_config, load_config, AnalysisConfig, Config, ServerConfig, StorageBackend,
    StorageConfig,
};
pub use crate::analysis::PalindromePolicy;
pub use validation::validate_config;
