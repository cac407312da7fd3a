// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod analysis;   // string metrics + palindrome policy
pub mod api;        // HTTP routes and handlers
pub mod config;     // config loading + validation
pub mod errors;     // error handling
pub mod filter;     // structured and natural-language filters
pub mod observability;
pub mod store;      // record store backends
pub mod traits;     // unified abstractions
