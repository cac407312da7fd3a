// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Per-string analysis.
//!
//! [`StringMetrics`] turns a text into an [`AnalyzedString`]: length, palindrome
//! check, distinct characters, word count, SHA-256 digest and character
//! frequencies. Analysis is pure; the only configurable part is the
//! [`PalindromePolicy`] used to normalise text before the palindrome comparison.
//!
//! ```rust
//! use string_analyzer::analysis::StringMetrics;
//!
//! let record = StringMetrics::default().analyze("Racecar");
//! assert_eq!(record.properties.length, 7);
//! assert!(record.properties.is_palindrome);
//! assert_eq!(record.id, record.properties.sha256_hash);
//! ```

mod metrics;
mod palindrome;
mod record;

pub use metrics::{sha256_hex, StringMetrics};
pub use palindrome::PalindromePolicy;
pub use record::{AnalyzedString, StringProperties};
