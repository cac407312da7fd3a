// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Computed properties of one input text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringProperties {
    /// Number of characters (Unicode scalar values)
    pub length: usize,
    pub is_palindrome: bool,
    /// Number of distinct characters, case-sensitive
    pub unique_characters: usize,
    /// Number of whitespace-separated words
    pub word_count: usize,
    /// Lowercase hex SHA-256 of the UTF-8 bytes
    pub sha256_hash: String,
    /// Occurrences per distinct character; values sum to `length`
    pub character_frequency_map: BTreeMap<char, usize>,
}

/// A stored record: the original text plus its properties.
///
/// `id` is the SHA-256 digest, so equal texts always map to the same record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzedString {
    pub id: String,
    pub value: String,
    pub properties: StringProperties,
    pub created_at: DateTime<Utc>,
}
