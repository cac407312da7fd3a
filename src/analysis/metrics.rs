// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use chrono::Utc;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::time::Instant;

use crate::analysis::{AnalyzedString, PalindromePolicy, StringProperties};
use crate::observability::messages::{analysis::StringAnalyzed, StructuredLog};

/// Hex-encoded SHA-256 of the raw UTF-8 bytes of `text`.
pub fn sha256_hex(text: &str) -> String {
    hex::encode(Sha256::digest(text.as_bytes()))
}

/// Computes the fixed property set for a text. Holds no state besides the
/// palindrome policy, so one instance can be shared across requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringMetrics {
    policy: PalindromePolicy,
}

impl StringMetrics {
    pub fn new(policy: PalindromePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> PalindromePolicy {
        self.policy
    }

    /// Compute the properties of `text`.
    pub fn properties(&self, text: &str) -> StringProperties {
        let mut character_frequency_map: BTreeMap<char, usize> = BTreeMap::new();
        let mut length = 0;
        for c in text.chars() {
            *character_frequency_map.entry(c).or_insert(0) += 1;
            length += 1;
        }

        StringProperties {
            length,
            is_palindrome: self.policy.is_palindrome(text),
            unique_characters: character_frequency_map.len(),
            word_count: text.split_whitespace().count(),
            sha256_hash: sha256_hex(text),
            character_frequency_map,
        }
    }

    /// Analyze `text` into a record stamped with the current time.
    #[tracing::instrument(name = "analyze_string", skip_all, fields(bytes = text.len()))]
    pub fn analyze(&self, text: &str) -> AnalyzedString {
        let start = Instant::now();
        let properties = self.properties(text);

        StringAnalyzed {
            id: &properties.sha256_hash,
            length: properties.length,
            word_count: properties.word_count,
            duration: start.elapsed(),
        }
        .log();

        AnalyzedString {
            id: properties.sha256_hash.clone(),
            value: text.to_string(),
            properties,
            created_at: Utc::now(),
        }
    }
}
