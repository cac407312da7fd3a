// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::errors::ServiceError;
use crate::filter::FilterMode;

/// Field names accepted in structured filters.
pub const FILTER_FIELDS: &[&str] = &[
    "is_palindrome",
    "min_length",
    "max_length",
    "word_count",
    "min_word_count",
    "max_word_count",
    "unique_characters",
    "contains_character",
    "sha256_hash",
];

/// Filter input, before resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterCriteria {
    /// Raw `field=value` pairs, e.g. from a query string
    Structured(Vec<(String, String)>),
    /// Free text to be translated into field constraints
    NaturalLanguage(String),
}

impl FilterCriteria {
    /// Criteria that match every record.
    pub fn none() -> Self {
        FilterCriteria::Structured(Vec::new())
    }

    pub fn structured<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        FilterCriteria::Structured(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn natural_language(text: impl Into<String>) -> Self {
        FilterCriteria::NaturalLanguage(text.into())
    }

    pub fn mode(&self) -> FilterMode {
        match self {
            FilterCriteria::Structured(_) => FilterMode::Structured,
            FilterCriteria::NaturalLanguage(_) => FilterMode::NaturalLanguage,
        }
    }
}

/// Typed field constraints shared by both filter modes.
///
/// Serializes to the flat map echoed back to clients as `filters_applied` /
/// `parsed_filters`; unset fields are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldConstraints {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_palindrome: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_word_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_word_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_characters: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains_character: Option<char>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha256_hash: Option<String>,
}

impl FieldConstraints {
    /// Parse structured `field=value` pairs.
    ///
    /// Fails with `InvalidFilter` on an unknown field, a repeated field, or a
    /// value of the wrong shape.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, ServiceError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut constraints = FieldConstraints::default();
        let mut seen = HashSet::new();

        for (field, raw) in pairs {
            if !seen.insert(field) {
                return Err(ServiceError::InvalidFilter(format!(
                    "field '{}' given more than once",
                    field
                )));
            }

            let value = raw.trim();
            match field {
                "is_palindrome" => constraints.is_palindrome = Some(parse_bool(field, value)?),
                "min_length" => constraints.min_length = Some(parse_count(field, value)?),
                "max_length" => constraints.max_length = Some(parse_count(field, value)?),
                "word_count" => constraints.word_count = Some(parse_count(field, value)?),
                "min_word_count" => constraints.min_word_count = Some(parse_count(field, value)?),
                "max_word_count" => constraints.max_word_count = Some(parse_count(field, value)?),
                "unique_characters" => {
                    constraints.unique_characters = Some(parse_count(field, value)?)
                }
                // Not trimmed: a single space is a legitimate character to look for
                "contains_character" => {
                    constraints.contains_character = Some(parse_char(field, raw)?)
                }
                "sha256_hash" => constraints.sha256_hash = Some(parse_hash(field, value)?),
                unknown => {
                    return Err(ServiceError::InvalidFilter(format!(
                        "unknown filter field '{}' (expected one of: {})",
                        unknown,
                        FILTER_FIELDS.join(", ")
                    )))
                }
            }
        }

        constraints.check_consistency()?;
        Ok(constraints)
    }

    /// Number of active constraints.
    pub fn len(&self) -> usize {
        [
            self.is_palindrome.is_some(),
            self.min_length.is_some(),
            self.max_length.is_some(),
            self.word_count.is_some(),
            self.min_word_count.is_some(),
            self.max_word_count.is_some(),
            self.unique_characters.is_some(),
            self.contains_character.is_some(),
            self.sha256_hash.is_some(),
        ]
        .iter()
        .filter(|set| **set)
        .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reject bounds that no record could satisfy.
    pub fn check_consistency(&self) -> Result<(), ServiceError> {
        check_range("length", self.min_length, self.max_length)?;
        check_range("word count", self.min_word_count, self.max_word_count)?;

        if let (Some(exact), Some(min)) = (self.word_count, self.min_word_count) {
            if exact < min {
                return Err(conflict("word_count", exact, "min_word_count", min));
            }
        }
        if let (Some(exact), Some(max)) = (self.word_count, self.max_word_count) {
            if exact > max {
                return Err(conflict("word_count", exact, "max_word_count", max));
            }
        }
        Ok(())
    }
}

fn check_range(what: &str, min: Option<usize>, max: Option<usize>) -> Result<(), ServiceError> {
    match (min, max) {
        (Some(min), Some(max)) if min > max => Err(ServiceError::InvalidFilter(format!(
            "conflicting {} bounds: minimum {} exceeds maximum {}",
            what, min, max
        ))),
        _ => Ok(()),
    }
}

fn conflict(a: &str, a_value: usize, b: &str, b_value: usize) -> ServiceError {
    ServiceError::InvalidFilter(format!(
        "conflicting filters: {}={} and {}={}",
        a, a_value, b, b_value
    ))
}

fn parse_bool(field: &str, value: &str) -> Result<bool, ServiceError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ServiceError::InvalidFilter(format!(
            "{} must be true or false, got '{}'",
            field, value
        ))),
    }
}

fn parse_count(field: &str, value: &str) -> Result<usize, ServiceError> {
    value.parse().map_err(|_| {
        ServiceError::InvalidFilter(format!(
            "{} must be a non-negative integer, got '{}'",
            field, value
        ))
    })
}

fn parse_char(field: &str, value: &str) -> Result<char, ServiceError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ServiceError::InvalidFilter(format!(
            "{} must be exactly one character, got '{}'",
            field, value
        ))),
    }
}

fn parse_hash(field: &str, value: &str) -> Result<String, ServiceError> {
    if value.len() == 64 && value.chars().all(|c| c.is_ascii_hexdigit()) {
        Ok(value.to_ascii_lowercase())
    } else {
        Err(ServiceError::InvalidFilter(format!(
            "{} must be a 64-character hex digest",
            field
        )))
    }
}
