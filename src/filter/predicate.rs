// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Serialize;

use crate::analysis::AnalyzedString;
use crate::filter::FieldConstraints;

/// How a predicate was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    Structured,
    NaturalLanguage,
}

impl FilterMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterMode::Structured => "structured",
            FilterMode::NaturalLanguage => "natural_language",
        }
    }
}

/// Integer-valued record attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
    Length,
    WordCount,
    UniqueCharacters,
}

impl NumericField {
    /// The attribute's value on `record`, if the record carries one.
    pub fn value(&self, record: &AnalyzedString) -> Option<usize> {
        let props = &record.properties;
        match self {
            NumericField::Length => Some(props.length),
            NumericField::WordCount => Some(props.word_count),
            NumericField::UniqueCharacters => Some(props.unique_characters),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Equal(usize),
    AtLeast(usize),
    AtMost(usize),
}

impl Comparison {
    pub fn holds(&self, value: usize) -> bool {
        match *self {
            Comparison::Equal(expected) => value == expected,
            Comparison::AtLeast(min) => value >= min,
            Comparison::AtMost(max) => value <= max,
        }
    }
}

/// A single condition on one record attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    Numeric {
        field: NumericField,
        comparison: Comparison,
    },
    IsPalindrome(bool),
    /// Case-sensitive: the character must appear in the original text as given
    ContainsCharacter(char),
    HashEquals(String),
}

impl Constraint {
    pub fn matches(&self, record: &AnalyzedString) -> bool {
        match self {
            // A missing attribute never satisfies a numeric comparison
            Constraint::Numeric { field, comparison } => field
                .value(record)
                .is_some_and(|value| comparison.holds(value)),
            Constraint::IsPalindrome(expected) => record.properties.is_palindrome == *expected,
            Constraint::ContainsCharacter(c) => record.value.contains(*c),
            Constraint::HashEquals(hash) => record.properties.sha256_hash == *hash,
        }
    }
}

/// Conjunction of constraints. An empty predicate matches every record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    mode: FilterMode,
    filters: FieldConstraints,
    constraints: Vec<Constraint>,
}

impl Predicate {
    pub fn new(filters: FieldConstraints, mode: FilterMode) -> Self {
        let constraints = build_constraints(&filters);
        Self {
            mode,
            filters,
            constraints,
        }
    }

    /// A predicate that keeps everything.
    pub fn match_all() -> Self {
        Self::new(FieldConstraints::default(), FilterMode::Structured)
    }

    pub fn matches(&self, record: &AnalyzedString) -> bool {
        self.constraints.iter().all(|c| c.matches(record))
    }

    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    /// The field constraints this predicate was built from.
    pub fn filters(&self) -> &FieldConstraints {
        &self.filters
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }
}

fn build_constraints(filters: &FieldConstraints) -> Vec<Constraint> {
    let numeric = [
        (NumericField::Length, filters.min_length.map(Comparison::AtLeast)),
        (NumericField::Length, filters.max_length.map(Comparison::AtMost)),
        (NumericField::WordCount, filters.word_count.map(Comparison::Equal)),
        (NumericField::WordCount, filters.min_word_count.map(Comparison::AtLeast)),
        (NumericField::WordCount, filters.max_word_count.map(Comparison::AtMost)),
        (NumericField::UniqueCharacters, filters.unique_characters.map(Comparison::Equal)),
    ];

    let mut constraints: Vec<Constraint> = Vec::with_capacity(filters.len());
    if let Some(expected) = filters.is_palindrome {
        constraints.push(Constraint::IsPalindrome(expected));
    }
    constraints.extend(numeric.into_iter().filter_map(|(field, comparison)| {
        comparison.map(|comparison| Constraint::Numeric { field, comparison })
    }));
    if let Some(c) = filters.contains_character {
        constraints.push(Constraint::ContainsCharacter(c));
    }
    if let Some(hash) = &filters.sha256_hash {
        constraints.push(Constraint::HashEquals(hash.clone()));
    }
    constraints
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::StringMetrics;

    fn record(text: &str) -> AnalyzedString {
        StringMetrics::default().analyze(text)
    }

    #[test]
    fn empty_predicate_matches_everything() {
        let predicate = Predicate::match_all();
        assert!(predicate.is_empty());
        assert!(predicate.matches(&record("")));
        assert!(predicate.matches(&record("anything at all")));
    }

    #[test]
    fn one_constraint_per_active_field() {
        let filters = FieldConstraints {
            is_palindrome: Some(true),
            min_length: Some(3),
            max_length: Some(9),
            contains_character: Some('a'),
            ..Default::default()
        };
        let predicate = Predicate::new(filters, FilterMode::Structured);

        assert_eq!(predicate.constraints().len(), 4);
        assert!(predicate.constraints().contains(&Constraint::Numeric {
            field: NumericField::Length,
            comparison: Comparison::AtMost(9),
        }));
    }

    #[test]
    fn conjunction_requires_every_constraint() {
        let filters = FieldConstraints {
            is_palindrome: Some(true),
            min_length: Some(3),
            ..Default::default()
        };
        let predicate = Predicate::new(filters, FilterMode::Structured);

        assert!(predicate.matches(&record("aba")));
        assert!(!predicate.matches(&record("aa")));
        assert!(!predicate.matches(&record("abc")));
    }

    #[test]
    fn comparisons_are_inclusive() {
        assert!(Comparison::AtLeast(3).holds(3));
        assert!(!Comparison::AtLeast(3).holds(2));
        assert!(Comparison::AtMost(3).holds(3));
        assert!(!Comparison::AtMost(3).holds(4));
        assert!(Comparison::Equal(0).holds(0));
    }

    #[test]
    fn contains_character_is_case_sensitive() {
        let constraint = Constraint::ContainsCharacter('z');
        assert!(constraint.matches(&record("pizza")));
        assert!(!constraint.matches(&record("Zebra")));
    }

    #[test]
    fn hash_equality() {
        let r = record("hello");
        assert!(Constraint::HashEquals(r.id.clone()).matches(&r));
        assert!(!Constraint::HashEquals(r.id.clone()).matches(&record("world")));
    }

    #[test]
    fn word_count_bounds() {
        let filters = FieldConstraints {
            min_word_count: Some(2),
            max_word_count: Some(3),
            ..Default::default()
        };
        let predicate = Predicate::new(filters, FilterMode::NaturalLanguage);

        assert!(!predicate.matches(&record("one")));
        assert!(predicate.matches(&record("one two")));
        assert!(predicate.matches(&record("one two three")));
        assert!(!predicate.matches(&record("one two three four")));
        assert_eq!(predicate.mode(), FilterMode::NaturalLanguage);
    }
}
