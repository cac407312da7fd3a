// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Serialize;

use crate::analysis::AnalyzedString;
use crate::errors::ServiceError;
use crate::filter::{FieldConstraints, FilterCriteria, NaturalLanguageParser, Predicate};
use crate::observability::messages::filter::{FilterApplied, FilterRejected, FilterResolved};
use crate::observability::messages::StructuredLog;

/// Records that passed a predicate, in store order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterResult {
    pub data: Vec<AnalyzedString>,
    pub count: usize,
}

/// Turns filter input into predicates and evaluates them.
///
/// Holds the compiled natural-language rules, so build one per process and
/// share it.
#[derive(Default)]
pub struct FilterResolver {
    parser: NaturalLanguageParser,
}

impl FilterResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve criteria into a predicate.
    #[tracing::instrument(
        name = "resolve_filter",
        skip_all,
        fields(mode = criteria.mode().as_str())
    )]
    pub fn resolve(&self, criteria: &FilterCriteria) -> Result<Predicate, ServiceError> {
        let mode = criteria.mode();
        let resolved = match criteria {
            FilterCriteria::Structured(pairs) => {
                FieldConstraints::from_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            }
            FilterCriteria::NaturalLanguage(text) => self.parser.parse(text),
        };

        match resolved {
            Ok(filters) => {
                let predicate = Predicate::new(filters, mode);
                FilterResolved {
                    mode: mode.as_str(),
                    constraint_count: predicate.constraints().len(),
                }
                .log();
                Ok(predicate)
            }
            Err(error) => {
                FilterRejected {
                    mode: mode.as_str(),
                    error: &error,
                }
                .log();
                Err(error)
            }
        }
    }

    /// Keep the records matching every constraint of `predicate`, preserving
    /// their order.
    #[tracing::instrument(
        name = "apply_filter",
        skip_all,
        fields(mode = predicate.mode().as_str())
    )]
    pub fn apply<I>(&self, predicate: &Predicate, records: I) -> FilterResult
    where
        I: IntoIterator<Item = AnalyzedString>,
    {
        let mut candidates = 0;
        let data: Vec<AnalyzedString> = records
            .into_iter()
            .inspect(|_| candidates += 1)
            .filter(|record| predicate.matches(record))
            .collect();

        FilterApplied {
            mode: predicate.mode().as_str(),
            constraint_count: predicate.constraints().len(),
            candidates,
            matched: data.len(),
        }
        .log();

        FilterResult {
            count: data.len(),
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::StringMetrics;
    use crate::filter::FilterMode;
    use std::sync::{Arc, Mutex};
    use tracing::{span, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    fn records(texts: &[&str]) -> Vec<AnalyzedString> {
        let metrics = StringMetrics::default();
        texts.iter().map(|t| metrics.analyze(t)).collect()
    }

    fn values(result: &FilterResult) -> Vec<&str> {
        result.data.iter().map(|r| r.value.as_str()).collect()
    }

    #[test]
    fn empty_criteria_returns_everything_in_order() {
        let resolver = FilterResolver::new();
        let store = records(&["zeta", "alpha", "mid", "aba"]);

        let predicate = resolver.resolve(&FilterCriteria::none()).unwrap();
        let result = resolver.apply(&predicate, store.clone());

        assert_eq!(result.data, store);
        assert_eq!(result.count, 4);
    }

    #[test]
    fn structured_palindrome_filter() {
        let resolver = FilterResolver::new();
        let predicate = resolver
            .resolve(&FilterCriteria::structured([("is_palindrome", "true")]))
            .unwrap();

        let result = resolver.apply(&predicate, records(&["aba", "abc"]));
        assert_eq!(values(&result), vec!["aba"]);
    }

    #[test]
    fn natural_language_filter() {
        let resolver = FilterResolver::new();
        let predicate = resolver
            .resolve(&FilterCriteria::natural_language(
                "palindromes longer than 2 characters",
            ))
            .unwrap();

        let result = resolver.apply(&predicate, records(&["aba", "aa", "abc"]));
        assert_eq!(values(&result), vec!["aba"]);
        assert_eq!(predicate.mode(), FilterMode::NaturalLanguage);
    }

    #[test]
    fn natural_language_matches_structured_equivalent() {
        let resolver = FilterResolver::new();
        let store = records(&["noon", "level up", "a", "racecar", "hello world", "wow"]);

        let natural = resolver
            .resolve(&FilterCriteria::natural_language(
                "single word palindromes longer than 3",
            ))
            .unwrap();
        let structured = resolver
            .resolve(&FilterCriteria::structured([
                ("word_count", "1"),
                ("is_palindrome", "true"),
                ("min_length", "4"),
            ]))
            .unwrap();

        assert_eq!(natural.filters(), structured.filters());
        assert_eq!(
            resolver.apply(&natural, store.clone()),
            resolver.apply(&structured, store)
        );
    }

    #[test]
    fn unrecognized_text_is_ambiguous() {
        let resolver = FilterResolver::new();
        let err = resolver
            .resolve(&FilterCriteria::natural_language("banana"))
            .unwrap_err();
        assert!(matches!(err, ServiceError::AmbiguousFilter(_)));
    }

    #[test]
    fn unknown_structured_field_is_invalid() {
        let resolver = FilterResolver::new();
        let err = resolver
            .resolve(&FilterCriteria::structured([("color", "blue")]))
            .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidFilter(_)));
    }

    #[derive(Clone, Default)]
    struct SpanNames(Arc<Mutex<Vec<&'static str>>>);

    impl<S: Subscriber> Layer<S> for SpanNames {
        fn on_new_span(&self, attrs: &span::Attributes<'_>, _: &span::Id, _: Context<'_, S>) {
            self.0.lock().unwrap().push(attrs.metadata().name());
        }
    }

    #[test]
    fn resolve_and_apply_open_spans() {
        let names = SpanNames::default();
        let subscriber = tracing_subscriber::registry().with(names.clone());

        tracing::subscriber::with_default(subscriber, || {
            let resolver = FilterResolver::new();
            let predicate = resolver
                .resolve(&FilterCriteria::natural_language("palindromes"))
                .unwrap();
            resolver.apply(&predicate, records(&["aba"]));
        });

        let names = names.0.lock().unwrap();
        assert!(names.contains(&"resolve_filter"));
        assert!(names.contains(&"apply_filter"));
    }

    #[test]
    fn no_matches_is_an_empty_result() {
        let resolver = FilterResolver::new();
        let predicate = resolver
            .resolve(&FilterCriteria::structured([("min_length", "100")]))
            .unwrap();

        let result = resolver.apply(&predicate, records(&["short", "tiny"]));
        assert!(result.data.is_empty());
        assert_eq!(result.count, 0);
    }
}
