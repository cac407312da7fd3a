// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Filter resolution over analyzed records.
//!
//! Filter input arrives in one of two modes (see [`FilterCriteria`]):
//!
//! 1. **Structured** - explicit `field=value` pairs such as `min_length=5`.
//!    Unknown field names and unparseable values are rejected with
//!    `ServiceError::InvalidFilter`.
//! 2. **Natural language** - free text such as
//!    `"palindromes longer than 10 characters"`, translated by a fixed set of
//!    case-insensitive trigger phrases into the same [`FieldConstraints`].
//!    Unrecognised words are ignored, but text that yields no constraint at all
//!    fails with `ServiceError::AmbiguousFilter` rather than matching everything.
//!
//! Both modes resolve into a [`Predicate`]: a conjunction of [`Constraint`]s.
//! [`FilterResolver::apply`] keeps the records for which every constraint holds,
//! in store order.
//!
//! ```rust
//! use string_analyzer::analysis::StringMetrics;
//! use string_analyzer::filter::{FilterCriteria, FilterResolver};
//!
//! let metrics = StringMetrics::default();
//! let records = vec![metrics.analyze("aba"), metrics.analyze("aa"), metrics.analyze("abc")];
//!
//! let resolver = FilterResolver::new();
//! let predicate = resolver
//!     .resolve(&FilterCriteria::natural_language("palindromes longer than 2 characters"))
//!     .unwrap();
//! let result = resolver.apply(&predicate, records);
//!
//! assert_eq!(result.count, 1);
//! assert_eq!(result.data[0].value, "aba");
//! ```

mod criteria;
mod natural_language;
mod predicate;
mod resolver;

pub use criteria::{FieldConstraints, FilterCriteria, FILTER_FIELDS};
pub use natural_language::NaturalLanguageParser;
pub use predicate::{Comparison, Constraint, FilterMode, NumericField, Predicate};
pub use resolver::{FilterResolver, FilterResult};
