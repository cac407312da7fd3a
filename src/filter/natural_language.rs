// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Rule-based extraction of field constraints from free text.
//!
//! ## Recognised phrases (case-insensitive)
//!
//! | Phrase                                   | Constraint                    |
//! |------------------------------------------|-------------------------------|
//! | `non-palindromic`, `not palindromes`, `aren't palindromes` | `is_palindrome = false` |
//! | `palindrome`, `palindromic`              | `is_palindrome = true`        |
//! | `single word`, `one word`                | `word_count = 1`              |
//! | `3 words`, `exactly 3 words`             | `word_count = 3`              |
//! | `contains word 3 times`, `word count of 3` | `word_count = 3`            |
//! | `more than 2 words` / `fewer than 4 words` | word count bounds (strict)  |
//! | `at least 2 words` / `at most 4 words` / `up to 4 words` | word count bounds (inclusive) |
//! | `longer than 10`                         | `length > 10`                 |
//! | `shorter than 10`                        | `length < 10`                 |
//! | `at least 5 characters` / `at most 5 characters` | length bounds (inclusive) |
//! | `containing the letter z`, `containing z` | `contains_character = 'z'`   |
//! | `first vowel`                            | `contains_character = 'a'`    |
//!
//! A leading `no` or `not` flips a comparative to the complementary inclusive
//! bound: `no longer than 3` is `length <= 3`, `not fewer than 2 words` is
//! `word_count >= 2`.
//!
//! Anything else in the text is ignored. The character captured by the
//! letter rules keeps the case it was written in.

use regex::{Captures, Regex};

use crate::errors::ServiceError;
use crate::filter::FieldConstraints;

type Apply = fn(&Captures, &mut FieldConstraints) -> Result<(), ServiceError>;

struct ExtractionRule {
    regex: Regex,
    apply: Apply,
}

impl ExtractionRule {
    fn new(pattern: &str, apply: Apply) -> Self {
        Self {
            regex: Regex::new(pattern).expect("extraction patterns are valid regexes"),
            apply,
        }
    }
}

/// Translates natural-language filter text into [`FieldConstraints`].
pub struct NaturalLanguageParser {
    rules: Vec<ExtractionRule>,
}

impl NaturalLanguageParser {
    pub fn new() -> Self {
        Self {
            rules: Self::build_rules(),
        }
    }

    // Negated palindrome runs before the plain one so "not palindromes" wins.
    fn build_rules() -> Vec<ExtractionRule> {
        vec![
            ExtractionRule::new(
                r"(?i)\b(?:non[-\s]?|(?:not|isn['’]?t|aren['’]?t)\s+(?:a\s+)?)palindrom\w*",
                |_, f| set_exact(&mut f.is_palindrome, false, "is_palindrome"),
            ),
            ExtractionRule::new(r"(?i)\bpalindrom(?:e|es|ic)\b", |_, f| {
                if f.is_palindrome.is_none() {
                    f.is_palindrome = Some(true);
                }
                Ok(())
            }),
            ExtractionRule::new(r"(?i)\b(?:single|one)[-\s]word\b", |_, f| {
                set_exact(&mut f.word_count, 1, "word_count")
            }),
            // Counts claimed by a comparative are captured so they can be
            // skipped here and left to the bound rules below.
            ExtractionRule::new(
                r"(?i)\b((?:more|fewer|less)\s+than\s+|at\s+least\s+|at\s+most\s+|up\s+to\s+)?(?:exactly\s+)?(\d+)\s+words?\b",
                |caps, f| {
                    if caps.get(1).is_some() {
                        return Ok(());
                    }
                    let n = number(caps, 2)?;
                    set_exact(&mut f.word_count, n, "word_count")
                },
            ),
            ExtractionRule::new(
                r"(?i)\bcontains?\s+(?:a\s+|the\s+)?words?\s+(\d+)\s+times?\b",
                |caps, f| {
                    let n = number(caps, 1)?;
                    set_exact(&mut f.word_count, n, "word_count")
                },
            ),
            ExtractionRule::new(
                r"(?i)\bword\s+count\s+(?:of\s+|is\s+|=\s*)?(\d+)\b",
                |caps, f| {
                    let n = number(caps, 1)?;
                    set_exact(&mut f.word_count, n, "word_count")
                },
            ),
            ExtractionRule::new(
                r"(?i)\b(?:(no|not)\s+)?(more|fewer|less)\s+than\s+(\d+)\s+words?\b",
                |caps, f| {
                    let grows = caps[2].eq_ignore_ascii_case("more");
                    let bound = comparative(caps, grows, "words")?;
                    apply_bound(&mut f.min_word_count, &mut f.max_word_count, bound);
                    Ok(())
                },
            ),
            ExtractionRule::new(
                r"(?i)\b(at\s+least|at\s+most|up\s+to)\s+(\d+)\s+words?\b",
                |caps, f| {
                    let bound = inclusive(caps)?;
                    apply_bound(&mut f.min_word_count, &mut f.max_word_count, bound);
                    Ok(())
                },
            ),
            ExtractionRule::new(
                r"(?i)\b(?:(no|not)\s+)?(longer|shorter)\s+than\s+(\d+)",
                |caps, f| {
                    let grows = caps[2].eq_ignore_ascii_case("longer");
                    let bound = comparative(caps, grows, "characters")?;
                    apply_bound(&mut f.min_length, &mut f.max_length, bound);
                    Ok(())
                },
            ),
            ExtractionRule::new(
                r"(?i)\b(at\s+least|at\s+most|up\s+to)\s+(\d+)\s+(?:characters?|chars?|letters?)\b",
                |caps, f| {
                    let bound = inclusive(caps)?;
                    apply_bound(&mut f.min_length, &mut f.max_length, bound);
                    Ok(())
                },
            ),
            ExtractionRule::new(
                r#"(?i)\b(?:contain(?:s|ing)?|with|having|has)\s+(?:the\s+|a\s+|an\s+)?(?:letter|character|char)\s+['"]?(\S)['"]?(?:$|[\s,.;!?])"#,
                |caps, f| {
                    let c = character(caps)?;
                    set_exact(&mut f.contains_character, c, "contains_character")
                },
            ),
            // Bare form: the character must stand alone, so "containing a
            // palindrome" is not read as the letter 'a'.
            ExtractionRule::new(
                r#"(?i)\bcontain(?:s|ing)?\s+(?:['"](\S)['"]|(\p{L})(?:$|[,.;!?]|\s+(?:and|but)\b))"#,
                |caps, f| {
                    let c = character(caps)?;
                    set_exact(&mut f.contains_character, c, "contains_character")
                },
            ),
            ExtractionRule::new(r"(?i)\bfirst\s+vowel\b", |_, f| {
                set_exact(&mut f.contains_character, 'a', "contains_character")
            }),
        ]
    }

    /// Extract constraints from `text`.
    ///
    /// Fails with `InvalidInput` for blank text, `AmbiguousFilter` when nothing
    /// was recognised, and `InvalidFilter` when recognised phrases contradict
    /// each other.
    pub fn parse(&self, text: &str) -> Result<FieldConstraints, ServiceError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ServiceError::InvalidInput(
                "natural-language filter must not be empty".to_string(),
            ));
        }

        let mut filters = FieldConstraints::default();
        let mut matched = false;
        for rule in &self.rules {
            for caps in rule.regex.captures_iter(text) {
                (rule.apply)(&caps, &mut filters)?;
                matched = true;
            }
        }

        if !matched || filters.is_empty() {
            return Err(ServiceError::AmbiguousFilter(format!(
                "no recognizable filter in '{}'",
                text
            )));
        }

        filters.check_consistency()?;
        Ok(filters)
    }
}

impl Default for NaturalLanguageParser {
    fn default() -> Self {
        Self::new()
    }
}

fn number(caps: &Captures, group: usize) -> Result<usize, ServiceError> {
    let raw = caps.get(group).map(|m| m.as_str()).unwrap_or_default();
    raw.parse()
        .map_err(|_| ServiceError::InvalidFilter(format!("number '{}' is out of range", raw)))
}

/// `> n` expressed as an inclusive minimum.
fn exclusive_lower(n: usize) -> Result<usize, ServiceError> {
    n.checked_add(1)
        .ok_or_else(|| ServiceError::InvalidFilter(format!("number '{}' is out of range", n)))
}

/// `< n` expressed as an inclusive maximum.
fn exclusive_upper(n: usize, unit: &str) -> Result<usize, ServiceError> {
    n.checked_sub(1).ok_or_else(|| {
        ServiceError::InvalidFilter(format!("nothing can have fewer than 0 {}", unit))
    })
}

/// An inclusive bound on a numeric field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bound {
    Min(usize),
    Max(usize),
}

/// `[no|not] (more|longer|fewer|shorter|less) than N` from groups 1 and 3.
///
/// `grows` is true for the "more"/"longer" direction. Negation turns the
/// strict bound into the complementary inclusive one.
fn comparative(caps: &Captures, grows: bool, unit: &str) -> Result<Bound, ServiceError> {
    let n = number(caps, 3)?;
    let negated = caps.get(1).is_some();
    match (grows, negated) {
        (true, false) => Ok(Bound::Min(exclusive_lower(n)?)),
        (true, true) => Ok(Bound::Max(n)),
        (false, false) => Ok(Bound::Max(exclusive_upper(n, unit)?)),
        (false, true) => Ok(Bound::Min(n)),
    }
}

/// `(at least|at most|up to) N` from groups 1 and 2.
fn inclusive(caps: &Captures) -> Result<Bound, ServiceError> {
    let n = number(caps, 2)?;
    if caps[1].to_ascii_lowercase().contains("least") {
        Ok(Bound::Min(n))
    } else {
        Ok(Bound::Max(n))
    }
}

fn apply_bound(min: &mut Option<usize>, max: &mut Option<usize>, bound: Bound) {
    match bound {
        Bound::Min(n) => tighten_min(min, n),
        Bound::Max(n) => tighten_max(max, n),
    }
}

/// The first participating capture group, as a single character.
fn character(caps: &Captures) -> Result<char, ServiceError> {
    caps.iter()
        .skip(1)
        .flatten()
        .next()
        .and_then(|m| m.as_str().chars().next())
        .ok_or_else(|| ServiceError::InvalidFilter("missing character".to_string()))
}

fn set_exact<T>(slot: &mut Option<T>, value: T, field: &str) -> Result<(), ServiceError>
where
    T: PartialEq + std::fmt::Debug,
{
    match slot {
        Some(existing) if *existing != value => Err(ServiceError::InvalidFilter(format!(
            "conflicting values for {}: {:?} and {:?}",
            field, existing, value
        ))),
        _ => {
            *slot = Some(value);
            Ok(())
        }
    }
}

fn tighten_min(slot: &mut Option<usize>, value: usize) {
    *slot = Some(slot.map_or(value, |current| current.max(value)));
}

fn tighten_max(slot: &mut Option<usize>, value: usize) {
    *slot = Some(slot.map_or(value, |current| current.min(value)));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<FieldConstraints, ServiceError> {
        NaturalLanguageParser::new().parse(text)
    }

    #[test]
    fn palindromes_longer_than() {
        let filters = parse("palindromes longer than 2 characters").unwrap();
        assert_eq!(filters.is_palindrome, Some(true));
        assert_eq!(filters.min_length, Some(3));
        assert_eq!(filters.len(), 2);
    }

    #[test]
    fn single_word_palindromic_strings() {
        let filters = parse("all single word palindromic strings").unwrap();
        assert_eq!(filters.word_count, Some(1));
        assert_eq!(filters.is_palindrome, Some(true));
    }

    #[test]
    fn trigger_phrases_are_case_insensitive() {
        let filters = parse("PALINDROMIC Strings SHORTER THAN 5").unwrap();
        assert_eq!(filters.is_palindrome, Some(true));
        assert_eq!(filters.max_length, Some(4));
    }

    #[test]
    fn negated_palindrome() {
        assert_eq!(parse("non-palindromic strings").unwrap().is_palindrome, Some(false));
        assert_eq!(parse("strings that are not palindromes").unwrap().is_palindrome, Some(false));
        assert_eq!(parse("not a palindrome").unwrap().is_palindrome, Some(false));
    }

    #[test]
    fn containing_letter() {
        let filters = parse("strings containing the letter z").unwrap();
        assert_eq!(filters.contains_character, Some('z'));

        let filters = parse("words with the character 'q', please").unwrap();
        assert_eq!(filters.contains_character, Some('q'));
    }

    #[test]
    fn first_vowel() {
        let filters = parse("palindromic strings that contain the first vowel").unwrap();
        assert_eq!(filters.contains_character, Some('a'));
        assert_eq!(filters.is_palindrome, Some(true));
    }

    #[test]
    fn word_count_phrases() {
        assert_eq!(parse("exactly 3 words").unwrap().word_count, Some(3));
        assert_eq!(parse("contains word 2 times").unwrap().word_count, Some(2));
        assert_eq!(parse("word count of 4").unwrap().word_count, Some(4));

        let filters = parse("more than 2 words but fewer than 5 words").unwrap();
        assert_eq!(filters.min_word_count, Some(3));
        assert_eq!(filters.max_word_count, Some(4));
    }

    #[test]
    fn inclusive_length_phrases() {
        let filters = parse("at least 4 characters and at most 8 characters").unwrap();
        assert_eq!(filters.min_length, Some(4));
        assert_eq!(filters.max_length, Some(8));
    }

    #[test]
    fn bounds_tighten_instead_of_conflicting() {
        let filters = parse("longer than 3 with at least 10 characters").unwrap();
        assert_eq!(filters.min_length, Some(10));
    }

    #[test]
    fn inclusive_word_phrases_are_bounds() {
        let filters = parse("strings with at least 2 words").unwrap();
        assert_eq!(filters.min_word_count, Some(2));
        assert_eq!(filters.word_count, None);

        let filters = parse("at most 3 words").unwrap();
        assert_eq!(filters.max_word_count, Some(3));
        assert_eq!(filters.word_count, None);

        let filters = parse("up to 4 words and at most 10 characters").unwrap();
        assert_eq!(filters.max_word_count, Some(4));
        assert_eq!(filters.max_length, Some(10));
        assert_eq!(filters.word_count, None);
    }

    #[test]
    fn negated_comparatives_flip_to_inclusive_bounds() {
        let filters = parse("no longer than 3 characters").unwrap();
        assert_eq!(filters.max_length, Some(3));
        assert_eq!(filters.min_length, None);

        let filters = parse("not shorter than 5").unwrap();
        assert_eq!(filters.min_length, Some(5));
        assert_eq!(filters.max_length, None);

        let filters = parse("no more than 2 words").unwrap();
        assert_eq!(filters.max_word_count, Some(2));
        assert_eq!(filters.min_word_count, None);
        assert_eq!(filters.word_count, None);

        let filters = parse("not fewer than 2 words").unwrap();
        assert_eq!(filters.min_word_count, Some(2));
        assert_eq!(filters.max_word_count, None);
    }

    #[test]
    fn contracted_negations_of_palindrome() {
        assert_eq!(parse("strings that aren't palindromes").unwrap().is_palindrome, Some(false));
        assert_eq!(parse("a string that isn't a palindrome").unwrap().is_palindrome, Some(false));
        assert_eq!(parse("values which are not palindromic").unwrap().is_palindrome, Some(false));
    }

    #[test]
    fn phrases_select_the_intended_records() {
        let metrics = crate::analysis::StringMetrics::default();
        let keeps = |query: &str, text: &str| {
            let filters = parse(query).unwrap();
            crate::filter::Predicate::new(filters, crate::filter::FilterMode::NaturalLanguage)
                .matches(&metrics.analyze(text))
        };

        assert!(keeps("at least 2 words", "a b c"));
        assert!(!keeps("at least 2 words", "abc"));
        assert!(keeps("no longer than 3 characters", "ab"));
        assert!(!keeps("no longer than 3 characters", "abcd"));
        assert!(keeps("strings that aren't palindromes", "abc"));
        assert!(!keeps("strings that aren't palindromes", "aba"));
    }

    #[test]
    fn bare_containing_character() {
        assert_eq!(parse("strings containing z").unwrap().contains_character, Some('z'));
        assert_eq!(parse("contains 'Q'").unwrap().contains_character, Some('Q'));

        let filters = parse("containing x and longer than 2").unwrap();
        assert_eq!(filters.contains_character, Some('x'));
        assert_eq!(filters.min_length, Some(3));
    }

    #[test]
    fn bare_form_needs_a_standalone_character() {
        let filters = parse("strings containing a palindrome").unwrap();
        assert_eq!(filters.contains_character, None);
        assert_eq!(filters.is_palindrome, Some(true));

        let filters = parse("contains word 2 times").unwrap();
        assert_eq!(filters.contains_character, None);
    }

    #[test]
    fn unrecognized_text_is_ambiguous() {
        let err = parse("banana").unwrap_err();
        assert!(matches!(err, ServiceError::AmbiguousFilter(_)));
    }

    #[test]
    fn blank_text_is_invalid_input() {
        assert!(matches!(parse("   ").unwrap_err(), ServiceError::InvalidInput(_)));
    }

    #[test]
    fn contradictions_are_invalid_filter() {
        let err = parse("longer than 10 and shorter than 5").unwrap_err();
        assert!(matches!(err, ServiceError::InvalidFilter(_)));

        let err = parse("single word strings with 3 words").unwrap_err();
        assert!(matches!(err, ServiceError::InvalidFilter(_)));

        let err = parse("shorter than 0 characters").unwrap_err();
        assert!(matches!(err, ServiceError::InvalidFilter(_)));
    }

    #[test]
    fn oversized_number_is_invalid_filter() {
        let err = parse("longer than 99999999999999999999999999").unwrap_err();
        assert!(matches!(err, ServiceError::InvalidFilter(_)));
    }
}
