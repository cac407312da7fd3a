// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};

/// Normalisation applied before comparing a text with its reverse.
///
/// The default is case-insensitive and whitespace-sensitive: `"Racecar"` is a
/// palindrome, `"race car"` is not. Other characters (punctuation included) are
/// always compared as-is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PalindromePolicy {
    pub case_sensitive: bool,
    pub ignore_whitespace: bool,
}

impl PalindromePolicy {
    /// Characters of `text` after normalisation, in order.
    fn normalized(&self, text: &str) -> Vec<char> {
        let chars = text
            .chars()
            .filter(|c| !(self.ignore_whitespace && c.is_whitespace()));

        if self.case_sensitive {
            chars.collect()
        } else {
            chars.flat_map(char::to_lowercase).collect()
        }
    }

    /// Whether `text` reads the same in both directions under this policy.
    ///
    /// The empty string is a palindrome.
    pub fn is_palindrome(&self, text: &str) -> bool {
        let chars = self.normalized(text);
        chars.iter().eq(chars.iter().rev())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elementary_cases() {
        let policy = PalindromePolicy::default();
        assert!(policy.is_palindrome(""));
        assert!(policy.is_palindrome("a"));
        assert!(!policy.is_palindrome("ab"));
        assert!(policy.is_palindrome("aba"));
    }

    #[test]
    fn default_ignores_case_but_not_whitespace() {
        let policy = PalindromePolicy::default();
        assert!(policy.is_palindrome("Racecar"));
        assert!(!policy.is_palindrome("race car"));
        assert!(policy.is_palindrome("a b a"));
    }

    #[test]
    fn case_sensitive_policy() {
        let policy = PalindromePolicy {
            case_sensitive: true,
            ignore_whitespace: false,
        };
        assert!(!policy.is_palindrome("Racecar"));
        assert!(policy.is_palindrome("racecar"));
    }

    #[test]
    fn whitespace_insensitive_policy() {
        let policy = PalindromePolicy {
            case_sensitive: false,
            ignore_whitespace: true,
        };
        assert!(policy.is_palindrome("Never odd or even"));
        assert!(policy.is_palindrome("   "));
    }

    #[test]
    fn reversal_symmetry() {
        let policy = PalindromePolicy::default();
        for text in ["abc", "level", "Noon", "xyzzy", "été"] {
            let reversed: String = text.chars().rev().collect();
            assert_eq!(policy.is_palindrome(text), policy.is_palindrome(&reversed));
        }
    }
}
