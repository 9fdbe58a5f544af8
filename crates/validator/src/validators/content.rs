//! String content validators
//!
//! Regular expression and email format checks. Patterns must match the
//! entire input, not just a substring of it.

use std::sync::LazyLock;

use regex::Regex;
use regex_automata::meta;
use regex_syntax::hir::{Hir, Look};
use thiserror::Error;

use crate::foundation::ValidationError;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("email regex is valid")
});

// ============================================================================
// REGEX VALIDATOR
// ============================================================================

/// Errors raised while building a [`MatchesRegex`] validator.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PatternError {
    /// The pattern is not a valid regular expression.
    #[error(transparent)]
    Syntax(#[from] regex_syntax::Error),

    /// The anchored pattern could not be compiled (size limits).
    #[error(transparent)]
    Build(#[from] meta::BuildError),
}

/// Parses `pattern` and compiles it anchored at both ends of the haystack.
///
/// Anchors are added to the parsed expression, not spliced into the text.
fn compile_anchored(pattern: &str) -> Result<meta::Regex, PatternError> {
    let hir = regex_syntax::parse(pattern)?;
    let anchored = Hir::concat(vec![Hir::look(Look::Start), hir, Hir::look(Look::End)]);
    Ok(meta::Regex::builder().build_from_hir(&anchored)?)
}

crate::validator! {
    /// Passes when the whole input matches `pattern`.
    ///
    /// The pattern is anchored on both ends at construction, so `a?` rejects
    /// `"aa"` and `a*` accepts the empty input. An invalid pattern fails
    /// construction instead of failing every check.
    pub MatchesRegex { pattern: String, regex: meta::Regex } for String;
    rule(self, input) { self.regex.is_match(input) }
    error(self) { ValidationError::NoMatch { pattern: self.pattern.clone() } }
    new(pattern: impl Into<String>) -> PatternError {
        let pattern = pattern.into();
        let regex = compile_anchored(&pattern)?;
        Ok(Self::from_config(pattern, regex))
    }
    fn matches_regex(pattern: impl Into<String>) -> PatternError;
}

// ============================================================================
// EMAIL VALIDATOR
// ============================================================================

crate::validator! {
    /// Passes when the input looks like `local@domain.tld`.
    ///
    /// The top-level domain must be at least two ASCII letters. This is a
    /// format check only; nothing is resolved.
    pub Email for String;
    rule(input) { EMAIL_REGEX.is_match(input) }
    error { ValidationError::InvalidEmail }
    fn email();
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::SingleInputValidator;
    use rstest::rstest;

    #[test]
    fn test_regex() {
        let mut validator = matches_regex(r"\d{3}-\d{4}").unwrap();
        validator.set_input("123-4567".to_string());
        assert!(validator.check());

        validator.set_input("call 123-4567 now".to_string());
        assert!(!validator.check());
        assert_eq!(
            validator.error(),
            Some(&ValidationError::NoMatch {
                pattern: r"\d{3}-\d{4}".into()
            })
        );
    }

    #[rstest]
    #[case("a*", "", true)]
    #[case("a*", "aaaa", true)]
    #[case("a?", "aa", false)]
    #[case("a|b", "b", true)]
    #[case("a|b", "ab", false)]
    #[case("(?x) a+ # one or more a", "aaa", true)]
    #[case("(?x) a+ # one or more a", "aab", false)]
    #[case("(?m)a", "a\na", false)]
    fn test_regex_is_anchored(#[case] pattern: &str, #[case] input: &str, #[case] expected: bool) {
        let mut validator = MatchesRegex::with_input(input, pattern).unwrap();
        assert_eq!(validator.check(), expected);
    }

    #[test]
    fn test_invalid_regex_fails_construction() {
        assert!(matches_regex("(unclosed").is_err());
        assert!(MatchesRegex::with_input("x", "[").is_err());

        // Unbalanced groups must not escape the anchors.
        assert!(matches!(
            matches_regex("a)|(b"),
            Err(PatternError::Syntax(_))
        ));
        assert!(matches_regex(")").is_err());
    }

    #[rstest]
    #[case("user@example.com", true)]
    #[case("first.last+tag@sub.example.org", true)]
    #[case("invalid", false)]
    #[case("@example.com", false)]
    #[case("user@", false)]
    #[case("user@example.c", false)]
    #[case("user name@example.com", false)]
    #[case("", false)]
    fn test_email(#[case] input: &str, #[case] expected: bool) {
        let mut validator = Email::with_input(input);
        assert_eq!(validator.check(), expected);
        if !expected {
            assert_eq!(validator.error(), Some(&ValidationError::InvalidEmail));
        }
    }
}
