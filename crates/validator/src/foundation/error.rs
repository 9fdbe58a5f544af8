//! Error types for validation failures
//!
//! Every validator reports exactly one failure kind, optionally carrying the
//! parameter it was checking against (a substring, a pattern, a threshold).
//! Policies accumulate these into a [`ValidationErrors`] collection.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::foundation::CharClass;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A single validation failure.
///
/// The `Display` output is the human-readable message; [`code`](Self::code)
/// is a stable identifier for programmatic handling.
///
/// # Examples
///
/// ```rust
/// use sieve_validator::foundation::ValidationError;
///
/// let error = ValidationError::DoesNotContain { substr: "@".into() };
/// assert_eq!(error.code(), "does_not_contain");
/// assert_eq!(error.param(), Some("@"));
/// assert_eq!(error.to_string(), "The input must contain \"@\".");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "code", rename_all = "snake_case")]
#[non_exhaustive]
pub enum ValidationError {
    /// Input is shorter than the configured minimum.
    #[error("The input is shorter than the required minimum length of {min}.")]
    TooShort {
        /// Minimum accepted length.
        min: i64,
    },

    /// Input is longer than the configured maximum.
    #[error("The input is longer than the allowed maximum length of {max}.")]
    TooLong {
        /// Maximum accepted length.
        max: i64,
    },

    /// Input lacks a required substring.
    #[error("The input must contain \"{substr}\".")]
    DoesNotContain {
        /// The substring that was expected.
        substr: String,
    },

    /// Input contains an item from a forbidden list.
    #[error("The input must not contain \"{item}\".")]
    ContainsForbidden {
        /// The first forbidden item found in the input.
        item: String,
    },

    /// Input does not match a regular expression as a whole.
    #[error("The input does not match the required pattern: {pattern}")]
    NoMatch {
        /// The pattern as supplied by the caller (without anchors).
        pattern: String,
    },

    /// Input is not an e-mail address.
    #[error("The input is not a valid email address.")]
    InvalidEmail,

    /// Input contains something other than letters.
    #[error("The input must contain only letters.")]
    NotAllLetters,

    /// Input contains no letter at all.
    #[error("The input must contain at least one letter.")]
    NoLetter,

    /// Input contains no digit at all.
    #[error("The input must contain at least one digit.")]
    NoDigit,

    /// Input has fewer characters of a class than required.
    #[error("The input must contain at least {required} {class} character(s).")]
    NotEnoughOfClass {
        /// The character class being counted.
        class: CharClass,
        /// Required count.
        required: i64,
    },

    /// Inputs of a multi-input check differ in length.
    #[error("All inputs must have the same length.")]
    LengthMismatch,

    /// Inputs of a multi-input check differ in value.
    #[error("All inputs must have the same value.")]
    ValueMismatch,
}

impl ValidationError {
    /// Returns the stable snake-case code of this failure kind.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::TooShort { .. } => "too_short",
            Self::TooLong { .. } => "too_long",
            Self::DoesNotContain { .. } => "does_not_contain",
            Self::ContainsForbidden { .. } => "contains_forbidden",
            Self::NoMatch { .. } => "no_match",
            Self::InvalidEmail => "invalid_email",
            Self::NotAllLetters => "not_all_letters",
            Self::NoLetter => "no_letter",
            Self::NoDigit => "no_digit",
            Self::NotEnoughOfClass { .. } => "not_enough_of_class",
            Self::LengthMismatch => "length_mismatch",
            Self::ValueMismatch => "value_mismatch",
        }
    }

    /// Returns the string parameter carried by this error, if any.
    #[must_use]
    pub fn param(&self) -> Option<&str> {
        match self {
            Self::DoesNotContain { substr } => Some(substr.as_str()),
            Self::ContainsForbidden { item } => Some(item.as_str()),
            Self::NoMatch { pattern } => Some(pattern.as_str()),
            _ => None,
        }
    }
}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// An ordered collection of validation errors.
///
/// Policies append to it in validator-then-input order, so the first entry
/// is always the earliest failure of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates a new empty error collection.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Adds an error to the collection.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Adds multiple errors to the collection.
    pub fn extend(&mut self, errors: impl IntoIterator<Item = ValidationError>) {
        self.errors.extend(errors);
    }

    /// Removes every error.
    pub fn clear(&mut self) {
        self.errors.clear();
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the first error, if any.
    #[must_use]
    pub fn first(&self) -> Option<&ValidationError> {
        self.errors.first()
    }

    /// Returns all errors.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Iterates over the errors in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    /// Converts to a Result.
    #[must_use = "result must be used"]
    pub fn into_result<T>(self, ok_value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(ok_value)
        } else {
            Err(self)
        }
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.errors.len())?;
        for (i, error) in self.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_codes_are_snake_case() {
        assert_eq!(ValidationError::TooShort { min: 3 }.code(), "too_short");
        assert_eq!(ValidationError::LengthMismatch.code(), "length_mismatch");
        assert_eq!(
            ValidationError::NotEnoughOfClass {
                class: CharClass::Special,
                required: 1
            }
            .code(),
            "not_enough_of_class"
        );
    }

    #[test]
    fn test_param_only_for_string_payloads() {
        let error = ValidationError::NoMatch {
            pattern: "a+".into(),
        };
        assert_eq!(error.param(), Some("a+"));
        assert_eq!(ValidationError::TooLong { max: 5 }.param(), None);
        assert_eq!(ValidationError::NoDigit.param(), None);
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            ValidationError::NotEnoughOfClass {
                class: CharClass::Uppercase,
                required: 2
            }
            .to_string(),
            "The input must contain at least 2 uppercase character(s)."
        );
        assert_eq!(
            ValidationError::NoMatch {
                pattern: "[0-9]+".into()
            }
            .to_string(),
            "The input does not match the required pattern: [0-9]+"
        );
    }

    #[test]
    fn test_error_collection() {
        let mut errors = ValidationErrors::new();
        assert!(errors.first().is_none());

        errors.add(ValidationError::NoLetter);
        errors.add(ValidationError::NoDigit);

        assert_eq!(errors.len(), 2);
        assert!(errors.has_errors());
        assert_eq!(errors.first(), Some(&ValidationError::NoLetter));

        errors.clear();
        assert!(errors.is_empty());
    }

    #[test]
    fn test_extend_keeps_insertion_order() {
        let mut errors: ValidationErrors = std::iter::once(ValidationError::NoLetter).collect();
        errors.extend([ValidationError::NoDigit, ValidationError::LengthMismatch]);

        let codes: Vec<&str> = errors.iter().map(ValidationError::code).collect();
        assert_eq!(codes, ["no_letter", "no_digit", "length_mismatch"]);
    }

    #[test]
    fn test_collection_display_lists_every_error() {
        let errors: ValidationErrors = [ValidationError::NoLetter, ValidationError::NoDigit]
            .into_iter()
            .collect();
        let rendered = errors.to_string();

        assert!(rendered.starts_with("Validation failed with 2 error(s):"));
        assert!(rendered.contains("1. The input must contain at least one letter."));
        assert!(rendered.contains("2. The input must contain at least one digit."));
    }

    #[test]
    fn test_into_result() {
        assert_eq!(ValidationErrors::new().into_result(7), Ok(7));

        let errors: ValidationErrors = std::iter::once(ValidationError::InvalidEmail).collect();
        assert!(errors.into_result(()).is_err());
    }

    #[test]
    fn test_serializes_with_code_tag() {
        let value = serde_json::to_value(ValidationError::DoesNotContain {
            substr: "ll".into(),
        })
        .unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "code": "does_not_contain", "substr": "ll" })
        );

        let value = serde_json::to_value(ValidationError::NotEnoughOfClass {
            class: CharClass::Digit,
            required: 3,
        })
        .unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "code": "not_enough_of_class", "class": "digit", "required": 3 })
        );
    }
}
