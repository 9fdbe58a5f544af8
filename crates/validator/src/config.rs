//! Password requirement configuration
//!
//! [`PasswordRequirements`] describes a password policy as plain data. It can
//! be built in code, started from one of the presets, or loaded from JSON,
//! and is turned into a [`SingleInputPolicy`] with
//! [`policy`](PasswordRequirements::policy).
//!
//! ```rust
//! use sieve_validator::prelude::*;
//!
//! let requirements = PasswordRequirements::from_json(
//!     r#"{ "min_length": 10, "min_digits": 2, "forbidden": ["password"] }"#,
//! )
//! .unwrap();
//!
//! let mut policy = requirements.policy(vec!["my password 12".to_string()]);
//! assert!(!policy.check());
//! assert_eq!(policy.errors().len(), 1);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::foundation::SingleInputValidator;
use crate::policy::SingleInputPolicy;
use crate::validators::{
    ContainsAtLeastOneDigit, ContainsAtLeastOneLetter, ContainsNDigits, ContainsNLower,
    ContainsNSpecialChars, ContainsNUpper, HasMaxLength, HasMinLength, NotContainsAnyOf,
};

/// Errors raised while loading requirements.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The document is not valid JSON or has unknown fields.
    #[error("invalid password requirements: {0}")]
    Json(#[from] serde_json::Error),

    /// The minimum length exceeds the maximum length.
    #[error("minimum length {min} is greater than maximum length {max}")]
    InvalidRange {
        /// Configured minimum length.
        min: i64,
        /// Configured maximum length.
        max: i64,
    },
}

// ============================================================================
// REQUIREMENTS
// ============================================================================

/// Declarative password requirements.
///
/// Unset options add no validator. The default value requires nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PasswordRequirements {
    /// Minimum length in characters.
    pub min_length: Option<i64>,
    /// Maximum length in characters.
    pub max_length: Option<i64>,
    /// Require at least one letter.
    pub require_letter: bool,
    /// Require at least one digit.
    pub require_digit: bool,
    /// Minimum number of digits.
    pub min_digits: Option<i64>,
    /// Minimum number of lowercase letters.
    pub min_lowercase: Option<i64>,
    /// Minimum number of uppercase letters.
    pub min_uppercase: Option<i64>,
    /// Minimum number of special characters.
    pub min_special: Option<i64>,
    /// Substrings the password must not contain.
    pub forbidden: Vec<String>,
}

impl PasswordRequirements {
    /// Requirements with nothing enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// 6 to 50 characters with at least one letter and one digit.
    #[must_use]
    pub fn simple() -> Self {
        Self::new()
            .min_length(6)
            .max_length(50)
            .require_letter()
            .require_digit()
    }

    /// At least 8 characters, a digit and a special character, no spaces.
    #[must_use]
    pub fn medium() -> Self {
        Self::new()
            .min_length(8)
            .require_digit()
            .min_special(1)
            .forbid(" ")
    }

    /// At least 12 characters with 3 digits, 2 lowercase, 2 uppercase and a
    /// special character, no spaces.
    #[must_use]
    pub fn hard() -> Self {
        Self::new()
            .min_length(12)
            .min_digits(3)
            .min_lowercase(2)
            .min_uppercase(2)
            .min_special(1)
            .forbid(" ")
    }

    /// Parses requirements from JSON and validates them.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed documents or unknown
    /// fields, and [`ConfigError::InvalidRange`] when the length bounds are
    /// inverted.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let requirements: Self = serde_json::from_str(json)?;
        requirements.validate()?;
        Ok(requirements)
    }

    /// Serializes the requirements to JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Checks that the requirements are satisfiable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidRange`] when `min_length > max_length`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match (self.min_length, self.max_length) {
            (Some(min), Some(max)) if min > max => Err(ConfigError::InvalidRange { min, max }),
            _ => Ok(()),
        }
    }

    // ===== Builders =====

    /// Sets the minimum length.
    #[must_use = "builder methods must be chained or built"]
    pub fn min_length(mut self, min: i64) -> Self {
        self.min_length = Some(min);
        self
    }

    /// Sets the maximum length.
    #[must_use = "builder methods must be chained or built"]
    pub fn max_length(mut self, max: i64) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Requires at least one letter.
    #[must_use = "builder methods must be chained or built"]
    pub fn require_letter(mut self) -> Self {
        self.require_letter = true;
        self
    }

    /// Requires at least one digit.
    #[must_use = "builder methods must be chained or built"]
    pub fn require_digit(mut self) -> Self {
        self.require_digit = true;
        self
    }

    /// Sets the minimum number of digits.
    #[must_use = "builder methods must be chained or built"]
    pub fn min_digits(mut self, n: i64) -> Self {
        self.min_digits = Some(n);
        self
    }

    /// Sets the minimum number of lowercase letters.
    #[must_use = "builder methods must be chained or built"]
    pub fn min_lowercase(mut self, n: i64) -> Self {
        self.min_lowercase = Some(n);
        self
    }

    /// Sets the minimum number of uppercase letters.
    #[must_use = "builder methods must be chained or built"]
    pub fn min_uppercase(mut self, n: i64) -> Self {
        self.min_uppercase = Some(n);
        self
    }

    /// Sets the minimum number of special characters.
    #[must_use = "builder methods must be chained or built"]
    pub fn min_special(mut self, n: i64) -> Self {
        self.min_special = Some(n);
        self
    }

    /// Adds a forbidden substring.
    #[must_use = "builder methods must be chained or built"]
    pub fn forbid(mut self, item: impl Into<String>) -> Self {
        self.forbidden.push(item.into());
        self
    }

    // ===== Conversion =====

    /// Builds the validators these requirements describe.
    ///
    /// Order is fixed: minimum length, maximum length, letter, digit, digit
    /// count, lowercase count, uppercase count, special count, forbidden
    /// items.
    #[must_use]
    pub fn validators(&self) -> Vec<Box<dyn SingleInputValidator<String>>> {
        let mut validators: Vec<Box<dyn SingleInputValidator<String>>> = Vec::new();

        if let Some(min) = self.min_length {
            validators.push(Box::new(HasMinLength::new(min)));
        }
        if let Some(max) = self.max_length {
            validators.push(Box::new(HasMaxLength::new(max)));
        }
        if self.require_letter {
            validators.push(Box::new(ContainsAtLeastOneLetter::new()));
        }
        if self.require_digit {
            validators.push(Box::new(ContainsAtLeastOneDigit::new()));
        }
        if let Some(n) = self.min_digits {
            validators.push(Box::new(ContainsNDigits::new(n)));
        }
        if let Some(n) = self.min_lowercase {
            validators.push(Box::new(ContainsNLower::new(n)));
        }
        if let Some(n) = self.min_uppercase {
            validators.push(Box::new(ContainsNUpper::new(n)));
        }
        if let Some(n) = self.min_special {
            validators.push(Box::new(ContainsNSpecialChars::new(n)));
        }
        if !self.forbidden.is_empty() {
            validators.push(Box::new(NotContainsAnyOf::new(self.forbidden.clone())));
        }

        validators
    }

    /// Builds a policy applying these requirements to `inputs`.
    #[must_use]
    pub fn policy(&self, inputs: Vec<String>) -> SingleInputPolicy<String> {
        let validators = self.validators();
        tracing::debug!(
            validators = validators.len(),
            inputs = inputs.len(),
            "Built password policy from requirements"
        );
        SingleInputPolicy::new(inputs, validators)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::Policy;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_requires_nothing() {
        let requirements = PasswordRequirements::default();
        assert!(requirements.validators().is_empty());
        assert!(requirements.policy(vec![String::new()]).check());
    }

    #[test]
    fn test_preset_validator_counts() {
        assert_eq!(PasswordRequirements::simple().validators().len(), 4);
        assert_eq!(PasswordRequirements::medium().validators().len(), 4);
        assert_eq!(PasswordRequirements::hard().validators().len(), 6);
    }

    #[test]
    fn test_from_json_partial_document() {
        let requirements =
            PasswordRequirements::from_json(r#"{"min_length": 8, "require_digit": true}"#)
                .unwrap();
        assert_eq!(
            requirements,
            PasswordRequirements::new().min_length(8).require_digit()
        );
    }

    #[test]
    fn test_from_json_rejects_unknown_fields() {
        let err = PasswordRequirements::from_json(r#"{"min_len": 8}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_from_json_rejects_inverted_range() {
        let err = PasswordRequirements::from_json(r#"{"min_length": 10, "max_length": 5}"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRange { min: 10, max: 5 }));
        assert_eq!(
            err.to_string(),
            "minimum length 10 is greater than maximum length 5"
        );
    }

    #[test]
    fn test_json_round_trip_of_preset() {
        let hard = PasswordRequirements::hard();
        let json = hard.to_json().unwrap();
        assert_eq!(PasswordRequirements::from_json(&json).unwrap(), hard);
    }

    #[test]
    fn test_policy_applies_to_every_input() {
        let mut policy = PasswordRequirements::new()
            .forbid("admin")
            .policy(vec!["admin1".to_string(), "guest".to_string(), "xadminx".to_string()]);
        assert!(!policy.check());
        assert_eq!(policy.errors().len(), 2);
    }
}
