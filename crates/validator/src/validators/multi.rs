//! Multi-input validators
//!
//! Relations that hold across a whole sequence of inputs. Every relation is
//! measured against the first element, so empty and single-element
//! sequences always pass.

use unicode_segmentation::UnicodeSegmentation;

use crate::foundation::{MultiInputValidator, ValidationError};

// ============================================================================
// SAME LENGTH
// ============================================================================

/// Passes when every input has the same length as the first one.
///
/// Length is counted in grapheme clusters, like the default mode of
/// [`HasMinLength`](crate::validators::HasMinLength).
///
/// # Examples
///
/// ```rust
/// use sieve_validator::prelude::*;
///
/// let mut validator = AllSameLength::with_inputs(["abc", "xyz"]);
/// assert!(validator.check());
///
/// validator.set_inputs(vec!["a".into(), "bb".into()]);
/// assert!(!validator.check());
/// assert_eq!(validator.error(), Some(&ValidationError::LengthMismatch));
/// ```
#[derive(Debug, Clone, Default)]
pub struct AllSameLength {
    inputs: Vec<String>,
    error: Option<ValidationError>,
}

impl AllSameLength {
    /// Creates the validator with no inputs.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the validator with an initial input sequence.
    #[must_use]
    pub fn with_inputs(inputs: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            error: None,
        }
    }
}

impl MultiInputValidator<String> for AllSameLength {
    fn inputs(&self) -> &[String] {
        &self.inputs
    }

    fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    fn set_inputs(&mut self, inputs: Vec<String>) {
        self.inputs = inputs;
        self.error = None;
    }

    fn check(&mut self) -> bool {
        let mut lengths = self.inputs.iter().map(|s| s.graphemes(true).count());
        let passed = match lengths.next() {
            Some(first) => lengths.all(|len| len == first),
            None => true,
        };
        if !passed {
            self.save_error();
        }
        passed
    }

    fn save_error(&mut self) -> &ValidationError {
        self.error.insert(ValidationError::LengthMismatch)
    }
}

/// Creates an [`AllSameLength`] validator with no inputs.
#[must_use]
pub fn all_same_length() -> AllSameLength {
    AllSameLength::new()
}

// ============================================================================
// SAME VALUE
// ============================================================================

/// Passes when every input equals the first one.
///
/// Comparison is plain `==`, so for strings it is case-sensitive.
#[derive(Debug, Clone)]
pub struct AllSameValue<T> {
    inputs: Vec<T>,
    error: Option<ValidationError>,
}

impl<T> Default for AllSameValue<T> {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            error: None,
        }
    }
}

impl<T: PartialEq + Clone> AllSameValue<T> {
    /// Creates the validator with no inputs.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the validator with an initial input sequence.
    #[must_use]
    pub fn with_inputs(inputs: impl IntoIterator<Item = T>) -> Self {
        Self {
            inputs: inputs.into_iter().collect(),
            error: None,
        }
    }
}

impl<T: PartialEq + Clone> MultiInputValidator<T> for AllSameValue<T> {
    fn inputs(&self) -> &[T] {
        &self.inputs
    }

    fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    fn set_inputs(&mut self, inputs: Vec<T>) {
        self.inputs = inputs;
        self.error = None;
    }

    fn check(&mut self) -> bool {
        let passed = match self.inputs.split_first() {
            Some((first, rest)) => rest.iter().all(|value| value == first),
            None => true,
        };
        if !passed {
            self.save_error();
        }
        passed
    }

    fn save_error(&mut self) -> &ValidationError {
        self.error.insert(ValidationError::ValueMismatch)
    }
}

/// Creates an [`AllSameValue`] validator with no inputs.
#[must_use]
pub fn all_same_value<T: PartialEq + Clone>() -> AllSameValue<T> {
    AllSameValue::new()
}
