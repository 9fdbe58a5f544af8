//! Policy over single-input validators

use std::fmt;

use crate::foundation::{SingleInputValidator, ValidationError, ValidationErrors};
use crate::policy::{Policy, run_single};

/// Applies every single-input validator to every input.
///
/// # Examples
///
/// ```rust
/// use sieve_validator::prelude::*;
///
/// let mut policy = SingleInputPolicy::default()
///     .with_input("a".to_string())
///     .with_input("bb".to_string())
///     .with_validator(has_min_length(3));
///
/// assert!(!policy.check());
/// assert_eq!(policy.errors().len(), 2);
/// assert_eq!(policy.error(), Some(&ValidationError::TooShort { min: 3 }));
/// ```
pub struct SingleInputPolicy<T> {
    inputs: Vec<T>,
    validators: Vec<Box<dyn SingleInputValidator<T>>>,
    errors: ValidationErrors,
}

impl<T> Default for SingleInputPolicy<T> {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            validators: Vec::new(),
            errors: ValidationErrors::new(),
        }
    }
}

impl<T: PartialEq + Clone> SingleInputPolicy<T> {
    /// Creates a policy from inputs and validators.
    #[must_use]
    pub fn new(inputs: Vec<T>, validators: Vec<Box<dyn SingleInputValidator<T>>>) -> Self {
        Self {
            inputs,
            validators,
            errors: ValidationErrors::new(),
        }
    }

    /// Appends an input.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_input(mut self, input: T) -> Self {
        self.inputs.push(input);
        self
    }

    /// Appends a validator.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_validator<V>(mut self, validator: V) -> Self
    where
        V: SingleInputValidator<T> + 'static,
    {
        self.validators.push(Box::new(validator));
        self
    }

    /// Replaces the input list. Recorded errors stay until the next check.
    pub fn set_inputs(&mut self, inputs: Vec<T>) {
        self.inputs = inputs;
    }

    /// Returns the current inputs.
    #[must_use]
    pub fn inputs(&self) -> &[T] {
        &self.inputs
    }

    /// Consumes the policy and returns the recorded errors.
    #[must_use]
    pub fn into_errors(self) -> ValidationErrors {
        self.errors
    }
}

impl<T: PartialEq + Clone> Policy for SingleInputPolicy<T> {
    fn check(&mut self) -> bool {
        self.errors.clear();
        tracing::debug!(
            inputs = self.inputs.len(),
            validators = self.validators.len(),
            "Checking single-input policy"
        );

        run_single(&mut self.validators, &self.inputs, &mut self.errors);

        let passed = self.errors.is_empty();
        tracing::debug!(passed, errors = self.errors.len(), "Single-input policy checked");
        passed
    }

    fn errors(&self) -> &[ValidationError] {
        self.errors.errors()
    }
}

impl<T> fmt::Debug for SingleInputPolicy<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SingleInputPolicy")
            .field("inputs", &self.inputs)
            .field("validators", &self.validators.len())
            .field("errors", &self.errors)
            .finish()
    }
}
