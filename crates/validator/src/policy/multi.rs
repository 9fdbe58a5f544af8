//! Policy over single-input and multi-input validators

use std::fmt;

use crate::foundation::{
    MultiInputValidator, SingleInputValidator, ValidationError, ValidationErrors,
};
use crate::policy::{Policy, run_single};

/// Applies single-input validators to every input, then multi-input
/// validators to the whole input list.
///
/// # Examples
///
/// ```rust
/// use sieve_validator::prelude::*;
///
/// let mut policy = MultiInputPolicy::default()
///     .with_input("secret1".to_string())
///     .with_input("secret2".to_string())
///     .with_validator(has_min_length(6))
///     .with_multi_validator(AllSameValue::new());
///
/// assert!(!policy.check());
/// assert_eq!(policy.errors(), [ValidationError::ValueMismatch]);
/// ```
pub struct MultiInputPolicy<T> {
    inputs: Vec<T>,
    validators: Vec<Box<dyn SingleInputValidator<T>>>,
    multi_validators: Vec<Box<dyn MultiInputValidator<T>>>,
    errors: ValidationErrors,
}

impl<T> Default for MultiInputPolicy<T> {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            validators: Vec::new(),
            multi_validators: Vec::new(),
            errors: ValidationErrors::new(),
        }
    }
}

impl<T: PartialEq + Clone> MultiInputPolicy<T> {
    /// Creates a policy from inputs and both kinds of validators.
    #[must_use]
    pub fn new(
        inputs: Vec<T>,
        validators: Vec<Box<dyn SingleInputValidator<T>>>,
        multi_validators: Vec<Box<dyn MultiInputValidator<T>>>,
    ) -> Self {
        Self {
            inputs,
            validators,
            multi_validators,
            errors: ValidationErrors::new(),
        }
    }

    /// Appends an input.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_input(mut self, input: T) -> Self {
        self.inputs.push(input);
        self
    }

    /// Appends a single-input validator.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_validator<V>(mut self, validator: V) -> Self
    where
        V: SingleInputValidator<T> + 'static,
    {
        self.validators.push(Box::new(validator));
        self
    }

    /// Appends a multi-input validator.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_multi_validator<V>(mut self, validator: V) -> Self
    where
        V: MultiInputValidator<T> + 'static,
    {
        self.multi_validators.push(Box::new(validator));
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

impl<T: PartialEq + Clone> Policy for MultiInputPolicy<T> {
    fn check(&mut self) -> bool {
        self.errors.clear();
        tracing::debug!(
            inputs = self.inputs.len(),
            validators = self.validators.len(),
            multi_validators = self.multi_validators.len(),
            "Checking multi-input policy"
        );

        run_single(&mut self.validators, &self.inputs, &mut self.errors);

        for (validator_index, validator) in self.multi_validators.iter_mut().enumerate() {
            validator.set_inputs(self.inputs.clone());
            if validator.check() {
                continue;
            }
            let error = validator
                .error()
                .cloned()
                .unwrap_or_else(|| validator.save_error().clone());
            tracing::trace!(code = error.code(), validator_index, "Multi-input validator failed");
            self.errors.add(error);
        }

        let passed = self.errors.is_empty();
        tracing::debug!(passed, errors = self.errors.len(), "Multi-input policy checked");
        passed
    }

    fn errors(&self) -> &[ValidationError] {
        self.errors.errors()
    }
}

impl<T> fmt::Debug for MultiInputPolicy<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiInputPolicy")
            .field("inputs", &self.inputs)
            .field("validators", &self.validators.len())
            .field("multi_validators", &self.multi_validators.len())
            .field("errors", &self.errors)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::{AllSameLength, AllSameValue, has_min_length};

    #[test]
    fn test_single_errors_come_before_multi_errors() {
        let mut policy = MultiInputPolicy::default()
            .with_input("a".to_string())
            .with_input("bcd".to_string())
            .with_validator(has_min_length(2))
            .with_multi_validator(AllSameLength::new());

        assert!(!policy.check());
        assert_eq!(
            policy.errors(),
            [
                ValidationError::TooShort { min: 2 },
                ValidationError::LengthMismatch,
            ]
        );
    }

    #[test]
    fn test_matching_confirmation() {
        let mut policy = MultiInputPolicy::new(
            vec!["Passw0rd!".to_string(), "Passw0rd!".to_string()],
            Vec::new(),
            vec![Box::new(AllSameValue::<String>::new())],
        );
        assert!(policy.check());

        policy.set_inputs(vec!["Passw0rd!".to_string(), "passw0rd!".to_string()]);
        assert!(!policy.check());
        assert_eq!(policy.error(), Some(&ValidationError::ValueMismatch));
    }

    #[test]
    fn test_empty_and_single_inputs_pass_multi_validators() {
        let mut policy = MultiInputPolicy::<String>::default()
            .with_multi_validator(AllSameLength::new())
            .with_multi_validator(AllSameValue::new());
        assert!(policy.check());

        policy.set_inputs(vec!["solo".to_string()]);
        assert_eq!(policy.inputs().len(), 1);
        assert!(policy.check());
    }

    #[test]
    fn test_repeated_check_is_idempotent() {
        let mut policy = MultiInputPolicy::default()
            .with_input(1_u32)
            .with_input(2_u32)
            .with_multi_validator(AllSameValue::new());
        assert!(!policy.check());
        assert!(!policy.check());
        assert_eq!(policy.into_errors().len(), 1);
    }
}
