//! Core traits for the validation system
//!
//! This module defines the contracts every validator implements. A validator
//! owns its current input and the error of its last failed check; the
//! derived operations (`check_and_exec`, `try_check`) are written once here
//! in terms of the required ones.

use crate::foundation::ValidationError;

// ============================================================================
// SINGLE INPUT
// ============================================================================

/// A validator over one input value.
///
/// Lifecycle: construct with a configuration (and optionally an input),
/// call [`set_input`](Self::set_input) to supply or replace the value, then
/// [`check`](Self::check). A failed check stores the validator's error,
/// readable through [`error`](Self::error) until the next `set_input`.
///
/// A successful check leaves any previously stored error in place; only
/// `set_input` clears it.
///
/// # Examples
///
/// ```rust
/// use sieve_validator::prelude::*;
///
/// let mut validator = HasMinLength::new(3);
/// validator.set_input("hi".to_string());
/// assert!(!validator.check());
/// assert_eq!(validator.error(), Some(&ValidationError::TooShort { min: 3 }));
///
/// validator.set_input("hello".to_string());
/// assert!(validator.error().is_none());
/// assert!(validator.check());
/// ```
pub trait SingleInputValidator<T: PartialEq> {
    /// Returns the current input.
    fn input(&self) -> &T;

    /// Returns the stored error, if the last failed check left one.
    fn error(&self) -> Option<&ValidationError>;

    /// Replaces the input and clears the stored error.
    fn set_input(&mut self, input: T);

    /// Evaluates the predicate against the current input.
    ///
    /// Stores the error via [`save_error`](Self::save_error) on failure.
    /// Never clears a stored error on success.
    fn check(&mut self) -> bool;

    /// Unconditionally stores this validator's failure kind and returns it.
    fn save_error(&mut self) -> &ValidationError;

    /// Runs [`check`](Self::check) and dispatches to one of the callbacks.
    fn check_and_exec<S, F>(&mut self, on_success: S, on_fail: F)
    where
        Self: Sized,
        S: FnOnce(),
        F: FnOnce(),
    {
        if self.check() {
            on_success();
        } else {
            self.save_error();
            on_fail();
        }
    }

    /// Runs [`check`](Self::check) and turns a failure into `Err`.
    fn try_check(&mut self) -> Result<(), ValidationError> {
        if self.check() {
            Ok(())
        } else {
            Err(self.save_error().clone())
        }
    }
}

impl<T, V> SingleInputValidator<T> for Box<V>
where
    T: PartialEq,
    V: SingleInputValidator<T> + ?Sized,
{
    fn input(&self) -> &T {
        (**self).input()
    }

    fn error(&self) -> Option<&ValidationError> {
        (**self).error()
    }

    fn set_input(&mut self, input: T) {
        (**self).set_input(input);
    }

    fn check(&mut self) -> bool {
        (**self).check()
    }

    fn save_error(&mut self) -> &ValidationError {
        (**self).save_error()
    }

    fn try_check(&mut self) -> Result<(), ValidationError> {
        (**self).try_check()
    }
}

// ============================================================================
// MULTIPLE INPUTS
// ============================================================================

/// A validator over an ordered sequence of inputs.
///
/// Checks evaluate a relation across the whole sequence. Empty and
/// single-element sequences are vacuously valid.
pub trait MultiInputValidator<T: PartialEq> {
    /// Returns the current inputs.
    fn inputs(&self) -> &[T];

    /// Returns the stored error, if the last failed check left one.
    fn error(&self) -> Option<&ValidationError>;

    /// Replaces the whole input sequence and clears the stored error.
    fn set_inputs(&mut self, inputs: Vec<T>);

    /// Evaluates the relation across the current inputs.
    fn check(&mut self) -> bool;

    /// Unconditionally stores this validator's failure kind and returns it.
    fn save_error(&mut self) -> &ValidationError;

    /// Runs [`check`](Self::check) and dispatches to one of the callbacks.
    fn check_and_exec<S, F>(&mut self, on_success: S, on_fail: F)
    where
        Self: Sized,
        S: FnOnce(),
        F: FnOnce(),
    {
        if self.check() {
            on_success();
        } else {
            self.save_error();
            on_fail();
        }
    }

    /// Runs [`check`](Self::check) and turns a failure into `Err`.
    fn try_check(&mut self) -> Result<(), ValidationError> {
        if self.check() {
            Ok(())
        } else {
            Err(self.save_error().clone())
        }
    }
}

impl<T, V> MultiInputValidator<T> for Box<V>
where
    T: PartialEq,
    V: MultiInputValidator<T> + ?Sized,
{
    fn inputs(&self) -> &[T] {
        (**self).inputs()
    }

    fn error(&self) -> Option<&ValidationError> {
        (**self).error()
    }

    fn set_inputs(&mut self, inputs: Vec<T>) {
        (**self).set_inputs(inputs);
    }

    fn check(&mut self) -> bool {
        (**self).check()
    }

    fn save_error(&mut self) -> &ValidationError {
        (**self).save_error()
    }

    fn try_check(&mut self) -> Result<(), ValidationError> {
        (**self).try_check()
    }
}

// ============================================================================
// TESTS
// ============================================================================
