//! Policies: run many validators over many inputs and collect every failure
//!
//! A policy owns a list of inputs and a list of boxed validators. Each
//! [`check`](Policy::check) starts from a clean slate, feeds every input to
//! every single-input validator (validator-major order), and records one
//! error per failing pair. [`MultiInputPolicy`] additionally hands the whole
//! input list to each multi-input validator.
//!
//! # Examples
//!
//! ```rust
//! use sieve_validator::prelude::*;
//!
//! let mut policy = SingleInputPolicy::new(
//!     vec!["hello".to_string(), "world".to_string(), "test".to_string()],
//!     vec![Box::new(contains("ll")) as Box<dyn SingleInputValidator<String>>],
//! );
//!
//! assert!(!policy.check());
//! assert_eq!(policy.errors().len(), 2);
//! ```

pub mod multi;
pub mod presets;
pub mod single;

pub use multi::MultiInputPolicy;
pub use presets::{hard_password, medium_password, simple_password};
pub use single::SingleInputPolicy;

use crate::foundation::{SingleInputValidator, ValidationError, ValidationErrors};

// ============================================================================
// POLICY TRAIT
// ============================================================================

/// Behavior shared by every policy.
///
/// Implementors provide [`check`](Self::check) and [`errors`](Self::errors);
/// everything else is derived from those two.
pub trait Policy {
    /// Runs every validator and returns true when no error was recorded.
    ///
    /// Errors from a previous run are discarded first, so calling this
    /// repeatedly on unchanged state gives the same result.
    fn check(&mut self) -> bool;

    /// Returns the errors recorded by the last [`check`](Self::check).
    fn errors(&self) -> &[ValidationError];

    /// Returns the first recorded error, or `None` when there is none.
    fn error(&self) -> Option<&ValidationError> {
        self.errors().first()
    }

    /// Returns true when the last run recorded no errors.
    ///
    /// A policy that was never checked is valid.
    fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }

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
            on_fail();
        }
    }

    /// Runs [`check`](Self::check) and returns the first error as `Err`.
    fn try_check(&mut self) -> Result<(), ValidationError> {
        if self.check() {
            return Ok(());
        }
        // A failed run always records at least one error.
        match self.error() {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

// ============================================================================
// SHARED EVALUATION
// ============================================================================

/// Feeds every input to every validator, appending one error per failure.
pub(crate) fn run_single<T>(
    validators: &mut [Box<dyn SingleInputValidator<T>>],
    inputs: &[T],
    errors: &mut ValidationErrors,
) where
    T: PartialEq + Clone,
{
    for (validator_index, validator) in validators.iter_mut().enumerate() {
        for (input_index, input) in inputs.iter().enumerate() {
            validator.set_input(input.clone());
            if validator.check() {
                continue;
            }
            let error = validator
                .error()
                .cloned()
                .unwrap_or_else(|| validator.save_error().clone());
            tracing::trace!(
                code = error.code(),
                validator_index,
                input_index,
                "Validator rejected input"
            );
            errors.add(error);
        }
    }
}
