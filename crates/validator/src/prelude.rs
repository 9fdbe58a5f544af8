//! Prelude module for convenient imports.
//!
//! Provides a single `use sieve_validator::prelude::*;` import that brings
//! in the validator and policy traits, error types, every built-in
//! validator, policies and presets.
//!
//! # Examples
//!
//! ```rust
//! use sieve_validator::prelude::*;
//!
//! let mut policy = SingleInputPolicy::default()
//!     .with_input("user@example.com".to_string())
//!     .with_validator(email())
//!     .with_validator(has_max_length(64));
//! assert!(policy.check());
//! ```

// ============================================================================
// FOUNDATION: Core traits and errors
// ============================================================================

pub use crate::foundation::{
    CharClass, MultiInputValidator, ReadableError, SingleInputValidator, ValidationError,
    ValidationErrors,
};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

// ============================================================================
// POLICIES AND CONFIGURATION
// ============================================================================

pub use crate::config::{ConfigError, PasswordRequirements};
pub use crate::policy::{
    MultiInputPolicy, Policy, SingleInputPolicy, hard_password, medium_password, simple_password,
};
