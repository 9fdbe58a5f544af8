//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation system:
//!
//! - **Traits**: [`SingleInputValidator`], [`MultiInputValidator`], [`ReadableError`]
//! - **Errors**: [`ValidationError`], [`ValidationErrors`]
//! - **Classification**: [`CharClass`]
//!
//! # Stateful validators
//!
//! Unlike stateless predicate libraries, every validator here owns the value
//! it checks and remembers why its last check failed:
//!
//! ```rust
//! use sieve_validator::prelude::*;
//!
//! let mut validator = Contains::with_input("hello", "ll");
//! assert!(validator.check());
//!
//! validator.set_input("world".to_string());
//! assert!(!validator.check());
//! assert_eq!(
//!     validator.error().map(ReadableError::message).as_deref(),
//!     Some("The input must contain \"ll\".")
//! );
//! ```

pub mod class;
pub mod error;
pub mod readable;
pub mod traits;

pub use class::CharClass;
pub use error::{ValidationError, ValidationErrors};
pub use readable::{ReadableError, message_of};
pub use traits::{MultiInputValidator, SingleInputValidator};
