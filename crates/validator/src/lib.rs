//! # sieve-validator
//!
//! Declarative, stateful input validation: small validators that each own an
//! input and remember why it failed, and policies that run many validators
//! over many inputs and collect every failure.
//!
//! ## Quick Start
//!
//! ```rust
//! use sieve_validator::prelude::*;
//!
//! // One validator, one input
//! let mut validator = has_min_length(6);
//! validator.set_input("short".to_string());
//! assert!(!validator.check());
//! assert_eq!(
//!     validator.error().map(ReadableError::message).as_deref(),
//!     Some("The input is shorter than the required minimum length of 6.")
//! );
//!
//! // A ready-made password policy
//! let mut policy = medium_password("correct horse");
//! assert!(!policy.check());
//! for error in policy.errors() {
//!     println!("{}", error.message());
//! }
//! ```
//!
//! ## Creating Validators
//!
//! Use the [`validator!`] macro for zero-boilerplate validators, or
//! implement [`SingleInputValidator`](foundation::SingleInputValidator) /
//! [`MultiInputValidator`](foundation::MultiInputValidator) by hand.
//!
//! ## Built-in Validators
//!
//! - **Length**: [`HasMinLength`](validators::HasMinLength), [`HasMaxLength`](validators::HasMaxLength)
//! - **Pattern**: [`Contains`](validators::Contains), [`NotContainsAnyOf`](validators::NotContainsAnyOf),
//!   [`IsAllLetters`](validators::IsAllLetters)
//! - **Content**: [`MatchesRegex`](validators::MatchesRegex), [`Email`](validators::Email)
//! - **Class**: [`ContainsNDigits`](validators::ContainsNDigits),
//!   [`ContainsNSpecialChars`](validators::ContainsNSpecialChars) and friends
//! - **Multi-input**: [`AllSameLength`](validators::AllSameLength),
//!   [`AllSameValue`](validators::AllSameValue)
//!
//! ## Policies
//!
//! [`SingleInputPolicy`](policy::SingleInputPolicy) and
//! [`MultiInputPolicy`](policy::MultiInputPolicy) aggregate validators; the
//! [`presets`](policy::presets) module and
//! [`PasswordRequirements`](config::PasswordRequirements) build common
//! password policies.
//!
//! ## Logging
//!
//! Policy runs emit [`tracing`] events (`debug` per run, `trace` per
//! failure). The crate never installs a subscriber.

pub mod config;
pub mod foundation;
mod macros;
pub mod policy;
pub mod prelude;
pub mod validators;
