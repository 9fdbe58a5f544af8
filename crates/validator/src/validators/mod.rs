//! Built-in validators
//!
//! Ready-to-use validators for password and form-style string checks.
//!
//! # Categories
//!
//! - **Length**: minimum and maximum length in graphemes, chars or bytes
//! - **Pattern**: substring containment, forbidden items, letters only
//! - **Content**: whole-input regular expressions, email format
//! - **Class**: presence and counts of letters, digits, cases, specials
//! - **Multi**: relations across several inputs (same length, same value)
//!
//! # Examples
//!
//! ```rust
//! use sieve_validator::prelude::*;
//!
//! let mut length = has_min_length(8);
//! length.set_input("hunter2".to_string());
//! assert!(!length.check());
//!
//! let mut digits = contains_n_digits(2);
//! digits.set_input("r2d2".to_string());
//! assert!(digits.check());
//! ```

pub mod class;
pub mod content;
pub mod length;
pub mod multi;
pub mod pattern;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use class::{
    ContainsAtLeastOneDigit, ContainsAtLeastOneLetter, ContainsNDigits, ContainsNLower,
    ContainsNSpecialChars, ContainsNUpper, contains_digit, contains_letter, contains_n_digits,
    contains_n_lower, contains_n_special, contains_n_upper,
};
pub use content::{Email, MatchesRegex, PatternError, email, matches_regex};
pub use length::{HasMaxLength, HasMinLength, LengthMode, has_max_length, has_min_length};
pub use multi::{AllSameLength, AllSameValue, all_same_length, all_same_value};
pub use pattern::{
    Contains, IsAllLetters, NotContainsAnyOf, contains, is_all_letters, not_contains_any_of,
};
