//! String length validators
//!
//! This module provides validators for checking string length constraints.
//! By default, length is measured in user-perceived characters (extended
//! grapheme clusters), so an emoji or a letter with a combining accent counts
//! as one. Use the `.chars()` or `.bytes()` constructors for the cheaper
//! scalar-value and byte counts.
//!
//! Thresholds are signed: a negative minimum accepts everything and a
//! negative maximum accepts nothing.

use unicode_segmentation::UnicodeSegmentation;

use crate::foundation::ValidationError;

// ============================================================================
// LENGTH MODE
// ============================================================================

/// How to count string length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthMode {
    /// Count bytes (fastest, ASCII-only correct).
    Bytes,
    /// Count Unicode scalar values.
    Chars,
    /// Count extended grapheme clusters (what a reader sees as characters).
    #[default]
    Graphemes,
}

impl LengthMode {
    /// Measures the length of a string according to this mode.
    #[inline]
    #[must_use]
    pub fn measure(self, input: &str) -> usize {
        match self {
            LengthMode::Bytes => input.len(),
            LengthMode::Chars => input.chars().count(),
            LengthMode::Graphemes => input.graphemes(true).count(),
        }
    }
}

/// Returns true if `count >= min`, for any signed `min`.
#[inline]
pub(crate) fn at_least(count: usize, min: i64) -> bool {
    i64::try_from(count).ok().is_none_or(|count| count >= min)
}

/// Returns true if `count <= max`, for any signed `max`.
#[inline]
pub(crate) fn at_most(count: usize, max: i64) -> bool {
    i64::try_from(count).is_ok_and(|count| count <= max)
}

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::validator! {
    /// Passes when the input is at least `min_len` characters long.
    pub HasMinLength { min_len: i64, mode: LengthMode } for String;
    rule(self, input) { at_least(self.mode.measure(input), self.min_len) }
    error(self) { ValidationError::TooShort { min: self.min_len } }
    new(min_len: i64) { Self::from_config(min_len, LengthMode::Graphemes) }
    fn has_min_length(min_len: i64);
}

impl HasMinLength {
    /// Creates a minimum length validator that counts Unicode scalar values.
    #[must_use]
    pub fn chars(min_len: i64) -> Self {
        Self::from_config(min_len, LengthMode::Chars)
    }

    /// Creates a minimum length validator that counts bytes.
    #[must_use]
    pub fn bytes(min_len: i64) -> Self {
        Self::from_config(min_len, LengthMode::Bytes)
    }
}

// ============================================================================
// MAX LENGTH
// ============================================================================

crate::validator! {
    /// Passes when the input is at most `max_len` characters long.
    pub HasMaxLength { max_len: i64, mode: LengthMode } for String;
    rule(self, input) { at_most(self.mode.measure(input), self.max_len) }
    error(self) { ValidationError::TooLong { max: self.max_len } }
    new(max_len: i64) { Self::from_config(max_len, LengthMode::Graphemes) }
    fn has_max_length(max_len: i64);
}

impl HasMaxLength {
    /// Creates a maximum length validator that counts Unicode scalar values.
    #[must_use]
    pub fn chars(max_len: i64) -> Self {
        Self::from_config(max_len, LengthMode::Chars)
    }

    /// Creates a maximum length validator that counts bytes.
    #[must_use]
    pub fn bytes(max_len: i64) -> Self {
        Self::from_config(max_len, LengthMode::Bytes)
    }
}

// ============================================================================
// TESTS
// ============================================================================
