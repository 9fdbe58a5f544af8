//! Character class validators
//!
//! Presence and minimum-count checks over [`CharClass`]. Counting is done
//! per grapheme cluster, see [`CharClass::matches`].
//!
//! Thresholds are signed; any `n <= 0` is trivially satisfied.

use crate::foundation::{CharClass, ValidationError};
use crate::validators::length::at_least;

// ============================================================================
// PRESENCE
// ============================================================================

crate::validator! {
    /// Passes when the input contains at least one letter.
    pub ContainsAtLeastOneLetter for String;
    rule(input) { CharClass::Letter.any(input) }
    error { ValidationError::NoLetter }
    fn contains_letter();
}

crate::validator! {
    /// Passes when the input contains at least one digit.
    pub ContainsAtLeastOneDigit for String;
    rule(input) { CharClass::Digit.any(input) }
    error { ValidationError::NoDigit }
    fn contains_digit();
}

// ============================================================================
// COUNTS
// ============================================================================

crate::validator! {
    /// Passes when the input has at least `n` lowercase letters.
    pub ContainsNLower { n: i64 } for String;
    rule(self, input) { at_least(CharClass::Lowercase.count(input), self.n) }
    error(self) {
        ValidationError::NotEnoughOfClass { class: CharClass::Lowercase, required: self.n }
    }
    fn contains_n_lower(n: i64);
}

crate::validator! {
    /// Passes when the input has at least `n` uppercase letters.
    pub ContainsNUpper { n: i64 } for String;
    rule(self, input) { at_least(CharClass::Uppercase.count(input), self.n) }
    error(self) {
        ValidationError::NotEnoughOfClass { class: CharClass::Uppercase, required: self.n }
    }
    fn contains_n_upper(n: i64);
}

crate::validator! {
    /// Passes when the input has at least `n` digits.
    pub ContainsNDigits { n: i64 } for String;
    rule(self, input) { at_least(CharClass::Digit.count(input), self.n) }
    error(self) {
        ValidationError::NotEnoughOfClass { class: CharClass::Digit, required: self.n }
    }
    fn contains_n_digits(n: i64);
}

crate::validator! {
    /// Passes when the input has at least `n` special characters.
    ///
    /// Anything that is neither a letter nor a digit counts, whitespace
    /// included.
    pub ContainsNSpecialChars { n: i64 } for String;
    rule(self, input) { at_least(CharClass::Special.count(input), self.n) }
    error(self) {
        ValidationError::NotEnoughOfClass { class: CharClass::Special, required: self.n }
    }
    fn contains_n_special(n: i64);
}
