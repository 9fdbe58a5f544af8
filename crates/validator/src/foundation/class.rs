//! Character classes used by the counting validators
//!
//! Classification is done per user-perceived character (grapheme cluster),
//! looking at the cluster's first scalar value. A letter followed by a
//! combining accent is therefore one letter, and an emoji with a skin-tone
//! modifier is one special character.

use std::fmt;

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// A class of characters that can be counted in an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharClass {
    /// Any alphabetic character.
    Letter,
    /// Lowercase letters.
    Lowercase,
    /// Uppercase letters.
    Uppercase,
    /// Numeric characters (Unicode-aware, not only ASCII digits).
    Digit,
    /// Anything that is neither a letter nor a digit: whitespace,
    /// punctuation, symbols.
    Special,
}

impl CharClass {
    /// Returns true if the grapheme cluster belongs to this class.
    #[must_use]
    pub fn matches(self, grapheme: &str) -> bool {
        let Some(c) = grapheme.chars().next() else {
            return false;
        };
        match self {
            Self::Letter => c.is_alphabetic(),
            Self::Lowercase => c.is_lowercase(),
            Self::Uppercase => c.is_uppercase(),
            Self::Digit => c.is_numeric(),
            Self::Special => !c.is_alphabetic() && !c.is_numeric(),
        }
    }

    /// Counts the grapheme clusters of `input` that belong to this class.
    #[must_use]
    pub fn count(self, input: &str) -> usize {
        input.graphemes(true).filter(|g| self.matches(g)).count()
    }

    /// Returns true if at least one grapheme cluster belongs to this class.
    #[must_use]
    pub fn any(self, input: &str) -> bool {
        input.graphemes(true).any(|g| self.matches(g))
    }

    /// Returns true if every grapheme cluster belongs to this class.
    ///
    /// Vacuously true for the empty string.
    #[must_use]
    pub fn all(self, input: &str) -> bool {
        input.graphemes(true).all(|g| self.matches(g))
    }

    const fn as_str(self) -> &'static str {
        match self {
            Self::Letter => "letter",
            Self::Lowercase => "lowercase",
            Self::Uppercase => "uppercase",
            Self::Digit => "digit",
            Self::Special => "special",
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
