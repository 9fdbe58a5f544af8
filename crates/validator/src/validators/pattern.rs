//! String pattern validators
//!
//! Substring containment and whole-input character checks. Every
//! comparison is case-sensitive and performs no normalization.

use crate::foundation::{CharClass, ValidationError};

crate::validator! {
    /// Passes when the input contains `substr`.
    ///
    /// An empty `substr` is contained in every input, including the empty one.
    #[derive(PartialEq, Eq)]
    pub Contains { substr: String } for String;
    rule(self, input) { self.substr.is_empty() || input.contains(self.substr.as_str()) }
    error(self) { ValidationError::DoesNotContain { substr: self.substr.clone() } }
    new(substr: impl Into<String>) { Self::from_config(substr.into()) }
    fn contains(substr: impl Into<String>);
}

crate::validator! {
    /// Passes when none of the `forbidden` items occurs in the input.
    ///
    /// An empty list forbids nothing. Note that an empty item is a substring
    /// of every input, so it makes the validator reject everything.
    #[derive(PartialEq, Eq)]
    pub NotContainsAnyOf { forbidden: Vec<String> } for String;
    rule(self, input) { self.first_forbidden_in(input).is_none() }
    error(self) {
        let item = self.first_forbidden_in(&self.input).unwrap_or_default().to_string();
        ValidationError::ContainsForbidden { item }
    }
    new(forbidden: impl IntoIterator<Item = impl Into<String>>) {
        Self::from_config(forbidden.into_iter().map(Into::into).collect())
    }
    fn not_contains_any_of(forbidden: impl IntoIterator<Item = impl Into<String>>);
}

impl NotContainsAnyOf {
    fn first_forbidden_in(&self, input: &str) -> Option<&str> {
        self.forbidden
            .iter()
            .map(String::as_str)
            .find(|item| input.contains(item))
    }
}

crate::validator! {
    /// Passes when every character of the input is a letter.
    ///
    /// The empty input passes.
    pub IsAllLetters for String;
    rule(input) { CharClass::Letter.all(input) }
    error { ValidationError::NotAllLetters }
    fn is_all_letters();
}
