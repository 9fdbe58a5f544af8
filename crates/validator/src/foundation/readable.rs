//! Human-readable error messages
//!
//! A secondary capability on top of [`std::error::Error`]: an error that can
//! render a message suitable for showing to an end user.

use crate::foundation::ValidationError;

/// An error that exposes a message for user display.
///
/// The message must be derived purely from the error's kind and payload.
pub trait ReadableError: std::error::Error {
    /// Returns the user-facing message.
    fn message(&self) -> String;
}

impl ReadableError for ValidationError {
    fn message(&self) -> String {
        self.to_string()
    }
}

/// Returns the readable message of any error that supports it.
///
/// Useful at API boundaries that deal in `dyn ReadableError`.
pub fn message_of(error: &dyn ReadableError) -> String {
    error.message()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_matches_display() {
        let error = ValidationError::DoesNotContain {
            substr: "ll".into(),
        };
        assert_eq!(error.message(), "The input must contain \"ll\".");
        assert_eq!(error.message(), error.to_string());
    }

    #[test]
    fn test_message_through_trait_object() {
        let error = ValidationError::TooShort { min: 6 };
        assert_eq!(
            message_of(&error),
            "The input is shorter than the required minimum length of 6."
        );
    }
}
