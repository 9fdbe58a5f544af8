//! Ready-made password policies
//!
//! Three strength tiers, each a [`PasswordRequirements`] preset turned into a
//! [`SingleInputPolicy`] over the given password.
//!
//! | Preset | Requirements |
//! |---|---|
//! | [`simple_password`] | 6 to 50 characters, a letter, a digit |
//! | [`medium_password`] | at least 8 characters, a digit, a special character, no spaces |
//! | [`hard_password`] | at least 12 characters, 3 digits, 2 lowercase, 2 uppercase, a special character, no spaces |

use crate::config::PasswordRequirements;
use crate::policy::SingleInputPolicy;

/// Policy for low-stakes passwords.
///
/// # Examples
///
/// ```rust
/// use sieve_validator::prelude::*;
///
/// assert!(simple_password("abc123").check());
/// assert!(!simple_password("abcdef").check());
/// ```
#[must_use]
pub fn simple_password(password: impl Into<String>) -> SingleInputPolicy<String> {
    PasswordRequirements::simple().policy(vec![password.into()])
}

/// Policy for ordinary account passwords.
#[must_use]
pub fn medium_password(password: impl Into<String>) -> SingleInputPolicy<String> {
    PasswordRequirements::medium().policy(vec![password.into()])
}

/// Policy for privileged or sensitive accounts.
///
/// # Examples
///
/// ```rust
/// use sieve_validator::prelude::*;
///
/// let mut policy = hard_password("password");
/// assert!(!policy.check());
/// assert!(hard_password("Str0ng!Pass99").check());
/// ```
#[must_use]
pub fn hard_password(password: impl Into<String>) -> SingleInputPolicy<String> {
    PasswordRequirements::hard().policy(vec![password.into()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{CharClass, ValidationError};
    use crate::policy::Policy;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("abc123", true)]
    #[case("abc12", false)]
    #[case("abcdef", false)]
    #[case("123456", false)]
    fn test_simple(#[case] password: &str, #[case] expected: bool) {
        assert_eq!(simple_password(password).check(), expected);
    }

    #[test]
    fn test_simple_rejects_overlong() {
        let mut policy = simple_password(format!("a1{}", "x".repeat(49)));
        assert!(!policy.check());
        assert_eq!(policy.errors(), [ValidationError::TooLong { max: 50 }]);
    }

    #[rstest]
    #[case("abcdefg1!", true)]
    #[case("abc defg1!", false)]
    #[case("abcdefg1", false)]
    #[case("abc1!", false)]
    fn test_medium(#[case] password: &str, #[case] expected: bool) {
        assert_eq!(medium_password(password).check(), expected);
    }

    #[test]
    fn test_hard_reports_every_failure() {
        let mut policy = hard_password("password");
        assert!(!policy.check());
        assert_eq!(
            policy.errors(),
            [
                ValidationError::TooShort { min: 12 },
                ValidationError::NotEnoughOfClass {
                    class: CharClass::Digit,
                    required: 3
                },
                ValidationError::NotEnoughOfClass {
                    class: CharClass::Uppercase,
                    required: 2
                },
                ValidationError::NotEnoughOfClass {
                    class: CharClass::Special,
                    required: 1
                },
            ]
        );
    }

    #[test]
    fn test_hard_accepts_strong_password() {
        let mut policy = hard_password("Str0ng!Pass99");
        assert!(policy.check());
        assert!(policy.error().is_none());
    }
}
