//! Macros for creating validators with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`validator!`]: create a complete stateful validator (struct,
//!   constructors, [`SingleInputValidator`](crate::foundation::SingleInputValidator)
//!   implementation and factory fn)
//!
//! # Examples
//!
//! ```rust,ignore
//! use sieve_validator::validator;
//! use sieve_validator::foundation::ValidationError;
//!
//! // Unit validator (no configuration)
//! validator! {
//!     pub NotBlank for String;
//!     rule(input) { !input.trim().is_empty() }
//!     error { ValidationError::NoLetter }
//!     fn not_blank();
//! }
//!
//! // Struct with configuration fields
//! validator! {
//!     pub AtLeast { min: i64 } for String;
//!     rule(self, input) { input.len() as i64 >= self.min }
//!     error(self) { ValidationError::TooShort { min: self.min } }
//!     fn at_least(min: i64);
//! }
//! ```

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Creates a complete stateful validator.
///
/// Every generated struct carries two hidden fields next to its
/// configuration: the current `input` (defaulted with `Default`) and the
/// stored `error`. The macro generates:
///
/// - `new(config…)`: configuration-only constructor, input defaulted;
/// - `with_input(input, config…)`: constructor with an initial input;
/// - the [`SingleInputValidator`](crate::foundation::SingleInputValidator)
///   impl: `set_input` clears the error, `check` evaluates `rule` and stores
///   `error` on failure;
/// - a snake-case factory fn.
///
/// `#[derive(Debug, Clone)]` is always applied. Configuration fields must not
/// be named `input` or `error`.
///
/// # Variants
///
/// **Unit validator** (no configuration):
/// ```rust,ignore
/// validator! {
///     pub NoDigits for String;
///     rule(input) { !input.chars().any(char::is_numeric) }
///     error { ValidationError::NotAllLetters }
///     fn no_digits();
/// }
/// ```
///
/// **Struct with fields** (auto `new` from all fields):
/// ```rust,ignore
/// validator! {
///     pub AtLeast { min: i64 } for String;
///     rule(self, input) { input.len() as i64 >= self.min }
///     error(self) { ValidationError::TooShort { min: self.min } }
///     fn at_least(min: i64);
/// }
/// ```
///
/// **Custom constructor** (overrides auto `new`; build `Self` through the
/// generated `from_config`):
/// ```rust,ignore
/// validator! {
///     pub Has { substr: String } for String;
///     rule(self, input) { input.contains(&self.substr) }
///     error(self) { ValidationError::DoesNotContain { substr: self.substr.clone() } }
///     new(substr: impl Into<String>) { Self::from_config(substr.into()) }
///     fn has(substr: impl Into<String>);
/// }
/// ```
///
/// **Fallible constructor** (the type after `->` is the construction error):
/// ```rust,ignore
/// validator! {
///     pub Re { regex: regex::Regex } for String;
///     rule(self, input) { self.regex.is_match(input) }
///     error(self) { ValidationError::NoMatch { pattern: self.regex.to_string() } }
///     new(pattern: &str) -> regex::Error { Ok(Self::from_config(regex::Regex::new(pattern)?)) }
///     fn re(pattern: &str) -> regex::Error;
/// }
/// ```
#[macro_export]
macro_rules! validator {
    // ── Variant 1: Unit validator (no configuration) + factory fn ────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error $err:block
        fn $factory:ident();
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default)]
        $vis struct $name {
            input: $input,
            error: ::std::option::Option<$crate::foundation::ValidationError>,
        }

        impl $name {
            /// Creates the validator with a default input.
            #[must_use]
            pub fn new() -> Self {
                Self::default()
            }

            /// Creates the validator with an initial input.
            #[must_use]
            pub fn with_input(input: impl Into<$input>) -> Self {
                Self {
                    input: input.into(),
                    error: None,
                }
            }
        }

        $crate::validator!(@contract $name, $input, self, $inp, $rule, self, $err);

        #[must_use]
        $vis fn $factory() -> $name {
            $name::new()
        }
    };

    // ── Variant 2: Struct with fields + custom new + factory fn ──────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator!(@struct $(#[$meta])* $vis $name { $($field: $fty),+ } for $input);

        #[allow(clippy::new_without_default)]
        impl $name {
            /// Creates the validator with a default input.
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body

            /// Creates the validator with an initial input.
            #[must_use]
            pub fn with_input(input: impl Into<$input>, $($narg: $naty),*) -> Self {
                let mut validator = Self::new($($narg),*);
                validator.input = input.into();
                validator
            }
        }

        $crate::validator!(@contract $name, $input, $self_, $inp, $rule, $self2, $err);

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Variant 3: Struct with fields + fallible new + fallible factory ──
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) -> $ety:ty $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?) -> $efty:ty;
    ) => {
        $crate::validator!(@struct $(#[$meta])* $vis $name { $($field: $fty),+ } for $input);

        impl $name {
            /// Creates the validator with a default input.
            pub fn new($($narg: $naty),*) -> ::std::result::Result<Self, $ety> $new_body

            /// Creates the validator with an initial input.
            pub fn with_input(
                input: impl Into<$input>,
                $($narg: $naty),*
            ) -> ::std::result::Result<Self, $ety> {
                let mut validator = Self::new($($narg),*)?;
                validator.input = input.into();
                Ok(validator)
            }
        }

        $crate::validator!(@contract $name, $input, $self_, $inp, $rule, $self2, $err);

        $vis fn $factory($($farg: $faty),*) -> ::std::result::Result<$name, $efty> {
            $name::new($($farg),*)
        }
    };

    // ── Variant 4: Struct with fields + auto new + factory fn ────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $input;
            rule($self_, $inp) $rule
            error($self2) $err
            new($($field: $fty),+) { Self::from_config($($field),+) }
            fn $factory($($farg: $faty),*);
        }
    };

    // ── Internal: struct definition + `from_config` ──────────────────────
    (@struct
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ } for $input:ty
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
            input: $input,
            error: ::std::option::Option<$crate::foundation::ValidationError>,
        }

        impl $name {
            #[inline]
            fn from_config($($field: $fty),+) -> Self {
                Self {
                    $($field,)+
                    input: ::std::default::Default::default(),
                    error: None,
                }
            }
        }
    };

    // ── Internal: contract implementation ────────────────────────────────
    (@contract $name:ident, $input:ty, $self_:ident, $inp:ident, $rule:block, $self2:ident, $err:block) => {
        impl $crate::foundation::SingleInputValidator<$input> for $name {
            fn input(&self) -> &$input {
                &self.input
            }

            fn error(&self) -> ::std::option::Option<&$crate::foundation::ValidationError> {
                self.error.as_ref()
            }

            fn set_input(&mut self, input: $input) {
                self.input = input;
                self.error = None;
            }

            fn check(&mut $self_) -> bool {
                let passed = {
                    let $inp = &$self_.input;
                    $rule
                };
                if !passed {
                    <Self as $crate::foundation::SingleInputValidator<$input>>::save_error($self_);
                }
                passed
            }

            fn save_error(&mut $self2) -> &$crate::foundation::ValidationError {
                let error = $err;
                $self2.error.insert(error)
            }
        }
    };
}

// ============================================================================
// TESTS
// ============================================================================
