//! Property-based tests for sieve-validator.

use proptest::prelude::*;
use sieve_validator::prelude::*;
use unicode_segmentation::UnicodeSegmentation;

fn graphemes(s: &str) -> i64 {
    i64::try_from(s.graphemes(true).count()).unwrap()
}

// ============================================================================
// LENGTH LAWS
// ============================================================================

proptest! {
    #[test]
    fn min_length_law(s in ".{0,40}", min in -5i64..45) {
        let mut v = HasMinLength::with_input(s.clone(), min);
        prop_assert_eq!(v.check(), graphemes(&s) >= min);
    }

    #[test]
    fn max_length_law(s in ".{0,40}", max in -5i64..45) {
        let mut v = HasMaxLength::with_input(s.clone(), max);
        prop_assert_eq!(v.check(), graphemes(&s) <= max);
    }

    #[test]
    fn negative_min_always_passes(s in ".*", min in i64::MIN..0) {
        prop_assert!(HasMinLength::with_input(s, min).check());
    }

    #[test]
    fn negative_max_never_passes(s in ".*", max in i64::MIN..0) {
        prop_assert!(!HasMaxLength::with_input(s, max).check());
    }
}

// ============================================================================
// STATE LAWS: check sets, set_input clears
// ============================================================================

proptest! {
    #[test]
    fn error_present_iff_check_failed(s in ".{0,20}") {
        let mut v = contains_n_digits(2);
        v.set_input(s);
        let passed = v.check();
        prop_assert_eq!(v.error().is_none(), passed);
    }

    #[test]
    fn set_input_always_clears(first in ".{0,20}", second in ".{0,20}") {
        let mut v = has_min_length(10);
        v.set_input(first);
        v.check();
        v.set_input(second);
        prop_assert!(v.error().is_none());
    }

    #[test]
    fn check_is_idempotent(s in ".{0,30}") {
        let mut v = email();
        v.set_input(s);
        let first = v.check();
        prop_assert_eq!(v.check(), first);
    }
}

// ============================================================================
// CONTAINMENT LAWS
// ============================================================================

proptest! {
    #[test]
    fn empty_substring_always_contained(s in ".*") {
        prop_assert!(Contains::with_input(s, "").check());
    }

    #[test]
    fn empty_forbidden_list_always_passes(s in ".*") {
        prop_assert!(NotContainsAnyOf::with_input(s, Vec::<String>::new()).check());
    }

    #[test]
    fn input_contains_itself(s in ".{0,20}") {
        prop_assert!(Contains::with_input(s.clone(), s).check());
    }
}

// ============================================================================
// MULTI-INPUT AND POLICY LAWS
// ============================================================================

proptest! {
    #[test]
    fn singleton_sequences_pass(s in ".*") {
        prop_assert!(AllSameLength::with_inputs([s.clone()]).check());
        prop_assert!(AllSameValue::with_inputs([s]).check());
    }

    #[test]
    fn repeated_value_passes(s in ".{0,10}", n in 0usize..5) {
        let inputs = vec![s; n];
        prop_assert!(AllSameValue::with_inputs(inputs.clone()).check());
        prop_assert!(AllSameLength::with_inputs(inputs).check());
    }

    #[test]
    fn policy_error_count_matches_failing_inputs(
        inputs in prop::collection::vec(".{0,6}", 0..8),
        min in 0i64..6,
    ) {
        let expected = inputs.iter().filter(|s| graphemes(s) < min).count();
        let mut policy = SingleInputPolicy::new(inputs, vec![Box::new(has_min_length(min))]);

        let passed = policy.check();
        prop_assert_eq!(policy.errors().len(), expected);
        prop_assert_eq!(passed, expected == 0);

        // Re-running never accumulates.
        policy.check();
        prop_assert_eq!(policy.errors().len(), expected);
    }
}
