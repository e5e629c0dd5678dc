//! Property-based tests for ursa-validator.

use proptest::prelude::*;
use ursa_validator::prelude::*;

// ============================================================================
// IDEMPOTENCY: parse(x) == parse(x)
// ============================================================================

proptest! {
    #[test]
    fn string_parse_idempotent(s in ".*") {
        let v = string().rule(min_length(3)).rule(email()).build();
        prop_assert_eq!(v.parse(s.as_str()), v.parse(s.as_str()));
    }

    #[test]
    fn int_parse_idempotent(s in "[-+]?[0-9]{0,20}(\\.[0-9]{0,4})?") {
        let v = int().rule(min(0_i64)).build();
        prop_assert_eq!(v.parse(s.as_str()), v.parse(s.as_str()));
    }
}

// ============================================================================
// COERCION LAWS
// ============================================================================

proptest! {
    #[test]
    fn integers_survive_text(n in any::<i64>()) {
        let result = int().build().parse(n.to_string());
        prop_assert!(result.is_valid());
        prop_assert_eq!(*result.value(), n);
    }

    #[test]
    fn lenient_text_truncates_toward_zero(whole in -1_000_000_i64..1_000_000, frac in 1_u32..10) {
        let text = format!("{whole}.{frac}");
        let result = int().build().parse(text);
        prop_assert!(result.is_valid());
        prop_assert_eq!(*result.value(), whole);
    }

    #[test]
    fn strict_rejects_fractions(whole in -1_000_i64..1_000, frac in 1_u32..10) {
        let result = int().strict().build().parse(format!("{whole}.{frac}"));
        prop_assert!(result.errors()[0].is(ErrorKind::InvalidValue));
    }

    #[test]
    fn narrowing_never_wraps(n in any::<i64>()) {
        let result = int16().build().parse(n);
        match i16::try_from(n) {
            Ok(expected) => prop_assert_eq!(*result.value(), expected),
            Err(_) => prop_assert!(result.errors()[0].is(ErrorKind::InvalidValue)),
        }
    }

    #[test]
    fn default_stands_in_for_missing(n in any::<i32>()) {
        let v = int32().with_default(n).build();
        prop_assert_eq!(*v.parse(Value::Absent).value(), n);
        prop_assert_eq!(*v.parse(Value::Null).value(), n);
    }
}

// ============================================================================
// RULE LAWS: every failing rule is reported
// ============================================================================

proptest! {
    #[test]
    fn length_errors_match_rules(s in ".{0,30}") {
        let v = string().rule(min_length(3)).rule(max_length(10)).build();
        let count = s.chars().count();
        let expected = usize::from(count < 3) + usize::from(count > 10);
        prop_assert_eq!(v.parse(s.as_str()).errors().len(), expected);
    }
}
