//! Numeric rules
//!
//! Bounds compare in `f64` space regardless of the target width, so the
//! same rule value works for every numeric schema. Rules read the input as
//! it was before narrowing: `"10.5"` parsed into an `int64` fails `max(10)`.

use std::marker::PhantomData;

use crate::coercion::{Number, Numeric};
use crate::foundation::{ParseError, Rule};

// ============================================================================
// MIN
// ============================================================================

crate::rule! {
    /// Validates that a number is at least `min`.
    #[derive(Copy, PartialEq)]
    pub Min<T: Numeric> { min: T } for Number<T>;
    rule(self, input) { input.magnitude() >= self.min.to_f64() }
    error(self, input) {
        ParseError::rule("min", "number too small")
            .with_param("min", self.min.to_string())
            .with_param("actual", input.to_string())
    }
    fn min(min: T);
}

// ============================================================================
// MAX
// ============================================================================

crate::rule! {
    /// Validates that a number is at most `max`.
    #[derive(Copy, PartialEq)]
    pub Max<T: Numeric> { max: T } for Number<T>;
    rule(self, input) { input.magnitude() <= self.max.to_f64() }
    error(self, input) {
        ParseError::rule("max", "number too large")
            .with_param("max", self.max.to_string())
            .with_param("actual", input.to_string())
    }
    fn max(max: T);
}

// ============================================================================
// NON ZERO / MUST BE INTEGER
// ============================================================================

/// Validates that a number is not zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct NonZero<T>(PhantomData<fn() -> T>);

impl<T: Numeric> Rule for NonZero<T> {
    type Input = Number<T>;

    fn validate(&self, input: &Number<T>) -> Result<(), ParseError> {
        if input.magnitude() == 0.0 {
            Err(ParseError::rule("non_zero", "number is zero"))
        } else {
            Ok(())
        }
    }
}

/// Creates a [`NonZero`] rule.
#[must_use]
pub fn non_zero<T: Numeric>() -> NonZero<T> {
    NonZero(PhantomData)
}

/// Validates that a number has no fractional part.
#[derive(Debug, Clone, Copy, Default)]
pub struct MustBeInteger<T>(PhantomData<fn() -> T>);

impl<T: Numeric> Rule for MustBeInteger<T> {
    type Input = Number<T>;

    fn validate(&self, input: &Number<T>) -> Result<(), ParseError> {
        if input.magnitude().fract() == 0.0 {
            Ok(())
        } else {
            Err(ParseError::rule("must_be_integer", "number is not integer")
                .with_param("actual", input.to_string()))
        }
    }
}

/// Creates a [`MustBeInteger`] rule.
#[must_use]
pub fn must_be_integer<T: Numeric>() -> MustBeInteger<T> {
    MustBeInteger(PhantomData)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_max_inclusive() {
        assert!(min(5_i64).validate(&Number::new(5)).is_ok());
        assert!(max(10_i64).validate(&Number::new(10)).is_ok());
        let low = min(5_i64).validate(&Number::new(4)).unwrap_err();
        assert_eq!(low.message, "number too small");
        let high = max(10_i64).validate(&Number::new(11)).unwrap_err();
        assert_eq!(high.message, "number too large");
    }

    #[test]
    fn test_min_params() {
        let error = min(5_u8).validate(&Number::new(1)).unwrap_err();
        assert_eq!(error.code, "min");
        assert_eq!(error.param("min"), Some("5"));
        assert_eq!(error.param("actual"), Some("1"));
    }

    #[test]
    fn test_bounds_read_input_before_narrowing() {
        let error = max(10_i64).validate(&Number::narrowed(10, Some(10.5))).unwrap_err();
        assert_eq!(error.param("actual"), Some("10.5"));
        assert!(min(4_i64).validate(&Number::narrowed(3, Some(4.0))).is_ok());
    }

    #[test]
    fn test_non_zero() {
        assert!(non_zero::<i32>().validate(&Number::new(1)).is_ok());
        let error = non_zero::<f64>().validate(&Number::new(0.0)).unwrap_err();
        assert_eq!(error.message, "number is zero");
    }

    #[test]
    fn test_must_be_integer() {
        assert!(must_be_integer::<f64>().validate(&Number::new(4.0)).is_ok());
        assert!(must_be_integer::<f64>().validate(&Number::new(4.5)).is_err());
        assert!(must_be_integer::<f32>().validate(&Number::new(-2.25)).is_err());
        assert!(must_be_integer::<i64>().validate(&Number::narrowed(3, Some(3.9))).is_err());
        assert!(must_be_integer::<i64>().validate(&Number::new(3)).is_ok());
    }
}
