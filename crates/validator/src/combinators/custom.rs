//! Closure-backed rules.

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

use crate::foundation::{ParseError, Rule};

/// A rule built from a predicate closure.
///
/// ```rust
/// use ursa_validator::prelude::*;
///
/// let even = rule_fn("even", "number is odd", |n: &i64| n % 2 == 0);
/// assert!(even.validate(&4).is_ok());
/// assert_eq!(even.validate(&3).unwrap_err().message, "number is odd");
/// ```
pub struct Predicate<T: ?Sized, F> {
    code: Cow<'static, str>,
    message: Cow<'static, str>,
    check: F,
    _input: PhantomData<fn(&T)>,
}

impl<T: ?Sized, F: Clone> Clone for Predicate<T, F> {
    fn clone(&self) -> Self {
        Self {
            code: self.code.clone(),
            message: self.message.clone(),
            check: self.check.clone(),
            _input: PhantomData,
        }
    }
}

impl<T: ?Sized, F> fmt::Debug for Predicate<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("code", &self.code)
            .field("message", &self.message)
            .finish()
    }
}

impl<T, F> Rule for Predicate<T, F>
where
    T: ?Sized,
    F: Fn(&T) -> bool + Send + Sync,
{
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), ParseError> {
        if (self.check)(input) {
            Ok(())
        } else {
            Err(ParseError::rule(self.code.clone(), self.message.clone()))
        }
    }
}

/// Creates a [`Predicate`] rule.
pub fn rule_fn<T, F>(
    code: impl Into<Cow<'static, str>>,
    message: impl Into<Cow<'static, str>>,
    check: F,
) -> Predicate<T, F>
where
    T: ?Sized,
    F: Fn(&T) -> bool + Send + Sync,
{
    Predicate {
        code: code.into(),
        message: message.into(),
        check,
        _input: PhantomData,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_str_predicate() {
        let no_spaces = rule_fn("no_spaces", "contains spaces", |s: &str| !s.contains(' '));
        assert!(no_spaces.validate("ursa").is_ok());

        let error = no_spaces.validate("ur sa").unwrap_err();
        assert_eq!(error.code, "no_spaces");
        assert_eq!(error.message, "contains spaces");
    }
}
