//! MESSAGE combinator - custom error messages

use std::borrow::Cow;

use crate::foundation::{ParseError, Rule};

// ============================================================================
// WITH MESSAGE COMBINATOR
// ============================================================================

/// Replaces the message (and optionally the code) of a rule's failure.
///
/// The kind and parameters of the original error are kept, and the original
/// error is attached as a cause.
///
/// # Examples
///
/// ```rust
/// use ursa_validator::prelude::*;
///
/// let rule = min_length(8).with_message("Password must be at least 8 characters");
///
/// let error = rule.validate("short").unwrap_err();
/// assert_eq!(error.message, "Password must be at least 8 characters");
/// assert_eq!(error.code, "min_length");
/// ```
#[derive(Debug, Clone)]
pub struct WithMessage<R> {
    inner: R,
    message: Option<String>,
    code: Option<String>,
}

impl<R> WithMessage<R> {
    /// Overrides the message.
    pub fn new(inner: R, message: impl Into<String>) -> Self {
        Self {
            inner,
            message: Some(message.into()),
            code: None,
        }
    }

    /// Overrides only the code, keeping the original message.
    pub fn code_only(inner: R, code: impl Into<String>) -> Self {
        Self {
            inner,
            message: None,
            code: Some(code.into()),
        }
    }

    /// Also replaces the error code.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Returns a reference to the inner rule.
    pub fn inner(&self) -> &R {
        &self.inner
    }
}

impl<R: Rule> Rule for WithMessage<R> {
    type Input = R::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ParseError> {
        self.inner.validate(input).map_err(|original| {
            let mut error = ParseError::new(
                original.kind,
                self.code
                    .clone()
                    .map_or_else(|| original.code.clone(), Cow::Owned),
                self.message
                    .clone()
                    .map_or_else(|| original.message.clone(), Cow::Owned),
            );
            error.params.clone_from(&original.params);
            error.with_cause(original)
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coercion::Number;
    use crate::foundation::{ErrorKind, RuleExt};
    use crate::rules::{matches, min};

    #[test]
    fn test_success_passes_through() {
        assert!(min(5_i64).with_message("too small").validate(&Number::new(7)).is_ok());
    }

    #[test]
    fn test_replaces_message_keeps_code() {
        let error = min(5_i64)
            .with_message("Number should be >= 5")
            .validate(&Number::new(3))
            .unwrap_err();

        assert_eq!(error.message, "Number should be >= 5");
        assert_eq!(error.code, "min");
        assert_eq!(error.param("min"), Some("5"));
        assert!(error.has_cause_kind(ErrorKind::Rule));
    }

    #[test]
    fn test_code_only() {
        let error = min(5_i64).with_code("ERR_MIN").validate(&Number::new(3)).unwrap_err();
        assert_eq!(error.code, "ERR_MIN");
        assert_eq!(error.message, "number too small");
    }

    #[test]
    fn test_message_and_code() {
        let error = min(5_i64)
            .with_message("custom")
            .with_code("ERR")
            .validate(&Number::new(1))
            .unwrap_err();
        assert_eq!((error.code.as_ref(), error.message.as_ref()), ("ERR", "custom"));
    }

    #[test]
    fn test_kind_is_preserved() {
        let error = matches("([")
            .with_message("bad pattern")
            .validate("x")
            .unwrap_err();
        assert!(error.is(ErrorKind::InvalidValidatorState));
    }
}
