//! Core traits for the validation system
//!
//! [`Rule`] is the predicate every built-in and custom check implements.

use crate::combinators::WithMessage;
use crate::foundation::ParseError;

// ============================================================================
// RULE TRAIT
// ============================================================================

/// A pure pass/fail predicate over an already coerced value.
///
/// Rules never panic; a failing rule returns a structured error. Rules run in
/// declaration order and every failure is collected.
///
/// # Examples
///
/// ```rust
/// use ursa_validator::foundation::{ParseError, Rule};
///
/// struct Even;
///
/// impl Rule for Even {
///     type Input = i64;
///
///     fn validate(&self, input: &i64) -> Result<(), ParseError> {
///         if input % 2 == 0 {
///             Ok(())
///         } else {
///             Err(ParseError::rule("even", "number is odd"))
///         }
///     }
/// }
///
/// assert!(Even.validate(&4).is_ok());
/// assert!(Even.validate(&3).is_err());
/// ```
pub trait Rule: Send + Sync {
    /// The type the rule inspects. `str` for text rules.
    type Input: ?Sized;

    /// Checks the input.
    fn validate(&self, input: &Self::Input) -> Result<(), ParseError>;
}

impl<R: Rule + ?Sized> Rule for Box<R> {
    type Input = R::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ParseError> {
        (**self).validate(input)
    }
}

// ============================================================================
// RULE EXTENSION TRAIT
// ============================================================================

/// Fluent helpers available on every rule.
pub trait RuleExt: Rule + Sized {
    /// Replaces the failure message, keeping the code.
    ///
    /// ```rust
    /// use ursa_validator::prelude::*;
    ///
    /// let rule = min(5).with_message("Number should be >= 5");
    /// let error = rule.validate(&Number::new(3_i64)).unwrap_err();
    /// assert_eq!(error.message, "Number should be >= 5");
    /// ```
    fn with_message(self, message: impl Into<String>) -> WithMessage<Self> {
        WithMessage::new(self, message)
    }

    /// Replaces the failure code, keeping the message.
    fn with_code(self, code: impl Into<String>) -> WithMessage<Self> {
        WithMessage::code_only(self, code)
    }
}

impl<R: Rule> RuleExt for R {}
