//! Per-call parse outcome
//!
//! A [`ParseResult`] carries the coerced value together with every error
//! collected while producing it. Validity is never stored separately; it is
//! derived from the error list so the two cannot disagree.

use std::borrow::Cow;
use std::sync::Arc;

use super::error::{Cause, ErrorKind, ParseError};

/// Value plus collected errors for a single parse call.
///
/// # Examples
///
/// ```rust
/// use ursa_validator::prelude::*;
///
/// let age = int().rule(min(18)).build();
///
/// let ok = age.parse("21");
/// assert!(ok.is_valid());
/// assert_eq!(ok.get(), Some(&21));
///
/// let young = age.parse(12);
/// assert!(!young.is_valid());
/// assert_eq!(young.get(), None);
/// assert_eq!(young.error_message(), "number too small");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ParseResult<T> {
    value: T,
    errors: Vec<ParseError>,
}

impl<T> ParseResult<T> {
    /// A result with no errors.
    pub fn valid(value: T) -> Self {
        Self {
            value,
            errors: Vec::new(),
        }
    }

    /// A result carrying a single error.
    pub fn failure(value: T, error: ParseError) -> Self {
        Self {
            value,
            errors: vec![error],
        }
    }

    /// Assembles a result from a value and its errors.
    pub fn from_parts(value: T, errors: Vec<ParseError>) -> Self {
        Self { value, errors }
    }

    /// True iff no error was collected.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The coerced value. Meaningful only when [`is_valid`](Self::is_valid)
    /// holds; after a rule failure it still holds the value the rules saw.
    #[must_use]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The value, but only for a valid result.
    #[must_use]
    pub fn get(&self) -> Option<&T> {
        self.is_valid().then_some(&self.value)
    }

    /// The value for a valid result, the errors otherwise.
    pub fn into_result(self) -> Result<T, Vec<ParseError>> {
        if self.errors.is_empty() {
            Ok(self.value)
        } else {
            Err(self.errors)
        }
    }

    /// Collected errors in evaluation order.
    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Splits into value and errors.
    pub fn into_parts(self) -> (T, Vec<ParseError>) {
        (self.value, self.errors)
    }

    /// All error messages joined with `", "`; empty when valid.
    #[must_use]
    pub fn error_message(&self) -> String {
        join_messages(&self.errors)
    }

    /// Appends an error, which makes the result invalid.
    pub fn push_error(&mut self, error: ParseError) {
        self.errors.push(error);
    }

    /// Appends a rule error built from a message and optional causes.
    pub fn append_error(
        &mut self,
        message: impl Into<Cow<'static, str>>,
        causes: impl IntoIterator<Item = Cause>,
    ) {
        let error = causes.into_iter().fold(
            ParseError::of_kind(ErrorKind::Rule, message),
            ParseError::with_shared_cause,
        );
        self.errors.push(error);
    }

    /// Maps the carried value, keeping errors.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ParseResult<U> {
        ParseResult {
            value: f(self.value),
            errors: self.errors,
        }
    }
}

impl<T: Default> Default for ParseResult<T> {
    fn default() -> Self {
        Self::valid(T::default())
    }
}

pub(crate) fn join_messages(errors: &[ParseError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_ref())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Helper for callers that hold a cause by value.
pub fn cause(error: impl std::error::Error + Send + Sync + 'static) -> Cause {
    Arc::new(error)
}

// ============================================================================
// TESTS
// ============================================================================
