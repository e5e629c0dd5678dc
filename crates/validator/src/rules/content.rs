//! String content rules: patterns, email addresses, enumerations.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{ErrorKind, ParseError, Rule};

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern compiles")
});

// ============================================================================
// MATCHES
// ============================================================================

/// Validates that a string contains a match for a regular expression.
///
/// A pattern that fails to compile does not panic: the compile error is
/// kept and every evaluation reports it as an `InvalidValidatorState`
/// error with code `invalid_pattern`.
#[derive(Debug, Clone)]
pub struct Matches {
    pattern: Result<Regex, regex::Error>,
}

impl Matches {
    /// Compiles `pattern`, deferring any compile error to evaluation.
    pub fn new(pattern: &str) -> Self {
        Self {
            pattern: Regex::new(pattern),
        }
    }

    /// The compiled pattern, if it compiled.
    pub fn regex(&self) -> Option<&Regex> {
        self.pattern.as_ref().ok()
    }
}

impl Rule for Matches {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ParseError> {
        match &self.pattern {
            Ok(regex) if regex.is_match(input) => Ok(()),
            Ok(regex) => Err(ParseError::rule("matches", "string does not match pattern")
                .with_param("pattern", regex.as_str().to_owned())),
            Err(compile) => Err(ParseError::new(
                ErrorKind::InvalidValidatorState,
                "invalid_pattern",
                "invalid regexp pattern",
            )
            .with_cause(compile.clone())),
        }
    }
}

/// Creates a [`Matches`] rule.
pub fn matches(pattern: &str) -> Matches {
    Matches::new(pattern)
}

// ============================================================================
// EMAIL
// ============================================================================

crate::rule! {
    /// Validates that a string is a well-formed email address.
    pub Email for str;
    rule(input) { EMAIL_REGEX.is_match(input) }
    error(input) { ParseError::rule("email", "invalid email address") }
    fn email();
}

// ============================================================================
// ONE OF
// ============================================================================

crate::rule! {
    /// Validates that a string is one of an allowed set.
    #[derive(PartialEq, Eq)]
    pub OneOf { allowed: Vec<String> } for str;
    rule(self, input) { self.allowed.iter().any(|candidate| candidate == input) }
    error(self, input) {
        ParseError::rule("enum", "value not found in enum")
            .with_param("allowed", self.allowed.join(","))
    }
    new(allowed: impl IntoIterator<Item = impl Into<String>>) {
        Self { allowed: allowed.into_iter().map(Into::into).collect() }
    }
    fn one_of(allowed: impl IntoIterator<Item = impl Into<String>>);
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_is_unanchored_search() {
        assert!(matches("[0-9]+").validate("abc123").is_ok());
        assert!(matches("^[0-9]*$").validate("0123").is_ok());
        let error = matches("^[0-9]*$").validate("12a").unwrap_err();
        assert!(error.is(ErrorKind::Rule));
        assert_eq!(error.message, "string does not match pattern");
    }

    #[test]
    fn test_bad_pattern_surfaces_on_evaluation() {
        let rule = matches("([a-z");
        assert!(rule.regex().is_none());

        let error = rule.validate("anything").unwrap_err();
        assert!(error.is(ErrorKind::InvalidValidatorState));
        assert_eq!(error.message, "invalid regexp pattern");
        assert_eq!(error.causes().len(), 1);
    }

    #[test]
    fn test_email() {
        assert!(email().validate("ursa@example.com").is_ok());
        assert!(email().validate("first.last+tag@sub.example.org").is_ok());
        assert_eq!(email().validate("not-an-email").unwrap_err().message, "invalid email address");
        assert!(email().validate("a@").is_err());
    }

    #[test]
    fn test_one_of() {
        let rule = one_of(["red", "green"]);
        assert!(rule.validate("red").is_ok());
        let error = rule.validate("blue").unwrap_err();
        assert_eq!(error.message, "value not found in enum");
        assert_eq!(error.param("allowed"), Some("red,green"));
    }
}
