//! String length rules
//!
//! Length is measured in Unicode scalar values by default. The `.bytes()`
//! constructors count bytes instead.

use crate::foundation::ParseError;

// ============================================================================
// LENGTH MODE
// ============================================================================

/// How to count string length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthMode {
    /// Count bytes.
    Bytes,
    /// Count Unicode scalar values.
    #[default]
    Chars,
}

impl LengthMode {
    #[inline]
    fn measure(self, input: &str) -> usize {
        match self {
            LengthMode::Bytes => input.len(),
            LengthMode::Chars => input.chars().count(),
        }
    }
}

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::rule! {
    /// Validates that a string has at least `min` characters.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize, mode: LengthMode } for str;
    rule(self, input) { self.mode.measure(input) >= self.min }
    error(self, input) {
        ParseError::rule("min_length", "string too short")
            .with_param("min", self.min.to_string())
            .with_param("actual", self.mode.measure(input).to_string())
    }
    new(min: usize) { Self { min, mode: LengthMode::Chars } }
    fn min_length(min: usize);
}

impl MinLength {
    /// Counts bytes instead of characters.
    #[must_use]
    pub fn bytes(min: usize) -> Self {
        Self {
            min,
            mode: LengthMode::Bytes,
        }
    }
}

// ============================================================================
// MAX LENGTH
// ============================================================================

crate::rule! {
    /// Validates that a string has at most `max` characters.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: usize, mode: LengthMode } for str;
    rule(self, input) { self.mode.measure(input) <= self.max }
    error(self, input) {
        ParseError::rule("max_length", "string too long")
            .with_param("max", self.max.to_string())
            .with_param("actual", self.mode.measure(input).to_string())
    }
    new(max: usize) { Self { max, mode: LengthMode::Chars } }
    fn max_length(max: usize);
}

impl MaxLength {
    /// Counts bytes instead of characters.
    #[must_use]
    pub fn bytes(max: usize) -> Self {
        Self {
            max,
            mode: LengthMode::Bytes,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Rule;

    #[test]
    fn test_min_length() {
        assert!(min_length(3).validate("abc").is_ok());
        let error = min_length(5).validate("abc1").unwrap_err();
        assert_eq!(error.message, "string too short");
        assert_eq!(error.param("actual"), Some("4"));
    }

    #[test]
    fn test_max_length() {
        assert!(max_length(3).validate("abc").is_ok());
        assert_eq!(max_length(2).validate("abc").unwrap_err().message, "string too long");
    }

    #[test]
    fn test_unicode_counts_chars() {
        // "héllo" is 5 chars but 6 bytes
        assert!(max_length(5).validate("héllo").is_ok());
        assert!(MaxLength::bytes(5).validate("héllo").is_err());
        assert!(MinLength::bytes(6).validate("héllo").is_ok());
    }
}
