//! Boolean rules
//!
//! Missing input never reaches these rules, so only an explicit wrong value
//! fails.

use crate::foundation::ParseError;

crate::rule! {
    /// Validates that a boolean is `true` (e.g. accepted terms).
    pub MustBeTrue for bool;
    rule(input) { *input }
    error(input) { ParseError::rule("must_be_true", "value should be true") }
    fn must_be_true();
}

crate::rule! {
    /// Validates that a boolean is `false`.
    pub MustBeFalse for bool;
    rule(input) { !*input }
    error(input) { ParseError::rule("must_be_false", "value should be false") }
    fn must_be_false();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Rule;

    #[test]
    fn test_must_be_true() {
        assert!(must_be_true().validate(&true).is_ok());
        assert_eq!(must_be_true().validate(&false).unwrap_err().message, "value should be true");
    }

    #[test]
    fn test_must_be_false() {
        assert!(must_be_false().validate(&false).is_ok());
        assert_eq!(must_be_false().validate(&true).unwrap_err().message, "value should be false");
    }
}
