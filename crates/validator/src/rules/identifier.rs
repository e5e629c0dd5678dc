//! UUID rules.

use uuid::Uuid;

use crate::foundation::ParseError;

crate::rule! {
    /// Validates that a UUID has at least one nonzero byte.
    pub NonNull for Uuid;
    rule(input) { !input.is_nil() }
    error(input) { ParseError::rule("non_null", "uuid is zero") }
    fn non_null();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Rule;

    #[test]
    fn test_nil_uuid_fails() {
        assert_eq!(non_null().validate(&Uuid::nil()).unwrap_err().message, "uuid is zero");
        assert!(non_null().validate(&Uuid::new_v4()).is_ok());
    }
}
