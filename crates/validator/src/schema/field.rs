//! Type-erased field dispatch for object schemas.

use std::fmt;
use std::sync::Arc;

use super::object::{ObjectBuilder, ObjectValidator};
use super::scalar::{ScalarBuilder, ScalarValidator};
use crate::coercion::Scalar;
use crate::foundation::{ParseError, ParseResult, Value};
use crate::outcome::{FieldResult, FieldValue};

/// A schema node usable as an object field.
pub trait FieldValidator: Send + Sync + fmt::Debug {
    /// Parses the raw field value.
    fn parse_field(&self, input: &Value) -> FieldResult;

    /// Projects trusted state onto the field without running rules.
    fn project(&self, input: &Value) -> FieldValue;

    /// The sticky construction error, if any.
    fn build_error(&self) -> Option<&ParseError>;
}

impl<T: Scalar> FieldValidator for ScalarValidator<T> {
    fn parse_field(&self, input: &Value) -> FieldResult {
        self.parse_value(input)
            .map(|value| FieldValue::Scalar(value.into_value()))
    }

    fn project(&self, input: &Value) -> FieldValue {
        let value = if input.is_missing() {
            self.default_value().cloned().unwrap_or_default().into_value()
        } else {
            self.coerce(input)
                .map_or_else(|_| input.clone(), |coerced| coerced.value.into_value())
        };
        FieldValue::Scalar(value)
    }

    fn build_error(&self) -> Option<&ParseError> {
        Self::build_error(self)
    }
}

impl FieldValidator for ObjectValidator {
    fn parse_field(&self, input: &Value) -> FieldResult {
        let result = self.parse_value(input);
        let errors = result.errors().to_vec();
        ParseResult::from_parts(FieldValue::Object(result), errors)
    }

    fn project(&self, input: &Value) -> FieldValue {
        FieldValue::Object(self.project_value(input))
    }

    fn build_error(&self) -> Option<&ParseError> {
        Self::build_error(self)
    }
}

/// Anything that can be declared as an object field: sealed validators and
/// unfinished builders alike.
pub trait IntoField {
    /// Seals `self` (if needed) and erases its type.
    fn into_field(self) -> Arc<dyn FieldValidator>;
}

impl<T: Scalar> IntoField for ScalarValidator<T> {
    fn into_field(self) -> Arc<dyn FieldValidator> {
        Arc::new(self)
    }
}

impl<T: Scalar> IntoField for ScalarBuilder<T> {
    fn into_field(self) -> Arc<dyn FieldValidator> {
        Arc::new(self.build())
    }
}

impl IntoField for ObjectValidator {
    fn into_field(self) -> Arc<dyn FieldValidator> {
        Arc::new(self)
    }
}

impl IntoField for ObjectBuilder {
    fn into_field(self) -> Arc<dyn FieldValidator> {
        Arc::new(self.build())
    }
}

impl IntoField for Arc<dyn FieldValidator> {
    fn into_field(self) -> Arc<dyn FieldValidator> {
        self
    }
}
