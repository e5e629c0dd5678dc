//! UUID target. Text is parsed by a transformer registered by default.

use std::sync::Arc;

use uuid::Uuid;

use super::{CoercionMode, Scalar, Transformer, mismatch};
use crate::foundation::{ParseError, Value};

fn parse_uuid(value: &Value) -> Result<Uuid, ParseError> {
    match value {
        Value::Text(text) => Uuid::parse_str(text).map_err(|e| {
            ParseError::invalid_value()
                .with_code("invalid_uuid")
                .with_cause(e)
        }),
        other => Err(mismatch::<Uuid>(other)),
    }
}

impl Scalar for Uuid {
    const TYPE_NAME: &'static str = "uuid";
    type RuleInput = Self;

    fn adopt(value: &Value) -> Option<Self> {
        match value {
            Value::Uuid(id) => Some(*id),
            _ => None,
        }
    }

    fn convert(value: &Value, _mode: CoercionMode) -> Result<Self, ParseError> {
        Err(mismatch::<Self>(value))
    }

    fn into_value(self) -> Value {
        Value::Uuid(self)
    }

    fn inspect<R>(&self, _magnitude: Option<f64>, check: impl FnOnce(&Self) -> R) -> R {
        check(self)
    }

    fn default_transformer() -> Option<Transformer<Self>> {
        Some(Arc::new(parse_uuid))
    }
}
