//! `String` and `bool` targets.

use chrono::SecondsFormat;

use super::{CoercionMode, Scalar, mismatch};
use crate::foundation::{ParseError, Value};

impl Scalar for String {
    const TYPE_NAME: &'static str = "string";
    type RuleInput = str;

    fn adopt(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }

    fn convert(value: &Value, _mode: CoercionMode) -> Result<Self, ParseError> {
        match value {
            Value::Int(i) => Ok(i.to_string()),
            Value::UInt(u) => Ok(u.to_string()),
            Value::Float(f) => Ok(f.to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            Value::Uuid(id) => Ok(id.hyphenated().to_string()),
            Value::DateTime(dt) => Ok(dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            other => Err(mismatch::<Self>(other)),
        }
    }

    fn into_value(self) -> Value {
        Value::Text(self)
    }

    fn inspect<R>(&self, _magnitude: Option<f64>, check: impl FnOnce(&str) -> R) -> R {
        check(self)
    }
}

/// Boolean spellings accepted from text, matching the usual
/// `1 t T TRUE true True` / `0 f F FALSE false False` set.
pub(crate) fn parse_bool(text: &str) -> Option<bool> {
    match text {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

impl Scalar for bool {
    const TYPE_NAME: &'static str = "bool";
    type RuleInput = Self;

    fn adopt(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    fn convert(value: &Value, _mode: CoercionMode) -> Result<Self, ParseError> {
        match value {
            Value::Text(text) => parse_bool(text).ok_or_else(|| mismatch::<Self>(value)),
            other => Err(mismatch::<Self>(other)),
        }
    }

    fn into_value(self) -> Value {
        Value::Bool(self)
    }

    fn inspect<R>(&self, _magnitude: Option<f64>, check: impl FnOnce(&Self) -> R) -> R {
        check(self)
    }
}
