//! Uploaded file lists. Only multipart file parts produce this shape.

use super::{CoercionMode, Scalar, mismatch};
use crate::foundation::{FileUpload, ParseError, Value};

impl Scalar for Vec<FileUpload> {
    const TYPE_NAME: &'static str = "files";
    type RuleInput = [FileUpload];

    fn adopt(value: &Value) -> Option<Self> {
        match value {
            Value::Files(files) => Some(files.clone()),
            _ => None,
        }
    }

    fn convert(value: &Value, _mode: CoercionMode) -> Result<Self, ParseError> {
        Err(mismatch::<Self>(value))
    }

    fn into_value(self) -> Value {
        Value::Files(self)
    }

    fn inspect<R>(&self, _magnitude: Option<f64>, check: impl FnOnce(&[FileUpload]) -> R) -> R {
        check(self)
    }
}
