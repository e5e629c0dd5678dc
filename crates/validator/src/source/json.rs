//! JSON payloads.

use indexmap::IndexMap;

use super::SourceError;
use crate::foundation::Value;

/// Decodes a JSON object into a record, keeping key order.
pub(crate) fn decode_record(payload: &[u8]) -> Result<IndexMap<String, Value>, SourceError> {
    match Value::from(serde_json::from_slice::<serde_json::Value>(payload)?) {
        Value::Record(record) => Ok(record),
        other => Err(SourceError::NotAnObject {
            actual: other.kind_name(),
        }),
    }
}
