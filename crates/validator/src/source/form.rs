//! `application/x-www-form-urlencoded` bodies and query strings.
//!
//! Each key keeps its first value. Body pairs come before query pairs.

use indexmap::IndexMap;
use url::form_urlencoded;

use crate::foundation::Value;

/// Adds every pair not already present.
pub(crate) fn merge_pairs(record: &mut IndexMap<String, Value>, encoded: &[u8]) {
    for (key, value) in form_urlencoded::parse(encoded) {
        record
            .entry(key.into_owned())
            .or_insert_with(|| Value::Text(value.into_owned()));
    }
}

/// Decodes a urlencoded body followed by the request query.
pub(crate) fn decode(body: &[u8], query: Option<&str>) -> IndexMap<String, Value> {
    let mut record = IndexMap::new();
    merge_pairs(&mut record, body);
    if let Some(query) = query {
        merge_pairs(&mut record, query.as_bytes());
    }
    record
}
