//! Copying a valid result into typed records.
//!
//! Field names map onto the target through serde: `#[serde(rename)]` and
//! `#[serde(alias)]` play the role of source tags, and an unannotated field
//! matches by its own name.

use serde::de::DeserializeOwned;
use thiserror::Error;

use super::ObjectResult;
use crate::foundation::ParseError;
use crate::foundation::result::join_messages;

/// Failure to materialize an [`ObjectResult`].
#[derive(Debug, Error)]
pub enum UnmarshalError {
    /// The result carries errors; nothing is materialized.
    #[error("cannot unmarshal invalid value: {}", join_messages(.errors))]
    InvalidResult {
        /// The result's aggregate errors.
        errors: Vec<ParseError>,
    },

    /// The target type does not accept the validated fields.
    #[error("unmarshalling result: {0}")]
    Deserialize(#[from] serde_json::Error),
}

impl ObjectResult {
    /// Copies validated fields into `T`, recursing into nested objects.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde::Deserialize;
    /// use ursa_validator::prelude::*;
    ///
    /// #[derive(Deserialize)]
    /// struct Signup {
    ///     #[serde(rename = "Name")]
    ///     name: String,
    ///     #[serde(rename = "Count")]
    ///     count: i32,
    /// }
    ///
    /// let schema = object()
    ///     .field("Name", string().rule(min_length(5)))
    ///     .field("Count", int())
    ///     .build();
    ///
    /// let signup: Signup = schema
    ///     .parse_json(br#"{"Name":"abcdef","Count":5}"#)
    ///     .unmarshal()
    ///     .unwrap();
    /// assert_eq!((signup.name.as_str(), signup.count), ("abcdef", 5));
    /// ```
    pub fn unmarshal<T: DeserializeOwned>(&self) -> Result<T, UnmarshalError> {
        if !self.is_valid() {
            return Err(UnmarshalError::InvalidResult {
                errors: self.errors().to_vec(),
            });
        }
        Ok(serde_json::from_value(self.to_value().to_json())?)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use serde::Deserialize;

    use super::*;
    use crate::foundation::{ParseResult, Value};
    use crate::outcome::FieldValue;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Pair {
        #[serde(alias = "Left")]
        left: String,
        right: i64,
    }

    fn pair_result() -> ObjectResult {
        let mut result = ObjectResult::new();
        result.insert_field("Left", ParseResult::valid(FieldValue::Scalar(Value::from("l"))));
        result.insert_field("right", ParseResult::valid(FieldValue::Scalar(Value::Int(2))));
        result
    }

    #[test]
    fn test_alias_then_field_name() {
        let pair: Pair = pair_result().unmarshal().unwrap();
        assert_eq!(pair, Pair { left: "l".into(), right: 2 });
    }

    #[test]
    fn test_into_map() {
        let map: HashMap<String, serde_json::Value> = pair_result().unmarshal().unwrap();
        assert_eq!(map["Left"], "l");
    }

    #[test]
    fn test_invalid_result_is_rejected() {
        let mut result = pair_result();
        result.push_error(ParseError::rule("x", "broken"));
        let error = result.unmarshal::<Pair>().unwrap_err();
        assert!(matches!(error, UnmarshalError::InvalidResult { ref errors } if errors.len() == 1));
        assert_eq!(error.to_string(), "cannot unmarshal invalid value: broken");
    }

    #[test]
    fn test_shape_mismatch_is_deserialize_error() {
        let mut result = ObjectResult::new();
        result.insert_field("left", ParseResult::valid(FieldValue::Scalar(Value::Int(1))));
        assert!(matches!(
            result.unmarshal::<Pair>(),
            Err(UnmarshalError::Deserialize(_))
        ));
    }
}
