//! Object (composite) validator
//!
//! Fields are evaluated in declaration order against a record. One field's
//! failure never stops its siblings. Refiners run once every field has been
//! evaluated and see the complete [`ObjectResult`].

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::Serialize;

use super::field::{FieldValidator, IntoField};
use crate::config::RequestLimits;
use crate::foundation::{ParseError, ParseResult, Value};
use crate::outcome::{FieldValue, ObjectResult};
use crate::source;

/// A cross-field check run after all fields.
pub type Refiner = Arc<dyn Fn(&ObjectResult) -> Result<(), ParseError> + Send + Sync>;

// ============================================================================
// BUILDER
// ============================================================================

/// Configuration phase of an object schema.
///
/// # Examples
///
/// ```rust
/// use ursa_validator::prelude::*;
///
/// let signup = object()
///     .field("Password", string().rule(min_length(8)))
///     .field("Confirm", string())
///     .refine(|result| {
///         if result.get_string("Password") == result.get_string("Confirm") {
///             Ok(())
///         } else {
///             Err(ParseError::rule("confirm", "password confirmation must match")
///                 .with_field("Confirm"))
///         }
///     })
///     .build();
///
/// let result = signup.parse_json(br#"{"Password":"hunter22","Confirm":"hunter2"}"#);
/// assert!(!result.is_valid());
/// assert!(!result.is_field_valid("Confirm"));
/// ```
#[must_use = "builders do nothing until built"]
#[derive(Default)]
pub struct ObjectBuilder {
    fields: IndexMap<String, Arc<dyn FieldValidator>>,
    duplicates: Vec<String>,
    refiners: Vec<Refiner>,
    required: bool,
    limits: RequestLimits,
}

impl ObjectBuilder {
    /// Starts an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a field. Declaration order is evaluation order. Declaring
    /// the same name twice makes the schema fail every parse.
    pub fn field(mut self, name: impl Into<String>, validator: impl IntoField) -> Self {
        let name = name.into();
        if self.fields.contains_key(&name) {
            self.duplicates.push(name);
        } else {
            self.fields.insert(name, validator.into_field());
        }
        self
    }

    /// Adds a cross-field check. A returned error whose `field` names a
    /// declared field is also recorded on that field.
    pub fn refine<F>(mut self, refiner: F) -> Self
    where
        F: Fn(&ObjectResult) -> Result<(), ParseError> + Send + Sync + 'static,
    {
        self.refiners.push(Arc::new(refiner));
        self
    }

    /// Missing input fails with `RequiredPropertyMissing` instead of
    /// evaluating every field against absent values.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Caps request bodies at `bytes`.
    pub fn max_body_size(mut self, bytes: u64) -> Self {
        self.limits.max_body_size = bytes;
        self
    }

    /// Replaces the request limits wholesale.
    pub fn limits(mut self, limits: RequestLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Seals the schema. A field that failed to build is reported by
    /// [`ObjectValidator::build_error`] and still fails on its own at parse
    /// time, leaving its siblings intact.
    pub fn build(self) -> ObjectValidator {
        let build_error = if self.duplicates.is_empty() {
            None
        } else {
            tracing::debug!(
                duplicates = ?self.duplicates,
                "object schema sealed with duplicate fields"
            );
            Some(
                ParseError::invalid_state()
                    .with_code("duplicate_field")
                    .with_param("fields", self.duplicates.join(",")),
            )
        };

        let field_error = self.fields.iter().find_map(|(name, field)| {
            field.build_error().map(|error| error.clone().prefixed(name))
        });
        if let Some(error) = &field_error {
            tracing::debug!(error = %error, "object schema sealed with an invalid field");
        }

        ObjectValidator {
            inner: Arc::new(ObjectInner {
                fields: self.fields,
                refiners: self.refiners,
                required: self.required,
                limits: self.limits,
                build_error,
                field_error,
            }),
        }
    }
}

impl fmt::Debug for ObjectBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectBuilder")
            .field("fields", &self.fields.keys().collect::<Vec<_>>())
            .field("refiners", &self.refiners.len())
            .field("required", &self.required)
            .field("limits", &self.limits)
            .finish()
    }
}

// ============================================================================
// VALIDATOR
// ============================================================================

struct ObjectInner {
    fields: IndexMap<String, Arc<dyn FieldValidator>>,
    refiners: Vec<Refiner>,
    required: bool,
    limits: RequestLimits,
    build_error: Option<ParseError>,
    field_error: Option<ParseError>,
}

/// A sealed object schema. Cheap to clone and safe to share across threads.
#[derive(Clone)]
pub struct ObjectValidator {
    inner: Arc<ObjectInner>,
}

impl ObjectValidator {
    /// Normalizes `input` and parses it.
    pub fn parse(&self, input: impl Into<Value>) -> ObjectResult {
        self.parse_value(&input.into())
    }

    /// Dispatches on the input shape: byte payloads are decoded as JSON,
    /// records are parsed field by field, missing input honours
    /// [`ObjectBuilder::required`], anything else fails extraction per field.
    pub fn parse_value(&self, input: &Value) -> ObjectResult {
        if let Some(error) = &self.inner.build_error {
            return ObjectResult::failed(error.clone());
        }

        match input {
            Value::Bytes(bytes) => self.parse_json(bytes),
            Value::Record(record) => self.parse_fields(record),
            Value::Absent | Value::Null if self.inner.required => {
                ObjectResult::failed(ParseError::required())
            }
            Value::Absent | Value::Null => self.parse_fields(&IndexMap::new()),
            other => self.extraction_failed(other),
        }
    }

    /// Decodes a JSON object payload and parses it.
    pub fn parse_json(&self, payload: &[u8]) -> ObjectResult {
        if let Some(error) = &self.inner.build_error {
            return ObjectResult::failed(error.clone());
        }
        match source::json::decode_record(payload) {
            Ok(record) => self.parse_fields(&record),
            Err(error) => ObjectResult::failed(error.into()),
        }
    }

    /// Projects a serializable record (struct, map) and parses it.
    pub fn parse_record<S: Serialize + ?Sized>(&self, record: &S) -> ObjectResult {
        match Value::from_serialize(record) {
            Ok(value) => self.parse_value(&value),
            Err(cause) => ObjectResult::failed(ParseError::extraction_failed().with_cause(cause)),
        }
    }

    /// Reads, decodes and parses an HTTP request body or query string.
    ///
    /// See [`source::request`](crate::source::request) for the content-type
    /// dispatch rules.
    #[cfg(feature = "request")]
    pub fn parse_request<B: std::io::Read>(&self, request: http::Request<B>) -> ObjectResult {
        if let Some(error) = &self.inner.build_error {
            return ObjectResult::failed(error.clone());
        }
        match source::request::extract(request, &self.inner.limits) {
            Ok(record) => self.parse_fields(&record),
            Err(error) => ObjectResult::failed(error.into()),
        }
    }

    /// Builds a valid result from already trusted state, keeping declared
    /// fields only and skipping every rule. Useful for re-rendering a form
    /// from stored data.
    pub fn result_from<S: Serialize + ?Sized>(
        &self,
        state: &S,
    ) -> Result<ObjectResult, serde_json::Error> {
        Ok(self.project_value(&Value::from_serialize(state)?))
    }

    pub(crate) fn project_value(&self, input: &Value) -> ObjectResult {
        let mut result = ObjectResult::new();
        for (name, field) in &self.inner.fields {
            let raw = input.get(name).unwrap_or(&Value::Absent);
            result.insert_field(name, ParseResult::valid(field.project(raw)));
        }
        result
    }

    fn parse_fields(&self, record: &IndexMap<String, Value>) -> ObjectResult {
        let mut result = ObjectResult::new();
        for (name, field) in &self.inner.fields {
            let raw = record.get(name).unwrap_or(&Value::Absent);
            let field_result = field.parse_field(raw);
            tracing::trace!(field = %name, valid = field_result.is_valid(), "field evaluated");
            result.insert_field(name, field_result);
        }
        for refine in &self.inner.refiners {
            if let Err(error) = refine(&result) {
                result.push_error(error);
            }
        }
        result
    }

    fn extraction_failed(&self, input: &Value) -> ObjectResult {
        let mut result = ObjectResult::new();
        for name in self.inner.fields.keys() {
            let error = ParseError::extraction_failed()
                .with_cause(ParseError::invalid_type("record", input.kind_name()));
            result.insert_field(
                name,
                ParseResult::failure(FieldValue::Scalar(Value::Absent), error),
            );
        }
        result
    }

    /// Declared field names in evaluation order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.inner.fields.keys().map(String::as_str)
    }

    /// Request limits applied by [`parse_request`](Self::parse_request).
    #[must_use]
    pub fn limits(&self) -> &RequestLimits {
        &self.inner.limits
    }

    /// True when missing input is an error.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.inner.required
    }

    /// The sticky construction error, if any. Falls back to the first field
    /// that failed to build, with its path in `field`.
    #[must_use]
    pub fn build_error(&self) -> Option<&ParseError> {
        self.inner
            .build_error
            .as_ref()
            .or(self.inner.field_error.as_ref())
    }
}

impl fmt::Debug for ObjectValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectValidator")
            .field("fields", &self.inner.fields)
            .field("refiners", &self.inner.refiners.len())
            .field("required", &self.inner.required)
            .field("limits", &self.inner.limits)
            .field("build_error", &self.inner.build_error)
            .field("field_error", &self.inner.field_error)
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================
