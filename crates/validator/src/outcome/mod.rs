//! Object parse outcome
//!
//! An [`ObjectResult`] keeps one [`FieldResult`] per declared field, in
//! declaration order, plus the aggregate error list. Field errors appear in
//! the aggregate list in field order; refiner errors follow them.

mod unmarshal;

use indexmap::IndexMap;

use crate::coercion::parse_bool;
use crate::foundation::result::join_messages;
use crate::foundation::{ParseError, ParseResult, Value};

pub use unmarshal::UnmarshalError;

/// The value produced for one object field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// A coerced scalar.
    Scalar(Value),
    /// A nested object's full result.
    Object(ObjectResult),
}

impl FieldValue {
    /// Converts to the tagged representation, recursing into nested objects.
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Self::Scalar(value) => value.clone(),
            Self::Object(object) => object.to_value(),
        }
    }
}

/// Per-field outcome.
pub type FieldResult = ParseResult<FieldValue>;

/// Outcome of parsing a structured input against an object schema.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectResult {
    fields: IndexMap<String, FieldResult>,
    errors: Vec<ParseError>,
}

impl ObjectResult {
    /// An empty, valid result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A result that failed before any field was evaluated.
    #[must_use]
    pub fn failed(error: ParseError) -> Self {
        Self {
            fields: IndexMap::new(),
            errors: vec![error],
        }
    }

    /// Records a field outcome. Its errors are attributed to `name` and
    /// appended to the aggregate list.
    pub(crate) fn insert_field(&mut self, name: &str, result: FieldResult) {
        let (value, errors) = result.into_parts();
        let errors: Vec<ParseError> = errors.into_iter().map(|e| e.prefixed(name)).collect();
        self.errors.extend(errors.iter().cloned());
        self.fields
            .insert(name.to_owned(), ParseResult::from_parts(value, errors));
    }

    /// True iff no field and no refiner reported an error.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Aggregate errors: field errors in declaration order, then refiner errors.
    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// All aggregate messages joined with `", "`.
    #[must_use]
    pub fn error_message(&self) -> String {
        join_messages(&self.errors)
    }

    /// Field outcomes in declaration order.
    #[must_use]
    pub fn fields(&self) -> &IndexMap<String, FieldResult> {
        &self.fields
    }

    /// Outcome of one field.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldResult> {
        self.fields.get(name)
    }

    /// Scalar value of a field.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&Value> {
        match self.fields.get(name).map(ParseResult::value) {
            Some(FieldValue::Scalar(value)) => Some(value),
            _ => None,
        }
    }

    /// Nested object result of a field.
    #[must_use]
    pub fn nested(&self, name: &str) -> Option<&ObjectResult> {
        match self.fields.get(name).map(ParseResult::value) {
            Some(FieldValue::Object(object)) => Some(object),
            _ => None,
        }
    }

    /// True if the field exists and has no errors.
    #[must_use]
    pub fn is_field_valid(&self, name: &str) -> bool {
        self.fields.get(name).is_some_and(ParseResult::is_valid)
    }

    /// The field's error messages joined with `", "`; empty when the field is
    /// valid or unknown.
    #[must_use]
    pub fn field_error(&self, name: &str) -> String {
        self.fields
            .get(name)
            .map(ParseResult::error_message)
            .unwrap_or_default()
    }

    /// Text value of a field. Numbers are formatted; anything else reads as
    /// an empty string.
    #[must_use]
    pub fn get_string(&self, name: &str) -> String {
        match self.value(name) {
            Some(Value::Text(text)) => text.clone(),
            Some(Value::Int(i)) => i.to_string(),
            Some(Value::UInt(u)) => u.to_string(),
            Some(Value::Float(f)) => f.to_string(),
            _ => String::new(),
        }
    }

    /// Integer value of a field, or zero. Floats truncate and decimal text
    /// is parsed.
    #[must_use]
    pub fn get_int(&self, name: &str) -> i64 {
        match self.value(name) {
            Some(Value::Int(i)) => *i,
            Some(Value::UInt(u)) => i64::try_from(*u).unwrap_or(0),
            Some(Value::Float(f)) => *f as i64,
            Some(Value::Text(text)) => text.parse().unwrap_or(0),
            _ => 0,
        }
    }

    /// Boolean value of a field, or `false`. Text uses the boolean coercion
    /// spellings and nonzero numbers are true.
    #[must_use]
    pub fn get_bool(&self, name: &str) -> bool {
        match self.value(name) {
            Some(Value::Bool(b)) => *b,
            Some(Value::Text(text)) => parse_bool(text).unwrap_or(false),
            Some(Value::Int(i)) => *i != 0,
            Some(Value::UInt(u)) => *u != 0,
            Some(Value::Float(f)) => *f != 0.0,
            _ => false,
        }
    }

    /// Appends an error. When the error's field names a declared field, the
    /// field's own result records it as well.
    pub fn push_error(&mut self, error: ParseError) {
        if let Some(field) = error
            .field
            .as_deref()
            .and_then(|name| self.fields.get_mut(name))
        {
            field.push_error(error.clone());
        }
        self.errors.push(error);
    }

    /// Field values keyed by field name, nested objects as records.
    #[must_use]
    pub fn to_map(&self) -> IndexMap<String, Value> {
        self.fields
            .iter()
            .map(|(name, result)| (name.clone(), result.value().to_value()))
            .collect()
    }

    /// All field values as a record.
    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::Record(self.to_map())
    }
}

// ============================================================================
// TESTS
// ============================================================================
