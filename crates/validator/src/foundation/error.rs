//! Error types for parse failures
//!
//! [`ParseError`] is the single structured failure type produced by every
//! validator, rule and source adapter. Errors are classified by
//! [`ErrorKind`] and compared by tag, never by identity.
//!
//! All string fields use `Cow<'static, str>` so the static default messages
//! never allocate.

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

/// A wrapped underlying failure (regex compile error, JSON decode error, ...).
pub type Cause = Arc<dyn StdError + Send + Sync + 'static>;

// ============================================================================
// ERROR KIND
// ============================================================================

/// Closed classification of every failure the engine can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input shape does not match the target and no conversion exists.
    InvalidType,
    /// A conversion or transformer ran and failed.
    InvalidValue,
    /// Text input needs a transformer that was never registered.
    MissingTransformer,
    /// Required input was absent and no default covered it.
    RequiredPropertyMissing,
    /// The schema itself failed to build (bad default, bad pattern, duplicate field).
    InvalidValidatorState,
    /// A rule rejected an otherwise well-typed value.
    Rule,
    /// Request body exceeded the configured limit.
    BodyTooLarge,
    /// Request body was shorter than its declared length.
    BodySizeMismatch,
    /// Request content type has no adapter.
    UnsupportedContentType,
    /// Payload could not be decoded (JSON, form, multipart, body read).
    MalformedPayload,
    /// A field could not be extracted from the input shape.
    ExtractionFailed,
}

impl ErrorKind {
    /// Stable snake_case name, used as the default error code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidType => "invalid_type",
            Self::InvalidValue => "invalid_value",
            Self::MissingTransformer => "missing_transformer",
            Self::RequiredPropertyMissing => "required",
            Self::InvalidValidatorState => "invalid_validator_state",
            Self::Rule => "rule",
            Self::BodyTooLarge => "body_too_large",
            Self::BodySizeMismatch => "body_size_mismatch",
            Self::UnsupportedContentType => "unsupported_content_type",
            Self::MalformedPayload => "malformed_payload",
            Self::ExtractionFailed => "extraction_failed",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// PARSE ERROR
// ============================================================================

/// A structured parse failure with a field path, parameters and a cause chain.
///
/// # Examples
///
/// ```rust
/// use ursa_validator::foundation::{ErrorKind, ParseError};
///
/// let error = ParseError::rule("min", "number too small")
///     .with_param("min", "5")
///     .with_field("age");
///
/// assert!(error.is(ErrorKind::Rule));
/// assert_eq!(error.to_string(), "[age] min: number too small");
/// ```
#[derive(Debug, Clone)]
pub struct ParseError {
    /// Classification tag.
    pub kind: ErrorKind,

    /// Machine-readable code. Defaults to the kind name for sentinel errors
    /// and to the rule name for rule failures.
    pub code: Cow<'static, str>,

    /// Human-readable message.
    pub message: Cow<'static, str>,

    /// Field path for object validation, dotted for nested objects.
    ///
    /// Examples: "email", "address.zip"
    pub field: Option<Cow<'static, str>>,

    /// Ordered message parameters, e.g. `[("min", "5"), ("actual", "3")]`.
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,

    causes: Vec<Cause>,
}

impl ParseError {
    /// Creates an error of the given kind with an explicit code and message.
    pub fn new(
        kind: ErrorKind,
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            kind,
            code: code.into(),
            message: message.into(),
            field: None,
            params: Vec::new(),
            causes: Vec::new(),
        }
    }

    /// Creates an error whose code is the kind name.
    pub fn of_kind(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(kind, kind.as_str(), message)
    }

    /// Sets the field path.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a message parameter.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Replaces the message.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }

    /// Replaces the code.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_code(mut self, code: impl Into<Cow<'static, str>>) -> Self {
        self.code = code.into();
        self
    }

    /// Wraps an underlying failure.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_cause(mut self, cause: impl StdError + Send + Sync + 'static) -> Self {
        self.causes.push(Arc::new(cause));
        self
    }

    /// Wraps an already shared cause.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_shared_cause(mut self, cause: Cause) -> Self {
        self.causes.push(cause);
        self
    }

    /// Attributes the error to `parent`, producing `parent.field` when a
    /// field path is already present.
    #[must_use = "builder methods must be chained or built"]
    pub fn prefixed(mut self, parent: &str) -> Self {
        self.field = Some(match self.field.take() {
            Some(inner) => Cow::Owned(format!("{parent}.{inner}")),
            None => Cow::Owned(parent.to_owned()),
        });
        self
    }

    /// Returns true if this error carries the given kind tag.
    #[must_use]
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind == kind
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Wrapped causes in the order they were attached.
    #[must_use]
    pub fn causes(&self) -> &[Cause] {
        &self.causes
    }

    /// Returns true if any cause (searched recursively through nested
    /// `ParseError`s) carries the given kind.
    #[must_use]
    pub fn has_cause_kind(&self, kind: ErrorKind) -> bool {
        self.causes.iter().any(|cause| {
            cause
                .downcast_ref::<Self>()
                .is_some_and(|inner| inner.is(kind) || inner.has_cause_kind(kind))
        })
    }

    /// Converts the error to a JSON structure.
    pub fn to_json_value(&self) -> serde_json::Value {
        use serde_json::json;

        let params: serde_json::Map<String, serde_json::Value> = self
            .params
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
            .collect();

        json!({
            "kind": self.kind.as_str(),
            "code": self.code,
            "message": self.message,
            "field": self.field,
            "params": params,
            "causes": self.causes.iter().map(ToString::to_string).collect::<Vec<_>>(),
        })
    }
}

impl PartialEq for ParseError {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.code == other.code
            && self.message == other.message
            && self.field == other.field
            && self.params == other.params
            && self.causes.len() == other.causes.len()
            && self
                .causes
                .iter()
                .zip(&other.causes)
                .all(|(a, b)| a.to_string() == b.to_string())
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.code, self.message)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl StdError for ParseError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.causes
            .first()
            .map(|cause| &**cause as &(dyn StdError + 'static))
    }
}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ParseError {
    /// Input shape does not match the target type.
    pub fn invalid_type(expected: &'static str, actual: &'static str) -> Self {
        Self::of_kind(ErrorKind::InvalidType, "invalid type")
            .with_param("expected", expected)
            .with_param("actual", actual)
    }

    /// A conversion or transformer failed.
    pub fn invalid_value() -> Self {
        Self::of_kind(ErrorKind::InvalidValue, "invalid value")
    }

    /// Text input arrived but no transformer is registered.
    pub fn missing_transformer() -> Self {
        Self::of_kind(ErrorKind::MissingTransformer, "missing transformer")
    }

    /// Required input is absent.
    pub fn required() -> Self {
        Self::of_kind(
            ErrorKind::RequiredPropertyMissing,
            "missing required property",
        )
    }

    /// The schema failed to build.
    pub fn invalid_state() -> Self {
        Self::of_kind(ErrorKind::InvalidValidatorState, "invalid validator state")
    }

    /// A rule rejected the value.
    pub fn rule(
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new(ErrorKind::Rule, code, message)
    }

    /// A field could not be pulled out of the input.
    pub fn extraction_failed() -> Self {
        Self::of_kind(ErrorKind::ExtractionFailed, "failed to extract value")
    }
}

// ============================================================================
// TESTS
// ============================================================================
