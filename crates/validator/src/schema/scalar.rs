//! Scalar validator
//!
//! A [`ScalarBuilder`] collects rules and options; [`ScalarBuilder::build`]
//! seals them into an immutable, cheaply clonable [`ScalarValidator`].

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::coercion::{CoercionMode, Coerced, Scalar, TimeFormat, Transformer, coerce};
use crate::foundation::{ParseError, ParseResult, Rule, Value};

type BoxedRule<T> = Box<dyn Rule<Input = <T as Scalar>::RuleInput>>;

// ============================================================================
// BUILDER
// ============================================================================

/// Configuration phase of a scalar schema.
///
/// # Examples
///
/// ```rust
/// use ursa_validator::prelude::*;
///
/// let code = string()
///     .rule(min_length(4))
///     .rule(matches("^[0-9]*$"))
///     .required_message("required")
///     .build();
///
/// assert!(code.parse("0123").is_valid());
/// assert_eq!(code.parse(Value::Null).error_message(), "required");
/// assert_eq!(code.parse("abc").errors().len(), 2);
/// ```
#[must_use = "builders do nothing until built"]
pub struct ScalarBuilder<T: Scalar> {
    rules: Vec<BoxedRule<T>>,
    transformer: Option<Transformer<T>>,
    default: Option<Value>,
    required: bool,
    required_message: Option<Cow<'static, str>>,
    mode: CoercionMode,
}

impl<T: Scalar> Default for ScalarBuilder<T> {
    fn default() -> Self {
        Self {
            rules: Vec::new(),
            transformer: None,
            default: None,
            required: false,
            required_message: None,
            mode: CoercionMode::Lenient,
        }
    }
}

impl<T: Scalar> ScalarBuilder<T> {
    /// Starts an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule. Rules run in the order they were added.
    pub fn rule<R>(mut self, rule: R) -> Self
    where
        R: Rule<Input = T::RuleInput> + 'static,
    {
        self.rules.push(Box::new(rule));
        self
    }

    /// Missing input fails with `RequiredPropertyMissing` unless a default
    /// covers it.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Like [`required`](Self::required) with a custom message.
    pub fn required_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.required = true;
        self.required_message = Some(message.into());
        self
    }

    /// Substitutes `value` for missing input. The default is coerced when
    /// the schema is built; an incompatible default makes every parse fail
    /// with `InvalidValidatorState`.
    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Registers a transformer, replacing any default one.
    pub fn transform<F>(mut self, transform: F) -> Self
    where
        F: Fn(&Value) -> Result<T, ParseError> + Send + Sync + 'static,
    {
        self.transformer = Some(Arc::new(transform));
        self
    }

    /// Rejects fractional input for integer targets instead of truncating.
    pub fn strict(mut self) -> Self {
        self.mode = CoercionMode::Strict;
        self
    }

    /// Seals the schema.
    pub fn build(self) -> ScalarValidator<T> {
        let transformer = self.transformer.or_else(T::default_transformer);
        let mut build_error = None;

        let default = match self.default {
            None => None,
            Some(raw) => match coerce::<T>(&raw, transformer.as_ref(), self.mode) {
                Ok(value) => Some(value),
                Err(cause) => {
                    tracing::debug!(
                        target_type = T::TYPE_NAME,
                        error = %cause,
                        "scalar schema sealed with an incompatible default"
                    );
                    build_error = Some(
                        ParseError::invalid_state()
                            .with_code("invalid_default")
                            .with_param("type", T::TYPE_NAME)
                            .with_cause(cause),
                    );
                    None
                }
            },
        };

        ScalarValidator {
            inner: Arc::new(ScalarInner {
                rules: self.rules,
                transformer,
                default,
                required: self.required,
                required_message: self.required_message,
                mode: self.mode,
                build_error,
            }),
        }
    }
}

impl ScalarBuilder<DateTime<Utc>> {
    /// Registers a textual layout, e.g. `TimeFormat::Rfc3339` or `"%Y-%m-%d"`.
    pub fn time_format(mut self, format: impl Into<TimeFormat>) -> Self {
        self.transformer = Some(format.into().into_transformer());
        self
    }
}

impl<T: Scalar> fmt::Debug for ScalarBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScalarBuilder")
            .field("type", &T::TYPE_NAME)
            .field("rules", &self.rules.len())
            .field("required", &self.required)
            .field("default", &self.default)
            .finish()
    }
}

// ============================================================================
// VALIDATOR
// ============================================================================

struct ScalarInner<T: Scalar> {
    rules: Vec<BoxedRule<T>>,
    transformer: Option<Transformer<T>>,
    default: Option<Coerced<T>>,
    required: bool,
    required_message: Option<Cow<'static, str>>,
    mode: CoercionMode,
    build_error: Option<ParseError>,
}

/// A sealed scalar schema. Parsing never mutates it, so one instance can be
/// shared across threads.
#[derive(Clone)]
pub struct ScalarValidator<T: Scalar> {
    inner: Arc<ScalarInner<T>>,
}

impl<T: Scalar> ScalarValidator<T> {
    /// Normalizes `input` and parses it.
    pub fn parse(&self, input: impl Into<Value>) -> ParseResult<T> {
        self.parse_value(&input.into())
    }

    /// Parses an already normalized value.
    pub fn parse_value(&self, input: &Value) -> ParseResult<T> {
        let inner = &*self.inner;
        if let Some(error) = &inner.build_error {
            return ParseResult::failure(T::default(), error.clone());
        }

        if input.is_missing() {
            if let Some(default) = &inner.default {
                return self.evaluate(default.clone());
            }
            if inner.required {
                let mut error = ParseError::required();
                if let Some(message) = &inner.required_message {
                    error = error.with_message(message.clone());
                }
                return ParseResult::failure(T::default(), error);
            }
            return ParseResult::valid(T::default());
        }

        match self.coerce(input) {
            Ok(value) => self.evaluate(value),
            Err(error) => ParseResult::failure(T::default(), error),
        }
    }

    /// Coerces without running rules.
    pub(crate) fn coerce(&self, input: &Value) -> Result<Coerced<T>, ParseError> {
        coerce(input, self.inner.transformer.as_ref(), self.inner.mode)
    }

    pub(crate) fn default_value(&self) -> Option<&T> {
        self.inner.default.as_ref().map(|default| &default.value)
    }

    fn evaluate(&self, coerced: Coerced<T>) -> ParseResult<T> {
        let Coerced { value, magnitude } = coerced;
        let errors: Vec<ParseError> = value.inspect(magnitude, |subject| {
            self.inner
                .rules
                .iter()
                .filter_map(|rule| rule.validate(subject).err())
                .collect()
        });
        ParseResult::from_parts(value, errors)
    }

    /// True when missing input is an error.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.inner.required
    }

    /// The sticky construction error, if any.
    #[must_use]
    pub fn build_error(&self) -> Option<&ParseError> {
        self.inner.build_error.as_ref()
    }
}

impl<T: Scalar> fmt::Debug for ScalarValidator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScalarValidator")
            .field("type", &T::TYPE_NAME)
            .field("rules", &self.inner.rules.len())
            .field("required", &self.inner.required)
            .field("default", &self.inner.default)
            .field("build_error", &self.inner.build_error)
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use uuid::Uuid;

    use super::*;
    use crate::foundation::{ErrorKind, RuleExt};
    use crate::rules::{
        matches, max, max_length, min, min_length, must_be_integer, non_null, not_after, not_before,
    };

    fn bounded_int() -> ScalarValidator<i64> {
        ScalarBuilder::new()
            .rule(min(5).with_message("Number should be >= 5"))
            .rule(max(10))
            .build()
    }

    #[test]
    fn test_int_from_text() {
        assert_eq!(bounded_int().parse("7").get(), Some(&7));
    }

    #[test]
    fn test_int_from_garbage_is_invalid_type() {
        let result = bounded_int().parse("ursa");
        assert_eq!(result.errors().len(), 1);
        assert!(result.errors()[0].is(ErrorKind::InvalidType));
    }

    #[test]
    fn test_float_truncates_then_rules_run() {
        let result = bounded_int().parse(3.7);
        assert_eq!(*result.value(), 3);
        assert_eq!(result.error_message(), "Number should be >= 5");
    }

    #[test]
    fn test_rules_see_fraction_before_truncation() {
        let whole = ScalarBuilder::<i64>::new().rule(must_be_integer()).build();
        let result = whole.parse("3.9");
        assert_eq!(*result.value(), 3);
        assert_eq!(result.error_message(), "number is not integer");
        assert!(whole.parse("3").is_valid());
        assert!(whole.parse(4.0).is_valid());

        let capped = ScalarBuilder::<i64>::new().rule(max(10)).build();
        let result = capped.parse("10.5");
        assert_eq!(*result.value(), 10);
        assert_eq!(result.error_message(), "number too large");
        assert_eq!(result.errors()[0].param("actual"), Some("10.5"));
        assert!(capped.parse("10").is_valid());
    }

    #[test]
    fn test_fractional_default_checked_before_truncation() {
        let v = ScalarBuilder::<i64>::new()
            .rule(must_be_integer())
            .with_default("3.9")
            .build();
        assert!(v.build_error().is_none());
        let result = v.parse(Value::Null);
        assert_eq!(*result.value(), 3);
        assert_eq!(result.error_message(), "number is not integer");
    }

    #[test]
    fn test_transformed_value_is_not_narrowed() {
        let v = ScalarBuilder::<i64>::new()
            .transform(|_| Ok(12))
            .rule(max(10))
            .build();
        assert_eq!(v.parse("4.5").errors()[0].param("actual"), Some("12"));
    }

    #[test]
    fn test_bound_edges() {
        let v = bounded_int();
        assert!(v.parse(10).is_valid());
        assert_eq!(v.parse(11).error_message(), "number too large");
        assert_eq!(v.parse(100).error_message(), "number too large");
    }

    #[test]
    fn test_missing_input() {
        assert_eq!(bounded_int().parse(Value::Null), ParseResult::valid(0));
        assert_eq!(bounded_int().parse(None::<i64>), ParseResult::valid(0));

        let required = ScalarBuilder::<i64>::new().required().build();
        let result = required.parse(Value::Absent);
        assert_eq!(result.errors(), [ParseError::required()]);
    }

    #[test]
    fn test_default_runs_rules() {
        let v = ScalarBuilder::<i64>::new()
            .rule(min(5))
            .with_default(2)
            .required()
            .build();
        let result = v.parse(Value::Null);
        assert_eq!(*result.value(), 2);
        assert_eq!(result.error_message(), "number too small");
    }

    #[test]
    fn test_incompatible_default_is_sticky() {
        let v = ScalarBuilder::<bool>::new().with_default("maybe").build();
        assert!(v.build_error().is_some());
        for input in [Value::from(true), Value::Null, Value::from("t")] {
            let result = v.parse_value(&input);
            assert_eq!(result.errors().len(), 1);
            assert!(result.errors()[0].is(ErrorKind::InvalidValidatorState));
        }
    }

    #[test]
    fn test_string_rules_all_run() {
        let v = ScalarBuilder::<String>::new()
            .rule(min_length(5))
            .rule(max_length(10))
            .rule(matches("^[0-9]*$"))
            .build();
        assert_eq!(v.parse("abc1").errors().len(), 2);
        assert_eq!(v.parse("0123").errors().len(), 1);
    }

    #[test]
    fn test_default_string() {
        let v = ScalarBuilder::<String>::new()
            .rule(min_length(5))
            .with_default("01234678")
            .build();
        assert!(v.parse(Value::Null).is_valid());
    }

    #[test]
    fn test_time_requires_format() {
        let low = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let high = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();

        let bare = ScalarBuilder::<DateTime<Utc>>::new()
            .rule(not_before(low))
            .rule(not_after(high))
            .build();
        let result = bare.parse("2024-01-01T00:00:00Z");
        assert_eq!(result.errors(), [ParseError::missing_transformer()]);

        let formatted = ScalarBuilder::<DateTime<Utc>>::new()
            .time_format(TimeFormat::Rfc3339)
            .rule(not_before(low))
            .rule(not_after(high))
            .build();
        assert!(formatted.parse("2024-01-01T00:00:00Z").is_valid());
        assert_eq!(
            formatted.parse("2019-01-01T00:00:00Z").error_message(),
            "date is too early"
        );
    }

    #[test]
    fn test_transformer_failure_stops_rules() {
        let v = ScalarBuilder::<DateTime<Utc>>::new()
            .time_format(TimeFormat::Rfc3339)
            .rule(not_before(Utc::now()))
            .build();
        let result = v.parse(42);
        assert_eq!(result.errors().len(), 1);
        assert!(result.errors()[0].is(ErrorKind::InvalidValue));
        assert!(result.errors()[0].has_cause_kind(ErrorKind::InvalidType));
    }

    #[test]
    fn test_uuid_text_and_nil() {
        let v = ScalarBuilder::<Uuid>::new().rule(non_null()).build();
        let id = Uuid::new_v4();
        assert_eq!(v.parse(id.to_string()).get(), Some(&id));
        assert_eq!(
            v.parse("00000000-0000-0000-0000-000000000000").error_message(),
            "uuid is zero"
        );
    }

    #[test]
    fn test_custom_transformer_wins_over_conversion() {
        let v = ScalarBuilder::<i64>::new()
            .transform(|value| match value {
                Value::Text(text) => i64::from_str_radix(text.trim_start_matches("0x"), 16)
                    .map_err(|e| ParseError::invalid_value().with_cause(e)),
                other => Err(ParseError::invalid_type("hex", other.kind_name())),
            })
            .build();
        assert_eq!(v.parse("0xff").get(), Some(&255));
        assert_eq!(v.parse(7).get(), Some(&7));
    }

    #[test]
    fn test_strict_mode() {
        let v = ScalarBuilder::<i32>::new().strict().build();
        assert!(v.parse("3.9").errors()[0].is(ErrorKind::InvalidValue));
        assert_eq!(v.parse("3").get(), Some(&3));
    }

    #[test]
    fn test_validator_is_shareable() {
        fn assert_send_sync<V: Send + Sync + Clone>() {}
        assert_send_sync::<ScalarValidator<String>>();
        assert_send_sync::<ScalarValidator<DateTime<Utc>>>();
    }
}
