//! Type coercion strategies
//!
//! A [`Scalar`] is a target type a scalar validator can produce. Coercion
//! of a foreign [`Value`] into a scalar follows one fixed precedence:
//!
//! 1. input already of the target type is adopted as-is;
//! 2. a registered [`Transformer`] runs next (failure is `InvalidValue`);
//! 3. otherwise the type's generic conversion is attempted;
//! 4. anything left is `InvalidType` (or `MissingTransformer` when only a
//!    transformer could have handled the input).
//!
//! Numeric narrowing rejects out-of-range values instead of wrapping or
//! saturating. Text reaches integer targets through a float intermediate, so
//! `"3.9"` becomes `3` unless [`CoercionMode::Strict`] is selected. Numeric
//! rules still see `3.9` through [`Number::magnitude`].

mod file;
mod identifier;
mod numeric;
mod temporal;
mod text;

use std::fmt;
use std::sync::Arc;

use crate::foundation::{ParseError, Value};

pub use numeric::{Number, Numeric};
pub use temporal::TimeFormat;
pub(crate) use text::parse_bool;

/// A registered conversion from a foreign representation into `T`.
pub type Transformer<T> = Arc<dyn Fn(&Value) -> Result<T, ParseError> + Send + Sync>;

/// How lenient generic conversions are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CoercionMode {
    /// Fractional input truncates toward zero for integer targets.
    #[default]
    Lenient,
    /// Fractional input is rejected for integer targets.
    Strict,
}

/// A target type for scalar validation.
pub trait Scalar: Clone + Default + fmt::Debug + Send + Sync + 'static {
    /// Name used in type-mismatch parameters.
    const TYPE_NAME: &'static str;

    /// What rules inspect: `str` for strings, `[FileUpload]` for file lists,
    /// `Self` otherwise.
    type RuleInput: ?Sized + 'static;

    /// Returns the value when the input already is of this type.
    fn adopt(value: &Value) -> Option<Self>;

    /// Generic representational conversion.
    fn convert(value: &Value, mode: CoercionMode) -> Result<Self, ParseError>;

    /// Converts back into the tagged representation.
    fn into_value(self) -> Value;

    /// Hands `check` what rules inspect. `magnitude` is the number the input
    /// denoted before it was narrowed, when coercion narrowed it.
    fn inspect<R>(&self, magnitude: Option<f64>, check: impl FnOnce(&Self::RuleInput) -> R) -> R;

    /// The number `input` denotes when generic conversion may narrow it.
    fn magnitude(_input: &Value) -> Option<f64> {
        None
    }

    /// Transformer registered when the schema does not supply one.
    fn default_transformer() -> Option<Transformer<Self>> {
        None
    }
}

/// A coerced value plus the number it was narrowed from, if any.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Coerced<T> {
    pub(crate) value: T,
    pub(crate) magnitude: Option<f64>,
}

impl<T> Coerced<T> {
    pub(crate) const fn exact(value: T) -> Self {
        Self {
            value,
            magnitude: None,
        }
    }
}

/// Runs the full coercion precedence for one input.
pub(crate) fn coerce<T: Scalar>(
    input: &Value,
    transformer: Option<&Transformer<T>>,
    mode: CoercionMode,
) -> Result<Coerced<T>, ParseError> {
    if let Some(value) = T::adopt(input) {
        return Ok(Coerced::exact(value));
    }
    if let Some(transform) = transformer {
        return transform(input)
            .map(Coerced::exact)
            .map_err(|cause| ParseError::invalid_value().with_cause(cause));
    }
    T::convert(input, mode).map(|value| Coerced {
        value,
        magnitude: T::magnitude(input),
    })
}

pub(crate) fn mismatch<T: Scalar>(input: &Value) -> ParseError {
    ParseError::invalid_type(T::TYPE_NAME, input.kind_name())
}
