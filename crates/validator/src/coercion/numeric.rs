//! Numeric targets: every integer width plus `f32` and `f64`.
//!
//! Integers are widened to `i128` before narrowing so the range check is
//! exact. Floats and text narrow through truncation toward zero.

use std::fmt;

use super::{CoercionMode, Scalar};
use crate::foundation::{ParseError, Value};

/// A numeric scalar. Bound rules compare in `f64` space, so 64-bit values
/// beyond 2^53 lose precision during comparison.
pub trait Numeric: Scalar<RuleInput = Number<Self>> + Copy + PartialOrd + fmt::Display {
    /// Widens to `f64` for rule evaluation.
    fn to_f64(self) -> f64;
}

/// What numeric rules inspect: the coerced value and the number the input
/// denoted before it was narrowed into `T`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Number<T> {
    value: T,
    magnitude: f64,
}

impl<T: Numeric> Number<T> {
    /// Wraps a value that was not narrowed.
    pub fn new(value: T) -> Self {
        Self {
            value,
            magnitude: value.to_f64(),
        }
    }

    pub(crate) fn narrowed(value: T, magnitude: Option<f64>) -> Self {
        Self {
            value,
            magnitude: magnitude.unwrap_or_else(|| value.to_f64()),
        }
    }

    /// The coerced value.
    pub const fn value(&self) -> T {
        self.value
    }

    /// The input before narrowing. `3.9` for an `int64` that holds `3`.
    pub const fn magnitude(&self) -> f64 {
        self.magnitude
    }
}

impl<T: Numeric> fmt::Display for Number<T> {
    #[allow(clippy::float_cmp)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.magnitude == self.value.to_f64() {
            fmt::Display::fmt(&self.value, f)
        } else {
            fmt::Display::fmt(&self.magnitude, f)
        }
    }
}

fn out_of_range(type_name: &'static str, value: impl fmt::Display) -> ParseError {
    ParseError::invalid_value()
        .with_code("out_of_range")
        .with_param("type", type_name)
        .with_param("value", value.to_string())
}

fn parse_text(text: &str, type_name: &'static str) -> Result<f64, ParseError> {
    text.parse::<f64>()
        .map_err(|e| ParseError::invalid_type(type_name, "text").with_cause(e))
}

fn integer_from_float(
    f: f64,
    mode: CoercionMode,
    type_name: &'static str,
) -> Result<i128, ParseError> {
    if !f.is_finite() {
        return Err(out_of_range(type_name, f));
    }
    if mode == CoercionMode::Strict && f.fract() != 0.0 {
        return Err(ParseError::invalid_value()
            .with_code("fractional")
            .with_param("type", type_name)
            .with_param("value", f.to_string()));
    }
    let truncated = f.trunc();
    if truncated.abs() >= 1e38 {
        return Err(out_of_range(type_name, f));
    }
    Ok(truncated as i128)
}

fn wide_integer(
    value: &Value,
    mode: CoercionMode,
    type_name: &'static str,
) -> Result<i128, ParseError> {
    match value {
        Value::Int(i) => Ok(i128::from(*i)),
        Value::UInt(u) => Ok(i128::from(*u)),
        Value::Float(f) => integer_from_float(*f, mode, type_name),
        Value::Text(text) => match text.parse::<i128>() {
            Ok(exact) => Ok(exact),
            Err(_) => integer_from_float(parse_text(text, type_name)?, mode, type_name),
        },
        other => Err(ParseError::invalid_type(type_name, other.kind_name())),
    }
}

fn wide_float(value: &Value, type_name: &'static str) -> Result<f64, ParseError> {
    match value {
        Value::Int(i) => Ok(*i as f64),
        Value::UInt(u) => Ok(*u as f64),
        Value::Float(f) => Ok(*f),
        Value::Text(text) => parse_text(text, type_name),
        other => Err(ParseError::invalid_type(type_name, other.kind_name())),
    }
}

/// The fractional number behind a float or text input that integer
/// conversion truncates.
fn fractional_magnitude(value: &Value) -> Option<f64> {
    match value {
        Value::Float(f) => Some(*f),
        Value::Text(text) if text.parse::<i128>().is_err() => text.parse::<f64>().ok(),
        _ => None,
    }
}

macro_rules! integer_scalar {
    ($($t:ty => $name:literal),* $(,)?) => {$(
        impl Scalar for $t {
            const TYPE_NAME: &'static str = $name;
            type RuleInput = Number<Self>;

            fn adopt(value: &Value) -> Option<Self> {
                match value {
                    Value::Int(i) => Self::try_from(*i).ok(),
                    Value::UInt(u) => Self::try_from(*u).ok(),
                    _ => None,
                }
            }

            fn convert(value: &Value, mode: CoercionMode) -> Result<Self, ParseError> {
                let wide = wide_integer(value, mode, $name)?;
                Self::try_from(wide).map_err(|_| out_of_range($name, wide))
            }

            fn into_value(self) -> Value {
                Value::from(self)
            }

            fn inspect<R>(
                &self,
                magnitude: Option<f64>,
                check: impl FnOnce(&Number<Self>) -> R,
            ) -> R {
                check(&Number::narrowed(*self, magnitude))
            }

            fn magnitude(input: &Value) -> Option<f64> {
                fractional_magnitude(input)
            }
        }

        impl Numeric for $t {
            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    )*};
}

integer_scalar! {
    i8 => "int8",
    i16 => "int16",
    i32 => "int32",
    i64 => "int64",
    u8 => "uint8",
    u16 => "uint16",
    u32 => "uint32",
    u64 => "uint64",
}

impl Scalar for f64 {
    const TYPE_NAME: &'static str = "float64";
    type RuleInput = Number<Self>;

    fn adopt(value: &Value) -> Option<Self> {
        match value {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    fn convert(value: &Value, _mode: CoercionMode) -> Result<Self, ParseError> {
        wide_float(value, Self::TYPE_NAME)
    }

    fn into_value(self) -> Value {
        Value::Float(self)
    }

    fn inspect<R>(&self, _magnitude: Option<f64>, check: impl FnOnce(&Number<Self>) -> R) -> R {
        check(&Number::new(*self))
    }
}

impl Numeric for f64 {
    fn to_f64(self) -> f64 {
        self
    }
}

impl Scalar for f32 {
    const TYPE_NAME: &'static str = "float32";
    type RuleInput = Number<Self>;

    fn adopt(_value: &Value) -> Option<Self> {
        None
    }

    fn convert(value: &Value, _mode: CoercionMode) -> Result<Self, ParseError> {
        let wide = wide_float(value, Self::TYPE_NAME)?;
        let narrow = wide as f32;
        if wide.is_finite() && narrow.is_infinite() {
            return Err(out_of_range(Self::TYPE_NAME, wide));
        }
        Ok(narrow)
    }

    fn into_value(self) -> Value {
        Value::Float(f64::from(self))
    }

    fn inspect<R>(&self, _magnitude: Option<f64>, check: impl FnOnce(&Number<Self>) -> R) -> R {
        check(&Number::new(*self))
    }
}

impl Numeric for f32 {
    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

// ============================================================================
// TESTS
// ============================================================================
