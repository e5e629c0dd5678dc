//! Schema construction
//!
//! Free functions create builders for every supported target type. A
//! builder is sealed with `build()`; object fields accept builders directly.
//!
//! ```rust
//! use ursa_validator::prelude::*;
//!
//! let schema = object()
//!     .field("Name", string().rule(min_length(2)).required())
//!     .field("Age", uint8().rule(max(130_u8)))
//!     .field("Tags", string().rule(one_of(["a", "b"])).with_default("a"))
//!     .build();
//!
//! let result = schema.parse_json(br#"{"Name":"Jo","Age":"42"}"#);
//! assert!(result.is_valid());
//! assert_eq!(result.get_int("Age"), 42);
//! assert_eq!(result.get_string("Tags"), "a");
//! ```

mod field;
mod object;
mod scalar;

use chrono::{DateTime, Utc};

use crate::coercion::{Numeric, Scalar};
use crate::foundation::FileUpload;

pub use field::{FieldValidator, IntoField};
pub use object::{ObjectBuilder, ObjectValidator, Refiner};
pub use scalar::{ScalarBuilder, ScalarValidator};

/// Builder for any [`Scalar`] target.
pub fn scalar<T: Scalar>() -> ScalarBuilder<T> {
    ScalarBuilder::new()
}

/// Text.
pub fn string() -> ScalarBuilder<String> {
    scalar()
}

/// Boolean. Text accepts `1 t T TRUE true True` and their false twins.
pub fn boolean() -> ScalarBuilder<bool> {
    scalar()
}

/// Signed 64-bit integer.
pub fn int() -> ScalarBuilder<i64> {
    scalar()
}

/// Any numeric target.
pub fn number<T: Numeric>() -> ScalarBuilder<T> {
    scalar()
}

macro_rules! numeric_constructors {
    ($($name:ident => $ty:ty),+ $(,)?) => {
        $(
            #[doc = concat!("`", stringify!($ty), "` target.")]
            pub fn $name() -> ScalarBuilder<$ty> {
                scalar()
            }
        )+
    };
}

numeric_constructors! {
    int8 => i8,
    int16 => i16,
    int32 => i32,
    int64 => i64,
    uint8 => u8,
    uint16 => u16,
    uint32 => u32,
    uint64 => u64,
    float32 => f32,
    float64 => f64,
}

/// UTC date/time. Text needs a [`time_format`](ScalarBuilder::time_format).
pub fn time() -> ScalarBuilder<DateTime<Utc>> {
    scalar()
}

/// UUID. Hyphenated and simple text forms are parsed.
pub fn uuid() -> ScalarBuilder<::uuid::Uuid> {
    scalar()
}

/// Uploaded files from a multipart request.
pub fn files() -> ScalarBuilder<Vec<FileUpload>> {
    scalar()
}

/// Composite record.
pub fn object() -> ObjectBuilder {
    ObjectBuilder::new()
}
