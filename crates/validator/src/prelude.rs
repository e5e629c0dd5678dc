//! Prelude module for convenient imports.
//!
//! Provides a single `use ursa_validator::prelude::*;` import that brings
//! in schema constructors, built-in rules, and the result types.
//!
//! # Examples
//!
//! ```rust
//! use ursa_validator::prelude::*;
//!
//! let email_field = string().rule(email()).required().build();
//! assert!(email_field.parse("ursa@example.com").is_valid());
//! ```

// ============================================================================
// FOUNDATION: Core traits, errors, values
// ============================================================================

pub use crate::foundation::{ErrorKind, FileUpload, ParseError, ParseResult, Rule, RuleExt, Value};

// ============================================================================
// SCHEMA: Builders and validators
// ============================================================================

pub use crate::schema::{
    FieldValidator, IntoField, ObjectBuilder, ObjectValidator, ScalarBuilder, ScalarValidator,
    boolean, files, float32, float64, int, int8, int16, int32, int64, number, object, scalar,
    string, time, uint8, uint16, uint32, uint64, uuid,
};

// ============================================================================
// RULES AND COMBINATORS
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::rules::*;

pub use crate::combinators::{Predicate, WithMessage, rule_fn};

// ============================================================================
// COERCION, OUTCOME, CONFIG
// ============================================================================

pub use crate::coercion::{Number, Numeric, TimeFormat};
pub use crate::config::RequestLimits;
pub use crate::outcome::{FieldResult, FieldValue, ObjectResult, UnmarshalError};
