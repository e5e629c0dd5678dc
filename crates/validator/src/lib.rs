//! # ursa-validator
//!
//! Schema-driven coercion and validation for scalars, records and HTTP
//! payloads.
//!
//! ## Quick Start
//!
//! ```rust
//! use ursa_validator::prelude::*;
//!
//! let schema = object()
//!     .field("Name", string().rule(min_length(5)))
//!     .field("Count", int())
//!     .build();
//!
//! let result = schema.parse_json(br#"{"Name":"Ursa","Count":"3"}"#);
//! assert!(!result.is_valid());
//! assert_eq!(result.field_error("Name"), "string too short");
//! assert_eq!(result.get_int("Count"), 3);
//! ```
//!
//! ## Parsing Pipeline
//!
//! Every scalar parse runs the same steps: missing input is resolved against
//! the default and the required flag, the input is coerced to the target
//! type (see [`coercion`]), then every rule runs and every failure is
//! collected. Object schemas run that pipeline per field in declaration order
//! and gather the outcome into an [`ObjectResult`](outcome::ObjectResult).
//!
//! ## Creating Rules
//!
//! Use the [`rule!`] macro for zero-boilerplate rules,
//! [`rule_fn`](combinators::rule_fn) for closures, or implement
//! [`Rule`](foundation::Rule) manually.
//!
//! ## Built-in Rules
//!
//! - **Numeric**: [`Min`](rules::Min), [`Max`](rules::Max),
//!   [`NonZero`](rules::NonZero), [`MustBeInteger`](rules::MustBeInteger)
//! - **String**: [`MinLength`](rules::MinLength), [`MaxLength`](rules::MaxLength),
//!   [`Matches`](rules::Matches), [`Email`](rules::Email), [`OneOf`](rules::OneOf)
//! - **Boolean**: [`MustBeTrue`](rules::MustBeTrue), [`MustBeFalse`](rules::MustBeFalse)
//! - **Temporal**: [`NotBefore`](rules::NotBefore), [`NotAfter`](rules::NotAfter)
//! - **Files**: [`MaxFileCount`](rules::MaxFileCount), [`MaxFileSize`](rules::MaxFileSize)
//!
//! ## Features
//!
//! - `request` (default): [`ObjectValidator::parse_request`](schema::ObjectValidator::parse_request)
//!   for JSON, urlencoded and multipart bodies and query strings.

// ParseError carries params and causes inline; boxing it would add an
// allocation to every failed rule.
#![allow(clippy::result_large_err)]

pub mod coercion;
pub mod combinators;
pub mod config;
pub mod foundation;
mod macros;
pub mod outcome;
pub mod prelude;
pub mod rules;
pub mod schema;
pub mod source;
