//! Core types and traits
//!
//! - **Values**: [`Value`], [`FileUpload`]
//! - **Errors**: [`ParseError`], [`ErrorKind`]
//! - **Results**: [`ParseResult`]
//! - **Traits**: [`Rule`], [`RuleExt`]
//!
//! Inputs are normalized into a [`Value`] once, at the boundary. Everything
//! downstream operates on that tagged representation and reports failures
//! as structured [`ParseError`]s collected into a [`ParseResult`].

pub mod error;
pub mod result;
pub mod traits;
pub mod value;

pub use error::{Cause, ErrorKind, ParseError};
pub use result::{ParseResult, cause};
pub use traits::{Rule, RuleExt};
pub use value::{FileUpload, Value};
