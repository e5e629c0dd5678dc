//! Rule combinators
//!
//! - [`WithMessage`]: override a rule's message or code
//! - [`Predicate`]: adapt a closure into a rule

mod custom;
mod message;

pub use custom::{Predicate, rule_fn};
pub use message::WithMessage;
