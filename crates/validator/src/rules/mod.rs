//! Built-in rules
//!
//! - **Numeric**: [`Min`], [`Max`], [`NonZero`], [`MustBeInteger`]
//! - **String**: [`MinLength`], [`MaxLength`], [`Matches`], [`Email`], [`OneOf`]
//! - **Boolean**: [`MustBeTrue`], [`MustBeFalse`]
//! - **Temporal**: [`NotBefore`], [`NotAfter`]
//! - **Identifier**: [`NonNull`]
//! - **Files**: [`MaxFileCount`], [`MaxFileSize`]
//!
//! Every rule reports a fixed default message. Override it with
//! [`RuleExt::with_message`](crate::foundation::RuleExt::with_message).

mod boolean;
mod content;
mod file;
mod identifier;
mod length;
mod range;
mod temporal;

pub use boolean::{MustBeFalse, MustBeTrue, must_be_false, must_be_true};
pub use content::{Email, Matches, OneOf, email, matches, one_of};
pub use file::{MaxFileCount, MaxFileSize, max_file_count, max_file_size};
pub use identifier::{NonNull, non_null};
pub use length::{LengthMode, MaxLength, MinLength, max_length, min_length};
pub use range::{Max, Min, MustBeInteger, NonZero, max, min, must_be_integer, non_zero};
pub use temporal::{NotAfter, NotBefore, not_after, not_before};
