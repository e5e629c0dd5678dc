//! Macros for creating rules with minimal boilerplate.
//!
//! # Examples
//!
//! ```rust
//! use ursa_validator::foundation::{ParseError, Rule};
//! use ursa_validator::rule;
//!
//! // Unit rule (no fields)
//! rule! {
//!     pub NotBlank for str;
//!     rule(input) { !input.trim().is_empty() }
//!     error(input) { ParseError::rule("not_blank", "string is blank") }
//!     fn not_blank();
//! }
//!
//! // Struct with fields
//! rule! {
//!     pub Prefix { prefix: String } for str;
//!     rule(self, input) { input.starts_with(self.prefix.as_str()) }
//!     error(self, input) { ParseError::rule("prefix", "missing prefix") }
//!     fn prefix(prefix: String);
//! }
//!
//! assert!(not_blank().validate(" x ").is_ok());
//! assert!(prefix("ur".into()).validate("nope").is_err());
//! ```

// ============================================================================
// RULE MACRO
// ============================================================================

/// Creates a complete rule: struct definition, [`Rule`](crate::foundation::Rule)
/// implementation, constructor, and factory function.
///
/// `#[derive(Debug, Clone)]` is always applied. Add extra derives via `#[derive(...)]`.
///
/// # Variants
///
/// - **Unit rule**: `pub Name for Input; rule(input) {..} error(input) {..} fn factory();`
/// - **Fields, auto `new`**: `pub Name { a: A } for Input; ... fn factory(a: A);`
/// - **Fields, custom `new`**: as above plus `new(args) { .. }` before `fn`.
/// - **Generic**: `pub Name<T: Bound> { a: T } for T; ... fn factory(a: T);`
#[macro_export]
macro_rules! rule {
    // ── Generic rule over one type parameter ─────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$g:ident: $bound:path> { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name<$g> {
            $(pub $field: $fty,)+
        }

        impl<$g: $bound> $name<$g> {
            /// Creates the rule.
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl<$g: $bound> $crate::foundation::Rule for $name<$g> {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> ::std::result::Result<(), $crate::foundation::ParseError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }

        #[must_use]
        $vis fn $factory<$g: $bound>($($farg: $faty),*) -> $name<$g> {
            $name::new($($farg),*)
        }
    };

    // ── Unit rule (no fields) + factory fn ───────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Rule for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&self, $inp: &Self::Input) -> ::std::result::Result<(), $crate::foundation::ParseError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Struct with fields + custom new + factory fn ─────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            /// Creates the rule.
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        $crate::rule!(@impl $name for $input; rule($self_, $inp) $rule error($self2, $einp) $err);

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Struct with fields + auto new + factory fn ───────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            /// Creates the rule.
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        $crate::rule!(@impl $name for $input; rule($self_, $inp) $rule error($self2, $einp) $err);

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Internal: Rule impl for a struct with fields ─────────────────────
    (@impl $name:ident for $input:ty; rule($self_:ident, $inp:ident) $rule:block error($self2:ident, $einp:ident) $err:block) => {
        impl $crate::foundation::Rule for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> ::std::result::Result<(), $crate::foundation::ParseError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };
}
