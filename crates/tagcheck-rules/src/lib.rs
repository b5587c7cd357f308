//! # tagcheck-rules — Built-in Validation Rules
//!
//! The four rules a tag may name, and the registry that maps a rule token
//! to its implementation.
//!
//! | Name | Argument | Str | Int | Other kinds |
//! |------|----------|-----|-----|-------------|
//! | `len` | non-negative integer | code points == arg | syntax error | syntax error |
//! | `min` | integer | code points >= arg | value >= arg | accepted |
//! | `max` | integer | code points <= arg | value <= arg | accepted |
//! | `in`  | comma-separated list | member (empty value is a syntax error) | member | syntax error |
//!
//! ## Crate Policy
//!
//! - The rule set is closed. [`RuleName`] is exhaustive and the registry
//!   is a `static` that cannot be mutated.
//! - Looking up an unknown rule name is a checked error
//!   ([`RuleError::InvalidSyntax`](tagcheck_core::RuleError::InvalidSyntax)),
//!   never a panic.

pub mod bounds;
pub mod len;
pub mod membership;
pub mod registry;
pub mod rule;

pub use bounds::{Max, Min};
pub use len::Len;
pub use membership::In;
pub use registry::{apply, get, lookup, names, rules};
pub use rule::{Rule, RuleName};
