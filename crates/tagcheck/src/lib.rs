//! # tagcheck — Declarative Struct-Field Validation
//!
//! Attach a tag string to each field of a record and validate the whole
//! record in one call. Every violation is collected; nothing short-circuits
//! except handing in something that is not a record.
//!
//! ## Tag Grammar
//!
//! ```text
//! tag    := clause (";" clause)*
//! clause := ruleName ":" ruleArg
//! ```
//!
//! Rules: `len` (exact code-point length), `min` / `max` (inclusive bounds on
//! string length or integer value), `in` (comma-separated membership). See
//! [`tagcheck_rules`] for the exact per-kind semantics.
//!
//! Sequence fields apply their tag to every element independently.
//!
//! ## Declaring Records
//!
//! Either implement [`Inspect`] by hand, returning a [`Value::Record`] built
//! from [`Field`]s, or declare the struct through [`record!`].
//!
//! ## Diagnostics
//!
//! Rendering an error is pure. Diagnostic events are emitted through
//! `tracing` under a `validate` span; install a subscriber to see them.
//!
//! ## Crate Policy
//!
//! - One synchronous pass per call; no shared mutable state.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod config;
pub mod macros;
pub mod validator;

mod walker;

pub use config::{ConfigError, TagPolicy, UnexportedPolicy, ValidatorConfig};
pub use validator::{validate, Validator};

pub use tagcheck_core::{
    parse_tag, Field, Inspect, Kind, RuleError, RuleTokens, ValidateError, ValidationError,
    ValidationErrors, Value, Visibility,
};
pub use tagcheck_rules::{Rule, RuleName};
