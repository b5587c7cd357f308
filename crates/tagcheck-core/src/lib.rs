//! # tagcheck-core — Foundational Types for tagcheck
//!
//! This crate is the leaf of the tagcheck workspace. It defines the types
//! every other crate speaks in: how a record exposes its fields, how a
//! field's tag is split into rule tokens, and how failures are reported.
//!
//! ## Key Design Principles
//!
//! 1. **Explicit schema instead of reflection.** A record describes itself
//!    through the [`Inspect`] trait, returning a [`Value::Record`] with one
//!    [`Field`] per member. Each field carries its name, tag, visibility and
//!    value. No runtime type inspection happens anywhere.
//!
//! 2. **Closed value kinds.** [`Kind`] has exactly five variants. Rules
//!    match on it exhaustively, so an unsupported kind is always an explicit
//!    branch.
//!
//! 3. **Pure error rendering.** [`ValidationErrors`] renders by
//!    concatenating its members' messages. Rendering never performs I/O.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `tagcheck-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod tag;
pub mod value;

// Re-export primary types for ergonomic imports.
pub use error::{RuleError, ValidateError, ValidationError, ValidationErrors};
pub use tag::{parse_tag, RuleTokens};
pub use value::{Field, Inspect, Kind, Value, Visibility};
