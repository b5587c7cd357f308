//! # Rule Registry
//!
//! Maps the rule token of a tag clause to its implementation. The registry
//! is a `static` built at compile time and is never mutated, so it can be
//! shared by any number of concurrent validations.
//!
//! Unknown names never reach an unguarded access: [`lookup`] returns
//! [`RuleError::InvalidSyntax`] for them.

use tagcheck_core::{RuleError, Value};

use crate::bounds::{Max, Min};
use crate::len::Len;
use crate::membership::In;
use crate::rule::{Rule, RuleName};

static RULES: [&dyn Rule; 4] = [&Len, &Min, &Max, &In];

/// Returns every registered rule, in [`RuleName::all`] order.
pub fn rules() -> &'static [&'static dyn Rule] {
    &RULES
}

/// Returns the registered rule names.
pub fn names() -> impl Iterator<Item = &'static str> {
    RuleName::all().iter().map(RuleName::as_str)
}

/// Returns the implementation for a known rule name.
pub fn get(name: RuleName) -> &'static dyn Rule {
    match name {
        RuleName::Len => &Len,
        RuleName::Min => &Min,
        RuleName::Max => &Max,
        RuleName::In => &In,
    }
}

/// Resolves a rule token as written in a tag.
///
/// # Errors
///
/// Returns [`RuleError::InvalidSyntax`] if the token names no registered rule.
pub fn lookup(token: &str) -> Result<&'static dyn Rule, RuleError> {
    let name = token.parse::<RuleName>().map_err(|err| {
        tracing::warn!(rule = token, "unknown validation rule");
        err
    })?;
    Ok(get(name))
}

/// Resolves `token` and applies the rule to `value` with `arg`.
pub fn apply(token: &str, value: &Value<'_>, arg: &str) -> Result<(), RuleError> {
    lookup(token)?.check(value, arg)
}
