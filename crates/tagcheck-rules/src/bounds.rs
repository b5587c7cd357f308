//! # `min` / `max` — Inclusive Bounds
//!
//! Both rules measure strings by code-point count and integers by value.
//! Kinds they cannot measure pass unchecked; that lenience is logged at
//! `trace` so it stays visible without failing the record.

use tagcheck_core::{RuleError, Value};

use crate::rule::{char_len, parse_bound, Rule, RuleName};

/// Passes iff the measured value is at least `arg`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Min;

/// Passes iff the measured value is at most `arg`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Max;

impl Rule for Min {
    fn name(&self) -> RuleName {
        RuleName::Min
    }

    fn check(&self, value: &Value<'_>, arg: &str) -> Result<(), RuleError> {
        let bound = parse_bound(arg)?;
        match measure(self.name(), value) {
            Some(measured) if measured < bound => Err(RuleError::ValidationFailed),
            _ => Ok(()),
        }
    }
}

impl Rule for Max {
    fn name(&self) -> RuleName {
        RuleName::Max
    }

    fn check(&self, value: &Value<'_>, arg: &str) -> Result<(), RuleError> {
        let bound = parse_bound(arg)?;
        match measure(self.name(), value) {
            Some(measured) if measured > bound => Err(RuleError::ValidationFailed),
            _ => Ok(()),
        }
    }
}

fn measure(rule: RuleName, value: &Value<'_>) -> Option<i64> {
    match value {
        Value::Str(s) => Some(char_len(s)),
        Value::Int(n) => Some(*n),
        other => {
            tracing::trace!(%rule, kind = %other.kind(), "bound rule skipped unsupported kind");
            None
        }
    }
}
