//! # `len` — Exact String Length

use tagcheck_core::{RuleError, Value};

use crate::rule::{parse_length, Rule, RuleName};

/// Passes iff a string has exactly `arg` Unicode code points.
///
/// Only strings are supported; any other kind is a syntax error.
#[derive(Debug, Clone, Copy, Default)]
pub struct Len;

impl Rule for Len {
    fn name(&self) -> RuleName {
        RuleName::Len
    }

    fn check(&self, value: &Value<'_>, arg: &str) -> Result<(), RuleError> {
        let expected = parse_length(arg)?;
        let Value::Str(s) = value else {
            return Err(RuleError::InvalidSyntax);
        };
        if s.chars().count() != expected {
            return Err(RuleError::ValidationFailed);
        }
        Ok(())
    }
}
