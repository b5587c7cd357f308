//! # `in` — Set Membership

use tagcheck_core::{RuleError, Value};

use crate::rule::{parse_bound, Rule, RuleName};

/// Passes iff the value equals one of the comma-separated candidates.
///
/// For integers every candidate must parse, even the ones that would not
/// match. For strings comparison is exact and case-sensitive, and the empty
/// string is always rejected as a syntax error. Other kinds are a syntax
/// error.
#[derive(Debug, Clone, Copy, Default)]
pub struct In;

impl Rule for In {
    fn name(&self) -> RuleName {
        RuleName::In
    }

    fn check(&self, value: &Value<'_>, arg: &str) -> Result<(), RuleError> {
        let mut candidates = arg.split(',');
        let found = match value {
            Value::Int(n) => {
                let parsed = candidates
                    .map(parse_bound)
                    .collect::<Result<Vec<i64>, _>>()?;
                parsed.contains(n)
            }
            Value::Str(s) => {
                if s.is_empty() {
                    return Err(RuleError::InvalidSyntax);
                }
                candidates.any(|candidate| candidate == *s)
            }
            _ => return Err(RuleError::InvalidSyntax),
        };
        if found {
            Ok(())
        } else {
            Err(RuleError::ValidationFailed)
        }
    }
}
