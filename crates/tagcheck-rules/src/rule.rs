//! # Rule Trait and Rule Names

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tagcheck_core::{RuleError, Value};

/// The closed vocabulary of rule names a tag may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleName {
    /// Exact string length in code points.
    Len,
    /// Lower bound on string length or integer value.
    Min,
    /// Upper bound on string length or integer value.
    Max,
    /// Membership in a comma-separated candidate list.
    In,
}

impl RuleName {
    /// Returns all rule names in registry order.
    pub fn all() -> &'static [RuleName] {
        &[Self::Len, Self::Min, Self::Max, Self::In]
    }

    /// Returns the name as written in a tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Len => "len",
            Self::Min => "min",
            Self::Max => "max",
            Self::In => "in",
        }
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleName {
    type Err = RuleError;

    /// Parses a rule name exactly as written in a tag (case-sensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "len" => Ok(Self::Len),
            "min" => Ok(Self::Min),
            "max" => Ok(Self::Max),
            "in" => Ok(Self::In),
            _ => Err(RuleError::InvalidSyntax),
        }
    }
}

/// A stateless check of one value against one string argument.
///
/// Implementations must not panic on any input; malformed arguments and
/// unsupported kinds are reported through [`RuleError`].
pub trait Rule: Send + Sync + fmt::Debug {
    /// The name this rule is registered under.
    fn name(&self) -> RuleName;

    /// Checks `value` against the rule argument `arg`.
    fn check(&self, value: &Value<'_>, arg: &str) -> Result<(), RuleError>;
}

/// Parses a signed base-10 bound.
pub(crate) fn parse_bound(arg: &str) -> Result<i64, RuleError> {
    arg.parse().map_err(|_| RuleError::InvalidSyntax)
}

/// Parses a non-negative base-10 length.
pub(crate) fn parse_length(arg: &str) -> Result<usize, RuleError> {
    arg.parse().map_err(|_| RuleError::InvalidSyntax)
}

/// Length of a string in Unicode code points, saturated to `i64`.
pub(crate) fn char_len(s: &str) -> i64 {
    i64::try_from(s.chars().count()).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str_roundtrip() {
        for name in RuleName::all() {
            let parsed: RuleName = name.as_str().parse().unwrap();
            assert_eq!(*name, parsed);
            assert_eq!(name.to_string(), name.as_str());
        }
    }

    #[test]
    fn test_from_str_invalid() {
        assert_eq!("LEN".parse::<RuleName>(), Err(RuleError::InvalidSyntax));
        assert_eq!("regex".parse::<RuleName>(), Err(RuleError::InvalidSyntax));
        assert_eq!("".parse::<RuleName>(), Err(RuleError::InvalidSyntax));
    }

    #[test]
    fn test_serde_format_matches_as_str() {
        for name in RuleName::all() {
            let json = serde_json::to_string(name).unwrap();
            assert_eq!(json, format!("\"{}\"", name.as_str()));
        }
    }

    #[test]
    fn test_parse_bound_accepts_signs() {
        assert_eq!(parse_bound("-4"), Ok(-4));
        assert_eq!(parse_bound("+4"), Ok(4));
        assert_eq!(parse_bound("abc"), Err(RuleError::InvalidSyntax));
        assert_eq!(parse_bound(" 4"), Err(RuleError::InvalidSyntax));
        assert_eq!(parse_bound(""), Err(RuleError::InvalidSyntax));
    }

    #[test]
    fn test_parse_length_rejects_negative() {
        assert_eq!(parse_length("5"), Ok(5));
        assert_eq!(parse_length("-1"), Err(RuleError::InvalidSyntax));
    }

    #[test]
    fn test_char_len_counts_code_points() {
        assert_eq!(char_len("héllo"), 5);
        assert_eq!("héllo".len(), 6);
        assert_eq!(char_len(""), 0);
    }
}
