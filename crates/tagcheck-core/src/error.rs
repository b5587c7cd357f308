//! # Error Types — Validation Error Hierarchy
//!
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Design
//!
//! - [`RuleError`] is the cause produced by one rule application. It
//!   separates malformed input (`InvalidSyntax`) from values that fail a
//!   well-formed rule (`ValidationFailed`). `UnexportedField` is reserved
//!   for fields the validator is not allowed to read.
//! - [`ValidationError`] wraps exactly one cause together with where it was
//!   found. Its message is the cause's message alone.
//! - [`ValidationErrors`] keeps every failure in discovery order and renders
//!   as the plain concatenation of its members' messages.
//! - [`ValidateError`] is what the entry point returns: either the input
//!   was not a record, or the full aggregate.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The cause of a single rule failure.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleError {
    /// The rule argument did not parse, the rule does not support the
    /// value's kind, or the rule name is unknown.
    #[error("invalid validator syntax")]
    InvalidSyntax,

    /// The value is well-formed but fails the rule.
    #[error("value does not satisfy validation rule")]
    ValidationFailed,

    /// The field cannot be read by the validator.
    #[error("validation for unexported field is not allowed")]
    UnexportedField,
}

impl RuleError {
    /// Returns true for [`RuleError::InvalidSyntax`].
    pub fn is_syntax(&self) -> bool {
        matches!(self, Self::InvalidSyntax)
    }

    /// Returns true for [`RuleError::ValidationFailed`].
    pub fn is_violation(&self) -> bool {
        matches!(self, Self::ValidationFailed)
    }
}

/// One rule failure on one field (or one element of a sequence field).
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{cause}")]
pub struct ValidationError {
    field: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    rule: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    index: Option<usize>,
    cause: RuleError,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, cause: RuleError) -> Self {
        Self {
            field: field.into(),
            rule: None,
            index: None,
            cause,
        }
    }

    /// Records the rule token that produced the failure.
    pub fn with_rule(mut self, rule: impl Into<String>) -> Self {
        self.rule = Some(rule.into());
        self
    }

    /// Records the sequence element the failure was found at.
    pub fn with_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    /// Name of the offending field.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Rule token as written in the tag, if a rule was involved.
    pub fn rule(&self) -> Option<&str> {
        self.rule.as_deref()
    }

    /// Element index for failures inside sequence fields.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn cause(&self) -> RuleError {
        self.cause
    }
}

/// Every failure of one validation pass, in discovery order.
///
/// Order is field declaration order, then rule order within the tag, then
/// element order for sequence fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Returns the number of failures.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if nothing failed.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns a slice of all failures.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    /// Counts the failures with the given cause.
    pub fn count_of(&self, cause: RuleError) -> usize {
        self.errors.iter().filter(|e| e.cause == cause).count()
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<ValidationError> {
        self.errors
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for error in &self.errors {
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl Extend<ValidationError> for ValidationErrors {
    fn extend<I: IntoIterator<Item = ValidationError>>(&mut self, iter: I) {
        self.errors.extend(iter);
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

/// Error returned by the validation entry point.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidateError {
    /// The input is not a struct-like record. No field was inspected.
    #[error("wrong argument given, should be a struct")]
    NotStruct,

    /// One or more fields failed; carries the complete aggregate.
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),
}

impl ValidateError {
    /// Returns the aggregate for [`ValidateError::Invalid`].
    pub fn errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Invalid(errors) => Some(errors),
            Self::NotStruct => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_error_messages() {
        assert_eq!(RuleError::InvalidSyntax.to_string(), "invalid validator syntax");
        assert_eq!(
            RuleError::UnexportedField.to_string(),
            "validation for unexported field is not allowed"
        );
        assert!(RuleError::InvalidSyntax.is_syntax());
        assert!(RuleError::ValidationFailed.is_violation());
        assert!(!RuleError::UnexportedField.is_violation());
    }

    #[test]
    fn test_validation_error_renders_cause_only() {
        let err = ValidationError::new("tags", RuleError::ValidationFailed)
            .with_rule("min")
            .with_index(2);
        assert_eq!(err.to_string(), "value does not satisfy validation rule");
        assert_eq!(err.field(), "tags");
        assert_eq!(err.rule(), Some("min"));
        assert_eq!(err.index(), Some(2));
        assert_eq!(err.cause(), RuleError::ValidationFailed);
    }

    #[test]
    fn test_aggregate_concatenates_without_separator() {
        let errors: ValidationErrors = vec![
            ValidationError::new("name", RuleError::ValidationFailed),
            ValidationError::new("age", RuleError::InvalidSyntax),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            errors.to_string(),
            "value does not satisfy validation ruleinvalid validator syntax"
        );
    }

    #[test]
    fn test_empty_aggregate_renders_empty() {
        assert_eq!(ValidationErrors::new().to_string(), "");
    }

    #[test]
    fn test_aggregate_preserves_order_and_counts() {
        let mut errors = ValidationErrors::new();
        errors.push(ValidationError::new("a", RuleError::InvalidSyntax));
        errors.push(ValidationError::new("b", RuleError::ValidationFailed));
        errors.extend([ValidationError::new("c", RuleError::ValidationFailed)]);

        assert_eq!(errors.len(), 3);
        assert_eq!(errors.count_of(RuleError::ValidationFailed), 2);
        assert_eq!(errors.count_of(RuleError::UnexportedField), 0);
        let fields: Vec<&str> = errors.iter().map(ValidationError::field).collect();
        assert_eq!(fields, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_into_inner_yields_discovery_order() {
        let errors: ValidationErrors = [
            ValidationError::new("first", RuleError::ValidationFailed).with_rule("len"),
            ValidationError::new("second", RuleError::InvalidSyntax).with_index(4),
        ]
        .into_iter()
        .collect();
        let inner = errors.into_inner();
        assert_eq!(inner.len(), 2);
        assert_eq!(inner[0].field(), "first");
        assert_eq!(inner[0].rule(), Some("len"));
        assert_eq!(inner[1].index(), Some(4));
    }

    #[test]
    fn test_validate_error_messages() {
        assert_eq!(
            ValidateError::NotStruct.to_string(),
            "wrong argument given, should be a struct"
        );
        assert!(ValidateError::NotStruct.errors().is_none());

        let inner: ValidationErrors =
            std::iter::once(ValidationError::new("x", RuleError::InvalidSyntax)).collect();
        let err = ValidateError::from(inner.clone());
        assert_eq!(err.to_string(), inner.to_string());
        assert_eq!(err.errors(), Some(&inner));
    }

    #[test]
    fn test_validation_error_serializes_context() {
        let err = ValidationError::new("age", RuleError::ValidationFailed).with_rule("max");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"field": "age", "rule": "max", "cause": "validation_failed"})
        );
    }

    #[test]
    fn test_aggregate_serializes_as_list() {
        let errors: ValidationErrors =
            std::iter::once(ValidationError::new("n", RuleError::InvalidSyntax)).collect();
        let json = serde_json::to_value(&errors).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["cause"], "invalid_syntax");
    }
}
