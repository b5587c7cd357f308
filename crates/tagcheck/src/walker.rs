//! # Field Walker
//!
//! Visits a record's fields in declaration order and turns each tag into
//! rule applications:
//!
//! - sequence fields: for every `(rule, arg)` pair, every element is checked
//!   on its own;
//! - any other field: every pair is applied to the field value, provided
//!   the tag is balanced.
//!
//! Each failing application becomes exactly one [`ValidationError`]. Errors
//! are appended in discovery order: field, then rule, then element.

use tagcheck_core::{Field, RuleError, RuleTokens, ValidationError, ValidationErrors, Value};

use crate::config::{TagPolicy, UnexportedPolicy, ValidatorConfig};

pub(crate) struct FieldWalker<'c> {
    config: &'c ValidatorConfig,
}

impl<'c> FieldWalker<'c> {
    pub(crate) fn new(config: &'c ValidatorConfig) -> Self {
        Self { config }
    }

    /// Walks every field and returns all failures.
    pub(crate) fn walk(&self, fields: &[Field<'_>]) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        for field in fields {
            self.visit(field, &mut errors);
        }
        errors
    }

    fn visit(&self, field: &Field<'_>, errors: &mut ValidationErrors) {
        if !field.is_exported() {
            match self.config.unexported {
                UnexportedPolicy::Skip => {
                    tracing::trace!(field = field.name(), "skipping unexported field");
                }
                UnexportedPolicy::Reject if !field.tag().is_empty() => {
                    tracing::debug!(field = field.name(), "tagged unexported field rejected");
                    errors.push(ValidationError::new(field.name(), RuleError::UnexportedField));
                }
                UnexportedPolicy::Reject => {}
            }
            return;
        }

        let tokens = RuleTokens::parse(field.tag());
        if tokens.is_empty() {
            return;
        }

        if !tokens.is_balanced() {
            match self.config.tag_policy {
                TagPolicy::Strict => {
                    let mut error = ValidationError::new(field.name(), RuleError::InvalidSyntax);
                    if let Some(rule) = tokens.dangling() {
                        error = error.with_rule(rule);
                    }
                    tracing::debug!(field = field.name(), tag = field.tag(), "unbalanced tag");
                    errors.push(error);
                    return;
                }
                TagPolicy::Lenient if !matches!(field.value(), Value::Seq(_)) => {
                    tracing::trace!(field = field.name(), tag = field.tag(), "skipping field with unbalanced tag");
                    return;
                }
                TagPolicy::Lenient => {}
            }
        }

        match field.value() {
            Value::Seq(elements) => {
                for (rule, arg) in tokens.pairs() {
                    for (index, element) in elements.iter().enumerate() {
                        self.apply(field, rule, arg, element, Some(index), errors);
                    }
                }
            }
            value => {
                for (rule, arg) in tokens.pairs() {
                    self.apply(field, rule, arg, value, None, errors);
                }
            }
        }
    }

    fn apply(
        &self,
        field: &Field<'_>,
        rule: &str,
        arg: &str,
        value: &Value<'_>,
        index: Option<usize>,
        errors: &mut ValidationErrors,
    ) {
        let Err(cause) = tagcheck_rules::apply(rule, value, arg) else {
            return;
        };
        tracing::debug!(field = field.name(), rule, arg, ?index, %cause, "rule failed");
        let mut error = ValidationError::new(field.name(), cause).with_rule(rule);
        if let Some(index) = index {
            error = error.with_index(index);
        }
        errors.push(error);
    }
}
