//! # Validation Entry Point

use tagcheck_core::{Inspect, ValidateError, Value};

use crate::config::ValidatorConfig;
use crate::walker::FieldWalker;

/// Validates records according to a [`ValidatorConfig`].
///
/// `Validator` holds no state besides its configuration; it is `Copy`,
/// `Send` and `Sync`, and one instance can serve any number of callers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Validator {
    config: ValidatorConfig,
}

impl Validator {
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validates every field of `record` against its tag.
    ///
    /// # Errors
    ///
    /// - [`ValidateError::NotStruct`] if `record` does not present itself
    ///   as a record. No field is inspected in that case.
    /// - [`ValidateError::Invalid`] with every failure, in discovery
    ///   order, if any rule failed.
    pub fn validate<T: Inspect + ?Sized>(&self, record: &T) -> Result<(), ValidateError> {
        let span = tracing::debug_span!("validate", record = std::any::type_name::<T>());
        let _guard = span.enter();

        let view = record.inspect();
        let Value::Record(fields) = &view else {
            tracing::debug!(kind = %view.kind(), "rejected non-record input");
            return Err(ValidateError::NotStruct);
        };

        let errors = FieldWalker::new(&self.config).walk(fields);
        if errors.is_empty() {
            return Ok(());
        }
        tracing::debug!(fields = fields.len(), violations = errors.len(), "record failed validation");
        Err(ValidateError::Invalid(errors))
    }
}

/// Validates `record` with the default (lenient) configuration.
///
/// ```
/// use tagcheck::{validate, Field, Inspect, Value};
///
/// struct Login {
///     user: String,
///     pin: i64,
/// }
///
/// impl Inspect for Login {
///     fn inspect(&self) -> Value<'_> {
///         Value::Record(vec![
///             Field::new("user", &self.user).with_tag("min:3"),
///             Field::new("pin", &self.pin).with_tag("min:1000;max:9999"),
///         ])
///     }
/// }
///
/// let ok = Login { user: "ada".into(), pin: 1234 };
/// assert!(validate(&ok).is_ok());
///
/// let bad = Login { user: "x".into(), pin: 12 };
/// assert_eq!(validate(&bad).unwrap_err().errors().map(|e| e.len()), Some(2));
///
/// assert!(validate(&42).is_err());
/// ```
pub fn validate<T: Inspect + ?Sized>(record: &T) -> Result<(), ValidateError> {
    Validator::default().validate(record)
}
