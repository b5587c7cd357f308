//! # Validator Configuration
//!
//! Two policies govern the cases where a record's tags or fields are not
//! in the shape the rules expect. Both default to the lenient behavior.
//!
//! Configuration is plain data (`serde`), loadable from YAML:
//!
//! ```yaml
//! tag_policy: strict
//! unexported: reject
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How unbalanced tags (a rule name with no argument) are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagPolicy {
    /// Scalar fields with an unbalanced tag are skipped without error.
    /// Sequence fields apply every complete pair and ignore the trailing name.
    #[default]
    Lenient,
    /// An unbalanced tag is reported as one syntax error for the field and
    /// no rule of that tag is applied.
    Strict,
}

/// How fields the validator may not read are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnexportedPolicy {
    /// Unexported fields are never validated.
    #[default]
    Skip,
    /// An unexported field that carries a tag is reported as
    /// [`RuleError::UnexportedField`](tagcheck_core::RuleError::UnexportedField).
    Reject,
}

/// Error loading a [`ValidatorConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The document is not valid YAML or does not match the config shape.
    #[error("invalid validator config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Validator configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidatorConfig {
    /// Handling of unbalanced tags.
    pub tag_policy: TagPolicy,
    /// Handling of unexported fields.
    pub unexported: UnexportedPolicy,
}

impl ValidatorConfig {
    /// Strict on both axes: unbalanced tags and tagged unexported fields are errors.
    pub fn strict() -> Self {
        Self {
            tag_policy: TagPolicy::Strict,
            unexported: UnexportedPolicy::Reject,
        }
    }

    pub fn with_tag_policy(mut self, tag_policy: TagPolicy) -> Self {
        self.tag_policy = tag_policy;
        self
    }

    pub fn with_unexported(mut self, unexported: UnexportedPolicy) -> Self {
        self.unexported = unexported;
        self
    }

    /// Parses a configuration from a YAML document. Missing keys take their
    /// defaults; unknown keys are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the document cannot be parsed.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}
