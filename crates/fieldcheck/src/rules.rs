//! Deferred rule descriptors
//!
//! A [`Rule`] is what a field builder appends to its validator: the
//! constraint, a snapshot of the value, the field name and an optional custom
//! message. Nothing is checked until [`Rule::check`] runs during evaluation.

use crate::constraints::Constraint;
use crate::errors::ValidationError;
use crate::types::Value;

/// One deferred constraint check
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rule {
    /// Constraint and its parameters
    pub constraint: Constraint,
    /// Field name used in default messages
    pub field: String,
    /// Value captured when the rule was registered
    pub value: Value,
    /// Replaces every default message of this rule when set
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub message: Option<String>,
}

impl Rule {
    /// Build a rule descriptor. An empty custom message counts as no message.
    pub fn new(
        constraint: Constraint,
        field: impl Into<String>,
        value: Value,
        message: Option<&str>,
    ) -> Self {
        Self {
            constraint,
            field: field.into(),
            value,
            message: message.filter(|m| !m.is_empty()).map(str::to_string),
        }
    }

    /// Run the check against the captured value
    pub fn check(&self) -> Result<(), ValidationError> {
        self.constraint
            .check(&self.value, &self.field)
            .map_err(|violation| {
                let message = match &self.message {
                    Some(custom) => custom.clone(),
                    None => violation.message,
                };
                ValidationError::new(
                    self.field.clone(),
                    self.constraint.name(),
                    message,
                    violation.error_type,
                )
            })
    }
}
