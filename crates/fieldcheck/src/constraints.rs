//! Built-in constraint catalog
//!
//! Each [`Constraint`] maps a value plus its parameters to pass or fail. A
//! failure carries the default message for the sub-case that triggered it;
//! custom message overrides are applied one level up, in [`crate::rules`].

use crate::errors::ErrorType;
use crate::formats;
use crate::types::Value;

// ============================================================================
// Constraint
// ============================================================================

/// A named constraint from the catalog, together with its parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "rule", content = "param", rename_all = "snake_case"))]
pub enum Constraint {
    /// Value must be text
    String,
    /// Value must be present: non-empty text, non-zero number, non-null
    Required,
    /// Value must be text shaped like an email address
    Email,
    /// Value must be an integer; floats do not qualify
    Number,
    /// Integer value must be at least this much
    Min(i64),
    /// Integer value must be at most this much
    Max(i64),
    /// Text must be at least this many bytes long
    MinLength(usize),
    /// Text must be at most this many bytes long
    MaxLength(usize),
    /// Value must be text shaped like a phone number
    Phone,
}

/// Why a constraint rejected a value, with its default message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub error_type: ErrorType,
    pub message: String,
}

impl Violation {
    fn type_mismatch(message: String) -> Self {
        Self {
            error_type: ErrorType::TypeMismatch,
            message,
        }
    }

    fn constraint(message: String) -> Self {
        Self {
            error_type: ErrorType::ConstraintViolation,
            message,
        }
    }
}

impl Constraint {
    /// Catalog name used in error reports
    pub fn name(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Required => "required",
            Self::Email => "email",
            Self::Number => "number",
            Self::Min(_) => "min",
            Self::Max(_) => "max",
            Self::MinLength(_) => "min_length",
            Self::MaxLength(_) => "max_length",
            Self::Phone => "phone",
        }
    }

    /// Check `value` (displayed as `name` in messages) against this constraint
    pub fn check(&self, value: &Value, name: &str) -> Result<(), Violation> {
        match *self {
            Self::String => match value {
                Value::String(_) => Ok(()),
                Value::Null
                | Value::Bool(_)
                | Value::Int(_)
                | Value::Float(_)
                | Value::List(_)
                | Value::Object(_) => Err(Violation::type_mismatch(format!(
                    "{} must be a string",
                    name
                ))),
            },
            Self::Required => {
                if is_absent(value) {
                    Err(Violation::constraint(format!("{} is required", name)))
                } else {
                    Ok(())
                }
            }
            Self::Email => match value {
                Value::String(s) if formats::validate_email(s) => Ok(()),
                Value::String(_) => Err(Violation::constraint(format!(
                    "{} must be a valid email",
                    name
                ))),
                Value::Null
                | Value::Bool(_)
                | Value::Int(_)
                | Value::Float(_)
                | Value::List(_)
                | Value::Object(_) => Err(Violation::type_mismatch(format!(
                    "{} must be a valid email",
                    name
                ))),
            },
            Self::Number => match value {
                Value::Int(_) => Ok(()),
                Value::Null
                | Value::Bool(_)
                | Value::Float(_)
                | Value::String(_)
                | Value::List(_)
                | Value::Object(_) => Err(Violation::type_mismatch(format!(
                    "{} must be a number",
                    name
                ))),
            },
            Self::Min(min) => match value {
                Value::Int(i) if *i < min => Err(Violation::constraint(format!(
                    "{} cannot be less than {}",
                    i, min
                ))),
                Value::Int(_) => Ok(()),
                Value::Null
                | Value::Bool(_)
                | Value::Float(_)
                | Value::String(_)
                | Value::List(_)
                | Value::Object(_) => Err(Violation::type_mismatch(format!(
                    "{} must be an integer",
                    name
                ))),
            },
            Self::Max(max) => match value {
                Value::Int(i) if *i > max => Err(Violation::constraint(format!(
                    "{} cannot be greater than {}",
                    i, max
                ))),
                Value::Int(_) => Ok(()),
                Value::Null
                | Value::Bool(_)
                | Value::Float(_)
                | Value::String(_)
                | Value::List(_)
                | Value::Object(_) => Err(Violation::type_mismatch(format!(
                    "{} must be an integer",
                    name
                ))),
            },
            // lengths are byte counts
            Self::MinLength(min) => match value {
                Value::String(s) if s.len() < min => Err(Violation::constraint(format!(
                    "{} cannot be less than {} characters",
                    s, min
                ))),
                Value::String(_) => Ok(()),
                Value::Null
                | Value::Bool(_)
                | Value::Int(_)
                | Value::Float(_)
                | Value::List(_)
                | Value::Object(_) => Err(Violation::type_mismatch(format!(
                    "{} must be a string",
                    name
                ))),
            },
            Self::MaxLength(max) => match value {
                Value::String(s) if s.len() > max => Err(Violation::constraint(format!(
                    "{} cannot be more than {} characters",
                    s, max
                ))),
                Value::String(_) => Ok(()),
                Value::Null
                | Value::Bool(_)
                | Value::Int(_)
                | Value::Float(_)
                | Value::List(_)
                | Value::Object(_) => Err(Violation::type_mismatch(format!(
                    "{} must be a string",
                    name
                ))),
            },
            Self::Phone => match value {
                Value::String(s) if formats::validate_phone(s) => Ok(()),
                Value::String(_) => Err(Violation::constraint(format!(
                    "{} must be a valid phone number",
                    name
                ))),
                Value::Null
                | Value::Bool(_)
                | Value::Int(_)
                | Value::Float(_)
                | Value::List(_)
                | Value::Object(_) => Err(Violation::type_mismatch(format!(
                    "{} must be a valid phone number",
                    name
                ))),
            },
        }
    }
}

/// Presence check used by `required`.
///
/// Numeric zero counts as absent, booleans are always present.
fn is_absent(value: &Value) -> bool {
    match value {
        Value::String(s) => s.is_empty(),
        Value::Int(i) => *i == 0,
        Value::Float(x) => *x == 0.0,
        Value::Bool(_) => false,
        Value::Null => true,
        Value::List(_) | Value::Object(_) => false,
    }
}
