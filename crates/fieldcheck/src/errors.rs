//! Validation error types
//!
//! This module defines error types for validation failures.

use std::fmt;
use thiserror::Error;

/// Separator used when several failures are surfaced as one message
pub const MESSAGE_SEPARATOR: &str = "; ";

// ============================================================================
// Validation Result
// ============================================================================

/// Validation result type
pub type ValidationResult<T> = Result<T, ValidationErrors>;

// ============================================================================
// Validation Errors Collection
// ============================================================================

/// Collection of validation errors
///
/// Errors are kept in the order their rules were registered. The `Display`
/// form joins every message with `"; "`, which is the aggregate message
/// callers usually show; [`ValidationErrors::messages`] gives the list form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors {
    /// List of individual validation errors
    pub errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Create a new empty validation errors collection
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Check if there are any errors
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the number of errors
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Add a validation error to the collection
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Convert to Result - Ok if no errors, Err if there are errors
    pub fn into_result(self) -> ValidationResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Get errors as a slice
    pub fn as_slice(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    /// First error in registration order
    pub fn first(&self) -> Option<&ValidationError> {
        self.errors.first()
    }

    /// Failure messages in registration order
    pub fn messages(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.message.as_str()).collect()
    }

    /// Join every message with a caller-chosen separator
    pub fn join_with(&self, separator: &str) -> String {
        self.messages().join(separator)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join_with(MESSAGE_SEPARATOR))
    }
}

impl std::error::Error for ValidationErrors {}

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

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

// ============================================================================
// Single Validation Error
// ============================================================================

/// A single rule failure
///
/// Displays as its message alone, which is either the rule's default text or
/// the custom message supplied when the rule was registered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Field name the rule was registered under
    pub field: String,

    /// Catalog name of the rule that failed (e.g. "min_length")
    pub constraint: &'static str,

    /// Human-readable error message
    pub message: String,

    /// Error type classification
    pub error_type: ErrorType,
}

impl ValidationError {
    /// Create a new validation error
    pub fn new(
        field: impl Into<String>,
        constraint: &'static str,
        message: impl Into<String>,
        error_type: ErrorType,
    ) -> Self {
        Self {
            field: field.into(),
            constraint,
            message: message.into(),
            error_type,
        }
    }

    pub fn is_type_mismatch(&self) -> bool {
        self.error_type == ErrorType::TypeMismatch
    }
}

// ============================================================================
// Error Type Classification
// ============================================================================

/// Classification of validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ErrorType {
    /// Value has the wrong kind for the rule (e.g. expected string, got integer)
    TypeMismatch,

    /// Right kind, but outside the allowed range, pattern, length or presence
    ConstraintViolation,
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeMismatch => write!(f, "type_mismatch"),
            Self::ConstraintViolation => write!(f, "constraint_violation"),
        }
    }
}
