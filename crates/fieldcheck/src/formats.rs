//! Format validation for common string patterns
//!
//! This module provides pre-compiled regex validators for the string formats
//! the rule catalog checks: email addresses and phone numbers.

use once_cell::sync::Lazy;
use regex::Regex;

// ============================================================================
// Pre-compiled Regex Patterns
// ============================================================================

/// Email regex pattern (RFC 5322 simplified)
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

/// Phone regex pattern: optional leading `+`, then 10 to 15 digits
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[0-9]{10,15}$").unwrap());

// ============================================================================
// Format Validators
// ============================================================================

/// Validate email format
///
/// # Example
/// ```
/// use fieldcheck::formats::validate_email;
///
/// assert!(validate_email("user@example.com"));
/// assert!(!validate_email("invalid-email"));
/// ```
pub fn validate_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Validate phone number format
///
/// # Example
/// ```
/// use fieldcheck::formats::validate_phone;
///
/// assert!(validate_phone("+12345678901"));
/// assert!(!validate_phone("123"));
/// ```
pub fn validate_phone(value: &str) -> bool {
    PHONE_REGEX.is_match(value)
}
