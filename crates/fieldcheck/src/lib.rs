//! fieldcheck
//!
//! Chainable, deferred field validation.
//!
//! Rules are registered per field on a shared [`Validator`] and only run when
//! the validator is evaluated, either fail-fast or collecting every failure.
//!
//! # Features
//!
//! - **Default**: Core validation
//! - **serde**: `Serialize`/`Deserialize` for values and rule descriptors,
//!   plus `serde_json::Value` conversions
//!
//! # Example
//!
//! ```rust
//! use fieldcheck::Validator;
//!
//! let mut v = Validator::new();
//! v.field("test@example.com", "Email").required(None).string(None).email(None);
//! v.field("+12345678901", "Phone").phone(None);
//! assert!(v.validate(false).is_ok());
//!
//! let mut v = Validator::new();
//! v.field("", "Email").required(None).email(Some("Please enter an email"));
//! let errors = v.validate(true).unwrap_err();
//! assert_eq!(errors.to_string(), "Email is required");
//! ```

// Public modules
pub mod config;
pub mod constraints;
pub mod errors;
pub mod evaluator;
pub mod formats;
pub mod rules;
pub mod types;
pub mod validator;

// Re-export commonly used types
pub use config::{ConfigError, ValidatorConfig};
pub use constraints::Constraint;
pub use errors::{ErrorType, ValidationError, ValidationErrors, ValidationResult};
pub use evaluator::EvaluationMode;
pub use rules::Rule;
pub use types::{Value, ValueKind};
pub use validator::{Field, Validator};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
