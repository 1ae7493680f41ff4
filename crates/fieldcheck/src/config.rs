//! Configuration options for validation behavior
//!
//! Controls the default evaluation mode used by [`crate::Validator::run`] and
//! the separator used when failures are joined for display.

use std::env;

use thiserror::Error;

use crate::errors::MESSAGE_SEPARATOR;
use crate::evaluator::EvaluationMode;

/// Environment variable read by [`ValidatorConfig::from_env`]
pub const MODE_ENV_VAR: &str = "FIELDCHECK_MODE";

/// Configuration loading errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid evaluation mode in {var}: '{value}' (expected fail_fast or collect_all)")]
    InvalidMode { var: &'static str, value: String },
}

// ============================================================================
// Validator Config
// ============================================================================

/// Configuration options for validation behavior
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Mode used by `Validator::run`
    pub mode: EvaluationMode,

    /// Separator for `ValidatorConfig::join`
    pub separator: String,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            mode: EvaluationMode::default(),
            separator: MESSAGE_SEPARATOR.to_string(),
        }
    }
}

impl ValidatorConfig {
    /// Create a new validator config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_mode_var(env::var(MODE_ENV_VAR).ok())
    }

    fn from_mode_var(raw: Option<String>) -> Result<Self, ConfigError> {
        let mode = match raw {
            Some(value) if !value.trim().is_empty() => {
                value.parse::<EvaluationMode>().map_err(|_| ConfigError::InvalidMode {
                    var: MODE_ENV_VAR,
                    value,
                })?
            }
            _ => EvaluationMode::default(),
        };

        Ok(Self::default().mode(mode))
    }

    /// Set evaluation mode
    pub fn mode(mut self, mode: EvaluationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Stop at the first failing rule
    pub fn fail_fast(mut self) -> Self {
        self.mode = EvaluationMode::FailFast;
        self
    }

    /// Run every rule and collect all failures
    pub fn collect_all(mut self) -> Self {
        self.mode = EvaluationMode::CollectAll;
        self
    }

    /// Set message separator
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Join failure messages with the configured separator
    pub fn join(&self, errors: &crate::errors::ValidationErrors) -> String {
        errors.join_with(&self.separator)
    }
}

// ============================================================================
// Tests
// ============================================================================
