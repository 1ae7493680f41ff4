//! Rule evaluation
//!
//! Walks a rule list in registration order. Pure apart from trace logging:
//! evaluating the same list twice gives the same result.

use std::fmt;
use std::str::FromStr;

use crate::errors::{ValidationErrors, ValidationResult};
use crate::rules::Rule;

/// How evaluation reacts to a failing rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EvaluationMode {
    /// Stop at the first failure; later rules never run
    FailFast,
    /// Run every rule and report all failures
    #[default]
    CollectAll,
}

impl EvaluationMode {
    pub fn stops_on_first(self) -> bool {
        self == Self::FailFast
    }
}

impl From<bool> for EvaluationMode {
    fn from(stop_on_first: bool) -> Self {
        if stop_on_first {
            Self::FailFast
        } else {
            Self::CollectAll
        }
    }
}

impl fmt::Display for EvaluationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FailFast => write!(f, "fail_fast"),
            Self::CollectAll => write!(f, "collect_all"),
        }
    }
}

impl FromStr for EvaluationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fail_fast" | "fail-fast" | "failfast" => Ok(Self::FailFast),
            "collect_all" | "collect-all" | "collectall" => Ok(Self::CollectAll),
            other => Err(other.to_string()),
        }
    }
}

/// Evaluate `rules` in order.
///
/// Returns `Ok(())` when there are no rules or every rule passes. Under
/// [`EvaluationMode::FailFast`] the error holds exactly one failure.
pub fn evaluate(rules: &[Rule], mode: EvaluationMode) -> ValidationResult<()> {
    tracing::debug!("Evaluating {} rule(s) ({})", rules.len(), mode);

    let mut errors = ValidationErrors::new();

    for (index, rule) in rules.iter().enumerate() {
        tracing::trace!(
            "Rule #{}: {} on '{}'",
            index,
            rule.constraint.name(),
            rule.field
        );

        if let Err(error) = rule.check() {
            if mode.stops_on_first() {
                tracing::debug!(
                    "Stopping at rule #{} ({} on '{}'), {} rule(s) skipped",
                    index,
                    rule.constraint.name(),
                    rule.field,
                    rules.len() - index - 1
                );
                return Err(error.into());
            }
            errors.add(error);
        }
    }

    tracing::debug!("Evaluation finished with {} failure(s)", errors.len());
    errors.into_result()
}
