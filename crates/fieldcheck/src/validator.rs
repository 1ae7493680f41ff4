//! Validator (rule registry) and field builder
//!
//! A [`Validator`] owns the ordered list of rules for one validation session.
//! [`Validator::field`] hands out a [`Field`] bound to it; every chained call
//! on the field appends one [`Rule`] and returns the field again.
//!
//! Values are cloned into each rule when it is registered, so the checks see
//! the value as it was at chain-construction time.
//!
//! ```
//! use fieldcheck::Validator;
//!
//! let mut v = Validator::new();
//! v.field("ab", "Username").required(None).min_length(3, None);
//! v.field(17, "Age").number(None).min(18, Some("You must be an adult"));
//!
//! let errors = v.validate(false).unwrap_err();
//! assert_eq!(
//!     errors.to_string(),
//!     "ab cannot be less than 3 characters; You must be an adult"
//! );
//! ```

use crate::config::ValidatorConfig;
use crate::constraints::Constraint;
use crate::errors::ValidationResult;
use crate::evaluator::{self, EvaluationMode};
use crate::rules::Rule;
use crate::types::Value;

// ============================================================================
// Validator
// ============================================================================

/// Ordered registry of deferred rules across all fields
#[derive(Debug, Clone, Default)]
pub struct Validator {
    rules: Vec<Rule>,
    config: ValidatorConfig,
}

impl Validator {
    /// Create an empty validator
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty validator with explicit configuration
    pub fn with_config(config: ValidatorConfig) -> Self {
        Self {
            rules: Vec::new(),
            config,
        }
    }

    /// Start chaining rules for `value`, reported as `name` in messages
    pub fn field(&mut self, value: impl Into<Value>, name: impl Into<String>) -> Field<'_> {
        Field {
            validator: self,
            value: value.into(),
            name: name.into(),
        }
    }

    /// Append a prebuilt rule
    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Run every registered rule.
    ///
    /// With `stop_on_first` the result holds only the first failure.
    pub fn validate(&self, stop_on_first: bool) -> ValidationResult<()> {
        self.evaluate(EvaluationMode::from(stop_on_first))
    }

    pub fn evaluate(&self, mode: EvaluationMode) -> ValidationResult<()> {
        evaluator::evaluate(&self.rules, mode)
    }

    /// Run every registered rule using the configured mode
    pub fn run(&self) -> ValidationResult<()> {
        self.evaluate(self.config.mode)
    }

    /// Registered rules in evaluation order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn into_rules(self) -> Vec<Rule> {
        self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }
}

// ============================================================================
// Field Builder
// ============================================================================

/// Chaining handle for one value
///
/// Holds no results. Each method registers one rule on the owning validator.
#[derive(Debug)]
pub struct Field<'a> {
    validator: &'a mut Validator,
    value: Value,
    name: String,
}

impl<'a> Field<'a> {
    fn rule(self, constraint: Constraint, message: Option<&str>) -> Self {
        let rule = Rule::new(constraint, self.name.clone(), self.value.clone(), message);
        self.validator.rules.push(rule);
        self
    }

    /// Value must be text
    pub fn string(self, message: Option<&str>) -> Self {
        self.rule(Constraint::String, message)
    }

    /// Value must be present. Empty text, numeric zero and null count as
    /// missing; booleans never do.
    pub fn required(self, message: Option<&str>) -> Self {
        self.rule(Constraint::Required, message)
    }

    pub fn email(self, message: Option<&str>) -> Self {
        self.rule(Constraint::Email, message)
    }

    /// Value must be an integer. Floats fail.
    pub fn number(self, message: Option<&str>) -> Self {
        self.rule(Constraint::Number, message)
    }

    pub fn min(self, min: i64, message: Option<&str>) -> Self {
        self.rule(Constraint::Min(min), message)
    }

    pub fn max(self, max: i64, message: Option<&str>) -> Self {
        self.rule(Constraint::Max(max), message)
    }

    /// Text must be at least `min` bytes long
    pub fn min_length(self, min: usize, message: Option<&str>) -> Self {
        self.rule(Constraint::MinLength(min), message)
    }

    /// Text must be at most `max` bytes long
    pub fn max_length(self, max: usize, message: Option<&str>) -> Self {
        self.rule(Constraint::MaxLength(max), message)
    }

    /// Optional `+` followed by 10 to 15 digits
    pub fn phone(self, message: Option<&str>) -> Self {
        self.rule(Constraint::Phone, message)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}
