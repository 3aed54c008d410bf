use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single failed rule on a single field.
///
/// Rendered as `Validation failed for property '<field>' with validator
/// '<rule>'`. The offending value is kept as data but never rendered, so
/// secrets held in validated fields do not end up in messages or logs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Field that failed
    pub field: String,

    /// Name of the rule that rejected the value
    pub rule: String,

    /// Value the rule was evaluated against
    pub value: Value,
}

impl ValidationError {
    pub fn new<F: Into<String>, R: Into<String>>(field: F, rule: R, value: Value) -> Self {
        Self {
            field: field.into(),
            rule: rule.into(),
            value,
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Validation failed for property '{}' with validator '{}'",
            self.field, self.rule
        )
    }
}

impl std::error::Error for ValidationError {}

/// Outcome of validating one target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Name of the validated target
    pub target: String,

    /// Whether every rule passed
    pub valid: bool,

    /// Failures in field order, then rule order
    pub errors: Vec<ValidationError>,

    /// Number of fields walked
    pub fields_validated: usize,

    /// Number of (field, rule) pairs evaluated
    pub rules_evaluated: usize,
}

impl ValidationReport {
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.to_string()).collect()
    }
}
