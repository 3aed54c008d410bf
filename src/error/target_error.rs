use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A target object whose shape the validation engine cannot work with.
///
/// These are programming or configuration errors, distinct from ordinary
/// rule failures.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum TargetError {
    #[error("Target '{0}' is missing expected field '{1}'")]
    MissingField(String, String),

    #[error("Target '{0}' declares field '{1}' more than once")]
    DuplicateField(String, String),

    #[error("Target '{0}' declares a field with an empty name")]
    EmptyFieldName(String),

    #[error("Target '{0}' has {1} fields (limit: {2})")]
    TooManyFields(String, usize, usize),

    #[error("Field '{1}' of target '{0}' has {2} rules attached (limit: {3})")]
    TooManyRules(String, String, usize, usize),

    #[error("Field '{1}' of target '{0}' holds a {3} value that rule '{2}' cannot evaluate")]
    UnsupportedValue(String, String, String, String),

    #[error("Rule '{2}' on field '{1}' of target '{0}' is misconfigured: {3}")]
    InvalidRule(String, String, String, String),

    #[error("Target '{0}' is not described by the rule manifest")]
    UnknownTarget(String),

    #[error("Target '{0}' must be a JSON object, got {1}")]
    NotAnObject(String, String),
}
