use super::rules::ValidationRule;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// A field of a target object together with the rules attached to it.
///
/// Built fresh from the target on every validation call.
#[derive(Clone)]
pub struct FieldSpec {
    pub name: String,
    pub value: Value,
    pub rules: Vec<Arc<dyn ValidationRule>>,
}

impl FieldSpec {
    pub fn new<S: Into<String>>(name: S, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
            rules: Vec::new(),
        }
    }

    /// Attach a rule after the ones already attached
    pub fn with_rule<R: ValidationRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Attach a rule instance shared with other fields or targets
    pub fn with_shared_rule(mut self, rule: Arc<dyn ValidationRule>) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }
}

impl fmt::Debug for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSpec")
            .field("name", &self.name)
            .field("value", &self.value)
            .field("rules", &self.rule_names())
            .finish()
    }
}

/// An object whose fields can be walked by the validation engine.
///
/// Usually implemented through the `validatable!` macro.
pub trait Validatable {
    /// Name used in logs and reports
    fn target_name(&self) -> &str;

    /// Fields in declaration order, each with its rules in attachment order
    fn field_specs(&self) -> Vec<FieldSpec>;
}

/// Capture a field value for rule evaluation.
///
/// A value that cannot be represented becomes `Value::Null`, which every
/// built-in rule rejects.
pub fn field_value<T: Serialize + ?Sized>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}

/// JSON type name of a value, as used in error messages
pub fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
