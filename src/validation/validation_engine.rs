use super::field_spec::{json_type, FieldSpec, Validatable};
use super::rules::ValidationRule;
use super::validation_error::{ValidationError, ValidationReport};
use crate::config::EngineConfig;
use crate::error::{IntrospectError, TargetError};
use log::{debug, warn};
use serde_json::Value;
use std::collections::HashSet;
use std::panic::{self, AssertUnwindSafe};

/// Walks the fields of a target and evaluates every attached rule.
///
/// Evaluation never short-circuits: every rule on every field runs, so one
/// call reports all violations. The engine only reads the target and holds
/// no per-call state, so it can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct ValidationEngine {
    config: EngineConfig,
}

impl ValidationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with a custom configuration; the configuration is validated first
    pub fn with_config(config: EngineConfig) -> Result<Self, IntrospectError> {
        config.validate().map_err(IntrospectError::Config)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Failures for `target`, in field order then rule order
    pub fn validate<T: Validatable + ?Sized>(&self, target: &T) -> Vec<ValidationError> {
        self.report(target).errors
    }

    /// Rendered failure messages for `target`
    pub fn messages<T: Validatable + ?Sized>(&self, target: &T) -> Vec<String> {
        self.report(target).messages()
    }

    /// Full validation report for `target`
    pub fn report<T: Validatable + ?Sized>(&self, target: &T) -> ValidationReport {
        let specs = target.field_specs();
        self.run(target.target_name(), &specs)
    }

    /// Like `validate`, but first rejects targets whose field table is
    /// malformed, exceeds the configured limits, or holds values an attached
    /// rule cannot evaluate
    pub fn try_validate<T: Validatable + ?Sized>(
        &self,
        target: &T,
    ) -> Result<Vec<ValidationError>, TargetError> {
        self.try_report(target).map(|report| report.errors)
    }

    /// Like `report`, with the same shape checks as `try_validate`
    pub fn try_report<T: Validatable + ?Sized>(
        &self,
        target: &T,
    ) -> Result<ValidationReport, TargetError> {
        let name = target.target_name();
        let specs = target.field_specs();
        self.check_shape(name, &specs)?;
        self.check_rules(name, &specs)?;
        Ok(self.run(name, &specs))
    }

    fn check_shape(&self, target: &str, specs: &[FieldSpec]) -> Result<(), TargetError> {
        if specs.len() > self.config.max_fields {
            return Err(TargetError::TooManyFields(
                target.to_string(),
                specs.len(),
                self.config.max_fields,
            ));
        }

        let mut seen = HashSet::new();
        for spec in specs {
            if spec.name.trim().is_empty() {
                return Err(TargetError::EmptyFieldName(target.to_string()));
            }
            if !seen.insert(spec.name.as_str()) {
                return Err(TargetError::DuplicateField(
                    target.to_string(),
                    spec.name.clone(),
                ));
            }
            if spec.rules.len() > self.config.max_rules_per_field {
                return Err(TargetError::TooManyRules(
                    target.to_string(),
                    spec.name.clone(),
                    spec.rules.len(),
                    self.config.max_rules_per_field,
                ));
            }
        }

        Ok(())
    }

    fn check_rules(&self, target: &str, specs: &[FieldSpec]) -> Result<(), TargetError> {
        for spec in specs {
            for rule in &spec.rules {
                rule.validate_parameters().map_err(|reason| {
                    TargetError::InvalidRule(
                        target.to_string(),
                        spec.name.clone(),
                        rule.name().to_string(),
                        reason,
                    )
                })?;

                if !rule.accepts(&spec.value) {
                    return Err(TargetError::UnsupportedValue(
                        target.to_string(),
                        spec.name.clone(),
                        rule.name().to_string(),
                        json_type(&spec.value).to_string(),
                    ));
                }
            }
        }

        Ok(())
    }

    fn run(&self, target: &str, specs: &[FieldSpec]) -> ValidationReport {
        let mut errors = Vec::new();
        let mut rules_evaluated = 0;

        for spec in specs {
            for rule in &spec.rules {
                rules_evaluated += 1;
                if !self.evaluate(rule.as_ref(), &spec.value) {
                    if self.config.log_failures {
                        debug!(
                            "{}: rule '{}' rejected field '{}'",
                            target,
                            rule.name(),
                            spec.name
                        );
                    }
                    errors.push(ValidationError::new(
                        spec.name.clone(),
                        rule.name(),
                        spec.value.clone(),
                    ));
                }
            }
        }

        debug!(
            "{}: {} fields, {} rules evaluated, {} failures",
            target,
            specs.len(),
            rules_evaluated,
            errors.len()
        );

        ValidationReport {
            target: target.to_string(),
            valid: errors.is_empty(),
            errors,
            fields_validated: specs.len(),
            rules_evaluated,
        }
    }

    fn evaluate(&self, rule: &dyn ValidationRule, value: &Value) -> bool {
        if !self.config.catch_rule_panics {
            return rule.check(value);
        }

        // the panic hook still runs and prints to stderr
        match panic::catch_unwind(AssertUnwindSafe(|| rule.check(value))) {
            Ok(passed) => passed,
            Err(_) => {
                warn!("Rule '{}' panicked; counting it as a failure", rule.name());
                false
            }
        }
    }
}
