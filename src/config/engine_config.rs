/// Configuration for the validation engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Maximum number of fields a target may expose (Default: 256)
    pub max_fields: usize,

    /// Maximum number of rules attached to a single field (Default: 32)
    pub max_rules_per_field: usize,

    /// Turn a panicking rule into a failure for its field (Default: true).
    ///
    /// The process panic hook is left untouched, so the panic message is
    /// still printed to stderr in addition to the `warn!` record.
    pub catch_rule_panics: bool,

    /// Log every failed rule at debug level (Default: true)
    pub log_failures: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_fields: 256,
            max_rules_per_field: 32,
            catch_rule_panics: true,
            log_failures: true,
        }
    }
}

impl EngineConfig {
    /// Create a new configuration with all default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Tight limits for targets built from untrusted manifests
    pub fn strict() -> Self {
        Self {
            max_fields: 64,
            max_rules_per_field: 8,
            catch_rule_panics: true,
            log_failures: true,
        }
    }

    /// Generous limits, no per-failure logging
    pub fn permissive() -> Self {
        Self {
            max_fields: 4096,
            max_rules_per_field: 256,
            catch_rule_panics: true,
            log_failures: false,
        }
    }

    /// Validate the configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.max_fields == 0 {
            return Err("max_fields must be greater than 0".to_string());
        }

        if self.max_rules_per_field == 0 {
            return Err("max_rules_per_field must be greater than 0".to_string());
        }

        Ok(())
    }
}
