use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::OnceLock;

/// A named predicate that judges a single field value.
///
/// Rules are stateless once constructed. Any parameters are fixed when the
/// rule is attached to a field. `check` returns `false` both when the value
/// is unacceptable and when the predicate cannot be applied to the value at
/// all (wrong value category, null).
pub trait ValidationRule: Send + Sync {
    /// Rule identity used in failure messages
    fn name(&self) -> &str;

    /// Whether `value` satisfies the rule
    fn check(&self, value: &Value) -> bool;

    /// Whether the rule can be evaluated against this kind of value at all
    fn accepts(&self, _value: &Value) -> bool {
        true
    }

    /// Check that the rule's own parameters are usable
    fn validate_parameters(&self) -> Result<(), String> {
        Ok(())
    }
}

/// A regular expression compiled on first use and reused afterwards.
///
/// Serialized as its source string; equality compares sources.
#[derive(Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct RulePattern {
    source: String,
    compiled: OnceLock<Result<Regex, String>>,
}

impl RulePattern {
    pub fn new<S: Into<String>>(source: S) -> Self {
        Self {
            source: source.into(),
            compiled: OnceLock::new(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    fn compiled(&self) -> &Result<Regex, String> {
        self.compiled
            .get_or_init(|| Regex::new(&self.source).map_err(|e| e.to_string()))
    }

    /// The compiled expression, or `None` if the source does not compile
    pub fn regex(&self) -> Option<&Regex> {
        self.compiled().as_ref().ok()
    }

    pub fn compile_error(&self) -> Option<&str> {
        self.compiled().as_ref().err().map(String::as_str)
    }
}

impl From<String> for RulePattern {
    fn from(source: String) -> Self {
        Self::new(source)
    }
}

impl From<RulePattern> for String {
    fn from(pattern: RulePattern) -> Self {
        pattern.source
    }
}

impl PartialEq for RulePattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for RulePattern {}

impl fmt::Debug for RulePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RulePattern").field(&self.source).finish()
    }
}

/// Rules shipped with the crate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum BuiltinRule {
    /// Fails on empty strings, null and empty arrays/objects
    NotEmpty,

    /// Fails when a string has fewer than `length` characters
    MinLength { length: usize },

    /// Fails when a string has more than `length` characters
    MaxLength { length: usize },

    /// Fails unless the value is a `local-part@domain.tld` address
    Email,

    /// Fails unless a string matches the regular expression
    Pattern { pattern: RulePattern },
}

const EMAIL_MAX_LENGTH: usize = 254;
const EMAIL_LOCAL_MAX_LENGTH: usize = 64;

const EMAIL_LOCAL_PATTERN: &str = r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*$";
const EMAIL_DOMAIN_PATTERN: &str =
    r"^[A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?(\.[A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$";

impl BuiltinRule {
    pub fn min_length(length: usize) -> Self {
        BuiltinRule::MinLength { length }
    }

    pub fn max_length(length: usize) -> Self {
        BuiltinRule::MaxLength { length }
    }

    pub fn pattern<S: Into<String>>(pattern: S) -> Self {
        BuiltinRule::Pattern {
            pattern: RulePattern::new(pattern),
        }
    }

    fn is_empty_value(value: &Value) -> bool {
        match value {
            Value::Null => true,
            Value::String(s) => s.is_empty(),
            Value::Array(items) => items.is_empty(),
            Value::Object(map) => map.is_empty(),
            Value::Bool(_) | Value::Number(_) => false,
        }
    }

    fn char_length(value: &Value) -> Option<usize> {
        value.as_str().map(|s| s.chars().count())
    }

    fn is_email(value: &str) -> bool {
        static LOCAL: OnceLock<Option<Regex>> = OnceLock::new();
        static DOMAIN: OnceLock<Option<Regex>> = OnceLock::new();

        if value.len() > EMAIL_MAX_LENGTH {
            return false;
        }

        let Some((local, domain)) = value.rsplit_once('@') else {
            return false;
        };

        if local.is_empty() || local.len() > EMAIL_LOCAL_MAX_LENGTH {
            return false;
        }

        let local_ok = LOCAL
            .get_or_init(|| Regex::new(EMAIL_LOCAL_PATTERN).ok())
            .as_ref()
            .map_or(false, |re| re.is_match(local));
        let domain_ok = DOMAIN
            .get_or_init(|| Regex::new(EMAIL_DOMAIN_PATTERN).ok())
            .as_ref()
            .map_or(false, |re| re.is_match(domain));

        local_ok && domain_ok
    }
}

impl ValidationRule for BuiltinRule {
    fn name(&self) -> &str {
        match self {
            BuiltinRule::NotEmpty => "NotEmpty",
            BuiltinRule::MinLength { .. } => "MinLength",
            BuiltinRule::MaxLength { .. } => "MaxLength",
            BuiltinRule::Email => "Email",
            BuiltinRule::Pattern { .. } => "Pattern",
        }
    }

    fn check(&self, value: &Value) -> bool {
        match self {
            BuiltinRule::NotEmpty => !Self::is_empty_value(value),
            BuiltinRule::MinLength { length } => {
                Self::char_length(value).map_or(false, |len| len >= *length)
            }
            BuiltinRule::MaxLength { length } => {
                Self::char_length(value).map_or(false, |len| len <= *length)
            }
            BuiltinRule::Email => value.as_str().map_or(false, Self::is_email),
            BuiltinRule::Pattern { pattern } => match (value.as_str(), pattern.regex()) {
                (Some(s), Some(regex)) => regex.is_match(s),
                _ => false,
            },
        }
    }

    fn accepts(&self, value: &Value) -> bool {
        match self {
            BuiltinRule::NotEmpty => true,
            BuiltinRule::MinLength { .. }
            | BuiltinRule::MaxLength { .. }
            | BuiltinRule::Email
            | BuiltinRule::Pattern { .. } => value.is_string(),
        }
    }

    fn validate_parameters(&self) -> Result<(), String> {
        match self {
            BuiltinRule::Pattern { pattern } => match pattern.compile_error() {
                Some(e) => Err(format!("invalid pattern '{}': {}", pattern.as_str(), e)),
                None => Ok(()),
            },
            _ => Ok(()),
        }
    }
}
