use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while building or querying a capability registry
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum RegistryError {
    #[error("Unknown capability key: {key}. Available keys: {}", .available.join(", "))]
    UnknownCapabilityKey { key: String, available: Vec<String> },

    #[error("Capability key '{key}' registered by both '{first}' and '{second}'")]
    DuplicateCapabilityKey {
        key: String,
        first: String,
        second: String,
    },

    #[error("Invalid capability key declared by '{0}': {1}")]
    InvalidKey(String, String),
}

impl RegistryError {
    /// The registered keys carried by an unknown-key error
    pub fn available_keys(&self) -> Option<&[String]> {
        match self {
            RegistryError::UnknownCapabilityKey { available, .. } => Some(available),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_key_message_lists_keys() {
        let error = RegistryError::UnknownCapabilityKey {
            key: "bitcoin".to_string(),
            available: vec!["klarna".to_string(), "paypal".to_string()],
        };

        assert_eq!(
            error.to_string(),
            "Unknown capability key: bitcoin. Available keys: klarna, paypal"
        );
        assert_eq!(error.available_keys().map(|k| k.len()), Some(2));
    }

    #[test]
    fn test_duplicate_key_message() {
        let error = RegistryError::DuplicateCapabilityKey {
            key: "stripe".to_string(),
            first: "StripePayment".to_string(),
            second: "StripeV2Payment".to_string(),
        };

        assert!(error.to_string().contains("'stripe'"));
        assert!(error.available_keys().is_none());
    }
}
