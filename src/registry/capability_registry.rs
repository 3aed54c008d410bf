use super::capability::Candidate;
use crate::error::RegistryError;
use log::{debug, info};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

struct Registration<C: ?Sized> {
    type_name: &'static str,
    construct: fn() -> Box<C>,
}

/// Immutable mapping from capability key to a constructor for the type
/// registered under it.
///
/// Built once by `discover`; afterwards only queried. Keys are kept sorted,
/// so `list_keys` and unknown-key errors enumerate them in ascending order.
pub struct CapabilityRegistry<C: ?Sized> {
    registrations: BTreeMap<String, Registration<C>>,
}

impl<C: ?Sized> CapabilityRegistry<C> {
    /// Register every candidate that declares a key.
    ///
    /// Candidates without a key are skipped. Two candidates declaring the
    /// same key is an error.
    pub fn discover<I>(candidates: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = Candidate<C>>,
    {
        let mut registrations: BTreeMap<String, Registration<C>> = BTreeMap::new();

        for candidate in candidates {
            let Some(key) = candidate.key() else {
                debug!("Skipping '{}': no capability key declared", candidate.type_name());
                continue;
            };

            Self::check_key(candidate.type_name(), key)?;

            if let Some(existing) = registrations.get(key) {
                return Err(RegistryError::DuplicateCapabilityKey {
                    key: key.to_string(),
                    first: existing.type_name.to_string(),
                    second: candidate.type_name().to_string(),
                });
            }

            debug!("Registering '{}' under key '{}'", candidate.type_name(), key);
            registrations.insert(
                key.to_string(),
                Registration {
                    type_name: candidate.type_name(),
                    construct: candidate.constructor(),
                },
            );
        }

        info!(
            "Capability registry ready with {} entries: {}",
            registrations.len(),
            registrations.keys().cloned().collect::<Vec<_>>().join(", ")
        );

        Ok(Self { registrations })
    }

    fn check_key(type_name: &str, key: &str) -> Result<(), RegistryError> {
        if key.is_empty() {
            return Err(RegistryError::InvalidKey(
                type_name.to_string(),
                "key cannot be empty".to_string(),
            ));
        }

        if key.chars().any(char::is_whitespace) {
            return Err(RegistryError::InvalidKey(
                type_name.to_string(),
                format!("key '{}' contains whitespace", key),
            ));
        }

        Ok(())
    }

    /// Instantiate the type registered under `key`
    pub fn create(&self, key: &str) -> Result<Box<C>, RegistryError> {
        match self.registrations.get(key) {
            Some(registration) => {
                debug!("Creating '{}' for key '{}'", registration.type_name, key);
                Ok((registration.construct)())
            }
            None => Err(RegistryError::UnknownCapabilityKey {
                key: key.to_string(),
                available: self.registrations.keys().cloned().collect(),
            }),
        }
    }

    /// Registered keys, sorted
    pub fn list_keys(&self) -> BTreeSet<String> {
        self.registrations.keys().cloned().collect()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.registrations.contains_key(key)
    }

    /// Name of the concrete type registered under `key`
    pub fn type_name(&self, key: &str) -> Option<&'static str> {
        self.registrations.get(key).map(|r| r.type_name)
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }
}

impl<C: ?Sized> fmt::Debug for CapabilityRegistry<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.registrations.iter().map(|(k, r)| (k, r.type_name)))
            .finish()
    }
}
