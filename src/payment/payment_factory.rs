use super::processors::{KlarnaPayment, PaypalPayment, StripePayment};
use super::PaymentProcessor;
use crate::error::RegistryError;
use crate::registry::{Candidate, CapabilityRegistry};

/// Payment processor types known to the crate, in registration order
pub fn candidates() -> Vec<Candidate<dyn PaymentProcessor>> {
    vec![
        crate::capability_candidate!(StripePayment => dyn PaymentProcessor),
        crate::capability_candidate!(PaypalPayment => dyn PaymentProcessor),
        crate::capability_candidate!(KlarnaPayment => dyn PaymentProcessor),
    ]
}

/// Creates payment processors by key
#[derive(Debug)]
pub struct PaymentFactory {
    registry: CapabilityRegistry<dyn PaymentProcessor>,
}

impl PaymentFactory {
    /// Factory over the built-in processors
    pub fn new() -> Result<Self, RegistryError> {
        Self::from_candidates(candidates())
    }

    pub fn from_candidates<I>(candidates: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = Candidate<dyn PaymentProcessor>>,
    {
        Ok(Self {
            registry: CapabilityRegistry::discover(candidates)?,
        })
    }

    pub fn create(&self, key: &str) -> Result<Box<dyn PaymentProcessor>, RegistryError> {
        self.registry.create(key)
    }

    /// Registered processor keys, sorted
    pub fn available_processors(&self) -> Vec<String> {
        self.registry.list_keys().into_iter().collect()
    }

    pub fn registry(&self) -> &CapabilityRegistry<dyn PaymentProcessor> {
        &self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_processors_registered() {
        let factory = PaymentFactory::new().unwrap();
        assert_eq!(
            factory.available_processors(),
            vec!["klarna".to_string(), "paypal".to_string(), "stripe".to_string()]
        );
    }

    #[test]
    fn test_created_processor_matches_key() {
        let factory = PaymentFactory::new().unwrap();
        let processor = factory.create("paypal").unwrap();
        assert_eq!(processor.display_name(), "PayPal");
        assert!(processor.process(149.99));
    }

    #[test]
    fn test_bitcoin_is_unknown() {
        let factory = PaymentFactory::new().unwrap();
        let error = factory.create("bitcoin").err().expect("bitcoin is not registered");
        assert_eq!(
            error.to_string(),
            "Unknown capability key: bitcoin. Available keys: klarna, paypal, stripe"
        );
    }
}
