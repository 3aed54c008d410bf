use rule_introspect::payment::{candidates, KlarnaPayment, PaymentFactory, PaymentProcessor};
use rule_introspect::*;
mod test_utils;
use test_utils::*;

#[test]
fn test_create_each_registered_processor() {
    init_logging();
    let factory = PaymentFactory::new().unwrap();

    for (key, name) in [("stripe", "Stripe"), ("paypal", "PayPal"), ("klarna", "Klarna")] {
        let processor = factory.create(key).unwrap();
        assert_eq!(processor.display_name(), name);
        assert!(processor.process(99.99), "{} should process", key);
    }
}

#[test]
fn test_unknown_processor_lists_registered_keys() {
    let factory = PaymentFactory::new().unwrap();

    let error = factory.create("bitcoin").err().expect("bitcoin is not registered");
    match &error {
        RegistryError::UnknownCapabilityKey { key, available } => {
            assert_eq!(key, "bitcoin");
            assert_eq!(available, &vec!["klarna", "paypal", "stripe"]);
        }
        other => panic!("unexpected error: {}", other),
    }
    assert!(error.to_string().contains("klarna, paypal, stripe"));
}

#[test]
fn test_list_keys_is_exact() {
    let factory = PaymentFactory::new().unwrap();
    let keys: Vec<String> = factory.registry().list_keys().into_iter().collect();
    assert_eq!(keys, vec!["klarna", "paypal", "stripe"]);
}

#[test]
fn test_candidate_metadata() {
    let listed: Vec<(&str, Option<&str>)> = candidates()
        .iter()
        .map(|c| (c.type_name(), c.key()))
        .collect();

    assert_eq!(
        listed,
        vec![
            ("StripePayment", Some("stripe")),
            ("PaypalPayment", Some("paypal")),
            ("KlarnaPayment", Some("klarna")),
        ]
    );
}

#[derive(Default)]
struct LegacyInvoice;

impl PaymentProcessor for LegacyInvoice {
    fn process(&self, _amount: f64) -> bool {
        false
    }

    fn display_name(&self) -> &str {
        "Legacy invoice"
    }
}

impl CapabilityKey for LegacyInvoice {
    const KEY: Option<&'static str> = None;
}

#[derive(Default)]
struct KlarnaV2;

impl PaymentProcessor for KlarnaV2 {
    fn process(&self, amount: f64) -> bool {
        KlarnaPayment.process(amount)
    }

    fn display_name(&self) -> &str {
        "Klarna v2"
    }
}

rule_introspect::capability_key!(KlarnaV2 => "klarna");

#[test]
fn test_candidates_without_key_are_skipped() {
    let mut list = candidates();
    list.push(rule_introspect::capability_candidate!(LegacyInvoice => dyn PaymentProcessor));

    let factory = PaymentFactory::from_candidates(list).unwrap();
    assert_eq!(factory.available_processors().len(), 3);
}

#[test]
fn test_duplicate_key_fails_at_startup() {
    let mut list = candidates();
    list.push(rule_introspect::capability_candidate!(KlarnaV2 => dyn PaymentProcessor));

    let error = PaymentFactory::from_candidates(list).unwrap_err();
    assert_eq!(
        error,
        RegistryError::DuplicateCapabilityKey {
            key: "klarna".to_string(),
            first: "KlarnaPayment".to_string(),
            second: "KlarnaV2".to_string(),
        }
    );
}

#[test]
fn test_factory_shared_across_threads() {
    let factory = PaymentFactory::new().unwrap();

    std::thread::scope(|scope| {
        for key in ["stripe", "paypal", "klarna"] {
            let factory = &factory;
            scope.spawn(move || {
                assert!(factory.create(key).unwrap().process(10.0));
            });
        }
    });
}
