use super::PaymentProcessor;
use log::{info, warn};

fn settle(provider: &str, amount: f64) -> bool {
    if !amount.is_finite() || amount <= 0.0 {
        warn!("{} refused amount {}", provider, amount);
        return false;
    }

    info!("Processing ${:.2} with {}", amount, provider);
    true
}

#[derive(Debug, Default, Clone, Copy)]
pub struct StripePayment;

crate::capability_key!(StripePayment => "stripe");

impl PaymentProcessor for StripePayment {
    fn process(&self, amount: f64) -> bool {
        settle(self.display_name(), amount)
    }

    fn display_name(&self) -> &str {
        "Stripe"
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PaypalPayment;

crate::capability_key!(PaypalPayment => "paypal");

impl PaymentProcessor for PaypalPayment {
    fn process(&self, amount: f64) -> bool {
        settle(self.display_name(), amount)
    }

    fn display_name(&self) -> &str {
        "PayPal"
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct KlarnaPayment;

crate::capability_key!(KlarnaPayment => "klarna");

impl PaymentProcessor for KlarnaPayment {
    fn process(&self, amount: f64) -> bool {
        settle(self.display_name(), amount)
    }

    fn display_name(&self) -> &str {
        "Klarna"
    }
}
