pub mod payment_processor;
pub mod processors;
pub mod payment_factory;

pub use payment_processor::PaymentProcessor;
pub use processors::{KlarnaPayment, PaypalPayment, StripePayment};
pub use payment_factory::{candidates, PaymentFactory};
