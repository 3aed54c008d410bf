/// Processes a monetary amount and reports whether it succeeded
pub trait PaymentProcessor: Send + Sync {
    fn process(&self, amount: f64) -> bool;

    /// Human-readable provider name
    fn display_name(&self) -> &str;
}
