//! Payment stub
//!
//! No real gateway: every payment settles synchronously with a synthetic
//! transaction id. Internal failures are reported as a failure result
//! rather than propagated.

use log::{info, warn};
use rand::Rng;

/// Payment information supplied by the caller
#[derive(Debug, Clone)]
pub struct PaymentDetails {
    pub amount: f64,
}

/// Outcome of a payment attempt
#[derive(Debug, Clone)]
pub struct PaymentResult {
    pub success: bool,
    pub transaction_id: Option<String>,
    pub message: Option<String>,
}

impl PaymentResult {
    pub fn success(transaction_id: String) -> Self {
        Self {
            success: true,
            transaction_id: Some(transaction_id),
            message: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            transaction_id: None,
            message: Some(message.into()),
        }
    }
}

/// Seam for the payment gateway; the booking service only sees this trait.
pub trait PaymentProcessor: Send + Sync {
    fn process(&self, details: &PaymentDetails) -> PaymentResult;
}

/// The stand-in processor used in every environment today.
pub struct StubPaymentProcessor;

impl PaymentProcessor for StubPaymentProcessor {
    fn process(&self, details: &PaymentDetails) -> PaymentResult {
        info!("Processing payment for amount {}", details.amount);

        let random_bytes: [u8; 4] = rand::thread_rng().gen();
        let transaction_id = format!("TX-{}", hex::encode(random_bytes));

        if details.amount.is_nan() || details.amount.is_infinite() {
            warn!("Payment failed: amount is not a finite number");
            return PaymentResult::failure("Invalid payment amount");
        }

        PaymentResult::success(transaction_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_id_format() {
        let result = StubPaymentProcessor.process(&PaymentDetails { amount: 25.0 });
        assert!(result.success);
        let tx = result.transaction_id.unwrap();
        assert!(tx.starts_with("TX-"));
        assert_eq!(tx.len(), 11);
        assert!(tx[3..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_ids_are_fresh() {
        let a = StubPaymentProcessor.process(&PaymentDetails { amount: 1.0 });
        let b = StubPaymentProcessor.process(&PaymentDetails { amount: 1.0 });
        assert_ne!(a.transaction_id, b.transaction_id);
    }

    #[test]
    fn test_non_finite_amount_is_failure_result() {
        let result = StubPaymentProcessor.process(&PaymentDetails { amount: f64::NAN });
        assert!(!result.success);
        assert!(result.transaction_id.is_none());
    }
}
