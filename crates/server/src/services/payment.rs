//! Payment gateway boundary.
//!
//! eSewa and Khalti settle through an external confirmation step. The
//! trait models that step as an asynchronous pending -> confirmed call so
//! a real wallet integration can replace [`SimulatedGateway`] without
//! changing the order lifecycle's contract. Cash orders never touch the
//! gateway.

use thiserror::Error;

use newa_bhojan_core::{PaymentMethod, Price};

/// Error from the payment confirmation step.
#[derive(Debug, Error)]
#[error("payment confirmation failed: {reason}")]
pub struct PaymentError {
    /// Gateway-reported reason.
    pub reason: String,
}

/// Outcome of a confirmed payment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentConfirmation {
    /// Gateway transaction reference.
    pub reference: String,
}

/// External payment confirmation boundary.
pub trait PaymentGateway: Send + Sync {
    /// Confirm a wallet payment for the given amount.
    ///
    /// Called only for methods where
    /// [`PaymentMethod::requires_gateway`] is true.
    fn confirm(
        &self,
        method: PaymentMethod,
        amount: Price,
    ) -> impl Future<Output = Result<PaymentConfirmation, PaymentError>> + Send;
}

/// Gateway stub that confirms every payment immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedGateway;

impl PaymentGateway for SimulatedGateway {
    async fn confirm(
        &self,
        method: PaymentMethod,
        amount: Price,
    ) -> Result<PaymentConfirmation, PaymentError> {
        tracing::info!(?method, %amount, "Simulated payment confirmed");
        Ok(PaymentConfirmation {
            reference: format!("sim-{method:?}-{}", amount.as_rupees()).to_lowercase(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_simulated_gateway_always_confirms() {
        let gateway = SimulatedGateway;
        let confirmation = gateway
            .confirm(PaymentMethod::Esewa, Price::from_rupees(680))
            .await
            .expect("confirm");
        assert!(confirmation.reference.starts_with("sim-esewa"));
    }
}
