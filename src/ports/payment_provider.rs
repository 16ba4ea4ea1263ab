//! Payment provider port.
//!
//! Contract for the payments provider the signup flow brokers to. The
//! provider is the source of truth for every entity this service touches,
//! so operations return the provider's objects as opaque JSON blobs and the
//! HTTP layer forwards them to the browser client unmodified.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Port for the payments provider's REST API.
///
/// Implementations authenticate with the configured secret key and are
/// shared across concurrent requests; they hold no mutable state.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Retrieve the recurring plan by its identifier.
    async fn retrieve_plan(&self, plan_id: &str) -> Result<Value, PaymentError>;

    /// Create a customer with the given name and email.
    async fn create_customer(&self, name: &str, email: &str) -> Result<Value, PaymentError>;

    /// Create a setup intent that collects a payment method from the given
    /// customer for future off-session use.
    ///
    /// The returned object carries the `client_secret` the browser needs to
    /// confirm payment-method collection.
    async fn create_setup_intent(
        &self,
        customer_id: &str,
        payment_method_types: &[&str],
    ) -> Result<Value, PaymentError>;

    /// Set the customer's default payment method for invoices.
    async fn update_default_payment_method(
        &self,
        customer_id: &str,
        payment_method_id: &str,
    ) -> Result<Value, PaymentError>;

    /// Subscribe the customer to the plan with a single line item.
    async fn create_subscription(
        &self,
        customer_id: &str,
        plan_id: &str,
    ) -> Result<Value, PaymentError>;
}

/// Errors from payment provider operations.
///
/// The provider's own message is preserved so signup endpoints can surface
/// it verbatim in their error body.
#[derive(Debug, Clone, Error)]
pub enum PaymentError {
    /// Transport-level failure reaching the provider.
    #[error("provider unreachable: {0}")]
    Network(String),

    /// The provider answered with a non-2xx status.
    #[error("{message}")]
    Provider { status: u16, message: String },

    /// The provider's response body could not be decoded.
    #[error("malformed provider response: {0}")]
    Decode(String),
}

impl PaymentError {
    /// Transport error (DNS, TLS, timeout).
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Non-2xx provider response with the message from its error body.
    pub fn provider(status: u16, message: impl Into<String>) -> Self {
        Self::Provider {
            status,
            message: message.into(),
        }
    }

    /// Undecodable provider response body.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    /// Human-readable message for the HTTP error body.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_provider_is_object_safe() {
        fn _accepts_dyn(_provider: &dyn PaymentProvider) {}
    }

    #[test]
    fn provider_error_preserves_message() {
        let err = PaymentError::provider(402, "Your card was declined.");
        assert_eq!(err.message(), "Your card was declined.");
    }

    #[test]
    fn network_error_display() {
        let err = PaymentError::network("connection refused");
        assert_eq!(err.message(), "provider unreachable: connection refused");
    }
}
