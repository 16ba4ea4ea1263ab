//! CreateSubscriptionHandler - Command handler for subscription creation.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::billing::SignupError;
use crate::ports::PaymentProvider;

/// Command to subscribe an existing customer to the configured plan.
#[derive(Debug, Clone)]
pub struct CreateSubscriptionCommand {
    pub customer_id: String,
    pub payment_method_id: String,
}

/// Handler that attaches a default payment method, then subscribes.
///
/// The default payment method must be attached before the subscription is
/// created so the first invoice can be charged; if the update fails, the
/// subscription is never attempted.
pub struct CreateSubscriptionHandler {
    payment_provider: Arc<dyn PaymentProvider>,
    plan_id: String,
}

impl CreateSubscriptionHandler {
    pub fn new(payment_provider: Arc<dyn PaymentProvider>, plan_id: String) -> Self {
        Self {
            payment_provider,
            plan_id,
        }
    }

    pub async fn handle(&self, cmd: CreateSubscriptionCommand) -> Result<Value, SignupError> {
        if cmd.customer_id.trim().is_empty() {
            return Err(SignupError::validation("customerId", "customerId is required"));
        }
        if cmd.payment_method_id.trim().is_empty() {
            return Err(SignupError::validation(
                "paymentMethodId",
                "paymentMethodId is required",
            ));
        }

        // 1. Set the default payment method on the customer.
        self.payment_provider
            .update_default_payment_method(&cmd.customer_id, &cmd.payment_method_id)
            .await
            .map_err(|e| SignupError::provider(e.message()))?;

        // 2. Create the subscription on the configured plan.
        let subscription = self
            .payment_provider
            .create_subscription(&cmd.customer_id, &self.plan_id)
            .await
            .map_err(|e| SignupError::provider(e.message()))?;

        Ok(subscription)
    }
}
