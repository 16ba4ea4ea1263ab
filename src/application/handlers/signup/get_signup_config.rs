//! GetSignupConfigHandler - Query handler for the payment widget bootstrap.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::billing::SignupError;
use crate::ports::PaymentProvider;

/// Configuration the browser needs to mount the payment widget.
#[derive(Debug, Clone)]
pub struct SignupConfig {
    pub publishable_key: String,
    pub plan: Value,
}

/// Handler that assembles the client bootstrap configuration.
///
/// Pure read: retrieves the configured plan from the provider and pairs it
/// with the publishable key. No side effects.
pub struct GetSignupConfigHandler {
    payment_provider: Arc<dyn PaymentProvider>,
    publishable_key: String,
    plan_id: String,
}

impl GetSignupConfigHandler {
    pub fn new(
        payment_provider: Arc<dyn PaymentProvider>,
        publishable_key: String,
        plan_id: String,
    ) -> Self {
        Self {
            payment_provider,
            publishable_key,
            plan_id,
        }
    }

    pub async fn handle(&self) -> Result<SignupConfig, SignupError> {
        let plan = self
            .payment_provider
            .retrieve_plan(&self.plan_id)
            .await
            .map_err(|e| SignupError::provider(e.message()))?;

        Ok(SignupConfig {
            publishable_key: self.publishable_key.clone(),
            plan,
        })
    }
}
