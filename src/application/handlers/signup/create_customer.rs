//! CreateCustomerHandler - Command handler for customer and setup intent creation.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::billing::SignupError;
use crate::ports::PaymentProvider;

/// Payment method types collected for future off-session charges.
const SETUP_PAYMENT_METHOD_TYPES: [&str; 2] = ["card", "au_becs_debit"];

/// Command to register a new customer with the provider.
#[derive(Debug, Clone)]
pub struct CreateCustomerCommand {
    pub name: String,
    pub email: String,
}

/// Result of customer creation.
#[derive(Debug, Clone)]
pub struct CreateCustomerResult {
    pub customer: Value,
    pub setup_intent: Value,
}

/// Handler that creates a customer, then a setup intent tied to it.
///
/// The setup intent must reference an already-created customer. If the
/// setup intent fails, the customer is left in place; the provider
/// tolerates orphan customers and no local cleanup is attempted.
pub struct CreateCustomerHandler {
    payment_provider: Arc<dyn PaymentProvider>,
}

impl CreateCustomerHandler {
    pub fn new(payment_provider: Arc<dyn PaymentProvider>) -> Self {
        Self { payment_provider }
    }

    pub async fn handle(
        &self,
        cmd: CreateCustomerCommand,
    ) -> Result<CreateCustomerResult, SignupError> {
        if cmd.name.trim().is_empty() {
            return Err(SignupError::validation("name", "name is required"));
        }
        if cmd.email.trim().is_empty() {
            return Err(SignupError::validation("email", "email is required"));
        }

        // 1. Create the customer.
        let customer = self
            .payment_provider
            .create_customer(&cmd.name, &cmd.email)
            .await
            .map_err(|e| SignupError::provider(e.message()))?;

        let customer_id = customer
            .get("id")
            .and_then(Value::as_str)
            .ok_or_else(|| SignupError::provider("customer response missing id"))?
            .to_string();

        // 2. Create a setup intent against the new customer. Its
        //    client_secret is what the browser uses to confirm
        //    payment-method collection.
        let setup_intent = self
            .payment_provider
            .create_setup_intent(&customer_id, &SETUP_PAYMENT_METHOD_TYPES)
            .await
            .map_err(|e| SignupError::provider(e.message()))?;

        Ok(CreateCustomerResult {
            customer,
            setup_intent,
        })
    }
}
