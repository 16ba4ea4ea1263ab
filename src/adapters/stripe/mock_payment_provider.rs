//! Configurable in-memory payment provider.
//!
//! Returns canned provider objects, records every call in order, and can be
//! told to fail specific operations. Integration tests use the call log to
//! assert ordering invariants of the signup flow.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::ports::{PaymentError, PaymentProvider};

/// Provider operations, as recorded in the call log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderCall {
    RetrievePlan,
    CreateCustomer,
    CreateSetupIntent,
    UpdateDefaultPaymentMethod,
    CreateSubscription,
}

/// Mock provider with canned responses and per-operation failure injection.
#[derive(Default)]
pub struct MockPaymentProvider {
    calls: Mutex<Vec<ProviderCall>>,
    failures: Mutex<Vec<ProviderCall>>,
}

impl MockPaymentProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the given operation fail with a provider error.
    pub fn fail_on(self, call: ProviderCall) -> Self {
        self.failures.lock().unwrap().push(call);
        self
    }

    /// Operations invoked so far, in order.
    pub fn calls(&self) -> Vec<ProviderCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of times the given operation was invoked.
    pub fn call_count(&self, call: ProviderCall) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| **c == call)
            .count()
    }

    fn record(&self, call: ProviderCall) -> Result<(), PaymentError> {
        self.calls.lock().unwrap().push(call);
        if self.failures.lock().unwrap().contains(&call) {
            return Err(PaymentError::provider(
                402,
                format!("{call:?} rejected by mock provider"),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl PaymentProvider for MockPaymentProvider {
    async fn retrieve_plan(&self, plan_id: &str) -> Result<Value, PaymentError> {
        self.record(ProviderCall::RetrievePlan)?;
        Ok(json!({
            "id": plan_id,
            "object": "plan",
            "amount": 1400,
            "currency": "aud",
            "interval": "month",
        }))
    }

    async fn create_customer(&self, name: &str, email: &str) -> Result<Value, PaymentError> {
        self.record(ProviderCall::CreateCustomer)?;
        Ok(json!({
            "id": "cus_1",
            "object": "customer",
            "name": name,
            "email": email,
        }))
    }

    async fn create_setup_intent(
        &self,
        customer_id: &str,
        payment_method_types: &[&str],
    ) -> Result<Value, PaymentError> {
        self.record(ProviderCall::CreateSetupIntent)?;
        Ok(json!({
            "id": "seti_1",
            "object": "setup_intent",
            "customer": customer_id,
            "payment_method_types": payment_method_types,
            "client_secret": "seti_1_secret_abc",
            "status": "requires_payment_method",
        }))
    }

    async fn update_default_payment_method(
        &self,
        customer_id: &str,
        payment_method_id: &str,
    ) -> Result<Value, PaymentError> {
        self.record(ProviderCall::UpdateDefaultPaymentMethod)?;
        Ok(json!({
            "id": customer_id,
            "object": "customer",
            "invoice_settings": { "default_payment_method": payment_method_id },
        }))
    }

    async fn create_subscription(
        &self,
        customer_id: &str,
        plan_id: &str,
    ) -> Result<Value, PaymentError> {
        self.record(ProviderCall::CreateSubscription)?;
        Ok(json!({
            "id": "sub_1",
            "object": "subscription",
            "customer": customer_id,
            "status": "active",
            "items": {
                "object": "list",
                "data": [{ "id": "si_1", "plan": { "id": plan_id } }],
            },
            "latest_invoice": {
                "id": "in_1",
                "payment_intent": { "id": "pi_1", "status": "succeeded" },
            },
        }))
    }
}
