//! Stripe payment gateway adapter.
//!
//! Implements `PaymentProvider` against Stripe's form-encoded REST API with
//! a plain HTTP client; no vendor SDK. Requests authenticate via HTTP basic
//! auth with the secret key as username, per Stripe convention, and the key
//! is held in `secrecy::SecretString` so it never lands in debug output.

use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;

use crate::ports::{PaymentError, PaymentProvider};

/// Default base URL for the Stripe API.
const DEFAULT_API_BASE_URL: &str = "https://api.stripe.com";

/// Per-call timeout; handlers may wait this long on the provider.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Thin client over Stripe's REST API.
///
/// Holds only the API key and an HTTP transport; safe to share across
/// concurrent requests.
pub struct StripeGateway {
    api_key: SecretString,
    base_url: String,
    http_client: reqwest::Client,
}

impl StripeGateway {
    /// Create a gateway authenticated by the given secret key.
    pub fn new(api_key: impl Into<String>) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("HTTP client construction");

        Self {
            api_key: SecretString::new(api_key.into()),
            base_url: DEFAULT_API_BASE_URL.to_string(),
            http_client,
        }
    }

    /// Override the API base URL (stripe-mock, tests).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    async fn get(&self, path: &str) -> Result<Value, PaymentError> {
        let response = self
            .http_client
            .get(format!("{}{}", self.base_url, path))
            .basic_auth(self.api_key.expose_secret(), Option::<&str>::None)
            .send()
            .await
            .map_err(|e| PaymentError::network(e.to_string()))?;

        Self::decode_response(response).await
    }

    async fn post_form(
        &self,
        path: &str,
        params: &[(String, String)],
    ) -> Result<Value, PaymentError> {
        let response = self
            .http_client
            .post(format!("{}{}", self.base_url, path))
            .basic_auth(self.api_key.expose_secret(), Option::<&str>::None)
            .form(params)
            .send()
            .await
            .map_err(|e| PaymentError::network(e.to_string()))?;

        Self::decode_response(response).await
    }

    /// Decodes a provider response, extracting the message from Stripe's
    /// `{"error": {"message": ...}}` body on non-2xx statuses.
    async fn decode_response(response: reqwest::Response) -> Result<Value, PaymentError> {
        let status = response.status();

        if !status.is_success() {
            let body: Value = response.json().await.unwrap_or(Value::Null);
            let message = body["error"]["message"]
                .as_str()
                .unwrap_or("provider request failed")
                .to_string();
            tracing::error!(status = %status, error = %message, "Stripe API error");
            return Err(PaymentError::provider(status.as_u16(), message));
        }

        response
            .json()
            .await
            .map_err(|e| PaymentError::decode(e.to_string()))
    }
}

#[async_trait]
impl PaymentProvider for StripeGateway {
    async fn retrieve_plan(&self, plan_id: &str) -> Result<Value, PaymentError> {
        self.get(&format!("/v1/plans/{plan_id}")).await
    }

    async fn create_customer(&self, name: &str, email: &str) -> Result<Value, PaymentError> {
        self.post_form(
            "/v1/customers",
            &[
                ("name".to_string(), name.to_string()),
                ("email".to_string(), email.to_string()),
            ],
        )
        .await
    }

    async fn create_setup_intent(
        &self,
        customer_id: &str,
        payment_method_types: &[&str],
    ) -> Result<Value, PaymentError> {
        let mut params = vec![("customer".to_string(), customer_id.to_string())];
        for (i, kind) in payment_method_types.iter().enumerate() {
            params.push((format!("payment_method_types[{i}]"), (*kind).to_string()));
        }

        self.post_form("/v1/setup_intents", &params).await
    }

    async fn update_default_payment_method(
        &self,
        customer_id: &str,
        payment_method_id: &str,
    ) -> Result<Value, PaymentError> {
        self.post_form(
            &format!("/v1/customers/{customer_id}"),
            &[(
                "invoice_settings[default_payment_method]".to_string(),
                payment_method_id.to_string(),
            )],
        )
        .await
    }

    async fn create_subscription(
        &self,
        customer_id: &str,
        plan_id: &str,
    ) -> Result<Value, PaymentError> {
        self.post_form(
            "/v1/subscriptions",
            &[
                ("customer".to_string(), customer_id.to_string()),
                ("items[0][plan]".to_string(), plan_id.to_string()),
                // The client reads the first invoice's payment intent off
                // the subscription to handle authentication-required cards.
                ("expand[0]".to_string(), "latest_invoice.payment_intent".to_string()),
            ],
        )
        .await
    }
}
