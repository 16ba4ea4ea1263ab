//! HTTP DTOs for the signup endpoints.
//!
//! JSON request/response shapes at the boundary between HTTP and the
//! application layer. Provider objects pass through as raw JSON; the wire
//! uses camelCase field names.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to create a customer and its setup intent.
///
/// Fields default to empty so a missing field reports as a validation
/// failure with a message, not a deserialization rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCustomerRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// Request to subscribe an existing customer to the configured plan.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubscriptionRequest {
    #[serde(default)]
    pub customer_id: String,
    #[serde(default)]
    pub payment_method_id: String,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Client bootstrap payload for the payment widget.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigResponse {
    /// Publishable API key the browser uses with the provider's JS library.
    pub publishable_key: String,
    /// The full plan object as the provider returns it.
    pub plan: Value,
}

/// Response for customer creation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerResponse {
    pub customer: Value,
    /// Carries the `client_secret` the browser confirms collection with.
    pub setup_intent: Value,
}

/// Liveness probe body.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Error body: `{"error": {"message": "..."}}`.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Inner error payload.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorDetail {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: ErrorDetail {
                message: message.into(),
            },
        }
    }
}
