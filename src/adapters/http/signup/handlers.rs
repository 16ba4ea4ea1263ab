//! HTTP handlers for the signup endpoints.
//!
//! These handlers connect Axum routes to the application layer handlers.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;

use crate::application::handlers::signup::{
    CreateCustomerCommand, CreateCustomerHandler, CreateSubscriptionCommand,
    CreateSubscriptionHandler, GetSignupConfigHandler, HandleSignupWebhookCommand,
    HandleSignupWebhookHandler,
};
use crate::domain::billing::{SignupError, WebhookVerifier};
use crate::ports::PaymentProvider;

use super::dto::{
    ConfigResponse, CreateCustomerRequest, CreateCustomerResponse, CreateSubscriptionRequest,
    ErrorResponse, HealthResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
///
/// Cloned per request; everything inside is Arc-wrapped or read-only.
#[derive(Clone)]
pub struct SignupAppState {
    pub payment_provider: Arc<dyn PaymentProvider>,
    pub webhook_verifier: Arc<WebhookVerifier>,
    pub publishable_key: String,
    pub plan_id: String,
}

impl SignupAppState {
    /// Create handlers on demand from the shared state.
    pub fn config_handler(&self) -> GetSignupConfigHandler {
        GetSignupConfigHandler::new(
            self.payment_provider.clone(),
            self.publishable_key.clone(),
            self.plan_id.clone(),
        )
    }

    pub fn create_customer_handler(&self) -> CreateCustomerHandler {
        CreateCustomerHandler::new(self.payment_provider.clone())
    }

    pub fn create_subscription_handler(&self) -> CreateSubscriptionHandler {
        CreateSubscriptionHandler::new(self.payment_provider.clone(), self.plan_id.clone())
    }

    pub fn webhook_handler(&self) -> HandleSignupWebhookHandler {
        HandleSignupWebhookHandler::new(self.webhook_verifier.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Endpoint Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /config - payment widget bootstrap.
pub async fn get_config(
    State(state): State<SignupAppState>,
) -> Result<impl IntoResponse, SignupApiError> {
    let result = state.config_handler().handle().await?;

    Ok(Json(ConfigResponse {
        publishable_key: result.publishable_key,
        plan: result.plan,
    }))
}

/// POST /create-customer - create a customer and its setup intent.
pub async fn create_customer(
    State(state): State<SignupAppState>,
    body: Result<Json<CreateCustomerRequest>, JsonRejection>,
) -> Result<impl IntoResponse, SignupApiError> {
    let Json(request) = body.map_err(bad_body)?;

    let result = state
        .create_customer_handler()
        .handle(CreateCustomerCommand {
            name: request.name,
            email: request.email,
        })
        .await?;

    Ok(Json(CreateCustomerResponse {
        customer: result.customer,
        setup_intent: result.setup_intent,
    }))
}

/// POST /subscription - attach the payment method, then subscribe.
pub async fn create_subscription(
    State(state): State<SignupAppState>,
    body: Result<Json<CreateSubscriptionRequest>, JsonRejection>,
) -> Result<impl IntoResponse, SignupApiError> {
    let Json(request) = body.map_err(bad_body)?;

    let subscription = state
        .create_subscription_handler()
        .handle(CreateSubscriptionCommand {
            customer_id: request.customer_id,
            payment_method_id: request.payment_method_id,
        })
        .await?;

    Ok(Json(subscription))
}

/// GET /health - liveness probe.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

/// POST /webhook - signed provider events.
///
/// Answers 400 with an empty body on any verification failure without
/// distinguishing the cause, and 200 with an empty body once the event is
/// authentic, regardless of dispatch outcome.
pub async fn handle_webhook(
    State(state): State<SignupAppState>,
    headers: HeaderMap,
    body: Bytes,
) -> StatusCode {
    let Some(signature) = headers
        .get("Stripe-Signature")
        .and_then(|v| v.to_str().ok())
    else {
        tracing::warn!("missing Stripe-Signature header");
        return StatusCode::BAD_REQUEST;
    };

    let cmd = HandleSignupWebhookCommand {
        payload: body.to_vec(),
        signature: signature.to_string(),
    };

    match state.webhook_handler().handle(cmd) {
        Ok(()) => StatusCode::OK,
        Err(err) => {
            // The rejection reason stays in the logs only.
            tracing::warn!(error = %err, "webhook signature verification failed");
            err.status_code()
        }
    }
}

fn bad_body(rejection: JsonRejection) -> SignupApiError {
    SignupError::validation("body", rejection.body_text()).into()
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts signup errors to HTTP responses.
pub struct SignupApiError(SignupError);

impl From<SignupError> for SignupApiError {
    fn from(err: SignupError) -> Self {
        Self(err)
    }
}

impl IntoResponse for SignupApiError {
    fn into_response(self) -> axum::response::Response {
        let body = ErrorResponse::new(self.0.message());
        (self.0.status_code(), Json(body)).into_response()
    }
}
