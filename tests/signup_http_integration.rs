//! Router-level tests for the signup endpoints and static fallback.

use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use signup_broker::adapters::http::{app_router, SignupAppState};
use signup_broker::adapters::stripe::{MockPaymentProvider, ProviderCall};
use signup_broker::domain::billing::WebhookVerifier;

fn test_state(provider: Arc<MockPaymentProvider>) -> SignupAppState {
    SignupAppState {
        payment_provider: provider,
        webhook_verifier: Arc::new(WebhookVerifier::new("whsec_test")),
        publishable_key: "pk_test".to_string(),
        plan_id: "plan_X".to_string(),
    }
}

fn test_app(provider: Arc<MockPaymentProvider>) -> Router {
    app_router(test_state(provider), Path::new("public"))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// ════════════════════════════════════════════════════════════════════════════
// GET /config
// ════════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn config_returns_publishable_key_and_plan() {
    let provider = Arc::new(MockPaymentProvider::new());

    let response = test_app(provider).oneshot(get("/config")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );
    let body = json_body(response).await;
    assert_eq!(body["publishableKey"], "pk_test");
    assert_eq!(body["plan"]["id"], "plan_X");
}

#[tokio::test]
async fn config_surfaces_provider_failure_as_500() {
    let provider = Arc::new(MockPaymentProvider::new().fail_on(ProviderCall::RetrievePlan));

    let response = test_app(provider).oneshot(get("/config")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await;
    assert!(body["error"]["message"].as_str().is_some_and(|m| !m.is_empty()));
}

// ════════════════════════════════════════════════════════════════════════════
// POST /create-customer
// ════════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn create_customer_returns_customer_and_setup_intent() {
    let provider = Arc::new(MockPaymentProvider::new());

    let response = test_app(provider.clone())
        .oneshot(post_json(
            "/create-customer",
            r#"{"name":"Ada","email":"a@x"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["customer"]["id"], "cus_1");
    assert_eq!(body["setupIntent"]["id"], "seti_1");
    assert!(body["setupIntent"]["client_secret"].as_str().is_some());
    assert_eq!(
        provider.calls(),
        vec![ProviderCall::CreateCustomer, ProviderCall::CreateSetupIntent]
    );
}

#[tokio::test]
async fn create_customer_rejects_missing_fields() {
    let provider = Arc::new(MockPaymentProvider::new());

    let response = test_app(provider.clone())
        .oneshot(post_json("/create-customer", r#"{"name":"Ada"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert!(body["error"]["message"].as_str().is_some());
    assert!(provider.calls().is_empty());
}

#[tokio::test]
async fn create_customer_rejects_malformed_json() {
    let provider = Arc::new(MockPaymentProvider::new());

    let response = test_app(provider)
        .oneshot(post_json("/create-customer", "{not json"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_customer_setup_intent_failure_is_500_without_rollback() {
    let provider = Arc::new(MockPaymentProvider::new().fail_on(ProviderCall::CreateSetupIntent));

    let response = test_app(provider.clone())
        .oneshot(post_json(
            "/create-customer",
            r#"{"name":"Ada","email":"a@x"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    // The orphan customer stays with the provider.
    assert_eq!(provider.call_count(ProviderCall::CreateCustomer), 1);
}

// ════════════════════════════════════════════════════════════════════════════
// POST /subscription
// ════════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn subscription_attaches_payment_method_then_subscribes() {
    let provider = Arc::new(MockPaymentProvider::new());

    let response = test_app(provider.clone())
        .oneshot(post_json(
            "/subscription",
            r#"{"customerId":"cus_1","paymentMethodId":"pm_1"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["id"], "sub_1");
    assert_eq!(body["customer"], "cus_1");
    assert_eq!(
        provider.calls(),
        vec![
            ProviderCall::UpdateDefaultPaymentMethod,
            ProviderCall::CreateSubscription,
        ]
    );
}

#[tokio::test]
async fn subscription_update_failure_skips_creation() {
    let provider =
        Arc::new(MockPaymentProvider::new().fail_on(ProviderCall::UpdateDefaultPaymentMethod));

    let response = test_app(provider.clone())
        .oneshot(post_json(
            "/subscription",
            r#"{"customerId":"cus_1","paymentMethodId":"pm_1"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await;
    assert!(body["error"]["message"].as_str().is_some());
    assert_eq!(provider.call_count(ProviderCall::CreateSubscription), 0);
}

#[tokio::test]
async fn subscription_rejects_empty_ids() {
    let provider = Arc::new(MockPaymentProvider::new());

    let response = test_app(provider.clone())
        .oneshot(post_json(
            "/subscription",
            r#"{"customerId":"","paymentMethodId":"pm_1"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(provider.calls().is_empty());
}

// ════════════════════════════════════════════════════════════════════════════
// Static fallback and health
// ════════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn health_answers_ok() {
    let provider = Arc::new(MockPaymentProvider::new());

    let response = test_app(provider).oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn unmatched_path_serves_static_file() {
    let static_dir = tempfile::tempdir().unwrap();
    std::fs::write(
        static_dir.path().join("index.html"),
        "<html>widget</html>",
    )
    .unwrap();

    let provider = Arc::new(MockPaymentProvider::new());
    let app = app_router(test_state(provider), static_dir.path());

    let response = app.oneshot(get("/index.html")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], b"<html>widget</html>");
}

#[tokio::test]
async fn root_serves_index_html() {
    let static_dir = tempfile::tempdir().unwrap();
    std::fs::write(static_dir.path().join("index.html"), "<html>widget</html>").unwrap();

    let provider = Arc::new(MockPaymentProvider::new());
    let app = app_router(test_state(provider), static_dir.path());

    let response = app.oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn missing_static_file_answers_404() {
    let static_dir = tempfile::tempdir().unwrap();

    let provider = Arc::new(MockPaymentProvider::new());
    let app = app_router(test_state(provider), static_dir.path());

    let response = app.oneshot(get("/missing.html")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
