//! Axum router configuration for the signup service.
//!
//! Binds the four endpoints to their handlers and falls back to static
//! assets for everything else.

use std::path::Path;

use axum::routing::{get, post};
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::handlers::{
    create_customer, create_subscription, get_config, handle_webhook, health, SignupAppState,
};

/// Create the signup API router.
///
/// # Routes
/// - `GET /config` - payment widget bootstrap
/// - `POST /create-customer` - create customer + setup intent
/// - `POST /subscription` - attach payment method and subscribe
/// - `GET /health` - liveness probe
pub fn signup_routes() -> Router<SignupAppState> {
    Router::new()
        .route("/config", get(get_config))
        .route("/create-customer", post(create_customer))
        .route("/subscription", post(create_subscription))
        .route("/health", get(health))
}

/// Create the webhook router.
///
/// Separate from the signup routes because the webhook authenticates via
/// signature rather than a browser session and needs the raw request body.
pub fn webhook_routes() -> Router<SignupAppState> {
    Router::new().route("/webhook", post(handle_webhook))
}

/// Assemble the complete application router.
///
/// Unmatched requests fall through to static assets under `static_dir`
/// (`/` serves its `index.html`); missing files answer 404.
pub fn app_router(state: SignupAppState, static_dir: &Path) -> Router {
    Router::new()
        .merge(signup_routes())
        .merge(webhook_routes())
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
