//! Signup broker entry point.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use signup_broker::adapters::http::{app_router, SignupAppState};
use signup_broker::adapters::stripe::StripeGateway;
use signup_broker::config::AppConfig;
use signup_broker::domain::billing::WebhookVerifier;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load and validate configuration; missing values abort startup.
    let config = AppConfig::load()?;
    config.validate()?;

    // Initialize tracing. RUST_LOG wins over the configured default.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.server.log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = SignupAppState {
        payment_provider: Arc::new(StripeGateway::new(config.payment.stripe_secret_key.clone())),
        webhook_verifier: Arc::new(WebhookVerifier::new(
            config.payment.stripe_webhook_secret.clone(),
        )),
        publishable_key: config.payment.stripe_publishable_key.clone(),
        plan_id: config.payment.subscription_plan_id.clone(),
    };

    let app = app_router(state, &config.server.static_dir);

    let addr = config.server.socket_addr();
    tracing::info!(
        %addr,
        static_dir = %config.server.static_dir.display(),
        test_mode = config.payment.is_test_mode(),
        "signup broker listening"
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
