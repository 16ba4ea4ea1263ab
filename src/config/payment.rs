//! Payment configuration (Stripe)

use serde::Deserialize;

use super::error::ValidationError;

/// Payment configuration (Stripe)
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentConfig {
    /// Stripe secret API key (sk_live_... or sk_test_...)
    pub stripe_secret_key: String,

    /// Stripe publishable key handed to the browser client
    pub stripe_publishable_key: String,

    /// Stripe webhook signing secret (whsec_...)
    pub stripe_webhook_secret: String,

    /// Plan the signup flow subscribes customers to
    pub subscription_plan_id: String,
}

impl PaymentConfig {
    /// Check if using Stripe test mode
    pub fn is_test_mode(&self) -> bool {
        self.stripe_secret_key.starts_with("sk_test_")
    }

    /// Check if using Stripe live mode
    pub fn is_live_mode(&self) -> bool {
        self.stripe_secret_key.starts_with("sk_live_")
    }

    /// Validate payment configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.stripe_secret_key.is_empty() {
            return Err(ValidationError::MissingRequired("STRIPE_SECRET_KEY"));
        }
        if self.stripe_publishable_key.is_empty() {
            return Err(ValidationError::MissingRequired("STRIPE_PUBLISHABLE_KEY"));
        }
        if self.stripe_webhook_secret.is_empty() {
            return Err(ValidationError::MissingRequired("STRIPE_WEBHOOK_SECRET"));
        }
        if self.subscription_plan_id.is_empty() {
            return Err(ValidationError::MissingRequired("SUBSCRIPTION_PLAN_ID"));
        }

        // Verify key prefixes for safety
        if !self.stripe_secret_key.starts_with("sk_") {
            return Err(ValidationError::InvalidStripeSecretKey);
        }
        if !self.stripe_publishable_key.starts_with("pk_") {
            return Err(ValidationError::InvalidStripePublishableKey);
        }
        if !self.stripe_webhook_secret.starts_with("whsec_") {
            return Err(ValidationError::InvalidStripeWebhookSecret);
        }

        Ok(())
    }
}
