//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Variables are the flat names the deployment
//! environment sets (`STRIPE_SECRET_KEY`, `STATIC_DIR`, ...); they map onto
//! lowercase struct fields.
//!
//! # Example
//!
//! ```no_run
//! use signup_broker::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr());
//! ```

mod error;
mod payment;
mod server;

pub use error::{ConfigError, ValidationError};
pub use payment::PaymentConfig;
pub use server::ServerConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
/// Immutable after load; handlers receive it by reference.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (bind address, static assets directory)
    #[serde(flatten)]
    pub server: ServerConfig,

    /// Payment configuration (Stripe keys, plan)
    #[serde(flatten)]
    pub payment: PaymentConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads a `.env` file if present (for development)
    /// 2. Reads flat environment variables (`STRIPE_SECRET_KEY` -> `stripe_secret_key`)
    /// 3. Deserializes into typed configuration structs
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required environment variables are missing
    /// or values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::Environment::default().try_parsing(true))
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// All required values must be non-empty at startup or the process
    /// refuses to start; Stripe keys must carry their expected prefixes.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.payment.validate()?;
        Ok(())
    }
}
