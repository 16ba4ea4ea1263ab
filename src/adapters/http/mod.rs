//! HTTP adapters - REST API implementations.

pub mod signup;

// Re-export key types for convenience
pub use signup::app_router;
pub use signup::SignupAppState;
