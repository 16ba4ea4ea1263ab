//! HTTP adapter for the signup flow.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::SignupAppState;
pub use routes::{app_router, signup_routes, webhook_routes};
