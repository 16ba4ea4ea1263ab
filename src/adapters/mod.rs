//! Adapters - implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - Axum routes, handlers, and DTOs
//! - `stripe` - payment provider client and its test double

pub mod http;
pub mod stripe;

pub use stripe::{MockPaymentProvider, StripeGateway};
