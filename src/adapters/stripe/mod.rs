//! Stripe adapters - payment provider implementations.
//!
//! - `StripeGateway` - thin client over Stripe's REST API
//! - `MockPaymentProvider` - configurable test double with a call log

mod mock_payment_provider;
mod stripe_adapter;

pub use mock_payment_provider::{MockPaymentProvider, ProviderCall};
pub use stripe_adapter::StripeGateway;
