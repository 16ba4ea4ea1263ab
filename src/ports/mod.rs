//! Ports - interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between the
//! domain and the outside world. Adapters implement these ports.

mod payment_provider;

pub use payment_provider::{PaymentError, PaymentProvider};
