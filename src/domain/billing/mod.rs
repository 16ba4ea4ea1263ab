//! Billing domain - the security-sensitive core of the service.
//!
//! Signature verification over provider-sent events, the typed event
//! envelope, dispatch by event type, and the signup flow's error taxonomy.
//!
//! # Module Organization
//!
//! - `webhook_verifier` - header parsing and constant-time HMAC verification
//! - `event` - signed event envelope and typed inner objects
//! - `dispatcher` - exhaustive dispatch over recognized event types
//! - `webhook_errors` / `signup_errors` - error taxonomies and their
//!   external status-code collapse

pub mod dispatcher;
pub mod event;
pub mod signup_errors;
pub mod webhook_errors;
pub mod webhook_verifier;

pub use dispatcher::{dispatch, EventKind};
pub use event::{
    CustomerObject, EventObject, InvoiceObject, SetupIntentObject, SignedEvent, SignedEventData,
    SubscriptionObject,
};
pub use signup_errors::SignupError;
pub use webhook_errors::WebhookError;
pub use webhook_verifier::{
    sign_payload, SignatureHeader, WebhookVerifier, DEFAULT_TOLERANCE_SECS,
};
