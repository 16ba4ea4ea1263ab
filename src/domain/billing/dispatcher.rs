//! Typed dispatch over recognized webhook event types.

use super::event::{EventObject, SignedEvent};

/// Event types this service recognizes.
///
/// The provider sends many more; anything not listed dispatches as `Other`
/// and is acknowledged without action so the provider does not retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    CustomerCreated,
    CustomerUpdated,
    SetupIntentCreated,
    InvoiceUpcoming,
    InvoiceCreated,
    InvoiceFinalized,
    InvoicePaymentSucceeded,
    InvoicePaymentFailed,
    SubscriptionCreated,
    /// Unrecognized event type.
    Other,
}

impl EventKind {
    /// Maps the provider's dotted event type string.
    pub fn from_type(event_type: &str) -> Self {
        match event_type {
            "customer.created" => Self::CustomerCreated,
            "customer.updated" => Self::CustomerUpdated,
            "setup_intent.created" => Self::SetupIntentCreated,
            "invoice.upcoming" => Self::InvoiceUpcoming,
            "invoice.created" => Self::InvoiceCreated,
            "invoice.finalized" => Self::InvoiceFinalized,
            "invoice.payment_succeeded" => Self::InvoicePaymentSucceeded,
            "invoice.payment_failed" => Self::InvoicePaymentFailed,
            "customer.subscription.created" => Self::SubscriptionCreated,
            _ => Self::Other,
        }
    }
}

/// Dispatches an authenticated event by its type.
///
/// Most recognized events need nothing from this service beyond the
/// acknowledgement. Subscription creation logs the full subscription
/// object; richer handling is an extension point.
pub fn dispatch(event: &SignedEvent) {
    match EventKind::from_type(&event.event_type) {
        EventKind::CustomerCreated => {
            if let EventObject::Customer(customer) = event.object() {
                tracing::info!(customer_id = %customer.id, "customer created");
            }
        }
        EventKind::CustomerUpdated => {}
        EventKind::SetupIntentCreated => {}
        EventKind::InvoiceUpcoming => {}
        EventKind::InvoiceCreated => {}
        EventKind::InvoiceFinalized => {}
        EventKind::InvoicePaymentSucceeded => {}
        EventKind::InvoicePaymentFailed => {}
        EventKind::SubscriptionCreated => {
            let subscription =
                serde_json::to_string(&event.data.object).unwrap_or_default();
            tracing::info!(%subscription, "subscription created");
        }
        EventKind::Other => {
            tracing::debug!(event_type = %event.event_type, "unrecognized event type");
        }
    }
}
