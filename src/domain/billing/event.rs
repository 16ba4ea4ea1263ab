//! Signed webhook event types.
//!
//! Defines the envelope the provider POSTs to the webhook route and the
//! typed views over its polymorphic inner object. Only fields relevant to
//! our processing are captured; everything else is ignored.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Provider webhook event envelope (simplified).
///
/// Decoding is intentionally lenient: the envelope must carry `id`, `type`
/// and `data.object`, while everything else is optional. Decode failures are
/// internal concerns, never verification failures.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SignedEvent {
    /// Unique identifier for the event (evt_xxx format).
    pub id: String,

    /// Type of event (e.g., "customer.subscription.created").
    #[serde(rename = "type")]
    pub event_type: String,

    /// Time at which the event was created (Unix seconds).
    #[serde(default)]
    pub created: i64,

    /// Container for the object that triggered the event.
    pub data: SignedEventData,

    /// Whether this is a live mode event (vs test mode).
    #[serde(default)]
    pub livemode: bool,
}

/// Container for event-specific data.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SignedEventData {
    /// The object that triggered the event (polymorphic by its `object` field).
    pub object: Value,

    /// Previous values for updated attributes (only for update events).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_attributes: Option<Value>,
}

impl SignedEvent {
    /// Parses an event envelope from the raw request body.
    pub fn from_slice(payload: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(payload)
    }

    /// Extracts the typed inner object by its `object` discriminator.
    pub fn object(&self) -> EventObject {
        EventObject::from_value(&self.data.object)
    }

    /// Returns true if this is a live mode event.
    pub fn is_live(&self) -> bool {
        self.livemode
    }
}

/// Typed view over the polymorphic `data.object`.
///
/// Kinds this implementation does not recognize keep the raw JSON value;
/// extraction never fails.
#[derive(Debug, Clone, PartialEq)]
pub enum EventObject {
    Customer(CustomerObject),
    Invoice(InvoiceObject),
    Subscription(SubscriptionObject),
    SetupIntent(SetupIntentObject),
    /// Unrecognized object kind, kept as raw JSON.
    Unknown(Value),
}

impl EventObject {
    /// Dispatches on the `object` discriminator field.
    pub fn from_value(value: &Value) -> Self {
        let kind = value.get("object").and_then(Value::as_str).unwrap_or_default();
        let typed = match kind {
            "customer" => serde_json::from_value(value.clone()).map(Self::Customer),
            "invoice" => serde_json::from_value(value.clone()).map(Self::Invoice),
            "subscription" => serde_json::from_value(value.clone()).map(Self::Subscription),
            "setup_intent" => serde_json::from_value(value.clone()).map(Self::SetupIntent),
            _ => return Self::Unknown(value.clone()),
        };
        // A recognized kind with an unexpected shape still decodes.
        typed.unwrap_or_else(|_| Self::Unknown(value.clone()))
    }
}

/// Customer as it arrives in webhook payloads.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CustomerObject {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Invoice as it arrives in webhook payloads.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct InvoiceObject {
    pub id: String,
    #[serde(default)]
    pub customer: Option<String>,
    #[serde(default)]
    pub subscription: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Subscription as it arrives in webhook payloads.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SubscriptionObject {
    pub id: String,
    #[serde(default)]
    pub customer: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Setup intent as it arrives in webhook payloads.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SetupIntentObject {
    pub id: String,
    #[serde(default)]
    pub customer: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_minimal_envelope() {
        let payload = br#"{"id":"evt_1","type":"customer.subscription.created","data":{"object":{"object":"subscription","id":"sub_1"}}}"#;

        let event = SignedEvent::from_slice(payload).unwrap();

        assert_eq!(event.id, "evt_1");
        assert_eq!(event.event_type, "customer.subscription.created");
        assert_eq!(event.created, 0); // absent in the minimal envelope
        assert!(!event.is_live());
    }

    #[test]
    fn extracts_subscription_object() {
        let payload = br#"{"id":"evt_1","type":"customer.subscription.created","data":{"object":{"object":"subscription","id":"sub_1","status":"active"}}}"#;
        let event = SignedEvent::from_slice(payload).unwrap();

        match event.object() {
            EventObject::Subscription(sub) => {
                assert_eq!(sub.id, "sub_1");
                assert_eq!(sub.status.as_deref(), Some("active"));
            }
            other => panic!("expected subscription, got {:?}", other),
        }
    }

    #[test]
    fn extracts_customer_object() {
        let value = json!({"object": "customer", "id": "cus_1", "email": "a@x"});

        match EventObject::from_value(&value) {
            EventObject::Customer(customer) => {
                assert_eq!(customer.id, "cus_1");
                assert_eq!(customer.email.as_deref(), Some("a@x"));
            }
            other => panic!("expected customer, got {:?}", other),
        }
    }

    #[test]
    fn extracts_invoice_object() {
        let value = json!({
            "object": "invoice",
            "id": "in_1",
            "customer": "cus_1",
            "subscription": "sub_1"
        });

        match EventObject::from_value(&value) {
            EventObject::Invoice(invoice) => {
                assert_eq!(invoice.id, "in_1");
                assert_eq!(invoice.subscription.as_deref(), Some("sub_1"));
            }
            other => panic!("expected invoice, got {:?}", other),
        }
    }

    #[test]
    fn extracts_setup_intent_object() {
        let value = json!({"object": "setup_intent", "id": "seti_1", "status": "succeeded"});

        assert!(matches!(
            EventObject::from_value(&value),
            EventObject::SetupIntent(_)
        ));
    }

    #[test]
    fn unknown_discriminator_keeps_raw_json() {
        let value = json!({"object": "payment_link", "id": "plink_1"});

        match EventObject::from_value(&value) {
            EventObject::Unknown(raw) => assert_eq!(raw["id"], "plink_1"),
            other => panic!("expected raw value, got {:?}", other),
        }
    }

    #[test]
    fn missing_discriminator_keeps_raw_json() {
        let value = json!({"id": "anon_1"});

        assert!(matches!(
            EventObject::from_value(&value),
            EventObject::Unknown(_)
        ));
    }

    #[test]
    fn malformed_recognized_kind_falls_back_to_raw() {
        // Recognized discriminator but no id field.
        let value = json!({"object": "customer", "email": "a@x"});

        assert!(matches!(
            EventObject::from_value(&value),
            EventObject::Unknown(_)
        ));
    }

    #[test]
    fn rejects_envelope_without_type() {
        let payload = br#"{"id":"evt_1","data":{"object":{}}}"#;

        assert!(SignedEvent::from_slice(payload).is_err());
    }
}
