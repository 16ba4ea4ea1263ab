//! HandleSignupWebhookHandler - Command handler for signed provider events.

use std::sync::Arc;

use crate::domain::billing::{dispatch, SignedEvent, WebhookError, WebhookVerifier};

/// Command carrying one provider-sent event, exactly as received.
///
/// The payload is the raw wire bytes; the signature covers them, so they
/// must never be re-serialized before verification.
#[derive(Debug, Clone)]
pub struct HandleSignupWebhookCommand {
    pub payload: Vec<u8>,
    pub signature: String,
}

/// Handler that authenticates and dispatches one provider event.
///
/// Verification failures are the only errors. Once the event is authentic,
/// decode and dispatch problems stay internal; the delivery is acknowledged
/// so the provider does not retry something a retry cannot improve.
pub struct HandleSignupWebhookHandler {
    verifier: Arc<WebhookVerifier>,
}

impl HandleSignupWebhookHandler {
    pub fn new(verifier: Arc<WebhookVerifier>) -> Self {
        Self { verifier }
    }

    pub fn handle(&self, cmd: HandleSignupWebhookCommand) -> Result<(), WebhookError> {
        self.verifier.verify(&cmd.payload, &cmd.signature)?;

        match SignedEvent::from_slice(&cmd.payload) {
            Ok(event) => {
                tracing::debug!(
                    event_id = %event.id,
                    event_type = %event.event_type,
                    "webhook event verified"
                );
                dispatch(&event);
            }
            Err(err) => {
                tracing::warn!(error = %err, "authenticated event failed to decode");
            }
        }

        Ok(())
    }
}
