//! Webhook error types for signed-event ingestion.

use axum::http::StatusCode;
use thiserror::Error;

/// Errors that occur while authenticating a signed event.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// The signature header is missing, malformed, or incomplete.
    #[error("invalid signature header: {0}")]
    InvalidHeader(&'static str),

    /// No supplied digest matched the expected HMAC.
    #[error("signature mismatch")]
    SignatureMismatch,

    /// Event timestamp falls outside the replay-tolerance window.
    #[error("timestamp outside tolerance")]
    TimestampOutsideTolerance,
}

impl WebhookError {
    /// Maps the error to the externally visible status code.
    ///
    /// Every verification failure answers 400 with an empty body. The
    /// distinction between header, digest, and timestamp failures stays
    /// internal (logs only) to avoid acting as a verification oracle.
    pub fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_header_displays_reason() {
        let err = WebhookError::InvalidHeader("missing timestamp");
        assert_eq!(format!("{}", err), "invalid signature header: missing timestamp");
    }

    #[test]
    fn signature_mismatch_displays_correctly() {
        assert_eq!(format!("{}", WebhookError::SignatureMismatch), "signature mismatch");
    }

    #[test]
    fn all_verification_failures_collapse_to_bad_request() {
        let errors = [
            WebhookError::InvalidHeader("missing timestamp"),
            WebhookError::SignatureMismatch,
            WebhookError::TimestampOutsideTolerance,
        ];
        for err in errors {
            assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        }
    }
}
