//! Webhook signature verification.
//!
//! Implements secure verification of provider webhook signatures using
//! HMAC-SHA256. Includes a timestamp tolerance check to reject replayed
//! events.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::{Choice, ConstantTimeEq};

use super::webhook_errors::WebhookError;

type HmacSha256 = Hmac<Sha256>;

/// Default maximum acceptable age of an event timestamp (5 minutes).
pub const DEFAULT_TOLERANCE_SECS: i64 = 300;

/// Parsed components of the `Stripe-Signature` header.
///
/// Format: `t=<timestamp>,v1=<signature>[,v1=<signature>...]`
///
/// The provider may send several `v1` digests during secret rotation; at
/// least one must match. Unknown scheme tags (`v0`, future versions) are
/// ignored for forward compatibility, and stray whitespace between elements
/// is tolerated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureHeader {
    /// Unix timestamp when the signature was generated.
    pub timestamp: i64,
    /// Candidate HMAC-SHA256 digests, hex-decoded.
    pub v1_signatures: Vec<Vec<u8>>,
}

impl SignatureHeader {
    /// Parses a `Stripe-Signature` header string.
    ///
    /// # Errors
    ///
    /// Returns `WebhookError::InvalidHeader` if the header lacks a timestamp
    /// or a `v1` digest, or if either fails to parse.
    pub fn parse(header: &str) -> Result<Self, WebhookError> {
        let mut timestamp: Option<i64> = None;
        let mut v1_signatures: Vec<Vec<u8>> = Vec::new();

        for part in header.split(',') {
            let (key, value) = part
                .trim()
                .split_once('=')
                .ok_or(WebhookError::InvalidHeader("malformed parameter"))?;

            match key.trim() {
                "t" => {
                    timestamp = Some(
                        value
                            .trim()
                            .parse()
                            .map_err(|_| WebhookError::InvalidHeader("invalid timestamp"))?,
                    );
                }
                "v1" => {
                    let digest = hex::decode(value.trim())
                        .map_err(|_| WebhookError::InvalidHeader("invalid v1 digest hex"))?;
                    v1_signatures.push(digest);
                }
                _ => {
                    // Ignore unknown scheme tags for forward compatibility
                }
            }
        }

        let timestamp = timestamp.ok_or(WebhookError::InvalidHeader("missing timestamp"))?;
        if v1_signatures.is_empty() {
            return Err(WebhookError::InvalidHeader("missing v1 digest"));
        }

        Ok(SignatureHeader {
            timestamp,
            v1_signatures,
        })
    }
}

/// Verifier for provider webhook signatures.
pub struct WebhookVerifier {
    /// The webhook signing secret from the provider dashboard.
    secret: String,
    /// Replay-tolerance window; `None` disables the check.
    tolerance_secs: Option<i64>,
}

impl WebhookVerifier {
    /// Creates a verifier with the given signing secret and the default
    /// replay tolerance.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            tolerance_secs: Some(DEFAULT_TOLERANCE_SECS),
        }
    }

    /// Overrides the replay-tolerance window.
    pub fn with_tolerance(mut self, secs: i64) -> Self {
        self.tolerance_secs = Some(secs);
        self
    }

    /// Disables the replay-tolerance check (fixture replay and tests).
    pub fn without_tolerance(mut self) -> Self {
        self.tolerance_secs = None;
        self
    }

    /// Verifies `header` against the raw request body as received on the
    /// wire, using the current time for the tolerance check.
    ///
    /// # Errors
    ///
    /// - `InvalidHeader` - header missing, malformed, or incomplete
    /// - `SignatureMismatch` - no supplied digest matches
    /// - `TimestampOutsideTolerance` - event is too old or too far ahead
    pub fn verify(&self, payload: &[u8], header: &str) -> Result<(), WebhookError> {
        self.verify_at(payload, header, chrono::Utc::now().timestamp())
    }

    /// Verification with an explicit clock, for deterministic tests.
    ///
    /// # Verification Steps
    ///
    /// 1. Parse the signature header
    /// 2. Compute the expected HMAC over `"{timestamp}.{payload}"`
    /// 3. Compare against every supplied digest in constant time
    /// 4. Enforce the replay tolerance: `|now - timestamp| <= tolerance`
    pub fn verify_at(&self, payload: &[u8], header: &str, now: i64) -> Result<(), WebhookError> {
        let header = SignatureHeader::parse(header)?;
        let expected = self.compute_signature(header.timestamp, payload);

        // Fold every candidate into one constant-time accumulator; no early
        // exit, so timing does not depend on which digest matches.
        let mut matched = Choice::from(0u8);
        for candidate in &header.v1_signatures {
            if candidate.len() == expected.len() {
                matched |= expected.as_slice().ct_eq(candidate);
            }
        }
        if matched.unwrap_u8() != 1 {
            return Err(WebhookError::SignatureMismatch);
        }

        if let Some(tolerance) = self.tolerance_secs {
            if (now - header.timestamp).abs() > tolerance {
                return Err(WebhookError::TimestampOutsideTolerance);
            }
        }

        Ok(())
    }

    /// Computes the HMAC-SHA256 digest for the given timestamp and payload.
    ///
    /// The digest covers the exact bytes received on the wire; the payload is
    /// never re-encoded.
    fn compute_signature(&self, timestamp: i64, payload: &[u8]) -> Vec<u8> {
        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes())
            .expect("HMAC accepts any key size");
        mac.update(format!("{timestamp}.").as_bytes());
        mac.update(payload);
        mac.finalize().into_bytes().to_vec()
    }
}

/// Computes the hex signature the provider would send for a payload.
///
/// Used to construct fixtures in tests and local replay tooling.
pub fn sign_payload(secret: &str, timestamp: i64, payload: &[u8]) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC accepts any key size");
    mac.update(format!("{timestamp}.").as_bytes());
    mac.update(payload);
    hex::encode(mac.finalize().into_bytes())
}
