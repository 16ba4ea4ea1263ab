//! Signup flow error types.

use axum::http::StatusCode;
use thiserror::Error;

/// Errors from the signup orchestration endpoints.
#[derive(Debug, Error)]
pub enum SignupError {
    /// The request body is malformed or a required field is missing.
    #[error("{field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// The payments provider rejected or failed an operation.
    #[error("{0}")]
    Provider(String),
}

impl SignupError {
    /// Validation failure for a named request field.
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// Provider failure carrying the provider's own message.
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider(message.into())
    }

    /// Human-readable message for the HTTP error body.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Maps the error to the externally visible status code.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Provider(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
