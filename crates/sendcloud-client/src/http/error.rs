/*
[INPUT]:  Error sources (transport, API status, validation, payload decoding, webhooks)
[OUTPUT]: Structured error types carrying status codes and raw bodies
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or changing propagation policy
*/

use thiserror::Error;

use super::transport::TransportError;

/// Main error type for the Sendcloud client
#[derive(Error, Debug)]
pub enum SendcloudError {
    /// Connection-level failure (DNS, TCP, TLS, timeout)
    #[error("Transport failure: {0}")]
    Transport(#[from] TransportError),

    /// API answered with a 4xx/5xx status other than 400
    #[error("API error (status {status}): {message}")]
    Api {
        status: u16,
        message: String,
        body: String,
    },

    /// A required field was missing from a module call
    #[error("{message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// Response body was not valid JSON
    #[error("Invalid response body from API, code: {status}, body: {body}")]
    InvalidPayload {
        status: u16,
        body: String,
        #[source]
        source: serde_json::Error,
    },

    /// Webhook signature did not match the payload
    #[error("Invalid webhook signature")]
    InvalidSignature,

    /// Unsupported HTTP method name
    #[error("Unsupported HTTP method: {0}")]
    InvalidMethod(String),

    /// Header name or value could not be encoded
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SendcloudError {
    /// HTTP status carried by the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            SendcloudError::Api { status, .. } | SendcloudError::InvalidPayload { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }

    /// Check if the error happened below HTTP (no response was received)
    pub fn is_transport_error(&self) -> bool {
        matches!(self, SendcloudError::Transport(_))
    }

    /// Check if the error was raised before any network call
    pub fn is_validation_error(&self) -> bool {
        matches!(self, SendcloudError::Validation { .. })
    }

    /// Create a validation error for a missing field
    pub fn missing_field(field: &'static str, message: impl Into<String>) -> Self {
        SendcloudError::Validation {
            field,
            message: message.into(),
        }
    }
}

/// Result type alias for Sendcloud operations
pub type Result<T> = std::result::Result<T, SendcloudError>;
