//! Error types for the Unity MCP bridge
//!
//! The `Display` text of each variant is the message shown to the operator
//! in the `error` field of a failed result.

use thiserror::Error;

/// Result type for bridge operations
pub type Result<T> = std::result::Result<T, BridgeError>;

/// Bridge error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BridgeError {
    /// Endpoint unreachable
    #[error("Connection refused. Is the Unity Editor running with the MCP Bridge?")]
    ConnectionRefused,

    /// No response within the configured timeout
    #[error("Request timed out")]
    Timeout,

    /// Server answered with a status other than 200
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// Status 200 but the body is not JSON
    #[error("Invalid response body: {0}")]
    InvalidResponse(String),

    /// Envelope could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Any other transport failure, described by the underlying error
    #[error("{0}")]
    Transport(String),
}

impl From<serde_json::Error> for BridgeError {
    fn from(err: serde_json::Error) -> Self {
        BridgeError::Serialization(err.to_string())
    }
}
