//! Error types for REST API operations

use bittrex_auth::AuthError;
use bittrex_types::ApiVersion;
use std::time::Duration;

use crate::transport::TransportError;

/// Errors that can occur during REST API operations
///
/// A response with `success: false` is not an error; it is returned as an
/// ordinary [`bittrex_types::ApiResponse`].
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// The operation has no path in the configured API version
    #[error("method call not available under API version {version}: {operation}")]
    UnsupportedOperation {
        /// Logical operation name
        operation: &'static str,
        /// Version the client is configured for
        version: ApiVersion,
    },

    /// The transport failed to deliver the request or decode the reply
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Request exceeded the configured timeout
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// The client was shut down
    #[error("Request cancelled: client shut down")]
    Cancelled,

    /// Invalid request or configuration parameter
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// API reported failure (only from helpers that unwrap the envelope)
    #[error("API error: {message}")]
    Api {
        /// Message returned by Bittrex
        message: String,
    },

    /// Response payload did not have the shape a helper expected
    #[error("Parse error: {0}")]
    Parse(String),

    /// Credential storage or decryption failed
    #[error("Credential error: {0}")]
    Auth(#[from] AuthError),
}

impl RestError {
    /// Create an API error from the message returned by Bittrex
    pub fn from_api_message(message: impl Into<String>) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Check if this error was raised before any network I/O because of the API version
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::UnsupportedOperation { .. })
    }

    /// Check if this error came from the network layer
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Timeout(_))
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;
