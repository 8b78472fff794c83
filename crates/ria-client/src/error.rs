//! # Client Error Types
//!
//! Unified error handling for ria-client operations.

use thiserror::Error;

/// Client operation result type
pub type ClientResult<T> = Result<T, ClientError>;

/// Error taxonomy for AUTO.RIA API operations.
///
/// Every variant is caught at the client boundary and converted into a
/// structured failure payload by the tool surface; none of these should
/// escape a tool call as an unhandled fault.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("API key is not set; call set_api_key first or export RIA_API_KEY")]
    MissingApiKey,

    #[error("Invalid filter: {0}")]
    Validation(String),

    #[error("HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Transport failure: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Malformed response body: {0}")]
    MalformedResponse(String),
}

impl ClientError {
    /// Create an API error from an HTTP response
    pub fn api_error(status: u16, body: impl Into<String>) -> Self {
        Self::Api {
            status,
            body: body.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Upstream status code, if the failure carries one.
    ///
    /// Transport failures (DNS, connection, timeout) have no status code;
    /// callers use this to decide whether to surface a `status_code` field.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if error is recoverable (worth retrying by the caller)
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        match self {
            ClientError::Transport(e) => e.is_timeout() || e.is_connect(),
            ClientError::Api { status, .. } => *status >= 500,
            // A broken key, filter, or response body will not fix itself
            _ => false,
        }
    }
}
