//! Error types for Anexia API operations.
//!
//! Every failure carries the name of the operation that produced it (for example
//! `"address list"`), so callers can tell which request went wrong without
//! inspecting the message text.

use crate::transport::TransportError;
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Main error type for Anexia API operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The request URL or request parameters could not be assembled
    #[error("could not create {operation} request: {message}")]
    RequestConstruction {
        /// Operation that failed
        operation: &'static str,
        /// Underlying error message
        message: String,
    },

    /// The request payload could not be serialized
    #[error("could not encode {operation} payload: {message}")]
    Encode {
        /// Operation that failed
        operation: &'static str,
        /// Underlying error message
        message: String,
    },

    /// The request could not be executed (network, DNS, TLS, timeout)
    #[error("could not execute {operation} request: {source}")]
    RequestExecution {
        /// Operation that failed
        operation: &'static str,
        /// Transport failure
        #[source]
        source: TransportError,
    },

    /// The response body is not JSON of the expected shape
    #[error("could not decode {operation} response: {message}")]
    Decode {
        /// Operation that failed
        operation: &'static str,
        /// Underlying error message
        message: String,
    },

    /// The server answered 404
    #[error("{operation} failed: not found: {message}")]
    NotFound {
        /// Operation that failed
        operation: &'static str,
        /// Server-provided message
        message: String,
    },

    /// The server answered 401 or 403
    #[error("{operation} failed: unauthorized: {message}")]
    Unauthorized {
        /// Operation that failed
        operation: &'static str,
        /// Server-provided message
        message: String,
    },

    /// The server answered with any other non-success status
    #[error("{operation} failed with status {status}: {message}")]
    Api {
        /// Operation that failed
        operation: &'static str,
        /// HTTP status code
        status: u16,
        /// Server-provided message
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Waiting for a resource state timed out
    #[error("Timeout: {0}")]
    Timeout(String),
}

/// Specialized result type for Anexia API operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns the error code for this error type.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::RequestConstruction { .. } => "REQUEST_CONSTRUCTION",
            Self::Encode { .. } => "ENCODE",
            Self::RequestExecution { .. } => "REQUEST_EXECUTION",
            Self::Decode { .. } => "DECODE",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Unauthorized { .. } => "UNAUTHORIZED",
            Self::Api { .. } => "API_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Timeout(_) => "TIMEOUT",
        }
    }

    /// Returns the name of the failed operation, if the error came from one.
    #[must_use]
    pub const fn operation(&self) -> Option<&'static str> {
        match self {
            Self::RequestConstruction { operation, .. }
            | Self::Encode { operation, .. }
            | Self::RequestExecution { operation, .. }
            | Self::Decode { operation, .. }
            | Self::NotFound { operation, .. }
            | Self::Unauthorized { operation, .. }
            | Self::Api { operation, .. } => Some(*operation),
            Self::Config(_) | Self::Timeout(_) => None,
        }
    }

    /// Returns the HTTP status code reported by the server, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound { .. } => Some(404),
            Self::Api { status, .. } => Some(*status),
            // 401 and 403 both map to Unauthorized; the exact code is not kept.
            _ => None,
        }
    }

    /// Returns true if the resource did not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Maps a non-success response to an error.
    #[must_use]
    pub fn from_status(operation: &'static str, status: StatusCode, body: &[u8]) -> Self {
        let message = error_message(body);
        match status {
            StatusCode::NOT_FOUND => Self::NotFound { operation, message },
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Self::Unauthorized { operation, message }
            }
            status => Self::Api {
                operation,
                status: status.as_u16(),
                message,
            },
        }
    }
}

/// Error envelope returned by the API on failures.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

fn error_message(body: &[u8]) -> String {
    match serde_json::from_slice::<ErrorEnvelope>(body) {
        Ok(envelope) if !envelope.error.message.is_empty() => envelope.error.message,
        _ => String::from_utf8_lossy(body).trim().to_string(),
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::Config(format!("invalid URL: {err}"))
    }
}
