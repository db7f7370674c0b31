//! Network-related error types.
//!
//! Errors raised while retrieving the launch list from the remote API.

use std::fmt;

use super::ErrorCategory;
use crate::traits::HttpError;

/// Network-specific error variants.
#[derive(Debug, Clone)]
pub enum NetworkError {
    /// Connection to the server failed.
    ConnectionFailed { url: String, message: String },

    /// Request timed out.
    Timeout { url: String },

    /// HTTP status error (non-2xx response).
    HttpStatus { status: u16, message: String },

    /// Generic network error.
    Other { message: String },
}

impl NetworkError {
    /// Map a transport error from an [`HttpClient`](crate::traits::HttpClient) call.
    pub fn from_http(err: HttpError, url: &str) -> Self {
        match err {
            HttpError::ConnectionFailed(message) => NetworkError::ConnectionFailed {
                url: url.to_string(),
                message,
            },
            HttpError::Timeout(_) => NetworkError::Timeout {
                url: url.to_string(),
            },
            HttpError::ServerError { status, message } => {
                NetworkError::HttpStatus { status, message }
            }
            other => NetworkError::Other {
                message: other.to_string(),
            },
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            NetworkError::HttpStatus { .. } => ErrorCategory::Server,
            _ => ErrorCategory::Network,
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            NetworkError::ConnectionFailed { .. } => {
                "Unable to reach the launch API. Please check your internet connection.".to_string()
            }
            NetworkError::Timeout { .. } => {
                "The launch API took too long to respond.".to_string()
            }
            NetworkError::HttpStatus { status, .. } => match *status {
                404 => "The launch feed was not found on the server.".to_string(),
                429 => "Too many requests. Please wait a moment and try again.".to_string(),
                500..=599 => {
                    "The launch API is experiencing issues. Please try again later.".to_string()
                }
                _ => format!("The launch API returned an error (HTTP {}).", status),
            },
            NetworkError::Other { message } => format!("Network error: {}", message),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            NetworkError::ConnectionFailed { .. } => "E_NET_CONN",
            NetworkError::Timeout { .. } => "E_NET_TIMEOUT",
            NetworkError::HttpStatus { .. } => "E_NET_HTTP",
            NetworkError::Other { .. } => "E_NET_OTHER",
        }
    }
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::ConnectionFailed { url, message } => {
                write!(f, "Connection failed to '{}': {}", url, message)
            }
            NetworkError::Timeout { url } => write!(f, "Request to '{}' timed out", url),
            NetworkError::HttpStatus { status, message } => {
                write!(f, "HTTP {} error: {}", status, message)
            }
            NetworkError::Other { message } => write!(f, "Network error: {}", message),
        }
    }
}

impl std::error::Error for NetworkError {}
