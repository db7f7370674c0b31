//! Error category classification.
//!
//! Categories let callers pick a message or a recovery hint without matching
//! on every concrete error variant.

use std::fmt;

/// High-level categorization of fetch failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Connection, DNS or timeout problems reaching the launch API.
    Network,

    /// The API answered with a non-success status.
    Server,

    /// The payload could not be decoded into launches.
    Data,

    /// The local snapshot could not be read or written.
    Storage,
}

impl ErrorCategory {
    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Server => "server",
            ErrorCategory::Data => "data",
            ErrorCategory::Storage => "storage",
        }
    }

    /// Returns suggested recovery actions for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Check your internet connection and press 'r' to reload",
            ErrorCategory::Server => "The launch API may be down. Press 'r' to try again later",
            ErrorCategory::Data => "The launch API returned data this version cannot read",
            ErrorCategory::Storage => {
                "Check permissions on the cache file or start with --no-cache"
            }
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
