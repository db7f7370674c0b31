//! Errors raised by launch snapshot stores.

use std::path::PathBuf;

use thiserror::Error;

/// Failure reading or writing the local launch snapshot.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem operation failed
    #[error("Failed to {operation} '{}': {source}", .path.display())]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Snapshot exists but is not valid JSON for the current schema
    #[error("Snapshot at '{}' is corrupt: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Launches could not be serialized for writing
    #[error("Failed to serialize snapshot: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl StoreError {
    pub(crate) fn io(operation: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            operation,
            path: path.into(),
            source,
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            StoreError::Io { operation, path, .. } => {
                format!("Could not {} the launch cache at '{}'.", operation, path.display())
            }
            StoreError::Corrupt { path, .. } => format!(
                "The launch cache at '{}' is damaged. Run with --clear-cache to reset it.",
                path.display()
            ),
            StoreError::Serialize(_) => "Could not save launches to the local cache.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_display_includes_path_and_operation() {
        let err = StoreError::io(
            "read",
            "/tmp/launches.json",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let text = err.to_string();
        assert!(text.contains("read"));
        assert!(text.contains("/tmp/launches.json"));
        assert!(text.contains("denied"));
    }

    #[test]
    fn test_corrupt_user_message_mentions_reset() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = StoreError::Corrupt {
            path: PathBuf::from("launches.json"),
            source,
        };
        assert!(err.user_message().contains("--clear-cache"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
