//! The single error kind surfaced by the launch data path.

use std::sync::Arc;

use thiserror::Error;

use super::{ErrorCategory, NetworkError, StoreError};

/// Underlying reason a fetch failed.
#[derive(Debug, Error)]
pub enum FetchCause {
    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error("Failed to decode launch data: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Opaque fetch failure.
///
/// The cause is shared so the error can be cloned into every published
/// [`FetchState`](crate::view::FetchState) without losing the chain.
#[derive(Debug, Clone, Error)]
#[error("{cause}")]
pub struct FetchError {
    #[source]
    cause: Arc<FetchCause>,
}

impl FetchError {
    pub fn cause(&self) -> &FetchCause {
        &self.cause
    }

    pub fn category(&self) -> ErrorCategory {
        match self.cause.as_ref() {
            FetchCause::Network(e) => e.category(),
            FetchCause::Decode(_) => ErrorCategory::Data,
            FetchCause::Store(_) => ErrorCategory::Storage,
        }
    }

    /// Message for the render sink.
    pub fn user_message(&self) -> String {
        match self.cause.as_ref() {
            FetchCause::Network(e) => e.user_message(),
            FetchCause::Decode(_) => {
                "Received launch data that could not be read.".to_string()
            }
            FetchCause::Store(e) => e.user_message(),
        }
    }

    /// Short code for log lines.
    pub fn error_code(&self) -> &'static str {
        match self.cause.as_ref() {
            FetchCause::Network(e) => e.error_code(),
            FetchCause::Decode(_) => "E_DATA_DECODE",
            FetchCause::Store(_) => "E_STORE",
        }
    }
}

impl From<FetchCause> for FetchError {
    fn from(cause: FetchCause) -> Self {
        Self {
            cause: Arc::new(cause),
        }
    }
}

impl From<NetworkError> for FetchError {
    fn from(e: NetworkError) -> Self {
        FetchCause::from(e).into()
    }
}

impl From<StoreError> for FetchError {
    fn from(e: StoreError) -> Self {
        FetchCause::from(e).into()
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchCause::from(e).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    fn timeout() -> FetchError {
        NetworkError::Timeout {
            url: "https://api.spacexdata.com/v3/launches".to_string(),
        }
        .into()
    }

    #[test]
    fn test_clone_shares_cause() {
        let err = timeout();
        let cloned = err.clone();
        assert!(std::ptr::eq(err.cause(), cloned.cause()));
        assert_eq!(err.to_string(), cloned.to_string());
    }

    #[test]
    fn test_category_per_cause() {
        assert_eq!(timeout().category(), ErrorCategory::Network);

        let decode: FetchError = serde_json::from_str::<Vec<u8>>("nope").unwrap_err().into();
        assert_eq!(decode.category(), ErrorCategory::Data);
        assert_eq!(decode.error_code(), "E_DATA_DECODE");

        let store: FetchError = StoreError::io(
            "write",
            "launches.json",
            std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
        )
        .into();
        assert_eq!(store.category(), ErrorCategory::Storage);
    }

    #[test]
    fn test_source_chain_is_preserved() {
        let err = timeout();
        let source = err.source().expect("fetch error should expose its cause");
        assert!(source.to_string().contains("timed out"));
    }

    #[test]
    fn test_user_message_is_friendly() {
        assert!(timeout().user_message().contains("too long"));
    }
}
