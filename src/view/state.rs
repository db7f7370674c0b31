use crate::error::FetchError;
use crate::models::RocketLaunch;

/// What the launch list view is currently showing.
///
/// Exactly one variant is live. Within a cycle the only transitions are
/// `Loading -> Success` and `Loading -> Error`.
#[derive(Debug, Clone)]
pub enum FetchState {
    Loading,
    Success(Vec<RocketLaunch>),
    Error(FetchError),
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    /// True for `Success` and `Error`.
    pub fn is_terminal(&self) -> bool {
        !self.is_loading()
    }

    pub fn launches(&self) -> Option<&[RocketLaunch]> {
        match self {
            FetchState::Success(launches) => Some(launches),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            FetchState::Error(e) => Some(e),
            _ => None,
        }
    }

    /// Short label for logging.
    pub fn label(&self) -> &'static str {
        match self {
            FetchState::Loading => "loading",
            FetchState::Success(_) => "success",
            FetchState::Error(_) => "error",
        }
    }
}

impl From<Result<Vec<RocketLaunch>, FetchError>> for FetchState {
    fn from(result: Result<Vec<RocketLaunch>, FetchError>) -> Self {
        match result {
            Ok(launches) => FetchState::Success(launches),
            Err(e) => FetchState::Error(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NetworkError;

    #[test]
    fn test_accessors() {
        let loading = FetchState::Loading;
        assert!(loading.is_loading());
        assert!(!loading.is_terminal());
        assert!(loading.launches().is_none());
        assert_eq!(loading.label(), "loading");

        let empty = FetchState::Success(Vec::new());
        assert!(empty.is_terminal());
        assert_eq!(empty.launches().map(<[_]>::len), Some(0));
        assert!(empty.error().is_none());
    }

    #[test]
    fn test_from_result() {
        let err: FetchError = NetworkError::Other {
            message: "x".to_string(),
        }
        .into();
        let state = FetchState::from(Err(err));
        assert!(state.error().is_some());
        assert_eq!(state.label(), "error");

        let state = FetchState::from(Ok(Vec::new()));
        assert_eq!(state.label(), "success");
    }
}
