//! Runtime configuration.
//!
//! Defaults target the public SpaceX API and a per-user data directory.
//! Environment variables override the defaults; command-line flags are
//! applied on top by the binary.

use std::path::PathBuf;
use std::time::Duration;

use crate::api::SPACEX_BASE_URL;

/// Directory name under the platform data dir
const APP_DIR: &str = "launchpad";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the launch browser.
///
/// # Example
///
/// ```ignore
/// use launchpad::config::LaunchpadConfig;
///
/// let config = LaunchpadConfig::from_env()
///     .with_api_base_url("http://localhost:8080")
///     .without_cache_file();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchpadConfig {
    /// Base URL of the launch API (no trailing path)
    pub api_base_url: String,
    /// Persisted snapshot location; `None` keeps the snapshot in memory only
    pub cache_file: Option<PathBuf>,
    /// Per-request timeout for the launch API
    pub request_timeout: Duration,
    /// Where tracing output goes; the terminal belongs to the UI
    pub log_file: Option<PathBuf>,
}

impl Default for LaunchpadConfig {
    fn default() -> Self {
        let app_dir = dirs::data_dir().map(|d| d.join(APP_DIR));
        Self {
            api_base_url: SPACEX_BASE_URL.to_string(),
            cache_file: app_dir.as_ref().map(|d| d.join("launches.json")),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            log_file: app_dir.map(|d| d.join("launchpad.log")),
        }
    }
}

impl LaunchpadConfig {
    /// Create a new LaunchpadConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API base URL.
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Persist the snapshot at `path`.
    pub fn with_cache_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.cache_file = Some(path.into());
        self
    }

    /// Keep the snapshot in memory only.
    pub fn without_cache_file(mut self) -> Self {
        self.cache_file = None;
        self
    }

    /// Set the request timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Write logs to `path`.
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// Create config from environment variables.
    ///
    /// - `LAUNCHPAD_API_URL`: API base URL
    /// - `LAUNCHPAD_CACHE_FILE`: snapshot path
    /// - `LAUNCHPAD_TIMEOUT_SECS`: request timeout; invalid values are ignored
    /// - `LAUNCHPAD_LOG_FILE`: log path
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(url) = non_empty_var("LAUNCHPAD_API_URL") {
            config = config.with_api_base_url(url);
        }
        if let Some(path) = non_empty_var("LAUNCHPAD_CACHE_FILE") {
            config = config.with_cache_file(path);
        }
        if let Some(secs) = non_empty_var("LAUNCHPAD_TIMEOUT_SECS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
        {
            config = config.with_request_timeout(Duration::from_secs(secs));
        }
        if let Some(path) = non_empty_var("LAUNCHPAD_LOG_FILE") {
            config = config.with_log_file(path);
        }

        config
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
