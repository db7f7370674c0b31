//! SpaceX REST API client.
//!
//! Only the launch listing is needed: `GET {base_url}/v3/launches` returns the
//! full launch history as a JSON array.

use std::sync::Arc;
use tracing::{debug, warn};

use crate::error::{FetchError, NetworkError};
use crate::models::RocketLaunch;
use crate::traits::{Headers, HttpClient};

pub const SPACEX_BASE_URL: &str = "https://api.spacexdata.com";

const LAUNCHES_PATH: &str = "/v3/launches";

/// Client for the launch listing endpoint.
#[derive(Clone)]
pub struct SpaceXApi {
    /// Base URL for the API, without a trailing slash
    base_url: String,
    client: Arc<dyn HttpClient>,
}

impl SpaceXApi {
    /// Create a client against the public API.
    pub fn new(client: Arc<dyn HttpClient>) -> Self {
        Self::with_base_url(client, SPACEX_BASE_URL)
    }

    /// Create a client against a custom base URL (mirrors, test servers).
    pub fn with_base_url(client: Arc<dyn HttpClient>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, client }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn launches_url(&self) -> String {
        format!("{}{}", self.base_url, LAUNCHES_PATH)
    }

    /// Fetch every launch, in the order the API lists them.
    pub async fn get_all_launches(&self) -> Result<Vec<RocketLaunch>, FetchError> {
        let url = self.launches_url();

        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());

        let response = self
            .client
            .get(&url, &headers)
            .await
            .map_err(|e| NetworkError::from_http(e, &url))?;

        if !response.is_success() {
            warn!(url = %url, status = response.status, "Launch API returned an error status");
            return Err(NetworkError::HttpStatus {
                status: response.status,
                message: response.text_lossy(),
            }
            .into());
        }

        let launches: Vec<RocketLaunch> = response.json()?;
        debug!(url = %url, count = launches.len(), "Fetched launches from network");
        Ok(launches)
    }
}

impl std::fmt::Debug for SpaceXApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpaceXApi")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
