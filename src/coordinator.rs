//! Cache-first launch coordination.
//!
//! [`LaunchCoordinator`] is the one place that decides between the local
//! snapshot and the network:
//!
//! 1. `force_reload == false` and a snapshot exists: return it, no network.
//! 2. Otherwise fetch from the API, write the result through to the store,
//!    then return it.
//!
//! A forced request never falls back to the snapshot when the network fails.
//! An empty list, cached or fetched, is a valid answer.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::api::SpaceXApi;
use crate::error::FetchError;
use crate::models::RocketLaunch;
use crate::traits::{LaunchProvider, LaunchStore};

pub struct LaunchCoordinator {
    api: SpaceXApi,
    store: Arc<dyn LaunchStore>,
}

impl LaunchCoordinator {
    pub fn new(api: SpaceXApi, store: Arc<dyn LaunchStore>) -> Self {
        Self { api, store }
    }

    /// Return the best available launch list.
    ///
    /// # Errors
    /// Fails when network retrieval is needed and fails, or when the fresh
    /// list cannot be written to the store.
    pub async fn get_launches(&self, force_reload: bool) -> Result<Vec<RocketLaunch>, FetchError> {
        if !force_reload {
            if let Some(cached) = self.cached().await {
                debug!(count = cached.len(), "Serving launches from cache");
                return Ok(cached);
            }
        }

        let launches = self.api.get_all_launches().await.map_err(|e| {
            warn!(
                force_reload,
                error_code = e.error_code(),
                error = %e,
                "Launch refresh failed"
            );
            e
        })?;

        self.store.replace(&launches).await?;
        info!(count = launches.len(), force_reload, "Launch cache refreshed");
        Ok(launches)
    }

    /// Drop the stored snapshot.
    pub async fn clear_cache(&self) -> Result<(), FetchError> {
        self.store.clear().await?;
        info!("Launch cache cleared");
        Ok(())
    }

    /// Snapshot lookup; an unreadable snapshot counts as a miss.
    async fn cached(&self) -> Option<Vec<RocketLaunch>> {
        match self.store.load().await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(error = %e, "Launch cache unreadable, falling back to network");
                None
            }
        }
    }
}

#[async_trait]
impl LaunchProvider for LaunchCoordinator {
    async fn fetch(&self, force_refresh: bool) -> Result<Vec<RocketLaunch>, FetchError> {
        self.get_launches(force_refresh).await
    }
}

impl std::fmt::Debug for LaunchCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LaunchCoordinator")
            .field("api", &self.api)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{FaultyStore, MockHttpClient, MockResponse};
    use crate::error::{ErrorCategory, FetchCause};
    use crate::traits::HttpError;

    const URL: &str = "https://api.test/v3/launches";

    fn launches_json(names: &[&str]) -> String {
        let items: Vec<serde_json::Value> = names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                serde_json::json!({
                    "flight_number": i + 1,
                    "mission_name": name,
                    "launch_year": "2020",
                    "rocket": {"rocket_id": "falcon9", "rocket_name": "Falcon 9", "rocket_type": "FT"},
                    "launch_success": true
                })
            })
            .collect();
        serde_json::Value::Array(items).to_string()
    }

    fn names(launches: &[RocketLaunch]) -> Vec<&str> {
        launches.iter().map(|l| l.mission_name.as_str()).collect()
    }

    fn coordinator(http: &MockHttpClient, store: Arc<FaultyStore>) -> LaunchCoordinator {
        let api = SpaceXApi::with_base_url(Arc::new(http.clone()), "https://api.test");
        LaunchCoordinator::new(api, store)
    }

    async fn seeded_store(http: &MockHttpClient, names_: &[&str]) -> Arc<FaultyStore> {
        // Fill a store through a forced refresh, then reset the request log
        let store = Arc::new(FaultyStore::new());
        http.set_response(URL, MockResponse::json(launches_json(names_)));
        coordinator(http, store.clone())
            .get_launches(true)
            .await
            .unwrap();
        http.clear_requests();
        store
    }

    #[tokio::test]
    async fn test_cache_hit_skips_network() {
        let http = MockHttpClient::new();
        let store = seeded_store(&http, &["A", "B"]).await;

        let launches = coordinator(&http, store).get_launches(false).await.unwrap();
        assert_eq!(names(&launches), vec!["A", "B"]);
        assert_eq!(http.request_count(), 0);
    }

    #[tokio::test]
    async fn test_cache_miss_fetches_and_writes_through() {
        let http = MockHttpClient::new();
        http.set_response(URL, MockResponse::json(launches_json(&["A"])));
        let store = Arc::new(FaultyStore::new());

        let launches = coordinator(&http, store.clone())
            .get_launches(false)
            .await
            .unwrap();
        assert_eq!(names(&launches), vec!["A"]);
        assert_eq!(http.request_count(), 1);
        assert_eq!(store.peek().await, Some(launches));
    }

    #[tokio::test]
    async fn test_forced_reload_bypasses_cache() {
        let http = MockHttpClient::new();
        let store = seeded_store(&http, &["old"]).await;
        http.set_response(URL, MockResponse::json(launches_json(&["new-1", "new-2"])));

        let coordinator = coordinator(&http, store);
        let fresh = coordinator.get_launches(true).await.unwrap();
        assert_eq!(names(&fresh), vec!["new-1", "new-2"]);
        assert_eq!(http.request_count(), 1);

        // Subsequent non-forced reads observe the refreshed snapshot
        let cached = coordinator.get_launches(false).await.unwrap();
        assert_eq!(cached, fresh);
        assert_eq!(http.request_count(), 1);
    }

    #[tokio::test]
    async fn test_forced_failure_does_not_fall_back_to_cache() {
        let http = MockHttpClient::new();
        let store = seeded_store(&http, &["stale"]).await;
        http.set_response(
            URL,
            MockResponse::Error(HttpError::Timeout("30s".to_string())),
        );

        let coordinator = coordinator(&http, store.clone());
        let err = coordinator.get_launches(true).await.unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Network);

        // The stale snapshot is untouched
        assert_eq!(names(&store.peek().await.unwrap()), vec!["stale"]);
    }

    #[tokio::test]
    async fn test_empty_snapshot_is_a_hit() {
        let http = MockHttpClient::new();
        let store = seeded_store(&http, &[]).await;

        let launches = coordinator(&http, store).get_launches(false).await.unwrap();
        assert!(launches.is_empty());
        assert_eq!(http.request_count(), 0);
    }

    #[tokio::test]
    async fn test_unreadable_cache_falls_back_to_network() {
        let http = MockHttpClient::new();
        let store = seeded_store(&http, &["cached"]).await;
        store.set_fail_load(true);
        http.set_response(URL, MockResponse::json(launches_json(&["network"])));

        let launches = coordinator(&http, store).get_launches(false).await.unwrap();
        assert_eq!(names(&launches), vec!["network"]);
        assert_eq!(http.request_count(), 1);
    }

    #[tokio::test]
    async fn test_unreadable_cache_and_network_failure_is_error() {
        let http = MockHttpClient::new();
        http.set_default_response(MockResponse::status(500, "boom"));
        let store = Arc::new(FaultyStore::new());
        store.set_fail_load(true);

        let err = coordinator(&http, store).get_launches(false).await.unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Server);
    }

    #[tokio::test]
    async fn test_write_through_failure_fails_the_call() {
        let http = MockHttpClient::new();
        http.set_response(URL, MockResponse::json(launches_json(&["A"])));
        let store = Arc::new(FaultyStore::new());
        store.set_fail_replace(true);

        let err = coordinator(&http, store.clone())
            .get_launches(true)
            .await
            .unwrap_err();
        assert!(matches!(err.cause(), FetchCause::Store(_)));
        assert_eq!(store.replace_calls(), 1);
    }

    #[tokio::test]
    async fn test_clear_cache_forces_next_read_to_network() {
        let http = MockHttpClient::new();
        let store = seeded_store(&http, &["A"]).await;
        let coordinator = coordinator(&http, store);

        coordinator.clear_cache().await.unwrap();
        coordinator.get_launches(false).await.unwrap();
        assert_eq!(http.request_count(), 1);
    }

    #[tokio::test]
    async fn test_provider_fetch_delegates() {
        let http = MockHttpClient::new();
        let store = seeded_store(&http, &["A"]).await;
        let provider: Arc<dyn LaunchProvider> = Arc::new(coordinator(&http, store));

        let launches = provider.fetch(false).await.unwrap();
        assert_eq!(names(&launches), vec!["A"]);
        assert_eq!(http.request_count(), 0);
    }
}
