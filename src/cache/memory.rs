use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::models::RocketLaunch;
use crate::traits::LaunchStore;

/// Process-local launch snapshot
#[derive(Debug, Default)]
pub struct MemoryStore {
    snapshot: RwLock<Option<Vec<RocketLaunch>>>,
}

impl MemoryStore {
    /// Create an empty store (no snapshot).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `launches`.
    #[cfg(test)]
    pub(crate) fn with_snapshot(launches: Vec<RocketLaunch>) -> Self {
        Self {
            snapshot: RwLock::new(Some(launches)),
        }
    }
}

#[async_trait]
impl LaunchStore for MemoryStore {
    async fn load(&self) -> Result<Option<Vec<RocketLaunch>>, StoreError> {
        Ok(self.snapshot.read().await.clone())
    }

    async fn replace(&self, launches: &[RocketLaunch]) -> Result<(), StoreError> {
        *self.snapshot.write().await = Some(launches.to_vec());
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        *self.snapshot.write().await = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LaunchLinks, Rocket};

    fn launch(flight_number: u32) -> RocketLaunch {
        RocketLaunch {
            flight_number,
            mission_name: format!("Mission {}", flight_number),
            launch_year: 2020,
            launch_date_utc: String::new(),
            rocket: Rocket {
                rocket_id: "falcon9".to_string(),
                rocket_name: "Falcon 9".to_string(),
                rocket_type: "FT".to_string(),
            },
            details: None,
            launch_success: Some(true),
            links: LaunchLinks::default(),
        }
    }

    #[tokio::test]
    async fn test_new_store_has_no_snapshot() {
        let store = MemoryStore::new();
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_empty_snapshot_is_distinct_from_none() {
        let store = MemoryStore::new();
        store.replace(&[]).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(Vec::new()));
    }

    #[tokio::test]
    async fn test_replace_swaps_whole_list() {
        let store = MemoryStore::with_snapshot(vec![launch(1), launch(2), launch(3)]);
        store.replace(&[launch(9)]).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(vec![launch(9)]));
    }

    #[tokio::test]
    async fn test_clear() {
        let store = MemoryStore::with_snapshot(vec![launch(1)]);
        store.clear().await.unwrap();
        assert!(store.load().await.unwrap().is_none());
    }
}
