//! Launch snapshot storage trait.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::RocketLaunch;

/// Storage for the last launch list retrieved from the network.
///
/// A store distinguishes "no snapshot" (`Ok(None)`) from "a snapshot with no
/// launches" (`Ok(Some(vec![]))`). `replace` swaps the whole snapshot in one
/// step: concurrent readers see either the old list or the new one.
#[async_trait]
pub trait LaunchStore: Send + Sync {
    /// Read the current snapshot, if any.
    async fn load(&self) -> Result<Option<Vec<RocketLaunch>>, StoreError>;

    /// Replace the snapshot with `launches`.
    async fn replace(&self, launches: &[RocketLaunch]) -> Result<(), StoreError>;

    /// Drop the snapshot so the next non-forced read misses.
    async fn clear(&self) -> Result<(), StoreError>;
}
