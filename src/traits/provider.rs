//! Data provider capability.

use async_trait::async_trait;

use crate::error::FetchError;
use crate::models::RocketLaunch;

/// Anything that can hand out the current best launch list.
///
/// `force_refresh == false` allows a cached answer; `true` requires a network
/// round trip. [`LaunchCoordinator`](crate::coordinator::LaunchCoordinator) is
/// the production implementation.
#[async_trait]
pub trait LaunchProvider: Send + Sync {
    async fn fetch(&self, force_refresh: bool) -> Result<Vec<RocketLaunch>, FetchError>;
}
