//! Store wrapper with switchable failures.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crate::cache::MemoryStore;
use crate::error::StoreError;
use crate::models::RocketLaunch;
use crate::traits::LaunchStore;

/// In-memory store whose reads and writes can be made to fail on demand.
#[derive(Debug, Default)]
pub struct FaultyStore {
    inner: MemoryStore,
    fail_load: AtomicBool,
    fail_replace: AtomicBool,
    replace_calls: AtomicUsize,
}

impl FaultyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fail_load(&self, fail: bool) {
        self.fail_load.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_replace(&self, fail: bool) {
        self.fail_replace.store(fail, Ordering::SeqCst);
    }

    /// Number of `replace` calls, including failed ones.
    pub fn replace_calls(&self) -> usize {
        self.replace_calls.load(Ordering::SeqCst)
    }

    /// Snapshot as currently held, bypassing the failure switches.
    pub async fn peek(&self) -> Option<Vec<RocketLaunch>> {
        self.inner.load().await.ok().flatten()
    }

    fn injected(operation: &'static str) -> StoreError {
        StoreError::io(
            operation,
            "faulty-store",
            std::io::Error::new(std::io::ErrorKind::Other, "injected failure"),
        )
    }
}

#[async_trait]
impl LaunchStore for FaultyStore {
    async fn load(&self) -> Result<Option<Vec<RocketLaunch>>, StoreError> {
        if self.fail_load.load(Ordering::SeqCst) {
            return Err(Self::injected("read"));
        }
        self.inner.load().await
    }

    async fn replace(&self, launches: &[RocketLaunch]) -> Result<(), StoreError> {
        self.replace_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_replace.load(Ordering::SeqCst) {
            return Err(Self::injected("write"));
        }
        self.inner.replace(launches).await
    }

    async fn clear(&self) -> Result<(), StoreError> {
        self.inner.clear().await
    }
}
