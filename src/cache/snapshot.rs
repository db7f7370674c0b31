use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::RocketLaunch;

/// Persisted launch list together with the time it was retrieved
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CachedSnapshot {
    pub saved_at: DateTime<Utc>,
    pub launches: Vec<RocketLaunch>,
}

impl CachedSnapshot {
    /// Stamp `launches` with the current time.
    pub fn new(launches: Vec<RocketLaunch>) -> Self {
        Self {
            saved_at: Utc::now(),
            launches,
        }
    }

    /// Seconds since the snapshot was written, never negative.
    pub fn age_secs(&self, now: DateTime<Utc>) -> i64 {
        (now - self.saved_at).num_seconds().max(0)
    }
}
