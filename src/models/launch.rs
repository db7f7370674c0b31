use serde::{Deserialize, Serialize};

use super::deserialize_year;

/// A single launch as returned by `GET /v3/launches`.
///
/// Records are immutable once decoded. Two launches are the same launch when
/// every field matches; the feed order is whatever the provider returned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RocketLaunch {
    pub flight_number: u32,
    pub mission_name: String,
    #[serde(deserialize_with = "deserialize_year")]
    pub launch_year: i32,
    #[serde(default)]
    pub launch_date_utc: String,
    pub rocket: Rocket,
    #[serde(default)]
    pub details: Option<String>,
    /// `None` when the API has no verdict (upcoming or unknown launches)
    #[serde(default)]
    pub launch_success: Option<bool>,
    #[serde(default)]
    pub links: LaunchLinks,
}

impl RocketLaunch {
    /// Project the tri-state success flag.
    pub fn outcome(&self) -> LaunchOutcome {
        match self.launch_success {
            Some(true) => LaunchOutcome::Successful,
            Some(false) => LaunchOutcome::Unsuccessful,
            None => LaunchOutcome::Unknown,
        }
    }
}

/// Vehicle that flew the mission
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rocket {
    pub rocket_id: String,
    pub rocket_name: String,
    #[serde(default)]
    pub rocket_type: String,
}

/// External links attached to a launch
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LaunchLinks {
    #[serde(default)]
    pub mission_patch: Option<String>,
    #[serde(default)]
    pub article_link: Option<String>,
}

/// Result of a launch as far as the feed knows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchOutcome {
    Successful,
    Unsuccessful,
    Unknown,
}
