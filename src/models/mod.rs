//! Data models for the SpaceX launch feed.
//!
//! The shapes mirror the v3 REST API payloads so the same types are used for
//! network decoding and for the persisted cache snapshot.

mod launch;

pub use launch::{LaunchLinks, LaunchOutcome, Rocket, RocketLaunch};

use serde::Deserializer;

/// Helper to deserialize a year sent either as a string (`"2006"`) or an integer
pub(crate) fn deserialize_year<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct YearVisitor;

    impl<'de> Visitor<'de> for YearVisitor {
        type Value = i32;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a year as a string or integer")
        }

        fn visit_str<E>(self, value: &str) -> Result<i32, E>
        where
            E: de::Error,
        {
            value
                .trim()
                .parse()
                .map_err(|_| E::invalid_value(de::Unexpected::Str(value), &self))
        }

        fn visit_i64<E>(self, value: i64) -> Result<i32, E>
        where
            E: de::Error,
        {
            i32::try_from(value).map_err(|_| E::invalid_value(de::Unexpected::Signed(value), &self))
        }

        fn visit_u64<E>(self, value: u64) -> Result<i32, E>
        where
            E: de::Error,
        {
            i32::try_from(value)
                .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(value), &self))
        }
    }

    deserializer.deserialize_any(YearVisitor)
}
