//! Mock implementations for testing.
//!
//! These doubles let the coordinator and the view state machine be exercised
//! without network access or a filesystem.

pub mod http;
pub mod provider;
pub mod store;

pub use http::{MockHttpClient, MockResponse};
pub use provider::ScriptedProvider;
pub use store::FaultyStore;
