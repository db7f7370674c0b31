//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`JsonFileStore`] - Launch snapshot persisted as a JSON file
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - Configurable HTTP responses
//! - [`mock::FaultyStore`] - Store with switchable read/write failures
//! - [`mock::ScriptedProvider`] - Launch provider with queued outcomes

pub mod json_store;
pub mod mock;
pub mod reqwest_http;

pub use json_store::JsonFileStore;
pub use reqwest_http::ReqwestHttpClient;
