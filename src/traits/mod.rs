//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP GET used to reach the launch API
//! - [`LaunchStore`] - Local snapshot of the last retrieved launch list
//! - [`LaunchProvider`] - The data provider capability consumed by views
//! - [`RenderSink`] - Receives every published view state

pub mod http;
pub mod provider;
pub mod render;
pub mod store;

pub use http::{Headers, HttpClient, HttpError, Response};
pub use provider::LaunchProvider;
pub use render::RenderSink;
pub use store::LaunchStore;
