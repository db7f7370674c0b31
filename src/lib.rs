//! Browse SpaceX launches with a cache-first data layer.
//!
//! The core is two pieces:
//! - [`coordinator::LaunchCoordinator`] decides between the local snapshot and
//!   the network
//! - [`view::LaunchListView`] drives a render sink through
//!   `Loading -> Success | Error`
//!
//! The remaining modules are the seams ([`traits`]), their production and
//! test implementations ([`adapters`], [`cache`]) and the terminal front end.

pub mod adapters;
pub mod api;
pub mod app;
pub mod cache;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod logging;
pub mod models;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod view;
