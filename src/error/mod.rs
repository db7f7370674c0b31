//! Error types for the launch data path.
//!
//! - [`FetchError`]: the only error the coordinator and view state machine
//!   surface. It wraps a [`FetchCause`] opaquely and is cheap to clone.
//! - [`NetworkError`]: API retrieval failures.
//! - [`StoreError`]: snapshot read/write failures.
//! - [`ErrorCategory`]: coarse classification for messaging.

mod category;
mod fetch;
mod network;
mod store;

pub use category::ErrorCategory;
pub use fetch::{FetchCause, FetchError};
pub use network::NetworkError;
pub use store::StoreError;

/// Result alias for the launch data path.
pub type FetchResult<T> = Result<T, FetchError>;
