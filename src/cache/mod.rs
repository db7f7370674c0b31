//! Launch snapshot caching.
//!
//! [`MemoryStore`] keeps the snapshot for the lifetime of the process;
//! [`CachedSnapshot`] is the envelope persisted by
//! [`JsonFileStore`](crate::adapters::JsonFileStore).

mod memory;
mod snapshot;

pub use memory::MemoryStore;
pub use snapshot::CachedSnapshot;
