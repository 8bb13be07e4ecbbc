//! Durable local storage for device state.
//!
//! Two opaque string-keyed blobs are persisted:
//! - `device_id` - the pseudonymous device identifier
//! - `favorites.json` - the favorites list as a JSON-encoded array
//!
//! The backing store is expressed as a two-method capability trait so a
//! file-backed, in-memory, or platform-specific backing can be substituted
//! without changing callers.

pub mod local;
pub mod memory;

use async_trait::async_trait;

use crate::error::Result;

// Re-export for convenience
pub use local::LocalStorage;
pub use memory::MemoryStorage;

/// Well-known storage keys.
pub mod keys {
    /// Device identity key (value: identifier string)
    pub const DEVICE_ID: &str = "device_id";

    /// Favorites list key (value: JSON-encoded array)
    pub const FAVORITES: &str = "favorites.json";
}

/// Trait for durable key/value storage backends.
#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    /// Read the value stored under a key, `None` if absent.
    async fn read_key(&self, key: &str) -> Result<Option<String>>;

    /// Write a value under a key, replacing any previous value.
    async fn write_key(&self, key: &str, value: &str) -> Result<()>;
}
