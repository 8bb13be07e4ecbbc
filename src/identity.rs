// src/identity.rs

//! Pseudonymous device identity.
//!
//! A random identifier is generated on first use and persisted so every
//! swipe from the same install is attributed to the same `user_id`. There
//! is no server-side account behind it.

use std::sync::Arc;

use uuid::Uuid;

use crate::storage::{KeyValueStorage, keys};

/// Provider of the stable per-device identifier.
///
/// When storage is unavailable the provider degrades to an ephemeral
/// identifier for that call only; stability is not guaranteed until a
/// write succeeds. Two racing first calls may both generate an identifier,
/// last write wins.
#[derive(Clone)]
pub struct DeviceIdentity {
    storage: Arc<dyn KeyValueStorage>,
}

impl DeviceIdentity {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    /// Return the persisted identifier, creating and storing one if absent.
    pub async fn get_or_create(&self) -> String {
        match self.storage.read_key(keys::DEVICE_ID).await {
            Ok(Some(id)) if !id.trim().is_empty() => id,
            Ok(_) => {
                let id = Uuid::new_v4().to_string();
                if let Err(e) = self.storage.write_key(keys::DEVICE_ID, &id).await {
                    log::warn!("Failed to persist device identity: {e}");
                }
                id
            }
            Err(e) => {
                log::warn!("Device identity read failed: {e}. Using an ephemeral identity.");
                Uuid::new_v4().to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[tokio::test]
    async fn test_identity_is_stable_with_working_storage() {
        let identity = DeviceIdentity::new(Arc::new(MemoryStorage::new()));

        let first = identity.get_or_create().await;
        let second = identity.get_or_create().await;

        assert_eq!(first, second);
        assert!(Uuid::parse_str(&first).is_ok());
    }

    #[tokio::test]
    async fn test_identity_varies_when_reads_fail() {
        let identity = DeviceIdentity::new(Arc::new(MemoryStorage::failing_reads()));

        let first = identity.get_or_create().await;
        let second = identity.get_or_create().await;

        // No stability guarantee without storage; v4 collisions don't happen.
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_write_failure_still_yields_identifier() {
        let storage = Arc::new(MemoryStorage::failing_writes());
        let identity = DeviceIdentity::new(storage.clone());

        let id = identity.get_or_create().await;
        assert!(Uuid::parse_str(&id).is_ok());
        assert!(storage.is_empty());
    }

    #[tokio::test]
    async fn test_existing_identifier_is_reused() {
        let storage = Arc::new(MemoryStorage::new());
        storage.write_key(keys::DEVICE_ID, "stored-id").await.unwrap();

        let identity = DeviceIdentity::new(storage);
        assert_eq!(identity.get_or_create().await, "stored-id");
    }
}
