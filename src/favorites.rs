// src/favorites.rs

//! Locally persisted favorites list.
//!
//! The list lives in memory and mirrors to durable storage under the
//! `favorites.json` key as a JSON-encoded array. Entries are unique by
//! exact title; insertion order is preserved.
//!
//! Persistence only starts once hydration from storage has completed.
//! A mutation that lands before the initial load can therefore never
//! clobber a previously saved list with a near-empty one.

use std::sync::Arc;

use crate::models::BookSummary;
use crate::storage::{KeyValueStorage, keys};

/// In-memory favorites list mirrored to durable storage.
pub struct FavoritesStore {
    storage: Arc<dyn KeyValueStorage>,
    entries: Vec<BookSummary>,
    hydrated: bool,
}

impl FavoritesStore {
    /// Create an empty, un-hydrated store.
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            storage,
            entries: Vec::new(),
            hydrated: false,
        }
    }

    /// Hydrate the list from storage.
    ///
    /// An absent key counts as a successful load of an empty list (fresh
    /// install). A read or parse failure leaves the store un-hydrated and
    /// the in-memory list authoritative for the session.
    pub async fn load(&mut self) {
        match self.storage.read_key(keys::FAVORITES).await {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<BookSummary>>(&raw) {
                Ok(entries) => {
                    log::debug!("Loaded {} favorite(s) from storage", entries.len());
                    self.entries = entries;
                    self.hydrated = true;
                }
                Err(e) => {
                    log::warn!("Stored favorites are unreadable: {e}. Keeping in-memory list.");
                }
            },
            Ok(None) => {
                self.hydrated = true;
            }
            Err(e) => {
                log::warn!("Favorites load failed: {e}. Keeping in-memory list.");
            }
        }
    }

    /// Add a book to the favorites.
    ///
    /// A book whose title is already present (exact, case-sensitive match)
    /// is ignored. Returns whether the list changed.
    pub async fn add(&mut self, book: BookSummary) -> bool {
        if self.entries.iter().any(|entry| entry.title == book.title) {
            log::debug!("'{}' is already a favorite", book.title);
            return false;
        }

        self.entries.push(book);
        self.persist().await;
        true
    }

    /// Borrow the entries in insertion order.
    pub fn entries(&self) -> &[BookSummary] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the initial load has completed.
    pub fn is_hydrated(&self) -> bool {
        self.hydrated
    }

    /// Write the full snapshot back to storage.
    ///
    /// Skipped until hydration completes. Write failures are logged; the
    /// in-memory list stays authoritative.
    async fn persist(&self) {
        if !self.hydrated {
            log::debug!("Favorites not hydrated yet; skipping persist");
            return;
        }

        let raw = match serde_json::to_string(&self.entries) {
            Ok(raw) => raw,
            Err(e) => {
                log::error!("Failed to encode favorites: {e}");
                return;
            }
        };

        if let Err(e) = self.storage.write_key(keys::FAVORITES, &raw).await {
            log::warn!("Favorites write failed: {e}. Keeping in-memory list.");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn book(title: &str) -> BookSummary {
        BookSummary {
            title: title.to_string(),
            author: "Author".to_string(),
            cover_image_url: format!("https://img.example.com/{title}.jpg"),
            isbn: format!("isbn-{title}"),
        }
    }

    #[tokio::test]
    async fn test_duplicate_title_is_a_noop() {
        let mut store = FavoritesStore::new(Arc::new(MemoryStorage::new()));
        store.load().await;

        assert!(store.add(book("A")).await);
        assert!(!store.add(book("A")).await);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_distinct_titles_keep_insertion_order() {
        let mut store = FavoritesStore::new(Arc::new(MemoryStorage::new()));
        store.load().await;

        store.add(book("First")).await;
        store.add(book("Second")).await;

        assert_eq!(store.len(), 2);
        assert_eq!(store.entries()[0].title, "First");
        assert_eq!(store.entries()[1].title, "Second");
    }

    #[tokio::test]
    async fn test_add_before_load_does_not_write() {
        let storage = Arc::new(MemoryStorage::new());
        storage
            .write_key(keys::FAVORITES, r#"[{"title":"Saved","author":"A","cover_image_url":"u","isbn":"1"}]"#)
            .await
            .unwrap();

        let mut store = FavoritesStore::new(storage.clone());
        store.add(book("Early")).await;

        // The saved list must survive the pre-hydration mutation.
        let raw = storage.read_key(keys::FAVORITES).await.unwrap().unwrap();
        assert!(raw.contains("Saved"));
        assert!(!raw.contains("Early"));
    }

    #[tokio::test]
    async fn test_changes_persist_after_hydration() {
        let storage = Arc::new(MemoryStorage::new());

        {
            let mut store = FavoritesStore::new(storage.clone());
            store.load().await;
            assert!(store.is_hydrated());
            store.add(book("Kept")).await;
        }

        let mut reloaded = FavoritesStore::new(storage);
        reloaded.load().await;
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.entries()[0].title, "Kept");
    }

    #[tokio::test]
    async fn test_load_failure_keeps_memory_authoritative() {
        let mut store = FavoritesStore::new(Arc::new(MemoryStorage::failing_reads()));
        store.load().await;

        assert!(!store.is_hydrated());
        assert!(store.add(book("A")).await);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_write_failure_keeps_memory_authoritative() {
        let mut store = FavoritesStore::new(Arc::new(MemoryStorage::failing_writes()));
        store.load().await;

        assert!(store.add(book("A")).await);
        assert_eq!(store.entries()[0].title, "A");
    }

    #[tokio::test]
    async fn test_corrupt_snapshot_leaves_store_unhydrated() {
        let storage = Arc::new(MemoryStorage::new());
        storage.write_key(keys::FAVORITES, "not json").await.unwrap();

        let mut store = FavoritesStore::new(storage.clone());
        store.load().await;
        assert!(!store.is_hydrated());

        // The unreadable snapshot is never overwritten mid-session.
        store.add(book("New")).await;
        let raw = storage.read_key(keys::FAVORITES).await.unwrap().unwrap();
        assert_eq!(raw, "not json");
    }
}
