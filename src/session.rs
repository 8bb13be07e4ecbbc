// src/session.rs

//! Swipe session over a fetched deck.
//!
//! Owns the deck cursor, the favorites store, and the swipe recorder.
//! A right swipe adds the card to the favorites and records a like; a
//! left swipe records a pass. The deck always advances, whether or not
//! the remote write was delivered.

use crate::favorites::FavoritesStore;
use crate::models::BookSummary;
use crate::services::SwipeRecorder;

/// Counters for one swipe session.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionOutcome {
    pub liked: usize,
    pub passed: usize,
    pub record_failures: usize,
}

impl SessionOutcome {
    pub fn decisions(&self) -> usize {
        self.liked + self.passed
    }
}

/// One pass through a deck of books.
pub struct SwipeSession {
    deck: Vec<BookSummary>,
    position: usize,
    favorites: FavoritesStore,
    recorder: SwipeRecorder,
    outcome: SessionOutcome,
}

impl SwipeSession {
    /// Start a session over a deck.
    ///
    /// The favorites store should already be hydrated by the caller so
    /// that likes persist; an un-hydrated store still collects favorites
    /// in memory.
    pub fn new(deck: Vec<BookSummary>, favorites: FavoritesStore, recorder: SwipeRecorder) -> Self {
        Self {
            deck,
            position: 0,
            favorites,
            recorder,
            outcome: SessionOutcome::default(),
        }
    }

    /// The card currently on top of the deck.
    pub fn current(&self) -> Option<&BookSummary> {
        self.deck.get(self.position)
    }

    /// Cards not yet decided, including the current one.
    pub fn remaining(&self) -> usize {
        self.deck.len().saturating_sub(self.position)
    }

    /// Accept the current card. Returns whether a card was consumed.
    pub async fn swipe_right(&mut self) -> bool {
        let Some(book) = self.current().cloned() else {
            return false;
        };

        self.favorites.add(book.clone()).await;
        if !self.recorder.record(&book, true).await {
            self.outcome.record_failures += 1;
        }

        self.outcome.liked += 1;
        self.position += 1;
        true
    }

    /// Reject the current card. Returns whether a card was consumed.
    pub async fn swipe_left(&mut self) -> bool {
        let Some(book) = self.current().cloned() else {
            return false;
        };

        if !self.recorder.record(&book, false).await {
            self.outcome.record_failures += 1;
        }

        self.outcome.passed += 1;
        self.position += 1;
        true
    }

    pub fn favorites(&self) -> &FavoritesStore {
        &self.favorites
    }

    pub fn outcome(&self) -> &SessionOutcome {
        &self.outcome
    }

    /// Finish the session, releasing the favorites store.
    pub fn finish(self) -> (FavoritesStore, SessionOutcome) {
        (self.favorites, self.outcome)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use reqwest::Client;

    use super::*;
    use crate::identity::DeviceIdentity;
    use crate::models::Config;
    use crate::storage::MemoryStorage;

    fn book(title: &str) -> BookSummary {
        BookSummary {
            title: title.to_string(),
            author: "Author".to_string(),
            cover_image_url: format!("https://img.example.com/{title}.jpg"),
            isbn: format!("isbn-{title}"),
        }
    }

    /// Session whose recorder points at a port that refuses connections.
    async fn offline_session(deck: Vec<BookSummary>) -> SwipeSession {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let mut config = Config::default();
        config.backend.base_url = format!("http://127.0.0.1:{port}");
        let config = Arc::new(config);

        let storage = Arc::new(MemoryStorage::new());
        let mut favorites = FavoritesStore::new(storage.clone());
        favorites.load().await;

        let identity = DeviceIdentity::new(storage);
        let recorder = SwipeRecorder::new(config, Client::new(), identity);

        SwipeSession::new(deck, favorites, recorder)
    }

    #[tokio::test]
    async fn test_deck_advances_despite_record_failures() {
        let mut session = offline_session(vec![book("A"), book("B")]).await;

        assert_eq!(session.remaining(), 2);
        assert!(session.swipe_right().await);
        assert!(session.swipe_left().await);
        assert!(session.current().is_none());

        let outcome = session.outcome();
        assert_eq!(outcome.liked, 1);
        assert_eq!(outcome.passed, 1);
        assert_eq!(outcome.record_failures, 2);
    }

    #[tokio::test]
    async fn test_right_swipe_adds_favorite_left_does_not() {
        let mut session = offline_session(vec![book("Liked"), book("Passed")]).await;

        session.swipe_right().await;
        session.swipe_left().await;

        assert_eq!(session.favorites().len(), 1);
        assert_eq!(session.favorites().entries()[0].title, "Liked");
    }

    #[tokio::test]
    async fn test_swiping_an_empty_deck_is_a_noop() {
        let mut session = offline_session(Vec::new()).await;

        assert!(!session.swipe_right().await);
        assert!(!session.swipe_left().await);
        assert_eq!(session.outcome().decisions(), 0);
    }
}
