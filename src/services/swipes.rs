// src/services/swipes.rs

//! Swipe recorder.
//!
//! Reports each accept/reject decision to the remote collector, tagged
//! with the per-device pseudonymous identifier. Fire-and-forget: failures
//! are logged, never retried, and never stop the deck from advancing.

use std::sync::Arc;

use reqwest::Client;

use crate::error::{AppError, Result};
use crate::identity::DeviceIdentity;
use crate::models::{BookSummary, Config, SwipeEvent};
use crate::utils::http::with_backend_auth;

/// Reporter for swipe decisions.
pub struct SwipeRecorder {
    config: Arc<Config>,
    client: Client,
    identity: DeviceIdentity,
}

impl SwipeRecorder {
    pub fn new(config: Arc<Config>, client: Client, identity: DeviceIdentity) -> Self {
        Self {
            config,
            client,
            identity,
        }
    }

    /// Record a decision for a book.
    ///
    /// Returns whether the remote write was delivered. The return value is
    /// for statistics only; callers advance regardless.
    pub async fn record(&self, book: &BookSummary, liked: bool) -> bool {
        let user_id = self.identity.get_or_create().await;
        let event = SwipeEvent::new(user_id, book, liked);

        match self.try_record(&event).await {
            Ok(()) => {
                log::debug!(
                    "Recorded {} for '{}'",
                    if liked { "like" } else { "pass" },
                    book.title
                );
                true
            }
            Err(e) => {
                log::warn!("Failed to record swipe for '{}': {e}", book.title);
                false
            }
        }
    }

    async fn try_record(&self, event: &SwipeEvent) -> Result<()> {
        let url = self.config.backend.endpoint("/swipe");
        let response = with_backend_auth(self.client.post(&url), &self.config.backend)
            .json(event)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::status(status.as_u16(), format!("POST {url}")));
        }
        Ok(())
    }
}
