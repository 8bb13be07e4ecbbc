// src/services/recommendations.rs

//! Recommendation and server-side favorites fetchers.
//!
//! Both are one-shot reads keyed by the device identity. Recommendations
//! come back in the catalog's nested `Items[].Item` shape; the server
//! favorites list uses flat `Items[]` entries.

use std::sync::Arc;

use reqwest::Client;

use crate::error::{AppError, Result};
use crate::identity::DeviceIdentity;
use crate::models::{BookSummary, Config, FetchState, FlatItemsEnvelope, ItemsEnvelope};
use crate::utils::http::with_backend_auth;

/// Client for the per-device backend lists.
pub struct RecommendationFetcher {
    config: Arc<Config>,
    client: Client,
    identity: DeviceIdentity,
}

impl RecommendationFetcher {
    pub fn new(config: Arc<Config>, client: Client, identity: DeviceIdentity) -> Self {
        Self {
            config,
            client,
            identity,
        }
    }

    /// Fetch recommended books for this device.
    pub async fn fetch_recommendations(&self) -> Result<Vec<BookSummary>> {
        let user_id = self.identity.get_or_create().await;
        let url = self
            .config
            .backend
            .endpoint(&format!("/recommendations/{user_id}"));

        let envelope: ItemsEnvelope = self.get_json(&url).await?;
        Ok(envelope.into_books())
    }

    /// Fetch the server-side favorites list for this device.
    pub async fn fetch_server_favorites(&self) -> Result<Vec<BookSummary>> {
        let user_id = self.identity.get_or_create().await;
        let url = self.config.backend.endpoint(&format!("/favorites/{user_id}"));

        let envelope: FlatItemsEnvelope = self.get_json(&url).await?;
        Ok(envelope.into_books())
    }

    /// Fetch recommendations into an observable view state.
    pub async fn recommendations_state(&self) -> FetchState<Vec<BookSummary>> {
        FetchState::from_result(self.fetch_recommendations().await, &self.config.messages)
    }

    /// Fetch the server favorites into an observable view state.
    pub async fn server_favorites_state(&self) -> FetchState<Vec<BookSummary>> {
        FetchState::from_result(self.fetch_server_favorites().await, &self.config.messages)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = with_backend_auth(self.client.get(url), &self.config.backend)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::status(status.as_u16(), format!("GET {url}")));
        }
        Ok(response.json().await?)
    }
}
