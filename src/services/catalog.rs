// src/services/catalog.rs

//! Book source adapter.
//!
//! Queries the external catalog endpoint for a fixed genre and maps the
//! raw entries into normalized book summaries for the swipe deck.

use std::sync::Arc;

use reqwest::Client;

use crate::error::{AppError, Result};
use crate::models::{BookSummary, CatalogConfig, Config, ItemsEnvelope};

/// Client for the external book catalog.
pub struct CatalogClient {
    config: Arc<Config>,
    client: Client,
}

impl CatalogClient {
    /// Create a new catalog client with the given configuration.
    pub fn new(config: Arc<Config>, client: Client) -> Self {
        Self { config, client }
    }

    /// Fetch the swipe deck.
    ///
    /// Any failure (network, status, malformed payload) is logged and
    /// surfaces as an empty deck; there is no retry. An empty `Items`
    /// array is an empty deck, not an error.
    pub async fn fetch_deck(&self) -> Vec<BookSummary> {
        match self.try_fetch().await {
            Ok(books) => {
                log::info!("Catalog returned {} book(s)", books.len());
                books
            }
            Err(e) => {
                log::warn!("Catalog fetch failed: {e}. Surfacing an empty deck.");
                Vec::new()
            }
        }
    }

    async fn try_fetch(&self) -> Result<Vec<BookSummary>> {
        let catalog = &self.config.catalog;
        let response = self
            .client
            .get(&catalog.endpoint)
            .query(&Self::search_query(catalog))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::status(
                status.as_u16(),
                format!("GET {}", catalog.endpoint),
            ));
        }

        let envelope: ItemsEnvelope = response.json().await?;
        Ok(envelope.into_books())
    }

    fn search_query(catalog: &CatalogConfig) -> [(&'static str, String); 3] {
        [
            ("format", "json".to_string()),
            ("applicationId", catalog.application_id.clone()),
            ("booksGenreId", catalog.genre_id.clone()),
        ]
    }
}
