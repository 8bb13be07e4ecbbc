// src/services/details.rs

//! Book detail fetcher.
//!
//! One-shot read of a single book record by ISBN from the backend, with
//! HTTP 404 distinguished from other failures.

use std::sync::Arc;

use reqwest::{Client, StatusCode};

use crate::error::{AppError, Result};
use crate::models::{BookDetail, Config, FetchState, RawBookDetail};
use crate::utils::http::with_backend_auth;

/// Client for `GET /book/{isbn}`.
pub struct DetailFetcher {
    config: Arc<Config>,
    client: Client,
}

impl DetailFetcher {
    pub fn new(config: Arc<Config>, client: Client) -> Self {
        Self { config, client }
    }

    /// Fetch the detail record for an ISBN.
    pub async fn fetch(&self, isbn: &str) -> Result<BookDetail> {
        if isbn.trim().is_empty() {
            return Err(AppError::validation("isbn is empty"));
        }

        let url = self.config.backend.endpoint(&format!("/book/{isbn}"));
        let response = with_backend_auth(self.client.get(&url), &self.config.backend)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(AppError::not_found(format!("book {isbn}")));
        }
        if !status.is_success() {
            return Err(AppError::status(status.as_u16(), format!("GET {url}")));
        }

        let raw: RawBookDetail = response.json().await?;
        Ok(BookDetail::from(raw))
    }

    /// Fetch and resolve directly into an observable view state.
    ///
    /// Every call re-fetches; there is no cache between visits.
    pub async fn fetch_state(&self, isbn: &str) -> FetchState<BookDetail> {
        FetchState::from_result(self.fetch(isbn).await, &self.config.messages)
    }
}
