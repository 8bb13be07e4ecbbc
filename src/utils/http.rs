// src/utils/http.rs

//! HTTP client utilities.

use std::time::Duration;

use reqwest::RequestBuilder;

use crate::error::Result;
use crate::models::{BackendConfig, HttpConfig};

/// Create a configured asynchronous HTTP client.
pub fn create_async_client(config: &HttpConfig) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;
    Ok(client)
}

/// Attach the backend's HTTP Basic credential, when one is configured.
pub fn with_backend_auth(builder: RequestBuilder, backend: &BackendConfig) -> RequestBuilder {
    match (&backend.username, &backend.password) {
        (Some(username), Some(password)) => builder.basic_auth(username, Some(password)),
        _ => builder,
    }
}
