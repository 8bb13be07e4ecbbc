//! Application configuration structures.

use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// HTTP client behavior settings
    #[serde(default)]
    pub http: HttpConfig,

    /// External book catalog settings
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Preference backend settings
    #[serde(default)]
    pub backend: BackendConfig,

    /// User-facing message strings
    #[serde(default)]
    pub messages: MessagesConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Apply credential overrides from the process environment.
    ///
    /// Recognized variables: `RAKUTEN_APP_ID`, `BACKEND_URL`,
    /// `BACKEND_USERNAME`, `BACKEND_PASSWORD`.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(app_id) = env::var("RAKUTEN_APP_ID") {
            self.catalog.application_id = app_id;
        }
        if let Ok(base_url) = env::var("BACKEND_URL") {
            self.backend.base_url = base_url;
        }
        if let Ok(username) = env::var("BACKEND_USERNAME") {
            self.backend.username = Some(username);
        }
        if let Ok(password) = env::var("BACKEND_PASSWORD") {
            self.backend.password = Some(password);
        }
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.http.user_agent.trim().is_empty() {
            return Err(AppError::validation("http.user_agent is empty"));
        }
        if self.http.timeout_secs == 0 {
            return Err(AppError::validation("http.timeout_secs must be > 0"));
        }
        if self.catalog.endpoint.trim().is_empty() {
            return Err(AppError::validation("catalog.endpoint is empty"));
        }
        if self.catalog.application_id.trim().is_empty() {
            return Err(AppError::validation(
                "catalog.application_id is empty (set RAKUTEN_APP_ID or the config key)",
            ));
        }
        if self.catalog.genre_id.trim().is_empty() {
            return Err(AppError::validation("catalog.genre_id is empty"));
        }
        if self.backend.base_url.trim().is_empty() {
            return Err(AppError::validation("backend.base_url is empty"));
        }
        if self.backend.username.is_some() != self.backend.password.is_some() {
            return Err(AppError::validation(
                "backend credentials must set both username and password",
            ));
        }
        Ok(())
    }
}

/// HTTP client behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// External book catalog settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Catalog search endpoint
    #[serde(default = "defaults::catalog_endpoint")]
    pub endpoint: String,

    /// Application credential passed as the `applicationId` query parameter
    #[serde(default)]
    pub application_id: String,

    /// Fixed genre filter passed as the `booksGenreId` query parameter
    #[serde(default = "defaults::genre_id")]
    pub genre_id: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            endpoint: defaults::catalog_endpoint(),
            application_id: String::new(),
            genre_id: defaults::genre_id(),
        }
    }
}

/// Preference backend settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the swipe/favorites/recommendations backend
    #[serde(default = "defaults::backend_url")]
    pub base_url: String,

    /// Optional HTTP Basic username
    #[serde(default)]
    pub username: Option<String>,

    /// Optional HTTP Basic password
    #[serde(default)]
    pub password: Option<String>,
}

impl BackendConfig {
    /// Build a full URL for a backend path like `/swipe`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::backend_url(),
            username: None,
            password: None,
        }
    }
}

/// User-facing message strings for fetch-backed views.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagesConfig {
    /// Shown when a record does not exist (HTTP 404)
    #[serde(default = "defaults::msg_not_found")]
    pub not_found: String,

    /// Shown when no response was received
    #[serde(default = "defaults::msg_network_error")]
    pub network_error: String,

    /// Shown for any other fetch failure
    #[serde(default = "defaults::msg_fetch_failed")]
    pub fetch_failed: String,
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            not_found: defaults::msg_not_found(),
            network_error: defaults::msg_network_error(),
            fetch_failed: defaults::msg_fetch_failed(),
        }
    }
}

mod defaults {
    // HTTP defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; bookswipe/1.0)".into()
    }
    pub fn timeout() -> u64 {
        30
    }

    // Catalog defaults
    pub fn catalog_endpoint() -> String {
        "https://app.rakuten.co.jp/services/api/BooksBook/Search/20170404".into()
    }
    pub fn genre_id() -> String {
        "001005".into()
    }

    // Backend defaults
    pub fn backend_url() -> String {
        "http://localhost:8000".into()
    }

    // Message defaults
    pub fn msg_not_found() -> String {
        "No details were found for this book.".into()
    }
    pub fn msg_network_error() -> String {
        "A network error occurred. Check your connection.".into()
    }
    pub fn msg_fetch_failed() -> String {
        "Failed to fetch data from the server.".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> Config {
        let mut config = Config::default();
        config.catalog.application_id = "test-app-id".to_string();
        config
    }

    #[test]
    fn validate_configured_config_ok() {
        assert!(configured().validate().is_ok());
    }

    #[test]
    fn validate_rejects_missing_application_id() {
        assert!(Config::default().validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_user_agent() {
        let mut config = configured();
        config.http.user_agent = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_half_configured_credentials() {
        let mut config = configured();
        config.backend.username = Some("reader".to_string());
        assert!(config.validate().is_err());

        config.backend.password = Some("secret".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn backend_endpoint_joins_paths() {
        let backend = BackendConfig {
            base_url: "http://localhost:8000/".to_string(),
            ..BackendConfig::default()
        };
        assert_eq!(backend.endpoint("/swipe"), "http://localhost:8000/swipe");
    }

    #[test]
    fn config_parses_partial_toml() {
        let config: Config = toml::from_str(
            r#"
            [catalog]
            application_id = "abc123"

            [backend]
            base_url = "https://api.example.com"
            "#,
        )
        .unwrap();

        assert_eq!(config.catalog.application_id, "abc123");
        assert_eq!(config.backend.base_url, "https://api.example.com");
        assert_eq!(config.http.timeout_secs, 30);
        assert_eq!(config.catalog.genre_id, "001005");
    }
}
