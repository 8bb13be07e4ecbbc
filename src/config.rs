// src/config.rs

//! Configuration loading utilities.
//!
//! This module provides convenience functions for loading the application
//! configuration with environment overrides applied.

use std::path::Path;

use crate::models::Config;

/// Load configuration from a TOML file.
///
/// Falls back to defaults if loading fails, then applies environment
/// overrides so deploy credentials never need to live in the file.
pub fn load_config(path: &Path) -> Config {
    let mut config = Config::load_or_default(path);
    config.apply_env_overrides();
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let tmp = tempfile::TempDir::new().unwrap();
        let config = load_config(&tmp.path().join("config.toml"));
        assert_eq!(config.http.timeout_secs, 30);
    }

    #[test]
    fn test_file_values_are_loaded() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
            [http]
            timeout_secs = 5

            [catalog]
            application_id = "file-app-id"
            "#,
        )
        .unwrap();

        let config = load_config(&path);
        assert_eq!(config.http.timeout_secs, 5);
        assert_eq!(config.catalog.application_id, "file-app-id");
    }
}
