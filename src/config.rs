// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.
//!
//! The two token signing secrets are read once here and handed to the
//! token service at construction; nothing else reads them from the
//! environment.

use std::env;
use std::path::PathBuf;

/// Which document store backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Firestore,
    /// Process-local store; data is lost on restart.
    Memory,
}

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    // --- Environment Variables (non-sensitive) ---
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// GCP project ID (Firestore)
    pub gcp_project_id: String,
    /// Server port
    pub port: u16,
    /// Directory that post image paths are relative to
    pub image_root: PathBuf,
    /// Document store selection
    pub document_store: StoreBackend,

    // --- Secrets ---
    /// HS256 key for access tokens (raw bytes)
    pub access_token_key: Vec<u8>,
    /// HS256 key for refresh tokens (raw bytes)
    pub refresh_token_key: Vec<u8>,
}

impl Config {
    /// Fixed config for tests.
    pub fn test_default() -> Self {
        Self {
            frontend_url: "http://localhost:5173".to_string(),
            gcp_project_id: "test-project".to_string(),
            port: 8080,
            image_root: env::temp_dir(),
            document_store: StoreBackend::Memory,
            access_token_key: b"test_access_key_32_bytes_minimum!".to_vec(),
            refresh_token_key: b"test_refresh_key_32_bytes_minimum".to_vec(),
        }
    }

    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let document_store = match env::var("DOCUMENT_STORE")
            .unwrap_or_else(|_| "firestore".to_string())
            .trim()
            .to_ascii_lowercase()
            .as_str()
        {
            "firestore" => StoreBackend::Firestore,
            "memory" => StoreBackend::Memory,
            _ => return Err(ConfigError::Invalid("DOCUMENT_STORE")),
        };

        let access_token_key = env::var("ACCESS_KEY")
            .map_err(|_| ConfigError::Missing("ACCESS_KEY"))?
            .trim()
            .to_string()
            .into_bytes();
        let refresh_token_key = env::var("REFRESH_KEY")
            .map_err(|_| ConfigError::Missing("REFRESH_KEY"))?
            .trim()
            .to_string()
            .into_bytes();

        if access_token_key.is_empty() {
            return Err(ConfigError::Invalid("ACCESS_KEY"));
        }
        if refresh_token_key.is_empty() {
            return Err(ConfigError::Invalid("REFRESH_KEY"));
        }
        if access_token_key == refresh_token_key {
            tracing::warn!("ACCESS_KEY and REFRESH_KEY are identical");
        }

        Ok(Self {
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            gcp_project_id: env::var("GCP_PROJECT_ID").unwrap_or_else(|_| "local-dev".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            image_root: env::var("IMAGE_ROOT")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
            document_store,
            access_token_key,
            refresh_token_key,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so the env mutations do not race each other.
    #[test]
    fn test_config_from_env() {
        env::set_var("ACCESS_KEY", "access_secret");
        env::set_var("REFRESH_KEY", "refresh_secret");
        env::set_var("DOCUMENT_STORE", "memory");
        env::remove_var("PORT");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.access_token_key, b"access_secret");
        assert_eq!(config.refresh_token_key, b"refresh_secret");
        assert_eq!(config.document_store, StoreBackend::Memory);
        assert_eq!(config.port, 8080);

        env::set_var("DOCUMENT_STORE", "mongodb");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::Invalid("DOCUMENT_STORE"))
        ));

        env::set_var("DOCUMENT_STORE", "memory");
        env::remove_var("REFRESH_KEY");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::Missing("REFRESH_KEY"))
        ));
    }
}
