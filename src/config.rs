//! Per-service configuration loaded from environment variables.
//!
//! Each binary loads exactly the configuration it needs at startup and
//! aborts with a [`ConfigError`] when a required value is missing, so a
//! misdeployed service fails before accepting traffic.

use serde::Deserialize;
use std::env;

/// Minimum length of the session cookie master key, in bytes.
///
/// The key signs and encrypts session cookies; shorter keys are rejected
/// at startup.
pub const COOKIE_KEY_MIN_LEN: usize = 64;

/// Configuration for the user directory service.
#[derive(Debug, Clone)]
pub struct UserDirectoryConfig {
    /// GCP project ID owning the document store
    pub gcp_project_id: String,
    /// Server port
    pub port: u16,
}

impl UserDirectoryConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            gcp_project_id: env::var("GCP_PROJECT_ID")
                .map_err(|_| ConfigError::Missing("GCP_PROJECT_ID"))?,
            port: read_port("PORT", 8001),
        })
    }

    /// Default config for testing only.
    pub fn test_default() -> Self {
        Self {
            gcp_project_id: "test-project".to_string(),
            port: 8001,
        }
    }
}

/// Configuration for the coffee directory service.
#[derive(Debug, Clone)]
pub struct CoffeeDirectoryConfig {
    /// GCP project ID owning the document store
    pub gcp_project_id: String,
    /// Server port
    pub port: u16,
    /// Base URL of the user directory service
    pub user_directory_addr: String,
    /// Cloud Storage bucket for uploaded photos
    pub photos_bucket: String,
}

impl CoffeeDirectoryConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            gcp_project_id: env::var("GCP_PROJECT_ID")
                .map_err(|_| ConfigError::Missing("GCP_PROJECT_ID"))?,
            port: read_port("PORT", 8002),
            user_directory_addr: env::var("USER_DIRECTORY_ADDR")
                .map_err(|_| ConfigError::Missing("USER_DIRECTORY_ADDR"))?,
            photos_bucket: env::var("PHOTOS_BUCKET")
                .unwrap_or_else(|_| "coffeepics".to_string()),
        })
    }

    /// Default config for testing only.
    pub fn test_default() -> Self {
        Self {
            gcp_project_id: "test-project".to_string(),
            port: 8002,
            user_directory_addr: "http://127.0.0.1:8001".to_string(),
            photos_bucket: "coffeepics-test".to_string(),
        }
    }
}

/// Configuration for the web front-end.
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// Server port
    pub port: u16,
    /// Base URL of the user directory service
    pub user_directory_addr: String,
    /// Base URL of the coffee directory service
    pub coffee_directory_addr: String,
    /// Google OAuth client credentials
    pub oauth: GoogleOAuthConfig,
    /// Master key for session cookie encryption (>= 64 bytes)
    pub cookie_key: Vec<u8>,
}

impl WebConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let oauth_path = env::var("GOOGLE_OAUTH_CLIENT_FILE")
            .map_err(|_| ConfigError::Missing("GOOGLE_OAUTH_CLIENT_FILE"))?;
        let oauth = GoogleOAuthConfig::from_file(&oauth_path)?;

        let cookie_key = env::var("COOKIE_KEY")
            .map_err(|_| ConfigError::Missing("COOKIE_KEY"))?
            .into_bytes();
        if cookie_key.len() < COOKIE_KEY_MIN_LEN {
            return Err(ConfigError::Invalid {
                var: "COOKIE_KEY",
                reason: format!("must be at least {} bytes", COOKIE_KEY_MIN_LEN),
            });
        }

        Ok(Self {
            port: read_port("PORT", 8000),
            user_directory_addr: env::var("USER_DIRECTORY_ADDR")
                .map_err(|_| ConfigError::Missing("USER_DIRECTORY_ADDR"))?,
            coffee_directory_addr: env::var("COFFEE_DIRECTORY_ADDR")
                .map_err(|_| ConfigError::Missing("COFFEE_DIRECTORY_ADDR"))?,
            oauth,
            cookie_key,
        })
    }

    /// Default config for testing only.
    pub fn test_default() -> Self {
        Self {
            port: 8000,
            user_directory_addr: "http://127.0.0.1:8001".to_string(),
            coffee_directory_addr: "http://127.0.0.1:8002".to_string(),
            oauth: GoogleOAuthConfig {
                client_id: "test-client-id".to_string(),
                client_secret: "test-client-secret".to_string(),
            },
            cookie_key: b"an-unguessable-64-byte-master-key-for-testing-purposes-only!!!!!".to_vec(),
        }
    }
}

/// Google OAuth client credentials, parsed from the downloadable
/// `client_secret.json` file.
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleOAuthConfig {
    pub client_id: String,
    pub client_secret: String,
}

/// On-disk shape of the Google OAuth client file.
#[derive(Deserialize)]
struct OAuthClientFile {
    #[serde(alias = "installed")]
    web: GoogleOAuthConfig,
}

impl GoogleOAuthConfig {
    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Invalid {
            var: "GOOGLE_OAUTH_CLIENT_FILE",
            reason: format!("cannot read {}: {}", path, e),
        })?;
        let parsed: OAuthClientFile =
            serde_json::from_str(&raw).map_err(|e| ConfigError::Invalid {
                var: "GOOGLE_OAUTH_CLIENT_FILE",
                reason: format!("cannot parse {}: {}", path, e),
            })?;
        Ok(parsed.web)
    }
}

fn read_port(var: &str, default: u16) -> u16 {
    env::var(var)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .unwrap_or(default)
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coffee_directory_config_from_env() {
        env::set_var("GCP_PROJECT_ID", "test-project");
        env::set_var("USER_DIRECTORY_ADDR", "http://127.0.0.1:9001");
        env::remove_var("PHOTOS_BUCKET");

        let config = CoffeeDirectoryConfig::from_env().expect("Config should load");

        assert_eq!(config.gcp_project_id, "test-project");
        assert_eq!(config.user_directory_addr, "http://127.0.0.1:9001");
        assert_eq!(config.photos_bucket, "coffeepics");
    }

    #[test]
    fn test_oauth_client_file_parses_web_key() {
        let raw = r#"{"web":{"client_id":"id-123","client_secret":"s3cret","token_uri":"https://oauth2.googleapis.com/token"}}"#;
        let parsed: OAuthClientFile = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.web.client_id, "id-123");
        assert_eq!(parsed.web.client_secret, "s3cret");
    }

    #[test]
    fn test_test_default_cookie_key_is_long_enough() {
        let config = WebConfig::test_default();
        assert!(config.cookie_key.len() >= COOKIE_KEY_MIN_LEN);
    }
}
