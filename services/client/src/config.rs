//! Client configuration
//!
//! Settings are built from defaults overridden by `EQUIPTRACK_*` environment
//! variables.

use serde::Deserialize;
use tracing::Level;

use crate::error::ClientResult;

/// Default backend location
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Default location of the persisted session
pub const DEFAULT_STORAGE_PATH: &str = ".equiptrack/storage.json";

/// Configuration for the EquipTrack client
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Backend origin, without a trailing path (e.g., "http://localhost:8080")
    pub base_url: String,
    /// File holding the local session storage
    pub storage_path: String,
    /// Maximum log level for the binary's subscriber
    pub log_level: String,
}

impl ClientConfig {
    /// Create a new ClientConfig from environment variables
    ///
    /// # Environment Variables
    /// - `EQUIPTRACK_BASE_URL`: Backend URL (default: "http://localhost:8080")
    /// - `EQUIPTRACK_STORAGE_PATH`: Session storage file (default: ".equiptrack/storage.json")
    /// - `EQUIPTRACK_LOG_LEVEL`: Log level (default: "info")
    pub fn from_env() -> ClientResult<Self> {
        let settings = config::Config::builder()
            .set_default("base_url", DEFAULT_BASE_URL)?
            .set_default("storage_path", DEFAULT_STORAGE_PATH)?
            .set_default("log_level", "info")?
            .add_source(config::Environment::with_prefix("EQUIPTRACK"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Parsed log level, falling back to INFO on an unknown value
    pub fn level(&self) -> Level {
        self.log_level.parse().unwrap_or(Level::INFO)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            storage_path: DEFAULT_STORAGE_PATH.to_string(),
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_client_config_from_env_defaults() {
        let config = ClientConfig::from_env().expect("Failed to create client config");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.storage_path, DEFAULT_STORAGE_PATH);
        assert_eq!(config.level(), Level::INFO);
    }

    #[test]
    #[serial]
    fn test_client_config_from_env_overrides() {
        // SAFETY: serialized with the other env tests
        unsafe {
            std::env::set_var("EQUIPTRACK_BASE_URL", "http://rentals.test:9000");
            std::env::set_var("EQUIPTRACK_LOG_LEVEL", "debug");
        }

        let config = ClientConfig::from_env().expect("Failed to create client config");

        unsafe {
            std::env::remove_var("EQUIPTRACK_BASE_URL");
            std::env::remove_var("EQUIPTRACK_LOG_LEVEL");
        }

        assert_eq!(config.base_url, "http://rentals.test:9000");
        assert_eq!(config.level(), Level::DEBUG);
    }

    #[test]
    fn test_unknown_level_falls_back_to_info() {
        let config = ClientConfig {
            log_level: "chatty".to_string(),
            ..ClientConfig::default()
        };
        assert_eq!(config.level(), Level::INFO);
    }
}
