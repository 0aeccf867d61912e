//! Configuration management for the MCP server.
//!
//! Configuration is read once from the environment (optionally seeded from a
//! `.env` file) and then handed to the server by value. Nothing below this
//! module looks at environment variables.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::error::{Error, Result};

/// Default GeoNames web service address.
pub const DEFAULT_API_BASE: &str = "http://api.geonames.org";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Upstream GeoNames service settings.
    pub geonames: GeoNamesConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported in logs.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Settings for the GeoNames web service.
#[derive(Clone, Serialize, Deserialize)]
pub struct GeoNamesConfig {
    /// Account name appended as `username` to every upstream request.
    pub username: String,

    /// Base address of the service, without a trailing slash.
    pub api_base: String,

    /// Optional whole-request timeout. `None` leaves reqwest's default
    /// (no timeout) in place.
    pub timeout_secs: Option<u64>,
}

/// Custom Debug implementation to redact the account name from logs.
impl std::fmt::Debug for GeoNamesConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeoNamesConfig")
            .field("username", &"[REDACTED]")
            .field("api_base", &self.api_base)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl GeoNamesConfig {
    /// Build settings for the given account and base address.
    pub fn new(username: impl Into<String>, api_base: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            api_base: normalize_base(&api_base.into()),
            timeout_secs: None,
        }
    }
}

impl Default for GeoNamesConfig {
    fn default() -> Self {
        Self::new(String::new(), DEFAULT_API_BASE)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "geonames".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            geonames: GeoNamesConfig::default(),
        }
    }
}

impl Config {
    /// Create a configuration for the given GeoNames settings, with defaults
    /// everywhere else.
    pub fn with_geonames(geonames: GeoNamesConfig) -> Self {
        Self {
            geonames,
            ..Self::default()
        }
    }

    /// Load configuration from environment variables.
    ///
    /// `GEONAMES_USERNAME` is required; every other variable falls back to a
    /// default. Fails before any tool can be served if the account is missing.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.geonames.username = std::env::var("GEONAMES_USERNAME")
            .ok()
            .filter(|u| !u.trim().is_empty())
            .ok_or_else(|| Error::config("Environment variable GEONAMES_USERNAME is not set"))?;

        match std::env::var("GEONAMES_API_BASE") {
            Ok(base) if !base.trim().is_empty() => {
                config.geonames.api_base = normalize_base(&base);
                info!("GeoNames API base: {}", config.geonames.api_base);
            }
            _ => warn!(
                "GEONAMES_API_BASE not set - using default {}",
                DEFAULT_API_BASE
            ),
        }

        if let Ok(raw) = std::env::var("GEONAMES_TIMEOUT_SECS") {
            let secs = raw.parse::<u64>().map_err(|_| {
                Error::config(format!("GEONAMES_TIMEOUT_SECS must be an integer, got '{raw}'"))
            })?;
            config.geonames.timeout_secs = Some(secs);
        }

        Ok(config)
    }
}

fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tokio_test::{assert_err, assert_ok};

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env() {
        unsafe {
            std::env::remove_var("GEONAMES_USERNAME");
            std::env::remove_var("GEONAMES_API_BASE");
            std::env::remove_var("GEONAMES_TIMEOUT_SECS");
        }
    }

    #[test]
    fn test_missing_username_is_fatal() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        let err = assert_err!(Config::from_env());
        assert!(err.to_string().contains("GEONAMES_USERNAME"));
    }

    #[test]
    fn test_blank_username_is_fatal() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var("GEONAMES_USERNAME", "  ");
        }
        assert_err!(Config::from_env());
        clear_env();
    }

    #[test]
    fn test_from_env_reads_geonames_settings() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var("GEONAMES_USERNAME", "demo_user");
            std::env::set_var("GEONAMES_API_BASE", "https://secure.geonames.org/");
            std::env::set_var("GEONAMES_TIMEOUT_SECS", "15");
        }
        let config = assert_ok!(Config::from_env());
        assert_eq!(config.geonames.username, "demo_user");
        assert_eq!(config.geonames.api_base, "https://secure.geonames.org");
        assert_eq!(config.geonames.timeout_secs, Some(15));
        clear_env();
    }

    #[test]
    fn test_api_base_defaults() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var("GEONAMES_USERNAME", "demo_user");
        }
        let config = assert_ok!(Config::from_env());
        assert_eq!(config.geonames.api_base, DEFAULT_API_BASE);
        assert_eq!(config.geonames.timeout_secs, None);
        clear_env();
    }

    #[test]
    fn test_invalid_timeout_rejected() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var("GEONAMES_USERNAME", "demo_user");
            std::env::set_var("GEONAMES_TIMEOUT_SECS", "soon");
        }
        assert_err!(Config::from_env());
        clear_env();
    }

    #[test]
    fn test_username_redacted_in_debug() {
        let geonames = GeoNamesConfig::new("super_secret_user", DEFAULT_API_BASE);
        let debug_str = format!("{:?}", geonames);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_user"));
    }
}
