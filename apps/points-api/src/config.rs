//! Points API configuration module.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     POINTS_BIND_ADDR, POINTS_PORT,                                     │
//! │     POINTS_MAX_BODY_BYTES, POINTS_LOG_FILTER                           │
//! │                                                                         │
//! │  2. TOML Config File (path in POINTS_CONFIG)                           │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     0.0.0.0:8080, 64 KiB bodies, "info,points_api=debug"               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # points.toml
//! bind_addr = "127.0.0.1"
//! port = 8080
//! max_body_bytes = 65536
//! log_filter = "info"
//! ```

use std::env;
use std::net::SocketAddr;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Environment variable naming the optional TOML config file.
pub const CONFIG_PATH_ENV: &str = "POINTS_CONFIG";

const BIND_ADDR_ENV: &str = "POINTS_BIND_ADDR";
const PORT_ENV: &str = "POINTS_PORT";
const MAX_BODY_BYTES_ENV: &str = "POINTS_MAX_BODY_BYTES";
const LOG_FILTER_ENV: &str = "POINTS_LOG_FILTER";

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default request body limit (64 KiB).
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

/// Points API configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener to.
    pub bind_addr: String,

    /// HTTP port.
    pub port: u16,

    /// Largest accepted request body in bytes.
    pub max_body_bytes: usize,

    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            bind_addr: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            log_filter: "info,points_api=debug,points_store=debug".to_string(),
        }
    }
}

impl ApiConfig {
    /// Load configuration from the optional config file and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::from_file(Path::new(&path))?,
            Err(_) => Self::default(),
        };

        config.apply_env(|key| env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a TOML config file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&text)
    }

    /// Parses TOML config text. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::InvalidToml(e.to_string()))
    }

    /// Overrides fields with values found by `lookup` (normally `std::env::var`).
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        if let Some(bind_addr) = lookup(BIND_ADDR_ENV) {
            self.bind_addr = bind_addr;
        }

        if let Some(port) = lookup(PORT_ENV) {
            self.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue(PORT_ENV.to_string()))?;
        }

        if let Some(limit) = lookup(MAX_BODY_BYTES_ENV) {
            self.max_body_bytes = limit
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue(MAX_BODY_BYTES_ENV.to_string()))?;
        }

        if let Some(filter) = lookup(LOG_FILTER_ENV) {
            self.log_filter = filter;
        }

        Ok(())
    }

    /// Rejects values the server cannot start with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_body_bytes == 0 {
            return Err(ConfigError::InvalidValue("max_body_bytes".to_string()));
        }
        self.socket_addr()?;
        Ok(())
    }

    /// Returns the full bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    /// Returns the bind address as a socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.bind_address()
            .parse()
            .map_err(|_| ConfigError::InvalidValue("bind_addr".to_string()))
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Failed to read config file {path}: {reason}")]
    ReadFailed { path: String, reason: String },

    #[error("Invalid config file: {0}")]
    InvalidToml(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.max_body_bytes, 64 * 1024);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ApiConfig::from_toml_str("port = 9000\n").unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.bind_addr, "0.0.0.0");
        assert_eq!(config.max_body_bytes, DEFAULT_MAX_BODY_BYTES);
    }

    #[test]
    fn test_full_toml() {
        let config = ApiConfig::from_toml_str(
            r#"
            bind_addr = "127.0.0.1"
            port = 3000
            max_body_bytes = 1024
            log_filter = "warn"
            "#,
        )
        .unwrap();
        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:3000");
        assert_eq!(config.max_body_bytes, 1024);
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            ApiConfig::from_toml_str("port = \"eighty\""),
            Err(ConfigError::InvalidToml(_))
        ));
    }

    #[test]
    fn test_env_overrides_file_values() {
        let mut config = ApiConfig::from_toml_str("port = 3000\nlog_filter = \"warn\"").unwrap();
        config
            .apply_env(lookup_from(&[("POINTS_PORT", "9090"), ("POINTS_BIND_ADDR", "127.0.0.1")]))
            .unwrap();

        assert_eq!(config.bind_address(), "127.0.0.1:9090");
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_invalid_env_value_is_an_error() {
        let mut config = ApiConfig::default();
        let err = config
            .apply_env(lookup_from(&[("POINTS_PORT", "eighty")]))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for POINTS_PORT");

        let err = config
            .apply_env(lookup_from(&[("POINTS_MAX_BODY_BYTES", "-1")]))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for POINTS_MAX_BODY_BYTES");
    }

    #[test]
    fn test_validate_rejects_unusable_values() {
        let config = ApiConfig {
            max_body_bytes: 0,
            ..ApiConfig::default()
        };
        assert!(config.validate().is_err());

        let config = ApiConfig {
            bind_addr: "not an address".to_string(),
            ..ApiConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_config_file() {
        let err = ApiConfig::from_file(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadFailed { .. }));
    }
}
