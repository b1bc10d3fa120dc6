//! Service configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `PORT` - Listen port (default: 3000)
//! - `BIND_HOST` - Bind address (default: 0.0.0.0)
//! - `API_KEY` - Shared secret expected in the `x-api-key` header (default: 12345)
//! - `SEED_SAMPLE_PRODUCTS` - Load the sample catalog at startup (default: true)

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

const DEFAULT_PORT: &str = "3000";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_API_KEY: &str = "12345";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Product API configuration.
///
/// `SecretString` keeps the API key out of `Debug` output.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Shared secret every protected request must present
    pub api_key: SecretString,
    /// Whether the store starts with the sample catalog
    pub seed_sample_products: bool,
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// Calls `dotenvy::dotenv()` first so a local `.env` file can supply values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get_or_default =
            |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host = get_or_default("BIND_HOST", DEFAULT_HOST)
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("BIND_HOST".to_string(), e.to_string()))?;
        let port = get_or_default("PORT", DEFAULT_PORT)
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("PORT".to_string(), e.to_string()))?;
        let api_key = SecretString::from(get_or_default("API_KEY", DEFAULT_API_KEY));
        let seed_sample_products = parse_bool(
            "SEED_SAMPLE_PRODUCTS",
            &get_or_default("SEED_SAMPLE_PRODUCTS", "true"),
        )?;

        Ok(Self {
            host,
            port,
            api_key,
            seed_sample_products,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("expected a boolean, got {other:?}"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.api_key.expose_secret(), "12345");
        assert!(cfg.seed_sample_products);
        assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn test_overrides() {
        let cfg = AppConfig::from_lookup(lookup(&[
            ("PORT", "8081"),
            ("API_KEY", "s3cr3t"),
            ("BIND_HOST", "127.0.0.1"),
            ("SEED_SAMPLE_PRODUCTS", "false"),
        ]))
        .unwrap();
        assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8081");
        assert_eq!(cfg.api_key.expose_secret(), "s3cr3t");
        assert!(!cfg.seed_sample_products);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = AppConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "PORT"));
    }

    #[test]
    fn test_invalid_bool_is_rejected() {
        let err = AppConfig::from_lookup(lookup(&[("SEED_SAMPLE_PRODUCTS", "maybe")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "SEED_SAMPLE_PRODUCTS"));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let cfg = AppConfig::from_lookup(lookup(&[("API_KEY", "do-not-print")])).unwrap();
        assert!(!format!("{cfg:?}").contains("do-not-print"));
    }
}
