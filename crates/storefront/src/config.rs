//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; the defaults target the public demo catalog.
//!
//! - `STOREFRONT_CATALOG_URL` - Catalog products endpoint
//!   (default: `https://dummyjson.com/products`)
//! - `STOREFRONT_DATA_DIR` - Directory for persisted state such as the cart
//!   (default: `.sungrove`)
//! - `STOREFRONT_PAGE_SIZE` - Catalog page size, must be at least 1
//!   (default: `6`)

use std::path::PathBuf;

use thiserror::Error;

/// Default catalog products endpoint.
pub const DEFAULT_CATALOG_URL: &str = "https://dummyjson.com/products";

const DEFAULT_DATA_DIR: &str = ".sungrove";
const DEFAULT_PAGE_SIZE: u32 = 6;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Catalog API configuration
    pub catalog: CatalogConfig,
    /// Directory holding persisted storefront state (the cart slot)
    pub data_dir: PathBuf,
    /// Number of products per catalog page
    pub page_size: u32,
}

/// Catalog API configuration.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Products endpoint, queried with `limit`/`skip` parameters
    pub base_url: String,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but fails validation
    /// (unparseable URL, non-numeric or zero page size).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let base_url = get_env_or_default("STOREFRONT_CATALOG_URL", DEFAULT_CATALOG_URL);
        validate_catalog_url(&base_url, "STOREFRONT_CATALOG_URL")?;

        let data_dir = PathBuf::from(get_env_or_default("STOREFRONT_DATA_DIR", DEFAULT_DATA_DIR));

        let page_size = match std::env::var("STOREFRONT_PAGE_SIZE") {
            Ok(raw) => parse_page_size(&raw, "STOREFRONT_PAGE_SIZE")?,
            Err(_) => DEFAULT_PAGE_SIZE,
        };

        Ok(Self {
            catalog: CatalogConfig { base_url },
            data_dir,
            page_size,
        })
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig {
                base_url: DEFAULT_CATALOG_URL.to_string(),
            },
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Validate that a catalog URL parses and uses an HTTP scheme.
fn validate_catalog_url(value: &str, var_name: &str) -> Result<(), ConfigError> {
    let url = url::Url::parse(value)
        .map_err(|e| ConfigError::InvalidEnvVar(var_name.to_string(), e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }

    Ok(())
}

/// Parse a page size, rejecting zero.
fn parse_page_size(raw: &str, var_name: &str) -> Result<u32, ConfigError> {
    let size = raw
        .parse::<u32>()
        .map_err(|e| ConfigError::InvalidEnvVar(var_name.to_string(), e.to_string()))?;

    if size == 0 {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            "page size must be at least 1".to_string(),
        ));
    }

    Ok(size)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StorefrontConfig::default();
        assert_eq!(config.catalog.base_url, DEFAULT_CATALOG_URL);
        assert_eq!(config.data_dir, PathBuf::from(".sungrove"));
        assert_eq!(config.page_size, 6);
    }

    #[test]
    fn test_validate_catalog_url_accepts_https() {
        assert!(validate_catalog_url("https://dummyjson.com/products", "TEST_VAR").is_ok());
    }

    #[test]
    fn test_validate_catalog_url_accepts_local_http() {
        assert!(validate_catalog_url("http://127.0.0.1:9000/products", "TEST_VAR").is_ok());
    }

    #[test]
    fn test_validate_catalog_url_rejects_garbage() {
        let err = validate_catalog_url("not a url", "TEST_VAR").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(_, _)));
    }

    #[test]
    fn test_validate_catalog_url_rejects_non_http_scheme() {
        let result = validate_catalog_url("ftp://example.com/products", "TEST_VAR");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_page_size_valid() {
        assert_eq!(parse_page_size("6", "TEST_VAR").unwrap(), 6);
        assert_eq!(parse_page_size("24", "TEST_VAR").unwrap(), 24);
    }

    #[test]
    fn test_parse_page_size_rejects_zero() {
        assert!(parse_page_size("0", "TEST_VAR").is_err());
    }

    #[test]
    fn test_parse_page_size_rejects_non_numeric() {
        assert!(parse_page_size("six", "TEST_VAR").is_err());
        assert!(parse_page_size("-1", "TEST_VAR").is_err());
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidEnvVar("TEST_VAR".to_string(), "bad value".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid environment variable TEST_VAR: bad value"
        );
    }
}
