//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `MAYBEL_API_BASE_URL` - Catalog API base URL (default: `http://localhost:5000/api/v1`)
//! - `MAYBEL_IMAGE_BASE_URL` - Image base URL (default: API base with `/api/v1` removed)
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `STOREFRONT_THEME` - Default theme, `light` or `dark` (default: light)
//! - `CONTACT_WHATSAPP` - WhatsApp number for purchase inquiries
//! - `CONTACT_TELEGRAM` - Telegram handle
//! - `CONTACT_PHONE` - Phone number for `tel:` links
//! - `CONTACT_EMAIL` - Contact email shown in the footer
//! - `CONTACT_ADDRESS` - Postal address shown in the footer
//! - `SENTRY_DSN` - Sentry error tracking DSN

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;
use url::Url;

use crate::theme::Theme;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
///
/// Read once at startup; nothing mutates it afterwards.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Catalog API configuration
    pub api: CatalogApiConfig,
    /// Purchase/contact channel configuration
    pub contact: ContactConfig,
    /// Default theme for visitors without a preference cookie
    pub default_theme: Theme,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

/// Remote catalog API configuration.
#[derive(Debug, Clone)]
pub struct CatalogApiConfig {
    /// Base URL all endpoint paths are joined to, without trailing slash
    pub base_url: String,
    /// Base URL relative image paths are resolved against
    pub image_base_url: String,
}

/// Static contact channels used for outbound purchase links.
#[derive(Debug, Clone)]
pub struct ContactConfig {
    /// WhatsApp number, e.g. `+5355555555`
    pub whatsapp: String,
    /// Telegram handle without `@`
    pub telegram: String,
    /// Phone number for `tel:` links
    pub phone: String,
    /// Contact email
    pub email: String,
    /// Postal address line
    pub address: String,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable fails to parse or a base URL is
    /// not a valid absolute URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("STOREFRONT_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("STOREFRONT_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("STOREFRONT_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("STOREFRONT_PORT".to_string(), e.to_string()))?;

        let api = CatalogApiConfig::from_env()?;
        let contact = ContactConfig::from_env();

        let theme_raw = get_env_or_default("STOREFRONT_THEME", "light");
        let default_theme = Theme::parse(&theme_raw).ok_or_else(|| {
            ConfigError::InvalidEnvVar(
                "STOREFRONT_THEME".to_string(),
                format!("expected 'light' or 'dark', got '{theme_raw}'"),
            )
        })?;

        Ok(Self {
            host,
            port,
            api,
            contact,
            default_theme,
            sentry_dsn: get_optional_env("SENTRY_DSN"),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl CatalogApiConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let base_url = normalize_base(&get_env_or_default(
            "MAYBEL_API_BASE_URL",
            "http://localhost:5000/api/v1",
        ));
        validate_url("MAYBEL_API_BASE_URL", &base_url)?;

        let image_base_url = match get_optional_env("MAYBEL_IMAGE_BASE_URL") {
            Some(value) => normalize_base(&value),
            None => derive_image_base(&base_url),
        };
        validate_url("MAYBEL_IMAGE_BASE_URL", &image_base_url)?;

        Ok(Self {
            base_url,
            image_base_url,
        })
    }
}

impl ContactConfig {
    fn from_env() -> Self {
        Self {
            whatsapp: get_env_or_default("CONTACT_WHATSAPP", "+5355555555"),
            telegram: get_env_or_default("CONTACT_TELEGRAM", "MaybelCuba"),
            phone: get_env_or_default("CONTACT_PHONE", "+5375555555"),
            email: get_env_or_default("CONTACT_EMAIL", "contacto@maybel.cu"),
            address: get_env_or_default("CONTACT_ADDRESS", "La Habana, Cuba"),
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Strip trailing slashes so paths can be joined with plain concatenation.
fn normalize_base(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

/// Images are served from the API host root, so the default image base is
/// the API base with its versioned prefix removed.
fn derive_image_base(api_base: &str) -> String {
    api_base
        .strip_suffix("/api/v1")
        .unwrap_or(api_base)
        .to_string()
}

fn validate_url(var_name: &str, value: &str) -> Result<(), ConfigError> {
    Url::parse(value)
        .map(|_| ())
        .map_err(|e| ConfigError::InvalidEnvVar(var_name.to_string(), e.to_string()))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_image_base_by_stripping_api_prefix() {
        assert_eq!(
            derive_image_base("http://localhost:5000/api/v1"),
            "http://localhost:5000"
        );
        assert_eq!(
            derive_image_base("https://api.maybel.cu/api/v1"),
            "https://api.maybel.cu"
        );
    }

    #[test]
    fn derive_image_base_passes_through_unversioned_bases() {
        assert_eq!(
            derive_image_base("https://api.maybel.cu"),
            "https://api.maybel.cu"
        );
    }

    #[test]
    fn normalize_base_trims_trailing_slashes() {
        assert_eq!(
            normalize_base("http://localhost:5000/api/v1/"),
            "http://localhost:5000/api/v1"
        );
        assert_eq!(normalize_base("http://localhost:5000"), "http://localhost:5000");
    }

    #[test]
    fn validate_url_rejects_relative_paths() {
        assert!(validate_url("TEST_VAR", "https://api.maybel.cu/api/v1").is_ok());
        assert!(validate_url("TEST_VAR", "/api/v1").is_err());
    }
}
