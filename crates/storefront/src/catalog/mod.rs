//! Maybel catalog API client and caching layer.
//!
//! # Architecture
//!
//! - The remote API is the source of truth - no local sync, read-only GETs
//! - Every response arrives in a `{success, data, meta|pagination, error?}`
//!   envelope, decoded by [`envelope`]
//! - [`client::CatalogClient`] performs the raw HTTP calls with `reqwest`
//! - [`cache::CatalogCache`] wraps the client with `moka` caches that
//!   coalesce concurrent identical fetches and hold results for the 5/10
//!   minute staleness windows
//!
//! # Example
//!
//! ```rust,ignore
//! use maybel_storefront::catalog::{CatalogCache, CatalogClient, ListParams};
//!
//! let catalog = CatalogCache::new(CatalogClient::new(&config.api));
//!
//! let roots = catalog.root_categories().await?;
//! let page = catalog.products(&ListParams::for_search("lampara", 1)).await?;
//! ```

mod cache;
mod client;
pub mod envelope;

pub use cache::{CatalogCache, CatalogResult};
pub use client::{CatalogClient, ListParams, ProductPage};

use thiserror::Error;

/// Errors that can occur when talking to the catalog API.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP transport failed before a response arrived.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The envelope carried `success: false`.
    #[error("API error: {message}")]
    Api {
        code: Option<String>,
        message: String,
    },

    /// The resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A cache entry held a value of the wrong kind.
    #[error("cache returned unexpected value for {0}")]
    Cache(String),
}

impl CatalogError {
    /// Whether the error means the resource is absent rather than the
    /// fetch having failed.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Whether a retry could plausibly succeed.
    ///
    /// Transport failures and 5xx responses are retryable; not-found and
    /// application-level errors fail fast.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Http(_) => true,
            Self::Status { status, .. } => *status >= 500,
            Self::Api { .. } | Self::NotFound(_) | Self::Parse(_) | Self::Cache(_) => false,
        }
    }
}
