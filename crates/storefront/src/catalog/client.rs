//! Raw HTTP client for the Maybel catalog API.

use maybel_core::{Category, ExchangeRate, PageMeta, Product};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::instrument;

use crate::config::CatalogApiConfig;

use super::CatalogError;
use super::envelope::Envelope;

/// Products requested per listing page.
pub const PAGE_LIMIT: u32 = 20;

/// Parameter set for a paged product listing.
///
/// Doubles as the identity of the response it produces: the resulting
/// [`ProductPage`] carries its params back, and cache entries are keyed by
/// [`ListParams::cache_key`], so a response can never be attributed to a
/// parameter set other than its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParams {
    /// Restrict to one category.
    pub category_id: Option<String>,
    /// Free-text search forwarded to the server.
    pub search: Option<String>,
    /// 1-based page number.
    pub page: u32,
    /// Page size.
    pub limit: u32,
}

impl ListParams {
    /// Listing for a category page.
    #[must_use]
    pub fn for_category(category_id: &str, page: u32) -> Self {
        Self {
            category_id: Some(category_id.to_string()),
            search: None,
            page: page.max(1),
            limit: PAGE_LIMIT,
        }
    }

    /// Listing for a search query. A fresh query always starts at page 1;
    /// only pagination links within the same query pass a higher page.
    #[must_use]
    pub fn for_search(query: &str, page: u32) -> Self {
        Self {
            category_id: None,
            search: Some(query.trim().to_string()),
            page: page.max(1),
            limit: PAGE_LIMIT,
        }
    }

    /// Cache key encoding the full parameter set.
    #[must_use]
    pub fn cache_key(&self) -> String {
        format!(
            "products:{}:{}:{}:{}",
            self.category_id.as_deref().unwrap_or("-"),
            self.search.as_deref().unwrap_or("-"),
            self.page,
            self.limit
        )
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::with_capacity(5);
        if let Some(category_id) = &self.category_id {
            query.push(("category_id", category_id.clone()));
        }
        if let Some(search) = &self.search {
            query.push(("search", search.clone()));
        }
        query.push(("page", self.page.to_string()));
        query.push(("limit", self.limit.to_string()));
        query.push(("active", "true".to_string()));
        query
    }
}

/// One page of products, tagged with the parameters that produced it.
#[derive(Debug, Clone)]
pub struct ProductPage {
    /// The parameter set this page answers.
    pub params: ListParams,
    /// Products on this page.
    pub products: Vec<Product>,
    /// Server pagination metadata.
    pub meta: PageMeta,
}

/// Client for the Maybel catalog API.
///
/// Performs plain GETs and unwraps the response envelope; caching and
/// retries live in [`super::CatalogCache`].
#[derive(Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a new catalog API client.
    #[must_use]
    pub fn new(config: &CatalogApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Execute a GET and decode the response envelope.
    async fn get_envelope<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<(T, Option<PageMeta>), CatalogError> {
        let url = format!("{}{path}", self.base_url);
        let mut request = self.http.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound(path.to_string()));
        }

        // Read the body as text first for better error diagnostics
        let text = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                path = %path,
                body = %text.chars().take(500).collect::<String>(),
                "catalog API returned non-success status"
            );
            // Prefer the server-supplied error message when the body still
            // parses as an envelope; otherwise fall back to the status text.
            let message = serde_json::from_str::<Envelope<serde_json::Value>>(&text)
                .ok()
                .and_then(|envelope| envelope.error)
                .and_then(|error| error.message)
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("unknown status")
                        .to_string()
                });
            return Err(CatalogError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: Envelope<T> = serde_json::from_str(&text).map_err(|e| {
            tracing::error!(
                error = %e,
                path = %path,
                body = %text.chars().take(500).collect::<String>(),
                "failed to parse catalog API response"
            );
            CatalogError::Parse(e)
        })?;

        envelope.into_payload(path)
    }

    // =========================================================================
    // Category Methods
    // =========================================================================

    /// Fetch active categories, roots when `parent_id` is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn categories(&self, parent_id: Option<&str>) -> Result<Vec<Category>, CatalogError> {
        let query = vec![
            ("parent_id", parent_id.unwrap_or("null").to_string()),
            ("active", "true".to_string()),
        ];
        let (categories, _) = self.get_envelope("/categories", &query).await?;
        Ok(categories)
    }

    /// Fetch one category with its children and parent embedded.
    ///
    /// # Errors
    ///
    /// Returns an error if the category is not found or the request fails.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn category(&self, id: &str) -> Result<Category, CatalogError> {
        let (category, _) = self.get_envelope(&format!("/categories/{id}"), &[]).await?;
        Ok(category)
    }

    // =========================================================================
    // Product Methods
    // =========================================================================

    /// Fetch a page of active products filtered by the parameter set.
    ///
    /// The server does the filtering and paging; when it omits pagination
    /// metadata the [`PageMeta::default`] fallback applies.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self), fields(page = params.page))]
    pub async fn products(&self, params: &ListParams) -> Result<ProductPage, CatalogError> {
        let (products, meta) = self.get_envelope("/products", &params.query()).await?;
        Ok(ProductPage {
            params: params.clone(),
            products,
            meta: meta.unwrap_or_default(),
        })
    }

    /// Fetch one product by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the product is not found or the request fails.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn product(&self, id: &str) -> Result<Product, CatalogError> {
        let (product, _) = self.get_envelope(&format!("/products/{id}"), &[]).await?;
        Ok(product)
    }

    // =========================================================================
    // Exchange Rate Methods
    // =========================================================================

    /// Fetch the current exchange rate.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn current_rate(&self) -> Result<ExchangeRate, CatalogError> {
        let (rate, _) = self.get_envelope("/exchange-rates/current", &[]).await?;
        Ok(rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_search_always_starts_at_page_one() {
        let params = ListParams::for_search("  mesa  ", 0);
        assert_eq!(params.page, 1);
        assert_eq!(params.search.as_deref(), Some("mesa"));
        assert_eq!(params.category_id, None);
    }

    #[test]
    fn category_params_clamp_page() {
        let params = ListParams::for_category("c1", 0);
        assert_eq!(params.page, 1);
        assert_eq!(ListParams::for_category("c1", 3).page, 3);
    }

    #[test]
    fn cache_keys_differ_per_parameter_set() {
        let lampara = ListParams::for_search("lampara", 1);
        let mesa = ListParams::for_search("mesa", 1);
        let mesa_p2 = ListParams::for_search("mesa", 2);
        let category = ListParams::for_category("c1", 1);

        assert_ne!(lampara.cache_key(), mesa.cache_key());
        assert_ne!(mesa.cache_key(), mesa_p2.cache_key());
        assert_ne!(mesa.cache_key(), category.cache_key());
    }

    #[test]
    fn cache_key_is_stable_for_equal_params() {
        let a = ListParams::for_category("c1", 2);
        let b = ListParams::for_category("c1", 2);
        assert_eq!(a, b);
        assert_eq!(a.cache_key(), b.cache_key());
    }

    #[test]
    fn query_carries_active_flag_and_paging() {
        let params = ListParams::for_category("c1", 2);
        let query = params.query();
        assert!(query.contains(&("category_id", "c1".to_string())));
        assert!(query.contains(&("page", "2".to_string())));
        assert!(query.contains(&("limit", PAGE_LIMIT.to_string())));
        assert!(query.contains(&("active", "true".to_string())));
        assert!(!query.iter().any(|(name, _)| *name == "search"));
    }
}
