//! Caching layer over the catalog client.
//!
//! Each lookup goes through `moka`'s `try_get_with`, so concurrent
//! identical requests share one in-flight fetch and all waiters see the
//! same result (or the same error, as an `Arc`). Category data stays
//! fresh for ten minutes; products, product pages, and the exchange rate
//! for five. Inside the loader every fetch has a fixed budget of two
//! attempts, retrying transport failures and 5xx responses only.

use std::sync::Arc;
use std::time::Duration;

use maybel_core::{Category, ExchangeRate, Product};
use moka::future::Cache;
use tracing::debug;

use super::client::{CatalogClient, ListParams, ProductPage};
use super::CatalogError;

/// Staleness window for products, product pages, and the exchange rate.
const CATALOG_TTL: Duration = Duration::from_secs(300);

/// Staleness window for category data.
const CATEGORY_TTL: Duration = Duration::from_secs(600);

/// Maximum entries per cache.
const MAX_CAPACITY: u64 = 1000;

/// Fixed attempt budget per fetch, including the first try.
const FETCH_ATTEMPTS: u32 = 2;

/// Result of a cached catalog lookup.
///
/// Errors are `Arc`-wrapped because a single failed fetch may be shared by
/// every caller coalesced onto it.
pub type CatalogResult<T> = Result<T, Arc<CatalogError>>;

/// Cached value kinds.
#[derive(Debug, Clone)]
enum CacheValue {
    Categories(Vec<Category>),
    Category(Box<Category>),
    Page(Box<ProductPage>),
    Product(Box<Product>),
    Rate(Box<ExchangeRate>),
}

/// Caching facade over [`CatalogClient`].
#[derive(Clone)]
pub struct CatalogCache {
    client: CatalogClient,
    categories: Cache<String, CacheValue>,
    catalog: Cache<String, CacheValue>,
}

impl CatalogCache {
    /// Create a cache over the given client.
    #[must_use]
    pub fn new(client: CatalogClient) -> Self {
        Self {
            client,
            categories: Cache::builder()
                .max_capacity(MAX_CAPACITY)
                .time_to_live(CATEGORY_TTL)
                .build(),
            catalog: Cache::builder()
                .max_capacity(MAX_CAPACITY)
                .time_to_live(CATALOG_TTL)
                .build(),
        }
    }

    /// Root categories (`parent_id` unset).
    ///
    /// # Errors
    ///
    /// Returns the underlying [`CatalogError`] after the retry budget is
    /// exhausted.
    pub async fn root_categories(&self) -> CatalogResult<Vec<Category>> {
        let key = "categories:root".to_string();
        let value = self
            .categories
            .try_get_with(key.clone(), async {
                let categories = fetch_with_retry(|| self.client.categories(None)).await?;
                Ok::<_, CatalogError>(CacheValue::Categories(categories))
            })
            .await?;
        match value {
            CacheValue::Categories(categories) => {
                debug!(count = categories.len(), "root categories resolved");
                Ok(categories)
            }
            _ => Err(Arc::new(CatalogError::Cache(key))),
        }
    }

    /// One category with children and parent.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`CatalogError`], `NotFound` included.
    pub async fn category(&self, id: &str) -> CatalogResult<Category> {
        let key = format!("category:{id}");
        let value = self
            .categories
            .try_get_with(key.clone(), async {
                let category = fetch_with_retry(|| self.client.category(id)).await?;
                Ok::<_, CatalogError>(CacheValue::Category(Box::new(category)))
            })
            .await?;
        match value {
            CacheValue::Category(category) => Ok(*category),
            _ => Err(Arc::new(CatalogError::Cache(key))),
        }
    }

    /// One page of products for a parameter set.
    ///
    /// The returned page carries `params` back as its identity tag.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`CatalogError`] after the retry budget is
    /// exhausted.
    pub async fn products(&self, params: &ListParams) -> CatalogResult<ProductPage> {
        let key = params.cache_key();
        let value = self
            .catalog
            .try_get_with(key.clone(), async {
                let page = fetch_with_retry(|| self.client.products(params)).await?;
                Ok::<_, CatalogError>(CacheValue::Page(Box::new(page)))
            })
            .await?;
        match value {
            CacheValue::Page(page) => Ok(*page),
            _ => Err(Arc::new(CatalogError::Cache(key))),
        }
    }

    /// One product by ID.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`CatalogError`], `NotFound` included.
    pub async fn product(&self, id: &str) -> CatalogResult<Product> {
        let key = format!("product:{id}");
        let value = self
            .catalog
            .try_get_with(key.clone(), async {
                let product = fetch_with_retry(|| self.client.product(id)).await?;
                Ok::<_, CatalogError>(CacheValue::Product(Box::new(product)))
            })
            .await?;
        match value {
            CacheValue::Product(product) => Ok(*product),
            _ => Err(Arc::new(CatalogError::Cache(key))),
        }
    }

    /// The current exchange rate.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`CatalogError`] after the retry budget is
    /// exhausted.
    pub async fn current_rate(&self) -> CatalogResult<ExchangeRate> {
        let key = "exchange-rate:current".to_string();
        let value = self
            .catalog
            .try_get_with(key.clone(), async {
                let rate = fetch_with_retry(|| self.client.current_rate()).await?;
                Ok::<_, CatalogError>(CacheValue::Rate(Box::new(rate)))
            })
            .await?;
        match value {
            CacheValue::Rate(rate) => Ok(*rate),
            _ => Err(Arc::new(CatalogError::Cache(key))),
        }
    }

    /// Drop all cached data.
    pub async fn invalidate_all(&self) {
        self.categories.invalidate_all();
        self.catalog.invalidate_all();
        self.categories.run_pending_tasks().await;
        self.catalog.run_pending_tasks().await;
    }
}

/// Run a fetch with the fixed attempt budget.
///
/// Retries only errors for which [`CatalogError::is_retryable`] holds.
async fn fetch_with_retry<T, F, Fut>(operation: F) -> Result<T, CatalogError>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, CatalogError>>,
{
    let mut attempt = 0;
    loop {
        attempt += 1;
        match operation().await {
            Ok(value) => return Ok(value),
            Err(error) if attempt < FETCH_ATTEMPTS && error.is_retryable() => {
                tracing::warn!(error = %error, attempt, "catalog fetch failed, retrying");
            }
            Err(error) => return Err(error),
        }
    }
}
