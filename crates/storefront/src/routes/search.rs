//! Search route handlers.
//!
//! The query lives in the URL (`/search?q=…`) so results are shareable
//! and survive reloads. The header form carries only `q`, so a new query
//! always lands on page 1; pagination links re-encode the query.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;

use crate::catalog::ListParams;
use crate::error;
use crate::filters;
use crate::state::AppState;
use crate::views::{BreadcrumbItem, PageChrome};

use super::products::{LocalFilters, ProductGridView, build_grid};

/// Search page query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
    pub page: Option<u32>,
    /// Display price filter: `under` or `over`.
    pub price: Option<String>,
    /// `1` limits the grid to available products.
    pub available: Option<String>,
}

/// Search results page template.
#[derive(Template, WebTemplate)]
#[template(path = "search/index.html")]
pub struct SearchTemplate {
    pub chrome: PageChrome,
    pub query: String,
    pub has_query: bool,
    pub breadcrumb: Vec<BreadcrumbItem>,
    pub grid: ProductGridView,
}

/// Display search results.
#[instrument(skip(state, headers), fields(q = %query.q))]
pub async fn index(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<SearchQuery>,
) -> Response {
    let q = query.q.trim().to_string();
    let chrome = PageChrome::new(state.config(), &headers, &q, "/search");
    let breadcrumb = vec![
        BreadcrumbItem::link("Inicio", "/".to_string()),
        BreadcrumbItem::current(&format!("Búsqueda: \"{q}\"")),
    ];

    let display_filters = LocalFilters::from_query(query.price.as_deref(), query.available.as_deref());
    let params = ListParams::for_search(&q, query.page.unwrap_or(1));

    // An empty query renders the prompt without hitting the API.
    if q.is_empty() {
        let empty = crate::catalog::ProductPage {
            params,
            products: Vec::new(),
            meta: maybel_core::PageMeta::default(),
        };
        return SearchTemplate {
            chrome,
            query: q,
            has_query: false,
            breadcrumb,
            grid: build_grid(
                &empty,
                &display_filters,
                "/search",
                &state.config().api.image_base_url,
            ),
        }
        .into_response();
    }

    match state.catalog().products(&params).await {
        Ok(page) => SearchTemplate {
            chrome,
            query: q,
            has_query: true,
            breadcrumb,
            grid: build_grid(
                &page,
                &display_filters,
                "/search",
                &state.config().api.image_base_url,
            ),
        }
        .into_response(),
        Err(e) => error::catalog_failure(
            chrome,
            &e,
            "No encontramos productos",
            "No se pudieron cargar los productos. Por favor intenta de nuevo.",
        ),
    }
}
