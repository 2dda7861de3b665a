//! Category route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    response::{IntoResponse, Response},
};
use maybel_core::Category;
use serde::Deserialize;
use tracing::instrument;

use crate::catalog::ListParams;
use crate::error;
use crate::filters;
use crate::images;
use crate::state::AppState;
use crate::views::{BreadcrumbItem, PageChrome};

use super::products::{LocalFilters, ProductGridView, build_grid, count_label};

/// Category display data for grid cards.
#[derive(Clone)]
pub struct CategoryCardView {
    pub name: String,
    pub description: String,
    pub href: String,
    pub image_url: Option<String>,
    pub product_count_label: String,
}

impl CategoryCardView {
    /// Build a card from a fetched category.
    #[must_use]
    pub fn from_category(category: &Category, image_base: &str) -> Self {
        Self {
            name: category.name.clone(),
            description: category.description.clone(),
            href: format!("/categories/{}", category.id),
            image_url: images::resolve_optional(image_base, category.image_url.as_deref()),
            product_count_label: category
                .product_count
                .map(|count| count_label(count, "producto", "productos"))
                .unwrap_or_default(),
        }
    }
}

/// Category listing and product-grid query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct CategoryQuery {
    pub page: Option<u32>,
    /// Display price filter: `under` or `over`.
    pub price: Option<String>,
    /// `1` limits the grid to available products.
    pub available: Option<String>,
}

/// Category listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "categories/index.html")]
pub struct CategoriesIndexTemplate {
    pub chrome: PageChrome,
    pub categories: Vec<CategoryCardView>,
    pub count_label: String,
}

/// Category page rendering its subcategories.
#[derive(Template, WebTemplate)]
#[template(path = "categories/show.html")]
pub struct CategoryChildrenTemplate {
    pub chrome: PageChrome,
    pub name: String,
    pub description: String,
    pub breadcrumb: Vec<BreadcrumbItem>,
    pub categories: Vec<CategoryCardView>,
    pub count_label: String,
}

/// Category page rendering its own product grid.
#[derive(Template, WebTemplate)]
#[template(path = "categories/products.html")]
pub struct CategoryProductsTemplate {
    pub chrome: PageChrome,
    pub name: String,
    pub description: String,
    pub breadcrumb: Vec<BreadcrumbItem>,
    pub grid: ProductGridView,
}

/// Display the root category listing.
#[instrument(skip(state, headers))]
pub async fn index(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let chrome = PageChrome::new(state.config(), &headers, "", "/categories");

    match state.catalog().root_categories().await {
        Ok(categories) => {
            let cards: Vec<CategoryCardView> = categories
                .iter()
                .map(|category| {
                    CategoryCardView::from_category(category, &state.config().api.image_base_url)
                })
                .collect();
            CategoriesIndexTemplate {
                chrome,
                count_label: count_label(cards.len() as u64, "categoría", "categorías"),
                categories: cards,
            }
            .into_response()
        }
        Err(e) => error::catalog_failure(
            chrome,
            &e,
            "Categorías no encontradas",
            "No se pudieron cargar las categorías. Verifica que la API esté funcionando.",
        ),
    }
}

/// Display a category: its subcategories when it has children, its own
/// product grid otherwise.
#[instrument(skip(state, headers), fields(id = %id))]
pub async fn show(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Query(query): Query<CategoryQuery>,
) -> Response {
    let path = format!("/categories/{id}");
    let chrome = PageChrome::new(state.config(), &headers, "", &path);

    let category = match state.catalog().category(&id).await {
        Ok(category) => category,
        Err(e) => {
            return error::catalog_failure(
                chrome,
                &e,
                "Categoría no encontrada",
                "No se pudo cargar la categoría. Por favor intenta de nuevo.",
            );
        }
    };

    let breadcrumb = breadcrumb_for(&category);

    if category.has_children() {
        let cards: Vec<CategoryCardView> = category
            .children
            .iter()
            .map(|child| CategoryCardView::from_category(child, &state.config().api.image_base_url))
            .collect();
        return CategoryChildrenTemplate {
            chrome,
            name: category.name.clone(),
            description: category.description.clone(),
            breadcrumb,
            count_label: count_label(cards.len() as u64, "subcategoría", "subcategorías"),
            categories: cards,
        }
        .into_response();
    }

    // No subcategories: fall through to the category's own products.
    let display_filters = LocalFilters::from_query(query.price.as_deref(), query.available.as_deref());
    let params = ListParams::for_category(&id, query.page.unwrap_or(1));

    match state.catalog().products(&params).await {
        Ok(page) => CategoryProductsTemplate {
            chrome,
            name: category.name.clone(),
            description: category.description.clone(),
            breadcrumb,
            grid: build_grid(
                &page,
                &display_filters,
                &path,
                &state.config().api.image_base_url,
            ),
        }
        .into_response(),
        Err(e) => error::catalog_failure(
            chrome,
            &e,
            "Categoría no encontrada",
            "No se pudieron cargar los productos. Por favor intenta de nuevo.",
        ),
    }
}

fn breadcrumb_for(category: &Category) -> Vec<BreadcrumbItem> {
    let mut breadcrumb = vec![BreadcrumbItem::link("Inicio", "/".to_string())];
    for ancestor in category.ancestors() {
        breadcrumb.push(BreadcrumbItem::link(
            &ancestor.name,
            format!("/categories/{}", ancestor.id),
        ));
    }
    breadcrumb.push(BreadcrumbItem::current(&category.name));
    breadcrumb
}
