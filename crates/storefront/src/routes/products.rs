//! Product route handlers and the shared product-grid views.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    response::{IntoResponse, Response},
};
use maybel_core::{Availability, PriceEntry, Product, Variant, format_amount};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::instrument;

use crate::catalog::ProductPage;
use crate::error;
use crate::filters;
use crate::images;
use crate::links;
use crate::state::AppState;
use crate::views::{BreadcrumbItem, PageChrome};

/// USD threshold splitting the under/over price filter.
const PRICE_FILTER_THRESHOLD: Decimal = Decimal::ONE_HUNDRED;

// =============================================================================
// Local display filters
// =============================================================================

/// Price bucket of the display filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceFilter {
    #[default]
    All,
    /// Under $100 USD.
    Under,
    /// $100 USD or more.
    Over,
}

/// Ephemeral display filters carried in the URL.
///
/// They narrow only the current fetched page: no server re-query, and the
/// server's total-count metadata stays as is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocalFilters {
    pub price: PriceFilter,
    pub available_only: bool,
}

impl LocalFilters {
    /// Parse the `price`/`available` query parameters; anything unknown
    /// means no filtering.
    #[must_use]
    pub fn from_query(price: Option<&str>, available: Option<&str>) -> Self {
        let price = match price {
            Some("under") => PriceFilter::Under,
            Some("over") => PriceFilter::Over,
            _ => PriceFilter::All,
        };
        Self {
            price,
            available_only: available == Some("1"),
        }
    }

    /// Apply the filters to one fetched page of products.
    #[must_use]
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products
            .iter()
            .filter(|product| {
                if self.available_only && product.total_available() <= 0 {
                    return false;
                }
                match self.price {
                    PriceFilter::All => true,
                    PriceFilter::Under => product.prices.usd < PRICE_FILTER_THRESHOLD,
                    PriceFilter::Over => product.prices.usd >= PRICE_FILTER_THRESHOLD,
                }
            })
            .collect()
    }

    const fn price_value(self) -> &'static str {
        match self.price {
            PriceFilter::All => "all",
            PriceFilter::Under => "under",
            PriceFilter::Over => "over",
        }
    }
}

// =============================================================================
// Grid views
// =============================================================================

/// A formatted price line: `$25.50` plus its currency label.
#[derive(Clone)]
pub struct PriceLineView {
    pub display: String,
    pub label: String,
}

impl From<PriceEntry> for PriceLineView {
    fn from(entry: PriceEntry) -> Self {
        Self {
            display: format!("{}{}", entry.currency.symbol(), format_amount(entry.amount)),
            label: entry.currency.label().to_string(),
        }
    }
}

/// Product display data for grid cards.
#[derive(Clone)]
pub struct ProductCardView {
    pub id: String,
    pub name: String,
    pub category_name: String,
    pub href: String,
    pub image_url: Option<String>,
    pub primary_price: Option<PriceLineView>,
    pub secondary_price: Option<PriceLineView>,
    pub stock_label: String,
    pub in_stock: bool,
}

impl ProductCardView {
    /// Build a card from a fetched product.
    #[must_use]
    pub fn from_product(product: &Product, image_base: &str) -> Self {
        let available = product.total_available();
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            category_name: product
                .category
                .as_ref()
                .map(|category| category.name.clone())
                .unwrap_or_default(),
            href: format!("/products/{}", product.id),
            image_url: product
                .main_image()
                .and_then(|image| images::resolve_optional(image_base, Some(&image.file_path))),
            primary_price: product.prices.primary().map(PriceLineView::from),
            secondary_price: product.prices.compact_secondary().map(PriceLineView::from),
            stock_label: stock_label(available),
            in_stock: available > 0,
        }
    }
}

/// Pagination controls for a grid page.
#[derive(Clone)]
pub struct PaginationView {
    pub page: u32,
    pub total_pages: u32,
    pub has_prev: bool,
    pub has_next: bool,
    pub prev_href: String,
    pub next_href: String,
}

/// Filter sidebar state for a grid page.
#[derive(Clone)]
pub struct FilterFormView {
    /// GET form action, the listing's own path.
    pub action: String,
    /// Search query re-submitted as a hidden field; empty when browsing.
    pub q: String,
    /// Selected price bucket: `all`, `under`, or `over`.
    pub price: &'static str,
    pub available: bool,
}

/// A product grid with its filters, counters, and pagination.
///
/// Built exclusively from the fetched page's own parameter tag
/// ([`ProductPage::params`]), so a superseded response can never leak into
/// another parameter set's page.
#[derive(Clone)]
pub struct ProductGridView {
    pub cards: Vec<ProductCardView>,
    /// Server-side total, unaffected by display filters.
    pub total_label: String,
    /// Count of cards actually shown after display filters.
    pub shown_label: String,
    pub pagination: PaginationView,
    pub filters: FilterFormView,
    pub is_empty: bool,
}

/// Build the grid view for one fetched page.
#[must_use]
pub fn build_grid(
    page: &ProductPage,
    display_filters: &LocalFilters,
    base_path: &str,
    image_base: &str,
) -> ProductGridView {
    let query = page.params.search.as_deref();
    let filtered = display_filters.apply(&page.products);
    let cards: Vec<ProductCardView> = filtered
        .iter()
        .map(|product| ProductCardView::from_product(product, image_base))
        .collect();

    let current = page.params.page;
    let has_prev = current > 1;
    let has_next = current < page.meta.total_pages;

    ProductGridView {
        total_label: count_label(page.meta.total, "producto", "productos"),
        shown_label: format!("Mostrando {} productos", cards.len()),
        is_empty: cards.is_empty(),
        cards,
        pagination: PaginationView {
            page: current,
            total_pages: page.meta.total_pages.max(1),
            has_prev,
            has_next,
            prev_href: page_href(base_path, query, current.saturating_sub(1).max(1), display_filters),
            next_href: page_href(base_path, query, current + 1, display_filters),
        },
        filters: FilterFormView {
            action: base_path.to_string(),
            q: query.unwrap_or_default().to_string(),
            price: display_filters.price_value(),
            available: display_filters.available_only,
        },
    }
}

/// Href for another page of the same parameter set, filters preserved.
fn page_href(base_path: &str, query: Option<&str>, page: u32, filters: &LocalFilters) -> String {
    let mut parts: Vec<String> = Vec::new();
    if let Some(query) = query
        && !query.is_empty()
    {
        parts.push(format!("q={}", urlencoding::encode(query)));
    }
    parts.push(format!("page={page}"));
    match filters.price {
        PriceFilter::All => {}
        PriceFilter::Under => parts.push("price=under".to_string()),
        PriceFilter::Over => parts.push("price=over".to_string()),
    }
    if filters.available_only {
        parts.push("available=1".to_string());
    }
    format!("{base_path}?{}", parts.join("&"))
}

/// Spanish count label, e.g. `1 producto` / `12 productos`.
#[must_use]
pub fn count_label(count: u64, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("1 {singular}")
    } else {
        format!("{count} {plural}")
    }
}

/// Per-item stock label, e.g. `3 disponibles` / `Agotado`.
#[must_use]
pub fn stock_label(available: i64) -> String {
    if available <= 0 {
        "Agotado".to_string()
    } else if available == 1 {
        "1 disponible".to_string()
    } else {
        format!("{available} disponibles")
    }
}

// =============================================================================
// Product detail
// =============================================================================

/// A selectable gallery thumbnail.
#[derive(Clone)]
pub struct ThumbnailView {
    pub url: String,
    pub href: String,
    pub selected: bool,
}

/// One row of the variant table.
#[derive(Clone)]
pub struct VariantRowView {
    pub color: String,
    pub size: String,
    pub material: String,
    pub sku: String,
    pub stock_label: String,
    pub in_stock: bool,
    pub selected: bool,
    pub href: String,
}

/// Product detail display data.
#[derive(Clone)]
pub struct ProductDetailView {
    pub name: String,
    pub description: String,
    pub category_line: String,
    pub main_image_url: Option<String>,
    pub thumbnails: Vec<ThumbnailView>,
    pub main_prices: Vec<PriceLineView>,
    pub other_prices: Vec<PriceLineView>,
    pub has_prices: bool,
    pub variants: Vec<VariantRowView>,
    pub has_variants: bool,
    pub show_color: bool,
    pub show_size: bool,
    pub show_material: bool,
    pub total_stock_label: String,
    pub total_in_stock: bool,
    pub banner_class: &'static str,
    pub banner_text: String,
    pub whatsapp_url: String,
    pub telegram_url: String,
    pub tel_url: String,
}

/// Product detail query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct DetailQuery {
    /// Selected variant ID; defaults to the first in-stock variant.
    pub variant: Option<String>,
    /// Selected gallery image index into the position-sorted list.
    pub image: Option<usize>,
}

impl ProductDetailView {
    /// Build the detail view for a fetched product and selection state.
    #[must_use]
    pub fn build(
        product: &Product,
        query: &DetailQuery,
        image_base: &str,
        contact: &crate::config::ContactConfig,
    ) -> Self {
        let sorted_images = product.sorted_images();
        let selected_image = query
            .image
            .filter(|index| *index < sorted_images.len())
            .unwrap_or(0);

        // Selected variant: explicit ?variant= wins, then the default
        // first-in-stock selection.
        let selected_variant: Option<&Variant> = query
            .variant
            .as_deref()
            .and_then(|id| product.variant(id))
            .or_else(|| product.default_variant());
        let selected_variant_id = selected_variant.map(|variant| variant.id.as_str());

        // The banner tracks the selected variant; without one it falls
        // back to the product-level aggregate.
        let banner_quantity = selected_variant
            .map_or_else(|| product.total_available(), Variant::available);
        let availability = Availability::from_quantity(banner_quantity);

        let main_image_url = sorted_images
            .get(selected_image)
            .and_then(|image| images::resolve_optional(image_base, Some(&image.file_path)));

        let thumbnails = sorted_images
            .iter()
            .enumerate()
            .filter_map(|(index, image)| {
                let url = images::resolve_optional(image_base, Some(&image.file_path))?;
                Some(ThumbnailView {
                    url,
                    href: detail_href(&product.id, Some(index), selected_variant_id),
                    selected: index == selected_image,
                })
            })
            .collect();

        let variants: Vec<VariantRowView> = product
            .variants
            .iter()
            .map(|variant| {
                let available = variant.available();
                VariantRowView {
                    color: variant.color.clone(),
                    size: variant.size.clone(),
                    material: variant.material.clone(),
                    sku: variant.sku.clone(),
                    stock_label: stock_label(available),
                    in_stock: available > 0,
                    selected: Some(variant.id.as_str()) == selected_variant_id,
                    href: detail_href(&product.id, Some(selected_image), Some(&variant.id)),
                }
            })
            .collect();

        let total_available = product.total_available();
        let category = product.category.as_ref();
        let variant_label = selected_variant.map(Variant::label);

        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            category_line: category.map_or_else(String::new, |category| {
                category.parent.as_ref().map_or_else(
                    || category.name.clone(),
                    |parent| format!("{} / {}", parent.name, category.name),
                )
            }),
            main_image_url,
            thumbnails,
            main_prices: product
                .prices
                .main_entries()
                .into_iter()
                .map(PriceLineView::from)
                .collect(),
            other_prices: product
                .prices
                .other_entries()
                .into_iter()
                .map(PriceLineView::from)
                .collect(),
            has_prices: !product.prices.is_empty(),
            has_variants: !variants.is_empty(),
            show_color: product.variants.iter().any(|v| !v.color.is_empty()),
            show_size: product.variants.iter().any(|v| !v.size.is_empty()),
            show_material: product.variants.iter().any(|v| !v.material.is_empty()),
            variants,
            total_stock_label: stock_label(total_available),
            total_in_stock: total_available > 0,
            banner_class: banner_class(availability),
            banner_text: banner_text(availability, banner_quantity),
            whatsapp_url: links::whatsapp_product_url(
                &contact.whatsapp,
                &product.name,
                variant_label.as_deref(),
            ),
            telegram_url: links::telegram_url(&contact.telegram),
            tel_url: links::tel_url(&contact.phone),
        }
    }
}

fn detail_href(product_id: &str, image: Option<usize>, variant: Option<&str>) -> String {
    let mut parts: Vec<String> = Vec::new();
    if let Some(index) = image
        && index > 0
    {
        parts.push(format!("image={index}"));
    }
    if let Some(variant) = variant {
        parts.push(format!("variant={}", urlencoding::encode(variant)));
    }
    if parts.is_empty() {
        format!("/products/{product_id}")
    } else {
        format!("/products/{product_id}?{}", parts.join("&"))
    }
}

/// Breadcrumb trail for a product: home, category ancestry, product name.
#[must_use]
pub fn breadcrumb_for(product: &Product) -> Vec<BreadcrumbItem> {
    let mut breadcrumb = vec![BreadcrumbItem::link("Inicio", "/".to_string())];
    if let Some(category) = &product.category {
        if let Some(parent) = &category.parent {
            breadcrumb.push(BreadcrumbItem::link(
                &parent.name,
                format!("/categories/{}", parent.id),
            ));
        }
        breadcrumb.push(BreadcrumbItem::link(
            &category.name,
            format!("/categories/{}", category.id),
        ));
    }
    breadcrumb.push(BreadcrumbItem::current(&product.name));
    breadcrumb
}

const fn banner_class(availability: Availability) -> &'static str {
    match availability {
        Availability::InStock => "stock-banner-available",
        Availability::LowStock => "stock-banner-low",
        Availability::OutOfStock => "stock-banner-out",
    }
}

fn banner_text(availability: Availability, quantity: i64) -> String {
    match availability {
        Availability::InStock => "Disponible en inventario".to_string(),
        Availability::LowStock if quantity == 1 => "¡Solo queda 1 unidad!".to_string(),
        Availability::LowStock => format!("¡Solo quedan {quantity} unidades!"),
        Availability::OutOfStock => "Agotado temporalmente".to_string(),
    }
}

// =============================================================================
// Handler
// =============================================================================

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub chrome: PageChrome,
    pub breadcrumb: Vec<BreadcrumbItem>,
    pub product: ProductDetailView,
}

/// Display product detail page.
#[instrument(skip(state, headers))]
pub async fn show(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Query(query): Query<DetailQuery>,
) -> Response {
    let chrome = PageChrome::new(state.config(), &headers, "", &format!("/products/{id}"));

    match state.catalog().product(&id).await {
        Ok(product) => {
            let view = ProductDetailView::build(
                &product,
                &query,
                &state.config().api.image_base_url,
                &state.config().contact,
            );
            ProductShowTemplate {
                chrome,
                breadcrumb: breadcrumb_for(&product),
                product: view,
            }
            .into_response()
        }
        Err(e) => error::catalog_failure(
            chrome,
            &e,
            "Producto no encontrado",
            "No se pudo cargar el producto. Por favor intenta de nuevo.",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ListParams;
    use maybel_core::{Category, PageMeta, PriceSet, ProductImage, StockSummary};

    const IMAGE_BASE: &str = "https://api.maybel.cu";

    fn d(s: &str) -> Decimal {
        s.parse().expect("valid decimal literal")
    }

    fn contact() -> crate::config::ContactConfig {
        crate::config::tests_support::test_config().contact
    }

    fn variant(id: &str, available: i64) -> Variant {
        Variant {
            id: id.to_string(),
            color: "Rojo".to_string(),
            size: String::new(),
            material: String::new(),
            sku: format!("SKU-{id}"),
            stock_summary: Some(StockSummary {
                total_quantity: available,
                reserved_quantity: 0,
                available_quantity: available,
            }),
        }
    }

    fn product(id: &str, usd: &str, total_stock: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Producto {id}"),
            description: String::new(),
            category_id: None,
            category: None,
            active: true,
            prices: PriceSet {
                usd: d(usd),
                ..PriceSet::default()
            },
            total_stock,
            images: Vec::new(),
            variants: Vec::new(),
        }
    }

    fn page_of(products: Vec<Product>, page: u32, total: u64) -> ProductPage {
        ProductPage {
            params: ListParams::for_search("mesa", page),
            products,
            meta: PageMeta {
                page,
                limit: 20,
                total,
                total_pages: u32::try_from(total.div_ceil(20)).unwrap_or(0),
            },
        }
    }

    // Card count equals the filtered subset; totals keep the server count.
    #[test]
    fn grid_renders_one_card_per_product_after_local_filters() {
        let products = vec![
            product("p1", "25.5", 3),
            product("p2", "150", 0),
            product("p3", "80", 1),
        ];
        let page = page_of(products, 1, 41);

        let unfiltered = build_grid(&page, &LocalFilters::default(), "/search", IMAGE_BASE);
        assert_eq!(unfiltered.cards.len(), 3);
        assert_eq!(unfiltered.total_label, "41 productos");
        assert_eq!(unfiltered.shown_label, "Mostrando 3 productos");

        let filters = LocalFilters {
            price: PriceFilter::Under,
            available_only: true,
        };
        let filtered = build_grid(&page, &filters, "/search", IMAGE_BASE);
        assert_eq!(filtered.cards.len(), 2);
        // Display filters never touch the server total.
        assert_eq!(filtered.total_label, "41 productos");
        assert_eq!(filtered.shown_label, "Mostrando 2 productos");
    }

    #[test]
    fn local_filters_split_on_hundred_usd() {
        let products = vec![product("p1", "99.99", 1), product("p2", "100", 1)];

        let under = LocalFilters {
            price: PriceFilter::Under,
            available_only: false,
        };
        let over = LocalFilters {
            price: PriceFilter::Over,
            available_only: false,
        };
        assert_eq!(under.apply(&products).len(), 1);
        assert_eq!(under.apply(&products)[0].id, "p1");
        assert_eq!(over.apply(&products)[0].id, "p2");
    }

    #[test]
    fn grid_reads_page_identity_from_the_response_tag() {
        // Pagination is rendered from the parameter set that produced the
        // response, never from ambient request state.
        let page = page_of(vec![product("p1", "10", 1)], 2, 55);
        let grid = build_grid(&page, &LocalFilters::default(), "/search", IMAGE_BASE);

        assert_eq!(grid.pagination.page, 2);
        assert_eq!(grid.pagination.total_pages, 3);
        assert!(grid.pagination.has_prev);
        assert!(grid.pagination.has_next);
        assert_eq!(grid.pagination.prev_href, "/search?q=mesa&page=1");
        assert_eq!(grid.pagination.next_href, "/search?q=mesa&page=3");
        assert_eq!(grid.filters.q, "mesa");
    }

    #[test]
    fn page_hrefs_preserve_filters() {
        let filters = LocalFilters {
            price: PriceFilter::Over,
            available_only: true,
        };
        assert_eq!(
            page_href("/categories/c1", None, 2, &filters),
            "/categories/c1?page=2&price=over&available=1"
        );
    }

    #[test]
    fn empty_page_renders_empty_state_not_error() {
        let page = page_of(Vec::new(), 1, 0);
        let grid = build_grid(&page, &LocalFilters::default(), "/search", IMAGE_BASE);
        assert!(grid.is_empty);
        assert_eq!(grid.total_label, "0 productos");
    }

    #[test]
    fn card_prices_show_compact_pair_and_skip_zeroes() {
        let mut p = product("p1", "25.5", 1);
        p.prices.eur = d("10");

        let card = ProductCardView::from_product(&p, IMAGE_BASE);
        let primary = card.primary_price.expect("usd primary");
        assert_eq!(primary.display, "$25.50");
        assert_eq!(primary.label, "USD");
        let secondary = card.secondary_price.expect("eur secondary");
        assert_eq!(secondary.label, "EUR");
    }

    #[test]
    fn card_resolves_lowest_position_image() {
        let mut p = product("p1", "25.5", 1);
        p.images = vec![
            ProductImage {
                id: "i2".to_string(),
                file_path: "/img/second.webp".to_string(),
                position: 2,
                active: true,
            },
            ProductImage {
                id: "i0".to_string(),
                file_path: "/img/main.webp".to_string(),
                position: 0,
                active: true,
            },
        ];

        let card = ProductCardView::from_product(&p, IMAGE_BASE);
        assert_eq!(
            card.image_url.as_deref(),
            Some("https://api.maybel.cu/img/main.webp")
        );
    }

    #[test]
    fn detail_defaults_to_first_in_stock_variant() {
        let mut p = product("p1", "40", 0);
        p.variants = vec![variant("v1", 0), variant("v2", 3)];

        let view = ProductDetailView::build(&p, &DetailQuery::default(), IMAGE_BASE, &contact());
        let selected: Vec<&VariantRowView> =
            view.variants.iter().filter(|row| row.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].sku, "SKU-v2");
        // Banner follows the selected variant's availability.
        assert_eq!(view.banner_class, "stock-banner-low");
        assert_eq!(view.banner_text, "¡Solo quedan 3 unidades!");
    }

    #[test]
    fn detail_banner_recomputes_for_explicit_variant() {
        let mut p = product("p1", "40", 0);
        p.variants = vec![variant("v1", 20), variant("v2", 0)];

        let query = DetailQuery {
            variant: Some("v2".to_string()),
            image: None,
        };
        let view = ProductDetailView::build(&p, &query, IMAGE_BASE, &contact());
        assert_eq!(view.banner_class, "stock-banner-out");
        assert_eq!(view.banner_text, "Agotado temporalmente");
    }

    #[test]
    fn detail_without_variants_uses_total_stock() {
        let p = product("p1", "40", 8);
        let view = ProductDetailView::build(&p, &DetailQuery::default(), IMAGE_BASE, &contact());
        assert!(!view.has_variants);
        assert_eq!(view.banner_class, "stock-banner-available");
        assert_eq!(view.total_stock_label, "8 disponibles");
    }

    #[test]
    fn detail_thumbnails_follow_position_order() {
        let mut p = product("p1", "40", 1);
        p.images = vec![
            ProductImage {
                id: "i2".to_string(),
                file_path: "/img/2.webp".to_string(),
                position: 2,
                active: true,
            },
            ProductImage {
                id: "i0".to_string(),
                file_path: "/img/0.webp".to_string(),
                position: 0,
                active: true,
            },
            ProductImage {
                id: "i1".to_string(),
                file_path: "/img/1.webp".to_string(),
                position: 1,
                active: true,
            },
        ];

        let view = ProductDetailView::build(&p, &DetailQuery::default(), IMAGE_BASE, &contact());
        assert_eq!(
            view.main_image_url.as_deref(),
            Some("https://api.maybel.cu/img/0.webp")
        );
        let urls: Vec<&str> = view.thumbnails.iter().map(|t| t.url.as_str()).collect();
        assert_eq!(
            urls,
            vec![
                "https://api.maybel.cu/img/0.webp",
                "https://api.maybel.cu/img/1.webp",
                "https://api.maybel.cu/img/2.webp"
            ]
        );
        assert!(view.thumbnails[0].selected);
    }

    #[test]
    fn detail_out_of_range_image_index_falls_back_to_main() {
        let mut p = product("p1", "40", 1);
        p.images = vec![ProductImage {
            id: "i0".to_string(),
            file_path: "/img/0.webp".to_string(),
            position: 0,
            active: true,
        }];

        let query = DetailQuery {
            variant: None,
            image: Some(7),
        };
        let view = ProductDetailView::build(&p, &query, IMAGE_BASE, &contact());
        assert_eq!(
            view.main_image_url.as_deref(),
            Some("https://api.maybel.cu/img/0.webp")
        );
    }

    #[test]
    fn detail_breadcrumb_walks_category_parent() {
        let mut p = product("p1", "40", 1);
        let mut category = Category {
            id: "c2".to_string(),
            name: "Sillas".to_string(),
            description: String::new(),
            parent_id: Some("c1".to_string()),
            image_url: None,
            active: true,
            children: Vec::new(),
            parent: None,
            product_count: None,
        };
        category.parent = Some(Box::new(Category {
            id: "c1".to_string(),
            name: "Muebles".to_string(),
            description: String::new(),
            parent_id: None,
            image_url: None,
            active: true,
            children: Vec::new(),
            parent: None,
            product_count: None,
        }));
        p.category = Some(category);

        let view = ProductDetailView::build(&p, &DetailQuery::default(), IMAGE_BASE, &contact());
        assert_eq!(view.category_line, "Muebles / Sillas");

        let crumbs = breadcrumb_for(&p);
        let labels: Vec<&str> = crumbs.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["Inicio", "Muebles", "Sillas", "Producto p1"]);
        // The trailing crumb is plain text.
        assert!(crumbs[3].href.is_empty());
    }

    #[test]
    fn whatsapp_link_names_selected_variant() {
        let mut p = product("p1", "40", 0);
        p.variants = vec![variant("v1", 2)];

        let view = ProductDetailView::build(&p, &DetailQuery::default(), IMAGE_BASE, &contact());
        assert!(view.whatsapp_url.contains(&*urlencoding::encode("(Rojo)")));
    }
}
