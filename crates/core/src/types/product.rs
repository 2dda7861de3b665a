//! Product, variant, and image types with their derived display values.

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::price::PriceSet;
use super::stock::StockSummary;

/// A catalog product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Product ID.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Long description.
    #[serde(default)]
    pub description: String,
    /// Owning category ID.
    #[serde(default)]
    pub category_id: Option<String>,
    /// Embedded owning category summary; may carry its own parent.
    #[serde(default)]
    pub category: Option<Category>,
    /// Whether the product is active.
    #[serde(default = "default_active")]
    pub active: bool,
    /// Per-currency sale prices, flattened into the payload.
    #[serde(flatten)]
    pub prices: PriceSet,
    /// Aggregate stock; authoritative only when `variants` is empty.
    #[serde(default)]
    pub total_stock: i64,
    /// Product images, unordered as delivered.
    #[serde(default)]
    pub images: Vec<ProductImage>,
    /// Purchasable configurations of this product.
    #[serde(default)]
    pub variants: Vec<Variant>,
}

/// A distinct purchasable configuration of a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Variant {
    /// Variant ID.
    pub id: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub material: String,
    #[serde(default)]
    pub sku: String,
    /// Stock counts; absent while the API has not computed them.
    #[serde(default)]
    pub stock_summary: Option<StockSummary>,
}

/// A product image; `position` is the ascending display sort key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductImage {
    /// Image ID.
    pub id: String,
    /// Path relative to the image base, or an absolute URL.
    #[serde(alias = "url")]
    pub file_path: String,
    /// Display order, lowest first.
    #[serde(default)]
    pub position: i32,
    /// Whether the image is active.
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl Variant {
    /// Units of this variant that can still be sold.
    #[must_use]
    pub fn available(&self) -> i64 {
        self.stock_summary.map_or(0, |s| s.available_quantity)
    }

    /// Human label combining the descriptive attributes, e.g. `Rojo / M`.
    #[must_use]
    pub fn label(&self) -> String {
        let parts: Vec<&str> = [&self.color, &self.size, &self.material]
            .into_iter()
            .map(String::as_str)
            .filter(|part| !part.is_empty())
            .collect();
        if parts.is_empty() {
            self.sku.clone()
        } else {
            parts.join(" / ")
        }
    }
}

impl Product {
    /// Images ordered by `position` ascending.
    #[must_use]
    pub fn sorted_images(&self) -> Vec<&ProductImage> {
        let mut images: Vec<&ProductImage> = self.images.iter().collect();
        images.sort_by_key(|image| image.position);
        images
    }

    /// The default main image: lowest position, when any image exists.
    #[must_use]
    pub fn main_image(&self) -> Option<&ProductImage> {
        self.images.iter().min_by_key(|image| image.position)
    }

    /// Default variant selection: first with positive availability,
    /// falling back to the first variant overall.
    #[must_use]
    pub fn default_variant(&self) -> Option<&Variant> {
        self.variants
            .iter()
            .find(|variant| variant.available() > 0)
            .or_else(|| self.variants.first())
    }

    /// Look up a variant by ID.
    #[must_use]
    pub fn variant(&self, id: &str) -> Option<&Variant> {
        self.variants.iter().find(|variant| variant.id == id)
    }

    /// Total units available across the whole product.
    ///
    /// With variants this is the sum of their available quantities;
    /// without, `total_stock` stands alone.
    #[must_use]
    pub fn total_available(&self) -> i64 {
        if self.variants.is_empty() {
            self.total_stock
        } else {
            self.variants.iter().map(Variant::available).sum()
        }
    }
}
