//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                   - Home page (hero + root categories)
//! GET  /health             - Health check
//!
//! # Catalog
//! GET  /categories         - Root category listing
//! GET  /categories/{id}    - Subcategories, or the category's products
//!                            (?page, ?price=under|over, ?available=1)
//! GET  /products/{id}      - Product detail (?variant, ?image)
//! GET  /search             - Search results (?q, ?page, + display filters)
//!
//! # Preferences
//! POST /theme              - Toggle the light/dark theme cookie
//! ```

pub mod categories;
pub mod home;
pub mod products;
pub mod search;
pub mod theme;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/categories", get(categories::index))
        .route("/categories/{id}", get(categories::show))
        .route("/products/{id}", get(products::show))
        .route("/search", get(search::index))
        .route("/theme", post(theme::toggle))
}
