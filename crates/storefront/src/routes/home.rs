//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Response},
};
use maybel_core::{ExchangeRate, format_amount};
use tracing::instrument;

use crate::error;
use crate::filters;
use crate::state::AppState;
use crate::views::PageChrome;

use super::categories::CategoryCardView;
use super::products::count_label;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub chrome: PageChrome,
    pub categories: Vec<CategoryCardView>,
    pub categories_error: bool,
    pub count_label: String,
    /// Informational footer line like `1 USD = 245.00 CUP`; empty when the
    /// rate is unavailable.
    pub rate_line: String,
}

/// Display the home page: hero plus the root category grid.
#[instrument(skip(state, headers))]
pub async fn home(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let chrome = PageChrome::new(state.config(), &headers, "", "/");

    // An unavailable rate just hides the footer line.
    let rate_line = state
        .catalog()
        .current_rate()
        .await
        .map_or_else(|_| String::new(), |rate| rate_display(&rate));

    match state.catalog().root_categories().await {
        Ok(categories) => {
            let cards: Vec<CategoryCardView> = categories
                .iter()
                .map(|category| {
                    CategoryCardView::from_category(category, &state.config().api.image_base_url)
                })
                .collect();
            HomeTemplate {
                chrome,
                count_label: count_label(cards.len() as u64, "categoría", "categorías"),
                categories: cards,
                categories_error: false,
                rate_line,
            }
            .into_response()
        }
        Err(e) => {
            // The home page renders its own inline error state instead of
            // replacing the whole page.
            error::report(&e);
            HomeTemplate {
                chrome,
                categories: Vec::new(),
                categories_error: true,
                count_label: String::new(),
                rate_line,
            }
            .into_response()
        }
    }
}

/// `1 USD = 245.00 CUP` display line.
fn rate_display(rate: &ExchangeRate) -> String {
    format!(
        "1 {} = {} {}",
        rate.source_currency,
        format_amount(rate.rate),
        rate.target_currency
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn rate_line_formats_pair_and_amount() {
        let rate = ExchangeRate {
            id: "r1".to_string(),
            rate: "245".parse().expect("valid decimal"),
            source_currency: "USD".to_string(),
            target_currency: "CUP".to_string(),
            created_at: Utc
                .with_ymd_and_hms(2026, 7, 30, 12, 0, 0)
                .single()
                .expect("valid timestamp"),
        };
        assert_eq!(rate_display(&rate), "1 USD = 245.00 CUP");
    }
}
