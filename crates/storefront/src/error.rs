//! Shared error presentation with Sentry capture.
//!
//! Every fetch failure collapses, at the view boundary, into one of two
//! user-visible states: a page-level "could not load" message, or a "not
//! found" empty state when the resource itself is absent. Handlers pick
//! between them by matching on [`CatalogError::is_not_found`].

use askama::Template;
use askama_web::WebTemplate;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::catalog::CatalogError;
use crate::filters;
use crate::views::PageChrome;

/// Page-level "could not load" state.
#[derive(Template, WebTemplate)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub chrome: PageChrome,
    pub message: String,
}

/// "Not found" empty state, distinct from the error state.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub chrome: PageChrome,
    pub message: String,
}

/// Render the "could not load" page (502, the upstream API failed).
#[must_use]
pub fn could_not_load(chrome: PageChrome, message: &str) -> Response {
    (
        StatusCode::BAD_GATEWAY,
        ErrorTemplate {
            chrome,
            message: message.to_string(),
        },
    )
        .into_response()
}

/// Render the "not found" empty state (404).
#[must_use]
pub fn not_found(chrome: PageChrome, message: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        NotFoundTemplate {
            chrome,
            message: message.to_string(),
        },
    )
        .into_response()
}

/// Map a catalog failure to the right user-visible state, logging and
/// capturing genuine failures to Sentry.
#[must_use]
pub fn catalog_failure(
    chrome: PageChrome,
    error: &CatalogError,
    not_found_message: &str,
    load_message: &str,
) -> Response {
    if error.is_not_found() {
        return not_found(chrome, not_found_message);
    }
    report(error);
    could_not_load(chrome, load_message)
}

/// Log a catalog error and capture it to Sentry when configured.
pub fn report(error: &CatalogError) {
    let event_id = sentry::capture_error(error);
    tracing::error!(
        error = %error,
        sentry_event_id = %event_id,
        "catalog request failed"
    );
}
