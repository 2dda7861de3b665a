//! Theme toggle route handler.

use axum::{
    Form,
    extract::State,
    http::{HeaderMap, HeaderValue, header},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use crate::state::AppState;
use crate::theme;

/// Theme toggle form body.
#[derive(Debug, Deserialize)]
pub struct ThemeForm {
    /// Path to redirect back to after toggling.
    #[serde(default)]
    pub next: String,
}

/// Toggle the visitor's theme cookie and redirect back.
///
/// This is the only code path that writes the theme preference.
#[instrument(skip(state, headers))]
pub async fn toggle(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<ThemeForm>,
) -> Response {
    let current = theme::from_headers(&headers, state.config().default_theme);
    let next_theme = current.toggled();

    let mut response = Redirect::to(&safe_redirect(&form.next)).into_response();
    if let Ok(cookie) = HeaderValue::from_str(&theme::set_cookie(next_theme)) {
        response.headers_mut().append(header::SET_COOKIE, cookie);
    }
    response
}

/// Only same-site paths are valid redirect targets.
fn safe_redirect(next: &str) -> String {
    if next.starts_with('/') && !next.starts_with("//") {
        next.to_string()
    } else {
        "/".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redirect_targets_stay_on_site() {
        assert_eq!(safe_redirect("/categories/c1"), "/categories/c1");
        assert_eq!(safe_redirect("https://evil.example"), "/");
        assert_eq!(safe_redirect("//evil.example"), "/");
        assert_eq!(safe_redirect(""), "/");
    }
}
