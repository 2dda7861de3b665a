//! Light/dark theme preference.
//!
//! The process-wide default comes from configuration, read once at
//! startup. A visitor override lives in the `maybel_theme` cookie, written
//! only by the explicit toggle route; every other code path just reads it.

use axum::http::{HeaderMap, header};

/// Name of the theme preference cookie.
pub const THEME_COOKIE: &str = "maybel_theme";

/// UI color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Cookie/CSS value for this theme.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a cookie or config value.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The other theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Resolve the request's theme from the cookie header, falling back to the
/// configured default.
#[must_use]
pub fn from_headers(headers: &HeaderMap, default: Theme) -> Theme {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| {
            let (name, value) = pair.trim().split_once('=')?;
            (name == THEME_COOKIE).then(|| value.trim())
        })
        .find_map(Theme::parse)
        .unwrap_or(default)
}

/// `Set-Cookie` value persisting a theme choice for one year.
#[must_use]
pub fn set_cookie(theme: Theme) -> String {
    format!(
        "{THEME_COOKIE}={}; Path=/; Max-Age=31536000; SameSite=Lax",
        theme.as_str()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn falls_back_to_default_without_cookie() {
        let headers = HeaderMap::new();
        assert_eq!(from_headers(&headers, Theme::Light), Theme::Light);
        assert_eq!(from_headers(&headers, Theme::Dark), Theme::Dark);
    }

    #[test]
    fn reads_theme_cookie_among_others() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("session=abc; maybel_theme=dark; other=1"),
        );
        assert_eq!(from_headers(&headers, Theme::Light), Theme::Dark);
    }

    #[test]
    fn ignores_unknown_cookie_values() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("maybel_theme=sepia"),
        );
        assert_eq!(from_headers(&headers, Theme::Light), Theme::Light);
    }

    #[test]
    fn toggle_flips_between_themes() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn set_cookie_carries_value_and_path() {
        let cookie = set_cookie(Theme::Dark);
        assert!(cookie.starts_with("maybel_theme=dark"));
        assert!(cookie.contains("Path=/"));
    }
}
