//! View data shared by every page template.

use axum::http::HeaderMap;

use crate::config::StorefrontConfig;
use crate::links;
use crate::theme;

/// Chrome rendered on every page: theme, header search state, and the
/// footer contact block.
#[derive(Clone)]
pub struct PageChrome {
    /// Theme class applied to `<body>`: `light` or `dark`.
    pub theme: &'static str,
    /// Current search query, echoed into the header search field.
    pub search_query: String,
    /// Path the theme toggle redirects back to.
    pub current_path: String,
    /// Footer contact block.
    pub contact: ContactView,
}

/// Contact channels rendered in the footer.
#[derive(Clone)]
pub struct ContactView {
    pub whatsapp_url: String,
    pub telegram_url: String,
    pub tel_url: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

/// One breadcrumb segment; an empty `href` renders as plain text.
#[derive(Clone)]
pub struct BreadcrumbItem {
    pub label: String,
    pub href: String,
}

impl PageChrome {
    /// Build the chrome for a request.
    #[must_use]
    pub fn new(
        config: &StorefrontConfig,
        headers: &HeaderMap,
        search_query: &str,
        current_path: &str,
    ) -> Self {
        let resolved = theme::from_headers(headers, config.default_theme);
        Self {
            theme: resolved.as_str(),
            search_query: search_query.to_string(),
            current_path: current_path.to_string(),
            contact: ContactView::new(config),
        }
    }

    /// Chrome for pages rendered without request context, such as shared
    /// error pages.
    #[must_use]
    pub fn fallback(config: &StorefrontConfig) -> Self {
        Self {
            theme: config.default_theme.as_str(),
            search_query: String::new(),
            current_path: "/".to_string(),
            contact: ContactView::new(config),
        }
    }
}

impl ContactView {
    fn new(config: &StorefrontConfig) -> Self {
        let contact = &config.contact;
        Self {
            whatsapp_url: links::whatsapp_url(&contact.whatsapp),
            telegram_url: links::telegram_url(&contact.telegram),
            tel_url: links::tel_url(&contact.phone),
            phone: contact.phone.clone(),
            email: contact.email.clone(),
            address: contact.address.clone(),
        }
    }
}

impl BreadcrumbItem {
    /// A navigable breadcrumb segment.
    #[must_use]
    pub fn link(label: &str, href: String) -> Self {
        Self {
            label: label.to_string(),
            href,
        }
    }

    /// The trailing, non-navigable segment.
    #[must_use]
    pub fn current(label: &str) -> Self {
        Self {
            label: label.to_string(),
            href: String::new(),
        }
    }
}
