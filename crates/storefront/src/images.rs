//! Image URL resolution.
//!
//! The API returns paths like `/api/v1/images/products/12345_abc.webp`
//! relative to the image base; already-absolute URLs pass through
//! unchanged.

/// Resolve an image path to an absolute URL.
#[must_use]
pub fn resolve(image_base: &str, path: &str) -> String {
    if path.starts_with("http") {
        return path.to_string();
    }
    if path.starts_with('/') {
        format!("{image_base}{path}")
    } else {
        format!("{image_base}/{path}")
    }
}

/// Resolve an optional/possibly-empty image path.
#[must_use]
pub fn resolve_optional(image_base: &str, path: Option<&str>) -> Option<String> {
    let path = path?;
    if path.is_empty() {
        return None;
    }
    Some(resolve(image_base, path))
}
