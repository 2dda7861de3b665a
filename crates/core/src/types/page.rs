//! Pagination metadata accompanying paged listings.

use serde::{Deserialize, Serialize};

/// Pagination metadata from a paged product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Current page, 1-based.
    pub page: u32,
    /// Requested page size.
    pub limit: u32,
    /// Total matching items server-side.
    pub total: u64,
    /// Total pages at this limit.
    pub total_pages: u32,
}

impl PageMeta {
    /// Whether a later page exists.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Whether an earlier page exists.
    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.page > 1
    }
}

impl Default for PageMeta {
    /// The fallback used when the API omits pagination metadata.
    fn default() -> Self {
        Self {
            page: 1,
            limit: 20,
            total: 0,
            total_pages: 0,
        }
    }
}
