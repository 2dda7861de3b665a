//! Stock summaries and availability buckets.

use serde::{Deserialize, Serialize};

/// Quantity at or below which stock counts as "low".
pub const LOW_STOCK_THRESHOLD: i64 = 5;

/// Stock counts for a variant or an aggregate.
///
/// The API maintains `available_quantity = total_quantity -
/// reserved_quantity`; the invariant is assumed, not validated here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockSummary {
    /// Units on hand.
    pub total_quantity: i64,
    /// Units held for pending orders.
    pub reserved_quantity: i64,
    /// Units that can still be sold.
    pub available_quantity: i64,
}

/// Three-tier availability bucket for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    /// Comfortably above the low-stock threshold.
    InStock,
    /// Positive but at or below the threshold.
    LowStock,
    /// Nothing available.
    OutOfStock,
}

impl Availability {
    /// Bucket a quantity into an availability tier.
    #[must_use]
    pub const fn from_quantity(quantity: i64) -> Self {
        if quantity <= 0 {
            Self::OutOfStock
        } else if quantity <= LOW_STOCK_THRESHOLD {
            Self::LowStock
        } else {
            Self::InStock
        }
    }

    /// Whether any units are available.
    #[must_use]
    pub const fn is_available(self) -> bool {
        !matches!(self, Self::OutOfStock)
    }
}
