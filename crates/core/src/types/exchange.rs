//! Current exchange rate, for display only.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The current rate between two named currencies.
///
/// Shown informationally in the storefront chrome; never used to derive
/// prices, which are each supplied by the server in their own currency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeRate {
    /// Rate record ID.
    pub id: String,
    /// Units of `target_currency` per unit of `source_currency`.
    pub rate: Decimal,
    /// Currency converted from, e.g. `USD`.
    pub source_currency: String,
    /// Currency converted to, e.g. `CUP`.
    pub target_currency: String,
    /// When the rate was recorded.
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_rate_payload() {
        let json = r#"{
            "id": "r1",
            "rate": 245.0,
            "source_currency": "USD",
            "target_currency": "CUP",
            "created_at": "2026-07-30T12:00:00Z"
        }"#;
        let rate: ExchangeRate = serde_json::from_str(json).expect("valid rate");
        assert_eq!(rate.source_currency, "USD");
        assert_eq!(rate.rate.to_string(), "245.0");
    }
}
