//! Multi-currency price fields and their display partitions.
//!
//! Every price is an independently server-supplied amount in its own
//! currency or payment channel. No conversion is ever performed; a zero
//! value means the product is not offered through that channel.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Currencies and payment channels the API prices products in.
///
/// The declaration order is the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Currency {
    Usd,
    Cup,
    Eur,
    Mlc,
    Mxn,
    Cad,
    Brl,
    Zelle,
    TransferCup,
    ClassicUsd,
}

impl Currency {
    /// All currencies in display order, USD first.
    pub const ALL: [Self; 10] = [
        Self::Usd,
        Self::Cup,
        Self::Eur,
        Self::Mlc,
        Self::Mxn,
        Self::Cad,
        Self::Brl,
        Self::Zelle,
        Self::TransferCup,
        Self::ClassicUsd,
    ];

    /// Short display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Cup => "CUP",
            Self::Eur => "EUR",
            Self::Mlc => "MLC",
            Self::Mxn => "MXN",
            Self::Cad => "CAD",
            Self::Brl => "BRL",
            Self::Zelle => "Zelle",
            Self::TransferCup => "Transferencia CUP",
            Self::ClassicUsd => "USD Clásico",
        }
    }

    /// Currency symbol prefixed to the amount.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Usd | Self::Zelle | Self::ClassicUsd => "$",
            Self::Cup | Self::TransferCup => "₱",
            Self::Eur => "€",
            Self::Mlc => "MLC",
            Self::Mxn => "MX$",
            Self::Cad => "CA$",
            Self::Brl => "R$",
        }
    }
}

/// The per-currency sale price fields of a product.
///
/// Flattened into the product payload as `sale_price_*` fields; absent
/// fields decode as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceSet {
    #[serde(rename = "sale_price_usd", default)]
    pub usd: Decimal,
    #[serde(rename = "sale_price_cup", default)]
    pub cup: Decimal,
    #[serde(rename = "sale_price_eur", default)]
    pub eur: Decimal,
    #[serde(rename = "sale_price_mlc", default)]
    pub mlc: Decimal,
    #[serde(rename = "sale_price_mxn", default)]
    pub mxn: Decimal,
    #[serde(rename = "sale_price_cad", default)]
    pub cad: Decimal,
    #[serde(rename = "sale_price_brl", default)]
    pub brl: Decimal,
    #[serde(rename = "sale_price_zelle", default)]
    pub zelle: Decimal,
    #[serde(rename = "sale_price_transfer_cup", default)]
    pub transfer_cup: Decimal,
    #[serde(rename = "sale_price_classic_usd", default)]
    pub classic_usd: Decimal,
}

/// A single renderable price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceEntry {
    pub currency: Currency,
    pub amount: Decimal,
}

impl PriceSet {
    /// Amount for one currency.
    #[must_use]
    pub const fn get(&self, currency: Currency) -> Decimal {
        match currency {
            Currency::Usd => self.usd,
            Currency::Cup => self.cup,
            Currency::Eur => self.eur,
            Currency::Mlc => self.mlc,
            Currency::Mxn => self.mxn,
            Currency::Cad => self.cad,
            Currency::Brl => self.brl,
            Currency::Zelle => self.zelle,
            Currency::TransferCup => self.transfer_cup,
            Currency::ClassicUsd => self.classic_usd,
        }
    }

    /// All positive prices in display order. Zero values never render.
    #[must_use]
    pub fn entries(&self) -> Vec<PriceEntry> {
        Currency::ALL
            .into_iter()
            .map(|currency| PriceEntry {
                currency,
                amount: self.get(currency),
            })
            .filter(|entry| entry.amount > Decimal::ZERO)
            .collect()
    }

    /// The primary (USD) price, if positive.
    #[must_use]
    pub fn primary(&self) -> Option<PriceEntry> {
        (self.usd > Decimal::ZERO).then_some(PriceEntry {
            currency: Currency::Usd,
            amount: self.usd,
        })
    }

    /// First positive non-USD price, shown under the primary on cards.
    #[must_use]
    pub fn compact_secondary(&self) -> Option<PriceEntry> {
        self.entries()
            .into_iter()
            .find(|entry| entry.currency != Currency::Usd)
    }

    /// The prominent detail-page prices: USD and CUP when positive.
    #[must_use]
    pub fn main_entries(&self) -> Vec<PriceEntry> {
        self.entries()
            .into_iter()
            .filter(|entry| matches!(entry.currency, Currency::Usd | Currency::Cup))
            .collect()
    }

    /// Positive prices outside USD/CUP, disclosed behind the toggle.
    #[must_use]
    pub fn other_entries(&self) -> Vec<PriceEntry> {
        self.entries()
            .into_iter()
            .filter(|entry| !matches!(entry.currency, Currency::Usd | Currency::Cup))
            .collect()
    }

    /// Whether no channel prices this product.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        Currency::ALL
            .into_iter()
            .all(|currency| self.get(currency) <= Decimal::ZERO)
    }
}

/// Format an amount with two decimals and thousands grouping, `1,234.56`.
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    let value = amount.round_dp(2);
    let raw = format!("{value:.2}");
    let (sign, digits) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw.as_str()),
    };
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, "00"));
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{sign}{grouped}.{frac_part}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        s.parse().expect("valid decimal literal")
    }

    #[test]
    fn zero_valued_currencies_never_render() {
        let prices = PriceSet {
            usd: d("25.5"),
            cup: Decimal::ZERO,
            eur: d("10"),
            ..PriceSet::default()
        };

        let currencies: Vec<Currency> = prices.entries().iter().map(|e| e.currency).collect();
        assert_eq!(currencies, vec![Currency::Usd, Currency::Eur]);
    }

    #[test]
    fn compact_pair_skips_zero_secondary_slot() {
        // cup is the usual secondary, but at zero the next non-zero
        // currency takes the slot.
        let prices = PriceSet {
            usd: d("25.5"),
            cup: Decimal::ZERO,
            eur: d("10"),
            ..PriceSet::default()
        };

        assert_eq!(prices.primary().map(|e| e.currency), Some(Currency::Usd));
        assert_eq!(
            prices.compact_secondary().map(|e| e.currency),
            Some(Currency::Eur)
        );
    }

    #[test]
    fn compact_secondary_prefers_cup_when_present() {
        let prices = PriceSet {
            usd: d("40"),
            cup: d("9600"),
            eur: d("38"),
            ..PriceSet::default()
        };
        assert_eq!(
            prices.compact_secondary().map(|e| e.currency),
            Some(Currency::Cup)
        );
    }

    #[test]
    fn main_and_other_partition_by_prominence() {
        let prices = PriceSet {
            usd: d("100"),
            cup: d("24000"),
            mlc: d("95"),
            zelle: d("98"),
            ..PriceSet::default()
        };

        let main: Vec<Currency> = prices.main_entries().iter().map(|e| e.currency).collect();
        let other: Vec<Currency> = prices.other_entries().iter().map(|e| e.currency).collect();
        assert_eq!(main, vec![Currency::Usd, Currency::Cup]);
        assert_eq!(other, vec![Currency::Mlc, Currency::Zelle]);
    }

    #[test]
    fn no_primary_when_usd_is_zero() {
        let prices = PriceSet {
            cup: d("500"),
            ..PriceSet::default()
        };
        assert!(prices.primary().is_none());
        assert!(!prices.is_empty());
    }

    #[test]
    fn empty_when_all_zero() {
        assert!(PriceSet::default().is_empty());
    }

    #[test]
    fn decodes_flattened_sale_price_fields() {
        let json = r#"{"sale_price_usd": 25.5, "sale_price_transfer_cup": 6500}"#;
        let prices: PriceSet = serde_json::from_str(json).expect("valid price set");
        assert_eq!(prices.usd, d("25.5"));
        assert_eq!(prices.transfer_cup, d("6500"));
        assert_eq!(prices.eur, Decimal::ZERO);
    }

    #[test]
    fn formats_amounts_with_grouping() {
        assert_eq!(format_amount(d("0")), "0.00");
        assert_eq!(format_amount(d("25.5")), "25.50");
        assert_eq!(format_amount(d("1234.567")), "1,234.57");
        assert_eq!(format_amount(d("1000000")), "1,000,000.00");
        assert_eq!(format_amount(d("-9876.5")), "-9,876.50");
    }

    #[test]
    fn currency_labels_match_api_channels() {
        assert_eq!(Currency::TransferCup.label(), "Transferencia CUP");
        assert_eq!(Currency::Mlc.symbol(), "MLC");
        assert_eq!(Currency::Cup.symbol(), "₱");
    }
}
