//! Domain types mirroring the Maybel catalog API.

mod category;
mod exchange;
mod page;
mod price;
mod product;
mod stock;

pub use category::Category;
pub use exchange::ExchangeRate;
pub use page::PageMeta;
pub use price::{Currency, PriceEntry, PriceSet, format_amount};
pub use product::{Product, ProductImage, Variant};
pub use stock::{Availability, LOW_STOCK_THRESHOLD, StockSummary};
