//! Maybel Core - Shared catalog types library.
//!
//! This crate provides the domain types the storefront reads from the
//! remote Maybel catalog API:
//!
//! - categories with parent/child trees
//! - products with multi-currency prices, images, and variants
//! - per-variant stock summaries and availability buckets
//! - pagination metadata and the current exchange rate
//!
//! # Architecture
//!
//! The core crate contains only types and pure derived-state helpers - no
//! I/O, no HTTP clients. Every entity is created and owned by the remote
//! API; this crate never constructs one outside of tests, it only decodes
//! them and derives display values.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
