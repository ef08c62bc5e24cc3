//! # Price History Loader
//!
//! Reads daily closing prices from CSV into a `PriceTable`. The analytics
//! crate never touches files; this crate is the only place prices enter the
//! system.
//!
//! The expected layout is a header row followed by one row per trading day:
//!
//! ```text
//! date,AAPL,MSFT,XOM
//! 2024-01-02,185.64,370.87,
//! 2024-01-03,184.25,370.60,101.3
//! ```
//!
//! The first column is an ISO date. Empty cells and `NaN`/`NA`/`null` mark
//! missing prices.

pub mod csv_loader;
pub mod error;

pub use csv_loader::{load_prices, read_prices};
pub use error::LoaderError;
