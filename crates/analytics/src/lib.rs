//! # Sharpe vs. Burke Analytics
//!
//! This crate computes the Sharpe ratio and the Burke ratio of an
//! equal-weighted portfolio and measures how closely the two agree across a
//! sweep of historical offsets.
//!
//! ## Architectural Principles
//!
//! - **Pure logic:** No I/O. It depends only on `core-types` for the
//!   `PriceTable` input.
//! - **Leaf-to-root pipeline:** `returns` → `engine` → `sweep` →
//!   `correlation`, assembled by `report::MetricComparison`.
//! - **IEEE results:** Numerically undefined ratios are NaN or infinite
//!   `f64` values, never errors. `AnalyticsError` covers structural
//!   problems only (an empty sweep, mismatched series).
//!
//! ## Public API
//!
//! - `RatioEngine`: Sharpe and Burke ratios at any offset.
//! - `MetricComparison`: the computed-once comparison of both metrics.
//! - `ReturnSeries`: daily portfolio returns and values.
//! - `AnalyticsError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod correlation;
pub mod engine;
pub mod error;
pub mod math;
pub mod report;
pub mod returns;
pub mod sweep;

// Re-export the key components to create a clean, public-facing API.
pub use correlation::pearson;
pub use engine::{DEFAULT_RISK_FREE_RATE, RatioEngine, TRADING_DAYS};
pub use error::AnalyticsError;
pub use report::{ComparisonParams, MetricComparison};
pub use returns::ReturnSeries;
pub use sweep::{ComparisonRow, ComparisonSeries, SweepRange, compare_over};
