use crate::correlation::pearson;
use crate::engine::{DEFAULT_RISK_FREE_RATE, RatioEngine, TRADING_DAYS};
use crate::error::AnalyticsError;
use crate::sweep::{ComparisonSeries, SweepRange, compare_over};
use core_types::PriceTable;
use serde::Serialize;

/// Parameters of a full Sharpe vs. Burke comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonParams {
    /// Annual risk-free rate.
    pub risk_free_rate: f64,
    /// Trading periods per year used for the headline ratios and the sweep.
    pub annualization_scale: u32,
    pub sweep: SweepRange,
}

impl Default for ComparisonParams {
    fn default() -> Self {
        Self {
            risk_free_rate: DEFAULT_RISK_FREE_RATE,
            annualization_scale: TRADING_DAYS,
            sweep: SweepRange::default(),
        }
    }
}

/// The outcome of comparing the Burke ratio with the Sharpe ratio on one
/// price history.
///
/// Every field is computed once in `MetricComparison::new` and never changes
/// afterwards. Undefined values are NaN or infinite, and serialize to `null`
/// in JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricComparison {
    /// Burke ratio at the most recent row.
    pub burke_ratio: f64,
    /// Sharpe ratio at the most recent row.
    pub sharpe_ratio: f64,
    pub comparison: ComparisonSeries,
    /// Pearson correlation between the Sharpe (x) and Burke (y) columns.
    pub correlation_coefficient: f64,
}

impl MetricComparison {
    pub fn new(prices: &PriceTable, params: &ComparisonParams) -> Result<Self, AnalyticsError> {
        let engine = RatioEngine::with_risk_free_rate(prices, params.risk_free_rate);
        let scale = params.annualization_scale;

        let burke_ratio = engine.burke_ratio(0, scale);
        let sharpe_ratio = engine.sharpe_ratio(0, scale);
        let comparison = compare_over(&engine, &params.sweep, scale)?;

        let sharpe_column = comparison.sharpe_column();
        let burke_column = comparison.burke_column();
        tracing::debug!(sharpe = ?sharpe_column, burke = ?burke_column, "Correlating ratio columns.");
        let correlation_coefficient = pearson(&sharpe_column, &burke_column)?;

        tracing::info!(
            burke_ratio,
            sharpe_ratio,
            correlation_coefficient,
            "Metric comparison complete."
        );

        Ok(Self {
            burke_ratio,
            sharpe_ratio,
            comparison,
            correlation_coefficient,
        })
    }
}
