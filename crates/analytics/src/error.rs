use core_types::CoreError;
use thiserror::Error;

/// Structural errors of the analytics pipeline.
///
/// Numerically undefined results (empty windows, zero volatility, zero
/// drawdown) are never errors: they surface as NaN or infinite `f64` values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyticsError {
    #[error("Invalid sweep range: {0}")]
    InvalidSweep(String),

    #[error("Series length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("Core data error: {0}")]
    Core(#[from] CoreError),
}
