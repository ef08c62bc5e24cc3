//! Statistical helpers shared by the ratio calculations.
//!
//! These follow IEEE semantics on purpose: an empty slice gives `0 / 0 = NaN`
//! instead of an `Option`, so undefined inputs flow through to the ratios.

/// Arithmetic mean. NaN for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    let sum: f64 = values.iter().sum();
    sum / values.len() as f64
}

/// Population standard deviation (divides by `n`, not `n - 1`).
pub fn population_std_dev(values: &[f64]) -> f64 {
    let avg = mean(values);
    let variance_sum: f64 = values.iter().map(|v| (v - avg) * (v - avg)).sum();
    (variance_sum / values.len() as f64).sqrt()
}

/// Compounds an average per-day return over `periods` days: `(1 + r)^n - 1`.
pub fn compound(daily_return: f64, periods: u32) -> f64 {
    (1.0 + daily_return).powf(f64::from(periods)) - 1.0
}
