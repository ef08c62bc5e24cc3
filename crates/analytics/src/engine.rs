use crate::math::{compound, mean, population_std_dev};
use crate::returns::ReturnSeries;
use core_types::PriceTable;

/// Trading days per year. Also the window the Burke ratio always uses.
pub const TRADING_DAYS: u32 = 252;

/// Annual risk-free rate, taken from the 10 year treasury yield.
pub const DEFAULT_RISK_FREE_RATE: f64 = 0.0426;

/// Computes Sharpe and Burke ratios at historical offsets of a price table.
///
/// The return and value series are derived once in `new` and shared by every
/// ratio evaluation. All results are plain `f64`: insufficient or degenerate
/// history produces NaN or an infinity rather than an error.
#[derive(Debug, Clone)]
pub struct RatioEngine<'a> {
    prices: &'a PriceTable,
    series: ReturnSeries,
    risk_free_rate: f64,
}

impl<'a> RatioEngine<'a> {
    pub fn new(prices: &'a PriceTable) -> Self {
        Self::with_risk_free_rate(prices, DEFAULT_RISK_FREE_RATE)
    }

    pub fn with_risk_free_rate(prices: &'a PriceTable, risk_free_rate: f64) -> Self {
        let series = ReturnSeries::from_table(prices);
        tracing::debug!(
            rows = prices.len(),
            assets = prices.asset_count(),
            "Derived daily return and value series."
        );
        Self {
            prices,
            series,
            risk_free_rate,
        }
    }

    pub fn series(&self) -> &ReturnSeries {
        &self.series
    }

    /// Risk-free return over `scale` trading days.
    pub fn risk_free_for(&self, scale: u32) -> f64 {
        self.risk_free_rate / f64::from(TRADING_DAYS) * f64::from(scale)
    }

    /// Row index `days_in` rows back from the most recent one.
    fn target_index(&self, days_in: usize) -> Option<usize> {
        let target = self
            .prices
            .last_index()
            .and_then(|last| last.checked_sub(days_in));
        if target.is_none() {
            tracing::warn!(
                days_in,
                rows = self.prices.len(),
                "Offset reaches past the start of the price history."
            );
        }
        target
    }

    /// Annualized Sharpe ratio using the daily returns up to `days_in` rows
    /// before the most recent one.
    ///
    /// The period return compounds the mean daily return. The daily standard
    /// deviation is scaled linearly by `scale`, not by its square root.
    pub fn sharpe_ratio(&self, days_in: usize, scale: u32) -> f64 {
        let Some(target) = self.target_index(days_in) else {
            return f64::NAN;
        };

        let relevant = &self.series.daily_returns[..=target];
        let avg_daily = mean(relevant);
        let avg_period = compound(avg_daily, scale);
        let std_period = population_std_dev(relevant) * f64::from(scale);

        let sharpe = (avg_period - self.risk_free_for(scale)) / std_period;
        tracing::debug!(days_in, scale, avg_daily, std_period, sharpe, "Sharpe ratio");
        sharpe
    }

    /// Burke ratio at `days_in` rows before the most recent one.
    ///
    /// The window is always `TRADING_DAYS` long; the `scale` argument is
    /// accepted for symmetry with `sharpe_ratio` but ignored.
    pub fn burke_ratio(&self, days_in: usize, scale: u32) -> f64 {
        if scale != TRADING_DAYS {
            tracing::debug!(
                requested = scale,
                used = TRADING_DAYS,
                "Burke ratio always uses a full trading year."
            );
        }
        let scale = TRADING_DAYS;

        let Some(target) = self.target_index(days_in) else {
            return f64::NAN;
        };

        let period_return = self.period_return(target, scale);
        let excess = period_return - self.risk_free_for(scale);
        let denom = drawdown_root_sum_square(&self.series.daily_values[..=target]);

        let burke = excess / denom;
        tracing::debug!(days_in, period_return, denom, burke, "Burke ratio");
        burke
    }

    /// Portfolio return over the `scale` rows ending at `target`.
    ///
    /// With a full window available this is the equal-weighted return from
    /// the first to the last row of the window. Otherwise the mean daily
    /// return so far is compounded over `scale` days.
    fn period_return(&self, target: usize, scale: u32) -> f64 {
        let window = scale as usize;
        if window > target + 1 {
            return compound(mean(&self.series.daily_returns[..=target]), scale);
        }

        let init = target + 1 - window;
        let (Some(start_row), Some(end_row)) = (self.prices.row(init), self.prices.row(target))
        else {
            return f64::NAN;
        };

        let mut total_change = 0.0;
        let mut counted = 0;
        for (start, end) in start_row.iter().zip(end_row) {
            if let (Some(start), Some(end)) = (start, end) {
                total_change += (end - start) / start;
                counted += 1;
            }
        }

        total_change / counted as f64
    }
}

/// Square root of the summed squared drawdowns from the peak of `values`.
///
/// Zero when every value equals the peak, which makes the Burke ratio
/// infinite or NaN.
pub fn drawdown_root_sum_square(values: &[f64]) -> f64 {
    let peak = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    values
        .iter()
        .map(|v| {
            let drawdown = (v - peak) / peak;
            drawdown * drawdown
        })
        .sum::<f64>()
        .sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::Price;

    fn table(rows: Vec<Vec<Price>>) -> PriceTable {
        PriceTable::from_rows(rows).unwrap()
    }

    /// `days` rows of two assets: a steady riser and one that dips mid-way.
    fn trending_table(days: usize) -> PriceTable {
        let rows = (0..days)
            .map(|i| {
                let t = i as f64;
                let dip = if i % 40 < 20 { 0.0 } else { 15.0 };
                vec![Some(100.0 + t * 0.5), Some(200.0 - dip + t * 0.1)]
            })
            .collect();
        table(rows)
    }

    #[test]
    fn test_risk_free_scaling() {
        let prices = table(vec![vec![Some(1.0)]]);
        let engine = RatioEngine::new(&prices);
        assert!((engine.risk_free_for(252) - 0.0426).abs() < 1e-15);
        assert!((engine.risk_free_for(126) - 0.0213).abs() < 1e-15);
    }

    #[test]
    fn test_single_row_ratios_are_undefined() {
        let prices = table(vec![vec![Some(100.0)]]);
        let engine = RatioEngine::new(&prices);

        assert!(!engine.sharpe_ratio(0, TRADING_DAYS).is_finite());
        assert!(!engine.burke_ratio(0, TRADING_DAYS).is_finite());
    }

    #[test]
    fn test_sharpe_matches_hand_computation() {
        let prices = table(vec![
            vec![Some(100.0), Some(200.0)],
            vec![Some(110.0), Some(190.0)],
            vec![Some(121.0), Some(200.9)],
        ]);
        let engine = RatioEngine::new(&prices);
        let returns = [0.0, 0.025, (0.1 + 10.9 / 190.0) / 2.0];

        let avg = returns.iter().sum::<f64>() / 3.0;
        let var = returns.iter().map(|r| (r - avg).powi(2)).sum::<f64>() / 3.0;
        let expected = ((1.0 + avg).powi(10) - 1.0 - 0.0426 / 252.0 * 10.0) / (var.sqrt() * 10.0);

        let sharpe = engine.sharpe_ratio(0, 10);
        assert!((sharpe - expected).abs() < 1e-9, "{sharpe} vs {expected}");
    }

    #[test]
    fn test_sharpe_drops_most_recent_rows() {
        let prices = table(vec![
            vec![Some(100.0)],
            vec![Some(101.0)],
            vec![Some(99.0)],
            vec![Some(150.0)],
        ]);
        let engine = RatioEngine::new(&prices);

        let truncated = table(vec![vec![Some(100.0)], vec![Some(101.0)], vec![Some(99.0)]]);
        let reference = RatioEngine::new(&truncated);

        assert_eq!(engine.sharpe_ratio(1, 252), reference.sharpe_ratio(0, 252));
    }

    #[test]
    fn test_burke_falls_back_to_compounded_mean() {
        let prices = table(vec![
            vec![Some(100.0), Some(200.0)],
            vec![Some(110.0), Some(190.0)],
            vec![Some(121.0), Some(200.9)],
        ]);
        let engine = RatioEngine::new(&prices);

        let avg: f64 = (0.0 + 0.025 + (0.1 + 10.9 / 190.0) / 2.0) / 3.0;
        let period_return = (1.0 + avg).powi(252) - 1.0;
        let values = [300.0, 300.0, 321.9];
        let peak = 321.9;
        let denom = values
            .iter()
            .map(|v: &f64| ((v - peak) / peak).powi(2))
            .sum::<f64>()
            .sqrt();
        let expected = (period_return - 0.0426) / denom;

        let burke = engine.burke_ratio(0, 252);
        assert!(((burke - expected) / expected).abs() < 1e-9, "{burke} vs {expected}");
    }

    #[test]
    fn test_burke_ignores_requested_scale() {
        let prices = trending_table(300);
        let engine = RatioEngine::new(&prices);
        assert_eq!(engine.burke_ratio(3, 12), engine.burke_ratio(3, 252));
    }

    #[test]
    fn test_burke_uses_window_return_with_full_history() {
        let prices = trending_table(300);
        let engine = RatioEngine::new(&prices);

        let last = 299;
        let init = last - 252 + 1;
        let rows = prices.rows();
        let change = |slot: usize| {
            let end = rows[last][slot].unwrap();
            let start = rows[init][slot].unwrap();
            (end - start) / start
        };
        let period_return = (change(0) + change(1)) / 2.0;
        let denom = drawdown_root_sum_square(&engine.series().daily_values);
        let expected = (period_return - 0.0426) / denom;

        let burke = engine.burke_ratio(0, 252);
        assert!((burke - expected).abs() < 1e-12);
    }

    /// `days` rows of two assets; the second one oscillates so the portfolio
    /// value has drawdowns.
    fn oscillating_table(days: usize) -> Vec<Vec<Price>> {
        (0..days)
            .map(|i| {
                let t = i as f64;
                vec![Some(100.0 + t), Some(50.0 + (t / 7.0).sin() * 5.0)]
            })
            .collect()
    }

    #[test]
    fn test_burke_window_skips_asset_missing_at_window_start() {
        let mut rows = oscillating_table(252);
        rows[0][1] = None;
        let prices = table(rows);
        let engine = RatioEngine::new(&prices);

        // Exactly one year of rows: the window starts at row 0 and only the
        // first asset is observed at both ends.
        let period_return = (351.0 - 100.0) / 100.0;
        let denom = drawdown_root_sum_square(&engine.series().daily_values);
        let expected = (period_return - engine.risk_free_for(TRADING_DAYS)) / denom;

        let burke = engine.burke_ratio(0, TRADING_DAYS);
        assert!(((burke - expected) / expected).abs() < 1e-12, "{burke} vs {expected}");
    }

    #[test]
    fn test_burke_window_without_common_assets_is_nan() {
        let mut rows = oscillating_table(252);
        rows[0] = vec![None, None];
        let prices = table(rows);
        let engine = RatioEngine::new(&prices);

        assert!(engine.burke_ratio(0, TRADING_DAYS).is_nan());
    }

    #[test]
    fn test_burke_one_row_short_of_a_year_compounds_mean() {
        let prices = table(oscillating_table(251));
        let engine = RatioEngine::new(&prices);

        let series = engine.series();
        let period_return = compound(mean(&series.daily_returns), TRADING_DAYS);
        let denom = drawdown_root_sum_square(&series.daily_values);
        let expected = (period_return - engine.risk_free_for(TRADING_DAYS)) / denom;

        let burke = engine.burke_ratio(0, TRADING_DAYS);
        assert!(((burke - expected) / expected).abs() < 1e-12, "{burke} vs {expected}");
    }

    #[test]
    fn test_burke_constant_prices_is_undefined() {
        let prices = table(vec![vec![Some(10.0), Some(20.0)]; 5]);
        let engine = RatioEngine::new(&prices);
        // Zero drawdown denominator with a negative excess return.
        assert_eq!(engine.burke_ratio(0, 252), f64::NEG_INFINITY);
    }

    #[test]
    fn test_offset_past_history_is_nan() {
        let prices = trending_table(10);
        let engine = RatioEngine::new(&prices);

        assert!(engine.sharpe_ratio(10, 252).is_nan());
        assert!(engine.burke_ratio(10, 252).is_nan());
        assert!(engine.sharpe_ratio(8, 252).is_finite());
    }

    #[test]
    fn test_empty_table_is_nan() {
        let prices = table(Vec::new());
        let engine = RatioEngine::new(&prices);
        assert!(engine.sharpe_ratio(0, 252).is_nan());
        assert!(engine.burke_ratio(0, 252).is_nan());
    }

    #[test]
    fn test_drawdown_root_sum_square() {
        let denom = drawdown_root_sum_square(&[100.0, 80.0, 90.0]);
        let expected = (0.2f64 * 0.2 + 0.1 * 0.1).sqrt();
        assert!((denom - expected).abs() < 1e-12);
        assert_eq!(drawdown_root_sum_square(&[42.0]), 0.0);
    }
}
