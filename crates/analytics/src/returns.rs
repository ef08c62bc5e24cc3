use core_types::{Price, PriceTable};
use serde::Serialize;

/// The per-row return and value series of an equal-weighted portfolio.
///
/// Both vectors share the row indexing of the `PriceTable` they were derived
/// from. They are computed once and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReturnSeries {
    pub daily_returns: Vec<f64>,
    pub daily_values: Vec<f64>,
}

impl ReturnSeries {
    pub fn from_table(table: &PriceTable) -> Self {
        Self {
            daily_returns: calc_daily_returns(table),
            daily_values: calc_daily_values(table),
        }
    }
}

/// Last observed price per asset slot, threaded forward through one pass.
#[derive(Debug, Default)]
struct LastObserved {
    prices: Vec<Option<f64>>,
}

impl LastObserved {
    fn with_slots(slots: usize) -> Self {
        Self {
            prices: vec![None; slots],
        }
    }

    /// Folds one row into the accumulator, returning `(sum of changes, counted assets)`.
    ///
    /// An asset's first observation seeds its base price and is counted with
    /// a zero change. Missing cells are skipped and leave the base untouched.
    fn advance(&mut self, row: &[Price]) -> (f64, usize) {
        let mut total_change = 0.0;
        let mut counted = 0;

        for (slot, price) in row.iter().enumerate() {
            let Some(current) = *price else {
                continue;
            };

            if let Some(prev) = self.prices[slot] {
                total_change += (current - prev) / prev;
            }
            self.prices[slot] = Some(current);
            counted += 1;
        }

        (total_change, counted)
    }
}

/// Equal-weighted mean percent change of every row against the most recent
/// prior observation of each asset.
///
/// A row where nothing was counted yields `0 / 0 = NaN`, which is kept as is.
pub fn calc_daily_returns(table: &PriceTable) -> Vec<f64> {
    let mut last_observed = LastObserved::with_slots(table.asset_count());

    table
        .rows()
        .iter()
        .map(|row| {
            let (total_change, counted) = last_observed.advance(row);
            total_change / counted as f64
        })
        .collect()
}

/// Plain sum of every observed price in a row. Missing prices add nothing.
pub fn calc_daily_values(table: &PriceTable) -> Vec<f64> {
    table
        .rows()
        .iter()
        .map(|row| row.iter().flatten().sum())
        .collect()
}
