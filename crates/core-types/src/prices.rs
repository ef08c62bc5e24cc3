use crate::error::CoreError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single closing price. `None` marks a missing observation.
pub type Price = Option<f64>;

/// An immutable, chronologically ordered table of closing prices.
///
/// Rows are trading days (oldest first) and columns are asset slots. Asset
/// identity is positional: the names are labels only and never influence
/// any calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceTable {
    assets: Vec<String>,
    /// Either empty, or exactly one date per row.
    dates: Vec<NaiveDate>,
    rows: Vec<Vec<Price>>,
}

impl PriceTable {
    /// Builds a dated price table.
    ///
    /// Every row must hold exactly one cell per asset and `dates` must be
    /// empty or line up with `rows`. Callers are responsible for supplying
    /// the rows in ascending date order.
    pub fn new(
        assets: Vec<String>,
        dates: Vec<NaiveDate>,
        rows: Vec<Vec<Price>>,
    ) -> Result<Self, CoreError> {
        if !dates.is_empty() && dates.len() != rows.len() {
            return Err(CoreError::InvalidInput(
                "dates".to_string(),
                format!("expected {} dates, got {}", rows.len(), dates.len()),
            ));
        }

        if let Some((idx, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != assets.len())
        {
            return Err(CoreError::InvalidInput(
                format!("row {}", idx),
                format!("expected {} prices, got {}", assets.len(), row.len()),
            ));
        }

        Ok(Self { assets, dates, rows })
    }

    /// Builds an undated table with generated asset labels (`asset_0`, `asset_1`, ...).
    ///
    /// The width is taken from the first row.
    pub fn from_rows(rows: Vec<Vec<Price>>) -> Result<Self, CoreError> {
        let width = rows.first().map_or(0, Vec::len);
        let assets = (0..width).map(|i| format!("asset_{}", i)).collect();
        Self::new(assets, Vec::new(), rows)
    }

    pub fn assets(&self) -> &[String] {
        &self.assets
    }

    pub fn rows(&self) -> &[Vec<Price>] {
        &self.rows
    }

    pub fn row(&self, idx: usize) -> Option<&[Price]> {
        self.rows.get(idx).map(Vec::as_slice)
    }

    /// The date label of a row, if the table is dated.
    pub fn date(&self, idx: usize) -> Option<NaiveDate> {
        self.dates.get(idx).copied()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn asset_count(&self) -> usize {
        self.assets.len()
    }

    /// Index of the most recent row, or `None` for an empty table.
    pub fn last_index(&self) -> Option<usize> {
        self.rows.len().checked_sub(1)
    }
}
