use crate::engine::RatioEngine;
use crate::error::AnalyticsError;
use serde::{Deserialize, Serialize};

/// An arithmetic sequence of offsets, `start` inclusive and `end` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepRange {
    pub start: usize,
    pub end: usize,
    pub step: usize,
}

impl Default for SweepRange {
    fn default() -> Self {
        Self {
            start: 1,
            end: 800,
            step: 15,
        }
    }
}

impl SweepRange {
    pub fn new(start: usize, end: usize, step: usize) -> Result<Self, AnalyticsError> {
        let range = Self { start, end, step };
        range.validate()?;
        Ok(range)
    }

    pub fn validate(&self) -> Result<(), AnalyticsError> {
        if self.step == 0 {
            return Err(AnalyticsError::InvalidSweep("step must be positive".to_string()));
        }
        if self.start >= self.end {
            return Err(AnalyticsError::InvalidSweep(format!(
                "start ({}) must be below end ({})",
                self.start, self.end
            )));
        }
        Ok(())
    }

    pub fn offsets(&self) -> impl Iterator<Item = usize> {
        (self.start..self.end).step_by(self.step.max(1))
    }

    pub fn len(&self) -> usize {
        self.offsets().count()
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Both ratios evaluated at one historical offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub offset: usize,
    pub sharpe: f64,
    pub burke: f64,
}

/// Sharpe and Burke ratios side by side, in sweep order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ComparisonSeries {
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonSeries {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn offsets(&self) -> Vec<usize> {
        self.rows.iter().map(|r| r.offset).collect()
    }

    pub fn sharpe_column(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.sharpe).collect()
    }

    pub fn burke_column(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.burke).collect()
    }
}

/// Re-evaluates both ratios at every offset of `range` with the same engine.
pub fn compare_over(
    engine: &RatioEngine<'_>,
    range: &SweepRange,
    scale: u32,
) -> Result<ComparisonSeries, AnalyticsError> {
    range.validate()?;

    let rows: Vec<ComparisonRow> = range
        .offsets()
        .map(|offset| ComparisonRow {
            offset,
            sharpe: engine.sharpe_ratio(offset, scale),
            burke: engine.burke_ratio(offset, scale),
        })
        .collect();

    tracing::info!(
        entries = rows.len(),
        first = range.start,
        step = range.step,
        "Compared Sharpe and Burke ratios across the sweep."
    );

    Ok(ComparisonSeries { rows })
}
