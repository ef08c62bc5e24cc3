use analytics::MetricComparison;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{CellAlignment, Table};
use core_types::PriceTable;

const METRIC_NAME: &str = "Burke Ratio";

/// Renders the four results in their fixed order: Burke ratio, Sharpe ratio,
/// the comparison table, then the correlation coefficient.
pub fn render_report(comparison: &MetricComparison, prices: &PriceTable) -> String {
    format!(
        "1. {metric} of the portfolio is: {burke}\n\
         2. Sharpe Ratio of the portfolio is: {sharpe}\n\
         3. Metric comparison is:\n\
         {table}\n\
         4. Correlation Coefficient between {metric} and Sharpe Ratio is: {correlation}\n",
        metric = METRIC_NAME,
        burke = comparison.burke_ratio,
        sharpe = comparison.sharpe_ratio,
        table = comparison_table(comparison, prices),
        correlation = comparison.correlation_coefficient,
    )
}

fn comparison_table(comparison: &MetricComparison, prices: &PriceTable) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Offset", "Date", "Sharpe", "Burke"]);

    for row in &comparison.comparison.rows {
        // The date of the row each offset was evaluated at, if it exists.
        let date = prices
            .last_index()
            .and_then(|last| last.checked_sub(row.offset))
            .and_then(|idx| prices.date(idx))
            .map_or_else(|| "-".to_string(), |d| d.to_string());

        table.add_row(vec![
            row.offset.to_string(),
            date,
            format_ratio(row.sharpe),
            format_ratio(row.burke),
        ]);
    }

    for idx in [0, 2, 3] {
        if let Some(column) = table.column_mut(idx) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }

    table
}

fn format_ratio(value: f64) -> String {
    if value.is_finite() {
        format!("{:.6}", value)
    } else {
        value.to_string()
    }
}
