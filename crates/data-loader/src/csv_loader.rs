use crate::error::LoaderError;
use chrono::NaiveDate;
use core_types::{Price, PriceTable};
use std::fs::File;
use std::io::Read;
use std::path::Path;

const DATE_FORMAT: &str = "%Y-%m-%d";
const MISSING_MARKERS: [&str; 4] = ["nan", "na", "null", "none"];

/// Loads a price history from a CSV file.
pub fn load_prices<P: AsRef<Path>>(path: P) -> Result<PriceTable, LoaderError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoaderError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let table = read_prices(file)?;
    tracing::info!(
        path = %path.display(),
        rows = table.len(),
        assets = table.asset_count(),
        "Loaded price history."
    );
    Ok(table)
}

/// Reads a price history from any CSV source.
///
/// Rows are sorted by date (stable, so duplicate dates keep file order) since
/// the return calculation relies on chronological order.
pub fn read_prices<R: Read>(reader: R) -> Result<PriceTable, LoaderError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let assets: Vec<String> = reader.headers()?.iter().skip(1).map(str::to_string).collect();
    if assets.is_empty() {
        return Err(LoaderError::EmptyHeader);
    }

    let mut dated_rows: Vec<(NaiveDate, Vec<Price>)> = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map_or(0, |p| p.line());

        let raw_date = record.get(0).unwrap_or_default();
        let date = NaiveDate::parse_from_str(raw_date, DATE_FORMAT).map_err(|_| {
            LoaderError::InvalidDate {
                line,
                value: raw_date.to_string(),
            }
        })?;

        let prices = record
            .iter()
            .skip(1)
            .zip(&assets)
            .map(|(cell, asset)| {
                parse_price(cell).ok_or_else(|| LoaderError::InvalidPrice {
                    line,
                    asset: asset.clone(),
                    value: cell.to_string(),
                })
            })
            .collect::<Result<Vec<Price>, _>>()?;

        dated_rows.push((date, prices));
    }

    dated_rows.sort_by_key(|(date, _)| *date);
    let (dates, rows): (Vec<NaiveDate>, Vec<Vec<Price>>) = dated_rows.into_iter().unzip();

    tracing::debug!(rows = rows.len(), "Parsed price rows.");
    Ok(PriceTable::new(assets, dates, rows)?)
}

/// `Some(None)` for a missing marker, `Some(Some(price))` for a number, `None`
/// when the cell is neither.
fn parse_price(cell: &str) -> Option<Price> {
    if cell.is_empty() || MISSING_MARKERS.iter().any(|m| cell.eq_ignore_ascii_case(m)) {
        return Some(None);
    }
    let value: f64 = cell.parse().ok()?;
    Some(if value.is_nan() { None } else { Some(value) })
}
