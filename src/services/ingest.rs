//! CSV statement ingestion
//!
//! Reads bank-statement style CSV files into raw [`SpendingRecord`]s. The
//! header row must contain `Category` and `Amount` columns (any order, any
//! case, extra columns ignored); row-level problems are left to the
//! aggregation step's lenient-parse policy.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{FincastError, FincastResult};
use crate::models::SpendingRecord;

/// Header of the column holding category labels
const CATEGORY_HEADER: &str = "Category";

/// Header of the column holding amounts
const AMOUNT_HEADER: &str = "Amount";

/// Read spending records from a CSV file on disk
pub fn read_records_from_path(path: &Path) -> FincastResult<Vec<SpendingRecord>> {
    let file = File::open(path)
        .map_err(|e| FincastError::Import(format!("Failed to open {}: {}", path.display(), e)))?;
    read_records(file)
}

/// Read spending records from any CSV source
///
/// Rows shorter than the required columns are skipped. Field values are
/// trimmed but otherwise kept verbatim — amounts stay strings so the
/// aggregator can apply its silent-skip policy to the unparsable ones.
pub fn read_records<R: Read>(reader: R) -> FincastResult<Vec<SpendingRecord>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| FincastError::Import(format!("Failed to read CSV header: {}", e)))?
        .clone();

    let category_column = find_column(&headers, CATEGORY_HEADER)?;
    let amount_column = find_column(&headers, AMOUNT_HEADER)?;

    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row = match row {
            Ok(row) => row,
            // A row the csv parser itself rejects is just another malformed row.
            Err(_) => continue,
        };
        let (Some(category), Some(amount)) = (row.get(category_column), row.get(amount_column))
        else {
            continue;
        };
        records.push(SpendingRecord::new(category.trim(), amount.trim()));
    }

    Ok(records)
}

fn find_column(headers: &csv::StringRecord, name: &str) -> FincastResult<usize> {
    headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(name))
        .ok_or_else(|| FincastError::Import(format!("CSV file has no '{}' column", name)))
}
