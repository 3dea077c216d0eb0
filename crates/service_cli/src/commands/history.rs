//! Price-history input shared by `stdev` and `hist-vol`.
//!
//! Prices come either inline (`--prices 1,2,3`) or from a CSV file with a
//! header row (`--file prices.csv --column close`), oldest first.

use std::fs::File;
use std::path::{Path, PathBuf};

use clap::Args;
use tracing::debug;

use crate::{CliError, Result};

/// Where to read the price history from
#[derive(Debug, Clone, Args)]
pub struct PriceSource {
    /// Comma-separated prices, oldest first
    #[arg(
        short,
        long,
        value_delimiter = ',',
        required_unless_present = "file",
        conflicts_with = "file"
    )]
    pub prices: Option<Vec<f64>>,

    /// CSV file with a header row
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// CSV column holding the prices
    #[arg(long, default_value = "close")]
    pub column: String,
}

impl PriceSource {
    /// Loads the price series.
    pub fn load(&self) -> Result<Vec<f64>> {
        match (&self.prices, &self.file) {
            (Some(prices), _) => Ok(prices.clone()),
            (None, Some(path)) => read_csv_column(path, &self.column),
            (None, None) => Err(CliError::invalid_argument(
                "either --prices or --file is required",
            )),
        }
    }
}

/// Reads one numeric column from a CSV file with headers.
///
/// The column name is matched case-insensitively.
pub fn read_csv_column(path: &Path, column: &str) -> Result<Vec<f64>> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(File::open(path)?);

    let index = reader
        .headers()?
        .iter()
        .position(|h| h.eq_ignore_ascii_case(column))
        .ok_or_else(|| {
            CliError::invalid_argument(format!(
                "column '{}' not found in {}",
                column,
                path.display()
            ))
        })?;

    let mut prices = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let field = record.get(index).unwrap_or_default();
        let price = field.parse::<f64>().map_err(|_| {
            // +2: one-based, after the header
            CliError::invalid_argument(format!(
                "row {}: '{}' in column '{}' is not a number",
                row + 2,
                field,
                column
            ))
        })?;
        prices.push(price);
    }

    debug!(path = %path.display(), column, count = prices.len(), "Loaded price history");
    Ok(prices)
}
