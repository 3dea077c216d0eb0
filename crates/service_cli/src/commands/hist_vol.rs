//! Hist-vol command implementation
//!
//! Annualised volatility of log returns over the most recent `--days`
//! returns, an estimate to compare against a quoted volatility.

use clap::Args;
use pricer_core::math::statistics::historical_volatility;
use serde::Serialize;
use tracing::info;

use super::history::PriceSource;
use super::render_table;
use crate::config::{CliConfig, OutputFormat};
use crate::Result;

/// Arguments of `bsprice hist-vol`
#[derive(Debug, Clone, Args)]
pub struct HistVolArgs {
    /// Number of most recent returns in the window
    #[arg(short, long)]
    pub days: usize,

    #[command(flatten)]
    pub source: PriceSource,

    /// Annualisation factor, overriding the configured one
    #[arg(long)]
    pub periods_per_year: Option<u32>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Historical volatility estimate
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HistVolReport {
    /// Window length in returns
    pub days: usize,
    /// Annualisation factor applied
    pub periods_per_year: u32,
    /// Annualised volatility
    pub volatility: f64,
}

/// Run the hist-vol command
pub fn run(args: &HistVolArgs, config: &CliConfig) -> Result<()> {
    let prices = args.source.load()?;
    let periods_per_year = args.periods_per_year.unwrap_or(config.periods_per_year);
    let report = compute(args.days, &prices, periods_per_year)?;
    info!(days = report.days, periods_per_year, "Historical volatility computed");

    let output = match args.format.unwrap_or(config.format) {
        OutputFormat::Json => serde_json::to_string_pretty(&report)?,
        OutputFormat::Table => render_table(
            ("Statistic", "Value"),
            &[
                ("Window (returns)".to_string(), report.days.to_string()),
                (
                    "Periods per year".to_string(),
                    report.periods_per_year.to_string(),
                ),
                (
                    "Annualised volatility".to_string(),
                    format!("{:.6}", report.volatility),
                ),
            ],
        ),
    };
    println!("{}", output);
    Ok(())
}

/// Computes the report for `prices`.
pub fn compute(days: usize, prices: &[f64], periods_per_year: u32) -> Result<HistVolReport> {
    Ok(HistVolReport {
        days,
        periods_per_year,
        volatility: historical_volatility(days, prices, periods_per_year)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;
    use approx::assert_relative_eq;
    use pricer_core::types::StatisticsError;

    #[test]
    fn test_alternating_returns() {
        // Returns alternate ±ln(1.1), so the population deviation is ln(1.1)
        let prices = [100.0, 110.0, 100.0, 110.0, 100.0];
        let report = compute(4, &prices, 252).unwrap();
        assert_relative_eq!(
            report.volatility,
            1.1_f64.ln() * 252.0_f64.sqrt(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_rejects_non_positive_price() {
        let result = compute(2, &[100.0, 0.0, 101.0], 252);
        assert!(matches!(
            result,
            Err(CliError::Statistics(StatisticsError::NonPositivePrice { .. }))
        ));
    }

    #[test]
    fn test_window_counts_returns_not_prices() {
        // Five prices give four returns
        let prices = [100.0, 101.0, 102.0, 101.0, 103.0];
        assert!(compute(4, &prices, 252).is_ok());
        assert!(compute(5, &prices, 252).is_err());
    }
}
