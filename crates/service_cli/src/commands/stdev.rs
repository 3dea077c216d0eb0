//! Stdev command implementation
//!
//! Population standard deviation of the most recent `--days` prices.

use clap::Args;
use pricer_core::math::statistics::standard_deviation;
use serde::Serialize;
use tracing::info;

use super::history::PriceSource;
use super::render_table;
use crate::config::{CliConfig, OutputFormat};
use crate::Result;

/// Arguments of `bsprice stdev`
#[derive(Debug, Clone, Args)]
pub struct StdevArgs {
    /// Number of most recent prices in the window
    #[arg(short, long)]
    pub days: usize,

    #[command(flatten)]
    pub source: PriceSource,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Window statistic
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StdevReport {
    /// Window length
    pub days: usize,
    /// Points available in the input
    pub available: usize,
    /// Population standard deviation of the window
    pub standard_deviation: f64,
}

/// Run the stdev command
pub fn run(args: &StdevArgs, config: &CliConfig) -> Result<()> {
    let prices = args.source.load()?;
    let report = compute(args.days, &prices)?;
    info!(days = report.days, available = report.available, "Standard deviation computed");

    let output = match args.format.unwrap_or(config.format) {
        OutputFormat::Json => serde_json::to_string_pretty(&report)?,
        OutputFormat::Table => render_table(
            ("Statistic", "Value"),
            &[
                ("Window (points)".to_string(), report.days.to_string()),
                ("Available points".to_string(), report.available.to_string()),
                (
                    "Standard deviation".to_string(),
                    format!("{:.6}", report.standard_deviation),
                ),
            ],
        ),
    };
    println!("{}", output);
    Ok(())
}

/// Computes the report for `prices`.
pub fn compute(days: usize, prices: &[f64]) -> Result<StdevReport> {
    Ok(StdevReport {
        days,
        available: prices.len(),
        standard_deviation: standard_deviation(days, prices)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;
    use approx::assert_relative_eq;
    use clap::Parser;
    use pricer_core::types::StatisticsError;

    #[test]
    fn test_compute_last_three() {
        let report = compute(3, &[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(report.available, 5);
        assert_relative_eq!(report.standard_deviation, 0.816496580927726, epsilon = 1e-12);
    }

    #[test]
    fn test_window_too_long() {
        match compute(10, &[1.0, 2.0, 3.0, 4.0, 5.0]) {
            Err(CliError::Statistics(StatisticsError::WindowOutOfRange { days, available })) => {
                assert_eq!(days, 10);
                assert_eq!(available, 5);
            }
            other => panic!("Expected WindowOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_parsing_inline_prices() {
        let cli = crate::Cli::try_parse_from(["bsprice", "stdev", "--days", "3", "--prices", "1,2,3,4,5"])
            .unwrap();
        match cli.command {
            crate::Commands::Stdev(args) => {
                assert_eq!(args.days, 3);
                assert_eq!(args.source.prices, Some(vec![1.0, 2.0, 3.0, 4.0, 5.0]));
            }
            _ => panic!("Expected stdev command"),
        }
    }

    #[test]
    fn test_cli_prices_and_file_conflict() {
        let result = crate::Cli::try_parse_from([
            "bsprice", "stdev", "--days", "3", "--prices", "1,2,3", "--file", "p.csv",
        ]);
        assert!(result.is_err());

        let result = crate::Cli::try_parse_from(["bsprice", "stdev", "--days", "3"]);
        assert!(result.is_err());
    }
}
