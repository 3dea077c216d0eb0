//! Error types for the bsprice CLI.

use pricer_core::types::{PricingError, StatisticsError};
use pricer_models::instruments::InstrumentError;
use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Model construction or valuation error
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    /// Price-history statistic error
    #[error("Statistics error: {0}")]
    Statistics(#[from] StatisticsError),

    /// Malformed CSV input
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML output error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::ser::Error),

    /// JSON output error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input file does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Argument rejected after parsing
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<InstrumentError> for CliError {
    fn from(err: InstrumentError) -> Self {
        Self::Pricing(err.into())
    }
}

impl CliError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
