//! CLI configuration management.
//!
//! Handles loading of `bsprice.toml` with environment variable override
//! support. Every field has a default, so a missing file is not an error.

use std::fmt;
use std::path::Path;

use pricer_core::math::solvers::SolverConfig;
use pricer_models::analytical::{FormulaConvention, PricingConfig};
use serde::{Deserialize, Serialize};

/// Log level used when neither the config file nor `RUST_LOG` sets one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Output format for command results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Implied-volatility solver settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverSettings {
    /// Absolute price tolerance
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// Iteration budget
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
}

fn default_tolerance() -> f64 {
    SolverConfig::<f64>::implied_volatility().tolerance
}

fn default_max_iterations() -> usize {
    SolverConfig::<f64>::implied_volatility().max_iterations
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
            max_iterations: default_max_iterations(),
        }
    }
}

/// bsprice configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Annualised risk-free rate used when `--rate` is not given
    #[serde(default)]
    pub risk_free_rate: f64,

    /// Theta/vega formula convention
    #[serde(default)]
    pub convention: FormulaConvention,

    /// Default output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Annualisation factor for historical volatility
    #[serde(default = "default_periods_per_year")]
    pub periods_per_year: u32,

    /// Implied-volatility solver settings
    #[serde(default)]
    pub solver: SolverSettings,
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_periods_per_year() -> u32 {
    252
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            risk_free_rate: 0.0,
            convention: FormulaConvention::default(),
            format: OutputFormat::default(),
            log_level: default_log_level(),
            periods_per_year: default_periods_per_year(),
            solver: SolverSettings::default(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from `path`, or defaults if the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply `BSPRICE_*` environment variable overrides
    pub fn with_env_override(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`, keyed by environment variable name
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(rate) = lookup("BSPRICE_RATE") {
            self.risk_free_rate = rate
                .trim()
                .parse()
                .map_err(|_| ConfigError::Env(format!("BSPRICE_RATE={:?} is not a number", rate)))?;
        }

        if let Some(convention) = lookup("BSPRICE_CONVENTION") {
            self.convention = convention
                .parse()
                .map_err(|e| ConfigError::Env(format!("BSPRICE_CONVENTION: {}", e)))?;
        }

        if let Some(format) = lookup("BSPRICE_FORMAT") {
            self.format = match format.trim().to_lowercase().as_str() {
                "table" => OutputFormat::Table,
                "json" => OutputFormat::Json,
                other => {
                    return Err(ConfigError::Env(format!(
                        "BSPRICE_FORMAT={:?} (expected table or json)",
                        other
                    )))
                }
            };
        }

        if let Some(log_level) = lookup("BSPRICE_LOG_LEVEL") {
            self.log_level = log_level;
        }

        Ok(self)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if !VALID_LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, VALID_LOG_LEVELS
            ));
        }

        if !self.risk_free_rate.is_finite() {
            errors.push(format!(
                "risk_free_rate must be finite (got {})",
                self.risk_free_rate
            ));
        }

        if self.periods_per_year == 0 {
            errors.push("periods_per_year must be greater than 0".to_string());
        }

        if let Err(e) = self.pricing_config(None).validate() {
            errors.push(e.to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load from `path` (or defaults), apply environment overrides and validate
    pub fn load_with_env_and_validate(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load_or_default(path)?.with_env_override()?;
        config.validate()?;
        Ok(config)
    }

    /// Pricing configuration, with an optional per-command convention
    pub fn pricing_config(&self, convention: Option<FormulaConvention>) -> PricingConfig {
        PricingConfig::default()
            .with_convention(convention.unwrap_or(self.convention))
            .with_solver(SolverConfig {
                tolerance: self.solver.tolerance,
                max_iterations: self.solver.max_iterations,
            })
    }
}

/// Configuration error type
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// IO error reading config file
    Io(String),
    /// Parse error in config file
    Parse(String),
    /// Unusable environment override
    Env(String),
    /// Validation error
    Validation(Vec<String>),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "IO error: {}", msg),
            Self::Parse(msg) => write!(f, "Parse error: {}", msg),
            Self::Env(msg) => write!(f, "Environment override error: {}", msg),
            Self::Validation(errors) => write!(f, "Validation errors: {}", errors.join("; ")),
        }
    }
}

impl std::error::Error for ConfigError {}
