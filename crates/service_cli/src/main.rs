//! bsprice - Command Line Black-Scholes Pricing
//!
//! Operational entry point for the pricer crates.
//!
//! # Commands
//!
//! - `bsprice price --strike K --spot S --volatility V --days D` - Value one option
//! - `bsprice stdev --days N --prices 1,2,3` - Standard deviation of recent prices
//! - `bsprice hist-vol --days N --file prices.csv` - Annualised historical volatility
//! - `bsprice demo` - Value the reference call and put
//! - `bsprice check` - Show the effective configuration
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate only parses arguments,
//! loads configuration and formats results; all numerics live in
//! `pricer_core` and `pricer_models`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

use config::{CliConfig, DEFAULT_LOG_LEVEL};
pub use error::{CliError, Result};

/// Black-Scholes option pricing CLI
#[derive(Parser)]
#[command(name = "bsprice")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "bsprice.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a European option and report its metrics
    Price(commands::price::PriceArgs),

    /// Population standard deviation of the most recent prices
    Stdev(commands::stdev::StdevArgs),

    /// Annualised historical volatility from log returns
    HistVol(commands::hist_vol::HistVolArgs),

    /// Value the reference call and put (K=50, S=45, r=10%, σ=30%, 60 days)
    Demo(commands::demo::DemoArgs),

    /// Check the effective configuration
    Check,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match CliConfig::load_with_env_and_validate(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            init_tracing(DEFAULT_LOG_LEVEL, cli.verbose);
            error!("{}", CliError::from(e));
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.log_level, cli.verbose);
    debug!(config = %cli.config.display(), "Configuration loaded");

    let result = match &cli.command {
        Commands::Price(args) => commands::price::run(args, &config),
        Commands::Stdev(args) => commands::stdev::run(args, &config),
        Commands::HistVol(args) => commands::hist_vol::run(args, &config),
        Commands::Demo(args) => commands::demo::run(args, &config),
        Commands::Check => commands::check::run(&cli.config, &config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Installs the global subscriber, logging to stderr so stdout carries
/// only command output.
///
/// `RUST_LOG` takes precedence over the configured level; `--verbose`
/// forces `debug`.
fn init_tracing(level: &str, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    };

    // Ignored if a subscriber is already installed
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}
