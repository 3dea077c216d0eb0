//! Demo command: values the reference call and put.
//!
//! Inputs are fixed at strike 50, spot 45, rate 10%, volatility 30% and
//! 60 days to expiry, the sample whose d1, d2, price and delta are the
//! published reference values.

use clap::Args;
use pricer_models::analytical::{FormulaConvention, PricingConfig, PricingModel};
use pricer_models::instruments::{MarketContext, OptionType, Underlying, VanillaOption};

use super::price::render_model;
use crate::config::{CliConfig, OutputFormat};
use crate::Result;

const STRIKE: f64 = 50.0;
const SPOT: f64 = 45.0;
const RATE: f64 = 0.10;
const VOLATILITY: f64 = 0.30;
const DAYS: f64 = 60.0;

/// Arguments of `bsprice demo`
#[derive(Debug, Clone, Args)]
pub struct DemoArgs {
    /// Formula convention (textbook, legacy)
    #[arg(long)]
    pub convention: Option<FormulaConvention>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Values the reference call and put.
pub fn reference_models(config: &PricingConfig) -> Result<Vec<PricingModel>> {
    let underlying = Underlying::new("DEMO", SPOT, VOLATILITY)?;
    let market = MarketContext::new(RATE)?;

    [OptionType::Call, OptionType::Put]
        .into_iter()
        .map(|option_type| -> Result<PricingModel> {
            let option = VanillaOption::new(STRIKE, DAYS, option_type)?;
            Ok(PricingModel::with_config(
                option,
                underlying.clone(),
                market,
                config,
            )?)
        })
        .collect()
}

/// Runs the demonstration.
pub fn run(args: &DemoArgs, config: &CliConfig) -> Result<()> {
    let models = reference_models(&config.pricing_config(args.convention))?;

    if args.format.unwrap_or(config.format) == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&models)?);
        return Ok(());
    }

    println!("========================================");
    println!("Black-Scholes Reference Demo");
    println!("========================================");
    println!(
        "K = {}, S = {}, r = {}, σ = {}, {} days",
        STRIKE, SPOT, RATE, VOLATILITY, DAYS
    );
    println!();

    for model in &models {
        println!("[Demo] {}", model.option().option_type());
        println!("{}", render_model(model, OutputFormat::Table)?);
    }

    println!("========================================");
    println!("Demo completed successfully!");
    println!("========================================");

    Ok(())
}
