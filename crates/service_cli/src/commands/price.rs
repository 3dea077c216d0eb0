//! Price command implementation
//!
//! Values a single European option with the Black-Scholes model.

use chrono::{Local, NaiveDate};
use clap::Args;
use pricer_models::analytical::{FormulaConvention, PricingModel};
use pricer_models::instruments::{MarketContext, OptionType, Underlying, VanillaOption};
use tracing::info;

use super::render_table;
use crate::config::{CliConfig, OutputFormat};
use crate::{CliError, Result};

/// Arguments of `bsprice price`
#[derive(Debug, Clone, Args)]
pub struct PriceArgs {
    /// Strike price
    #[arg(short = 'k', long)]
    pub strike: f64,

    /// Spot price of the underlying
    #[arg(short, long)]
    pub spot: f64,

    /// Annualised volatility (0.30 = 30%)
    #[arg(long)]
    pub volatility: f64,

    /// Calendar days to expiry
    #[arg(
        short,
        long,
        required_unless_present = "expiry",
        conflicts_with = "expiry"
    )]
    pub days: Option<f64>,

    /// Expiry date (YYYY-MM-DD)
    #[arg(short, long)]
    pub expiry: Option<NaiveDate>,

    /// Valuation date for --expiry (YYYY-MM-DD, default today)
    #[arg(long, requires = "expiry")]
    pub valuation_date: Option<NaiveDate>,

    /// Option type (call, put)
    #[arg(short = 't', long = "type", default_value = "call")]
    pub option_type: OptionType,

    /// Risk-free rate, overriding the configured one
    #[arg(short, long, allow_hyphen_values = true)]
    pub rate: Option<f64>,

    /// Underlying symbol (informational)
    #[arg(long, default_value = "UNDERLYING")]
    pub symbol: String,

    /// Formula convention (textbook, legacy)
    #[arg(long)]
    pub convention: Option<FormulaConvention>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Run the price command
pub fn run(args: &PriceArgs, config: &CliConfig) -> Result<()> {
    let model = build_model(args, config)?;
    info!(
        symbol = %args.symbol,
        option_type = %args.option_type,
        "Pricing complete"
    );

    println!("{}", render_model(&model, args.format.unwrap_or(config.format))?);
    Ok(())
}

/// Validates the arguments and values the option.
pub fn build_model(args: &PriceArgs, config: &CliConfig) -> Result<PricingModel> {
    let option = match (args.days, args.expiry) {
        (Some(days), _) => VanillaOption::new(args.strike, days, args.option_type)?,
        (None, Some(expiry)) => {
            let valuation = args
                .valuation_date
                .unwrap_or_else(|| Local::now().date_naive());
            VanillaOption::from_expiry_date(args.strike, expiry, valuation, args.option_type)?
        }
        (None, None) => {
            return Err(CliError::invalid_argument(
                "either --days or --expiry is required",
            ))
        }
    };
    let underlying = Underlying::new(args.symbol.as_str(), args.spot, args.volatility)?;
    let market = MarketContext::new(args.rate.unwrap_or(config.risk_free_rate))?;

    let pricing_config = config.pricing_config(args.convention);
    Ok(PricingModel::with_config(
        option,
        underlying,
        market,
        &pricing_config,
    )?)
}

/// Formats a valued model.
pub fn render_model(model: &PricingModel, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(model)?),
        OutputFormat::Table => Ok(render_table(("Metric", "Value"), &model_rows(model))),
    }
}

fn model_rows(model: &PricingModel) -> Vec<(String, String)> {
    let option = model.option();
    let underlying = model.underlying();

    let implied_vol = if model.implied_volatility_converged() {
        format!("{:.6}", model.implied_volatility())
    } else {
        format!("{:.6} (not converged)", model.implied_volatility())
    };

    vec![
        ("Symbol".to_string(), underlying.symbol().to_string()),
        ("Type".to_string(), option.option_type().to_string()),
        ("Strike".to_string(), format!("{:.4}", option.strike())),
        ("Spot".to_string(), format!("{:.4}", underlying.spot())),
        ("Volatility".to_string(), format!("{:.4}", underlying.volatility())),
        (
            "Risk-free rate".to_string(),
            format!("{:.4}", model.market().risk_free_rate()),
        ),
        ("Days to expiry".to_string(), format!("{}", option.days_to_expiry())),
        (
            "Years to expiry".to_string(),
            format!("{:.6}", model.time_to_expiry_years()),
        ),
        ("Convention".to_string(), model.convention().to_string()),
        ("d1".to_string(), format!("{:.6}", model.d1())),
        ("d2".to_string(), format!("{:.6}", model.d2())),
        (
            "Theoretical price".to_string(),
            format!("{:.6}", model.theoretical_price()),
        ),
        ("Delta".to_string(), format!("{:.6}", model.delta())),
        ("Theta (per day)".to_string(), format!("{:.6}", model.theta())),
        ("Implied volatility".to_string(), implied_vol),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use clap::Parser;

    fn reference_args() -> PriceArgs {
        PriceArgs {
            strike: 50.0,
            spot: 45.0,
            volatility: 0.30,
            days: Some(60.0),
            expiry: None,
            valuation_date: None,
            option_type: OptionType::Call,
            rate: Some(0.10),
            symbol: "XYZ".to_string(),
            convention: None,
            format: None,
        }
    }

    #[test]
    fn test_build_reference_model() {
        let model = build_model(&reference_args(), &CliConfig::default()).unwrap();
        assert_relative_eq!(model.theoretical_price(), 0.7746158260391951, epsilon = 1e-10);
        assert_eq!(model.convention(), FormulaConvention::Textbook);
    }

    #[test]
    fn test_rate_falls_back_to_config() {
        let args = PriceArgs {
            rate: None,
            ..reference_args()
        };
        let config = CliConfig {
            risk_free_rate: 0.10,
            ..CliConfig::default()
        };
        let model = build_model(&args, &config).unwrap();
        assert_eq!(model.market().risk_free_rate(), 0.10);
    }

    #[test]
    fn test_expiry_date_path() {
        let args = PriceArgs {
            days: None,
            expiry: NaiveDate::from_ymd_opt(2024, 3, 1),
            valuation_date: NaiveDate::from_ymd_opt(2024, 1, 1),
            ..reference_args()
        };
        let model = build_model(&args, &CliConfig::default()).unwrap();
        assert_eq!(model.option().days_to_expiry(), 60.0);
    }

    #[test]
    fn test_invalid_input_is_pricing_error() {
        let args = PriceArgs {
            strike: 0.0,
            ..reference_args()
        };
        match build_model(&args, &CliConfig::default()) {
            Err(CliError::Pricing(e)) => assert!(e.is_invalid_input()),
            other => panic!("Expected pricing error, got {:?}", other),
        }
    }

    #[test]
    fn test_render_table() {
        let model = build_model(&reference_args(), &CliConfig::default()).unwrap();
        let table = render_model(&model, OutputFormat::Table).unwrap();
        assert!(table.contains("Theoretical price"));
        assert!(table.contains("0.774616"));
        assert!(table.contains("-0.670255"));
        assert!(table.contains("CALL"));
    }

    #[test]
    fn test_render_json() {
        let model = build_model(&reference_args(), &CliConfig::default()).unwrap();
        let json = render_model(&model, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_relative_eq!(
            value["delta"].as_f64().unwrap(),
            0.2513477418687736,
            epsilon = 1e-10
        );
        assert_eq!(value["underlying"]["symbol"], "XYZ");
    }

    #[test]
    fn test_cli_parsing() {
        let cli = crate::Cli::try_parse_from([
            "bsprice", "price", "--strike", "50", "--spot", "45", "--volatility", "0.3",
            "--days", "60", "--type", "PUT", "--rate", "-0.01", "--convention", "legacy",
            "--format", "json",
        ])
        .unwrap();

        match cli.command {
            crate::Commands::Price(args) => {
                assert_eq!(args.option_type, OptionType::Put);
                assert_eq!(args.rate, Some(-0.01));
                assert_eq!(args.convention, Some(FormulaConvention::Legacy));
                assert_eq!(args.format, Some(OutputFormat::Json));
            }
            _ => panic!("Expected price command"),
        }
    }

    #[test]
    fn test_cli_requires_days_or_expiry() {
        let result = crate::Cli::try_parse_from([
            "bsprice", "price", "--strike", "50", "--spot", "45", "--volatility", "0.3",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_type() {
        let result = crate::Cli::try_parse_from([
            "bsprice", "price", "--strike", "50", "--spot", "45", "--volatility", "0.3",
            "--days", "60", "--type", "straddle",
        ]);
        assert!(result.is_err());
    }
}
