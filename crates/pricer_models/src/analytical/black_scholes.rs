//! Black-Scholes pricing model for European options.
//!
//! [`PricingModel`] is a single-shot valuation: it validates its inputs,
//! derives every metric once and exposes them through accessors.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//! - T = days to expiry / 365
//!
//! Metrics are derived in the order d₁ → d₂ → {delta, price} → implied
//! volatility → theta.

use pricer_core::types::PricingError;
use tracing::debug;

use super::config::{FormulaConvention, PricingConfig};
use super::distributions::{norm_cdf, norm_pdf};
use super::error::AnalyticalError;
use super::implied_vol::ImpliedVolSolver;
use crate::instruments::{MarketContext, OptionType, Underlying, VanillaOption, DAYS_PER_YEAR};

/// Scalar inputs of the closed-form formulas.
///
/// Shared by the model and the implied-volatility solver, which re-evaluates
/// the formulas at trial volatilities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct BlackScholesParams {
    pub(crate) spot: f64,
    pub(crate) strike: f64,
    pub(crate) rate: f64,
    pub(crate) volatility: f64,
    pub(crate) years: f64,
    pub(crate) option_type: OptionType,
}

impl BlackScholesParams {
    pub(crate) fn from_inputs(
        option: &VanillaOption,
        underlying: &Underlying,
        market: &MarketContext,
    ) -> Self {
        Self {
            spot: underlying.spot(),
            strike: option.strike(),
            rate: market.risk_free_rate(),
            volatility: underlying.volatility(),
            years: option.time_to_expiry_years(),
            option_type: option.option_type(),
        }
    }

    /// Same inputs with a trial volatility.
    #[inline]
    pub(crate) fn with_volatility(self, volatility: f64) -> Self {
        Self { volatility, ..self }
    }

    #[inline]
    fn sqrt_years(&self) -> f64 {
        self.years.sqrt()
    }

    #[inline]
    fn discount_factor(&self) -> f64 {
        (-self.rate * self.years).exp()
    }

    /// Returns `(d1, d2)`.
    #[inline]
    pub(crate) fn d1_d2(&self) -> (f64, f64) {
        let vol_sqrt_t = self.volatility * self.sqrt_years();
        let d1 = ((self.spot / self.strike).ln()
            + (self.rate + 0.5 * self.volatility * self.volatility) * self.years)
            / vol_sqrt_t;
        (d1, d1 - vol_sqrt_t)
    }

    pub(crate) fn price_from(&self, d1: f64, d2: f64) -> f64 {
        let df = self.discount_factor();
        match self.option_type {
            OptionType::Call => self.spot * norm_cdf(d1) - self.strike * df * norm_cdf(d2),
            OptionType::Put => self.strike * df * norm_cdf(-d2) - self.spot * norm_cdf(-d1),
        }
    }

    /// Theoretical price at the current volatility.
    pub(crate) fn price(&self) -> f64 {
        let (d1, d2) = self.d1_d2();
        self.price_from(d1, d2)
    }

    pub(crate) fn delta_from(&self, d1: f64) -> f64 {
        match self.option_type {
            OptionType::Call => norm_cdf(d1),
            OptionType::Put => norm_cdf(d1) - 1.0,
        }
    }

    /// Daily theta under `convention`.
    pub(crate) fn theta_from(&self, convention: FormulaConvention, d1: f64, d2: f64) -> f64 {
        let carry = self.rate * self.strike * self.discount_factor();
        let decay_scale = self.spot * self.volatility / (2.0 * self.sqrt_years());

        let annual = match convention {
            FormulaConvention::Textbook => {
                let decay = decay_scale * norm_pdf(d1);
                match self.option_type {
                    OptionType::Call => -decay - carry * norm_cdf(d2),
                    OptionType::Put => -decay + carry * norm_cdf(-d2),
                }
            }
            FormulaConvention::Legacy => -(decay_scale * norm_cdf(d1) - carry * norm_cdf(d2)),
        };

        annual / DAYS_PER_YEAR
    }

    /// Supremum of the price over all volatilities: the spot for a call,
    /// the discounted strike for a put.
    pub(crate) fn price_ceiling(&self) -> f64 {
        if self.option_type.is_call() {
            self.spot
        } else {
            self.strike * self.discount_factor()
        }
    }

    /// Vega `S·φ(d1)·√T`.
    pub(crate) fn vega(&self) -> f64 {
        let (d1, _) = self.d1_d2();
        self.spot * norm_pdf(d1) * self.sqrt_years()
    }

    /// Historical vega form `S·Φ(d1)·√T`.
    pub(crate) fn legacy_vega(&self) -> f64 {
        let (d1, _) = self.d1_d2();
        self.spot * norm_cdf(d1) * self.sqrt_years()
    }

    /// Historical solver repricing, compounding the strike with `exp(+rT)`.
    pub(crate) fn legacy_price(&self) -> f64 {
        let (d1, d2) = self.d1_d2();
        let cp = self.option_type.sign();
        let growth = (self.rate * self.years).exp();
        cp * self.spot * norm_cdf(cp * d1) - cp * self.strike * growth * norm_cdf(cp * d2)
    }
}

/// Black-Scholes valuation of one European option.
///
/// Every field is computed inside the constructor and never changes
/// afterwards; accessors return stored values.
///
/// # Examples
/// ```
/// use pricer_models::analytical::PricingModel;
/// use pricer_models::instruments::{MarketContext, OptionType, Underlying, VanillaOption};
///
/// let option = VanillaOption::new(50.0, 60.0, OptionType::Call).unwrap();
/// let underlying = Underlying::new("XYZ", 45.0, 0.30).unwrap();
/// let market = MarketContext::new(0.10).unwrap();
///
/// let model = PricingModel::new(option, underlying, market).unwrap();
/// assert!((model.theoretical_price() - 0.774615826).abs() < 1e-8);
/// assert!(model.delta() > 0.0 && model.delta() < 1.0);
/// assert!((model.implied_volatility() - 0.30).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PricingModel {
    option: VanillaOption,
    underlying: Underlying,
    market: MarketContext,
    convention: FormulaConvention,
    time_to_expiry_years: f64,
    d1: f64,
    d2: f64,
    delta: f64,
    theoretical_price: f64,
    implied_volatility: f64,
    implied_volatility_converged: bool,
    theta: f64,
}

impl PricingModel {
    /// Values `option` with the default [`PricingConfig`].
    ///
    /// # Errors
    /// - `PricingError::NumericDegeneracy` if the implied-volatility solve
    ///   cannot proceed (zero vega, no time value, non-finite iterate)
    pub fn new(
        option: VanillaOption,
        underlying: Underlying,
        market: MarketContext,
    ) -> Result<Self, PricingError> {
        Self::with_config(option, underlying, market, &PricingConfig::default())
    }

    /// Values `option` under an explicit configuration.
    ///
    /// # Errors
    /// - `PricingError::InvalidInput` if `config` fails validation
    /// - `PricingError::NumericDegeneracy` as for [`PricingModel::new`]
    pub fn with_config(
        option: VanillaOption,
        underlying: Underlying,
        market: MarketContext,
        config: &PricingConfig,
    ) -> Result<Self, PricingError> {
        let solver = ImpliedVolSolver::new(*config)?;
        let params = BlackScholesParams::from_inputs(&option, &underlying, &market);

        let (d1, d2) = params.d1_d2();
        let delta = params.delta_from(d1);
        let theoretical_price = params.price_from(d1, d2);

        if !(theoretical_price > 0.0 && theoretical_price.is_finite()) {
            return Err(AnalyticalError::NumericDegeneracy {
                message: format!(
                    "theoretical price {} leaves no value to invert for implied volatility",
                    theoretical_price
                ),
            }
            .into());
        }

        let outcome = solver.solve_params(theoretical_price, &params)?;
        let theta = params.theta_from(config.convention, d1, d2);

        debug!(
            option_type = %option.option_type(),
            strike = option.strike(),
            spot = underlying.spot(),
            theoretical_price,
            implied_volatility = outcome.volatility,
            "Priced option"
        );

        Ok(Self {
            time_to_expiry_years: params.years,
            option,
            underlying,
            market,
            convention: config.convention,
            d1,
            d2,
            delta,
            theoretical_price,
            implied_volatility: outcome.volatility,
            implied_volatility_converged: outcome.converged,
            theta,
        })
    }

    /// Builds and values an option from raw scalars.
    ///
    /// `option_type` must spell call or put (see [`OptionType`]).
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::PricingModel;
    ///
    /// let model = PricingModel::from_raw(50.0, 60.0, "PUT", "XYZ", 45.0, 0.30, 0.10).unwrap();
    /// assert!(model.delta() < 0.0);
    ///
    /// let err = PricingModel::from_raw(50.0, 60.0, "STRADDLE", "XYZ", 45.0, 0.30, 0.10).unwrap_err();
    /// assert!(err.is_invalid_input());
    /// ```
    ///
    /// # Errors
    /// - `PricingError::InvalidInput` for any rejected input
    /// - `PricingError::NumericDegeneracy` as for [`PricingModel::new`]
    pub fn from_raw(
        strike: f64,
        days_to_expiry: f64,
        option_type: &str,
        symbol: &str,
        spot: f64,
        volatility: f64,
        risk_free_rate: f64,
    ) -> Result<Self, PricingError> {
        let option_type: OptionType = option_type.parse()?;
        let option = VanillaOption::new(strike, days_to_expiry, option_type)?;
        let underlying = Underlying::new(symbol, spot, volatility)?;
        let market = MarketContext::new(risk_free_rate)?;
        Self::new(option, underlying, market)
    }

    /// Returns the option.
    pub fn option(&self) -> &VanillaOption {
        &self.option
    }

    /// Returns the underlying.
    pub fn underlying(&self) -> &Underlying {
        &self.underlying
    }

    /// Returns the market context.
    pub fn market(&self) -> &MarketContext {
        &self.market
    }

    /// Returns the formula convention used for theta and the solver.
    pub fn convention(&self) -> FormulaConvention {
        self.convention
    }

    /// Time to expiry in years (`days / 365`).
    #[inline]
    pub fn time_to_expiry_years(&self) -> f64 {
        self.time_to_expiry_years
    }

    /// d₁
    #[inline]
    pub fn d1(&self) -> f64 {
        self.d1
    }

    /// d₂ = d₁ - σ√T
    #[inline]
    pub fn d2(&self) -> f64 {
        self.d2
    }

    /// Delta: N(d₁) for calls, N(d₁) - 1 for puts.
    #[inline]
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Closed-form Black-Scholes price.
    #[inline]
    pub fn theoretical_price(&self) -> f64 {
        self.theoretical_price
    }

    /// Volatility recovered from the theoretical price.
    #[inline]
    pub fn implied_volatility(&self) -> f64 {
        self.implied_volatility
    }

    /// Whether the implied-volatility iteration met its stopping test
    /// within the iteration budget.
    #[inline]
    pub fn implied_volatility_converged(&self) -> bool {
        self.implied_volatility_converged
    }

    /// Time decay per calendar day.
    #[inline]
    pub fn theta(&self) -> f64 {
        self.theta
    }
}
