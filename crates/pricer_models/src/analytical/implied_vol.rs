//! Implied volatility by Newton iteration.
//!
//! The solver inverts the Black-Scholes price for volatility. It backs the
//! self-consistency solve inside [`PricingModel`](super::PricingModel) and
//! can be used on its own with an observed market price.
//!
//! Both conventions start from the Brenner-Subrahmanyam estimate
//! `σ₀ = sqrt(2π / T) · price / S`.
//!
//! - [`FormulaConvention::Textbook`]: vega `S·φ(d₁)·√T`, safeguarded Newton
//!   inside `[vol_lower_bound, vol_upper_bound]`, with the upper bound widened
//!   for targets priced above it.
//! - [`FormulaConvention::Legacy`]: vega `S·Φ(d₁)·√T`, repricing with
//!   `exp(+rT)`, plain Newton steps.

use pricer_core::math::solvers::{NewtonOutcome, NewtonRaphsonSolver};
use tracing::{debug, trace};

use super::black_scholes::BlackScholesParams;
use super::config::{FormulaConvention, PricingConfig};
use super::error::AnalyticalError;
use crate::instruments::{MarketContext, Underlying, VanillaOption};

/// Doublings of `vol_upper_bound` tried before a target is declared unattainable.
const MAX_BRACKET_EXPANSIONS: usize = 16;

/// Result of an implied-volatility solve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ImpliedVolOutcome {
    /// Recovered annualised volatility
    pub volatility: f64,
    /// Newton (or bisection) updates performed
    pub iterations: usize,
    /// Whether the stopping test was met; `false` means a best-effort estimate
    pub converged: bool,
}

/// Brenner-Subrahmanyam starting volatility for a solve.
///
/// # Examples
/// ```
/// use pricer_models::analytical::initial_volatility_guess;
///
/// let guess = initial_volatility_guess(0.7746158260391951, 45.0, 60.0 / 365.0);
/// assert!((guess - 0.10642277845592509).abs() < 1e-12);
/// ```
#[inline]
pub fn initial_volatility_guess(target_price: f64, spot: f64, years: f64) -> f64 {
    (2.0 * std::f64::consts::PI / years).sqrt() * target_price / spot
}

/// Implied-volatility solver.
///
/// # Examples
/// ```
/// use pricer_models::analytical::{ImpliedVolSolver, PricingConfig};
/// use pricer_models::instruments::{MarketContext, OptionType, Underlying, VanillaOption};
///
/// let solver = ImpliedVolSolver::new(PricingConfig::default()).unwrap();
/// let option = VanillaOption::new(100.0, 365.0, OptionType::Call).unwrap();
/// // Only the spot of the underlying is read
/// let underlying = Underlying::new("SPX", 100.0, 0.2).unwrap();
/// let market = MarketContext::new(0.05).unwrap();
///
/// let outcome = solver.solve(12.0, &option, &underlying, &market).unwrap();
/// assert!(outcome.converged);
/// assert!(outcome.volatility > 0.2 && outcome.volatility < 0.3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ImpliedVolSolver {
    config: PricingConfig,
}

impl ImpliedVolSolver {
    /// Creates a solver.
    ///
    /// # Errors
    /// `AnalyticalError::InvalidConfig` if `config` fails validation.
    pub fn new(config: PricingConfig) -> Result<Self, AnalyticalError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Finds the volatility at which `option` is worth `target_price`.
    ///
    /// The volatility carried by `underlying` is ignored.
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidTargetPrice` if the target is not positive and finite
    /// - `AnalyticalError::NumericDegeneracy` if the target carries no
    ///   recoverable time value, vega vanishes or an iterate is not finite
    pub fn solve(
        &self,
        target_price: f64,
        option: &VanillaOption,
        underlying: &Underlying,
        market: &MarketContext,
    ) -> Result<ImpliedVolOutcome, AnalyticalError> {
        let params = BlackScholesParams::from_inputs(option, underlying, market);
        self.solve_params(target_price, &params)
    }

    pub(crate) fn solve_params(
        &self,
        target_price: f64,
        params: &BlackScholesParams,
    ) -> Result<ImpliedVolOutcome, AnalyticalError> {
        if !(target_price.is_finite() && target_price > 0.0) {
            return Err(AnalyticalError::InvalidTargetPrice {
                price: target_price,
            });
        }

        let seed = initial_volatility_guess(target_price, params.spot, params.years);
        trace!(
            convention = %self.config.convention,
            target_price,
            seed,
            "Solving for implied volatility"
        );

        let solver = NewtonRaphsonSolver::new(self.config.solver);
        let outcome = match self.config.convention {
            FormulaConvention::Textbook => self.solve_textbook(&solver, target_price, params, seed)?,
            FormulaConvention::Legacy => solve_legacy(&solver, target_price, params, seed)?,
        };

        if !outcome.converged {
            debug!(
                iterations = outcome.iterations,
                residual = outcome.residual,
                volatility = outcome.root,
                "Implied volatility did not converge, returning best-effort estimate"
            );
        }

        Ok(ImpliedVolOutcome {
            volatility: outcome.root,
            iterations: outcome.iterations,
            converged: outcome.converged,
        })
    }

    fn solve_textbook(
        &self,
        solver: &NewtonRaphsonSolver<f64>,
        target_price: f64,
        params: &BlackScholesParams,
        seed: f64,
    ) -> Result<NewtonOutcome<f64>, AnalyticalError> {
        let lower = self.config.vol_lower_bound;
        let mut upper = self.config.vol_upper_bound;

        // Price is increasing in volatility, so the bounds' prices bracket
        // every attainable target. The upper bound doubles until it clears
        // the target or the price reaches its no-arbitrage ceiling.
        let floor_price = params.with_volatility(lower).price();
        let ceiling = params.price_ceiling();
        let mut cap_price = params.with_volatility(upper).price();
        let mut expansions = 0;
        while cap_price <= target_price
            && cap_price < ceiling
            && expansions < MAX_BRACKET_EXPANSIONS
        {
            upper *= 2.0;
            cap_price = params.with_volatility(upper).price();
            expansions += 1;
        }
        if expansions > 0 {
            trace!(upper, cap_price, expansions, "Widened implied volatility bracket");
        }

        if !(target_price > floor_price && target_price < cap_price) {
            return Err(AnalyticalError::NumericDegeneracy {
                message: format!(
                    "target price {} outside attainable range ({}, {}) for volatility in [{}, {}]",
                    target_price, floor_price, cap_price, lower, upper
                ),
            });
        }

        let outcome = solver.iterate_bracketed(
            |vol| params.with_volatility(vol).price() - target_price,
            |vol| params.with_volatility(vol).vega(),
            seed,
            lower,
            upper,
        )?;
        Ok(outcome)
    }
}

fn solve_legacy(
    solver: &NewtonRaphsonSolver<f64>,
    target_price: f64,
    params: &BlackScholesParams,
    seed: f64,
) -> Result<NewtonOutcome<f64>, AnalyticalError> {
    let outcome = solver.iterate(
        |vol| params.with_volatility(vol).legacy_price() - target_price,
        |vol| params.with_volatility(vol).legacy_vega(),
        seed,
    )?;

    if outcome.root <= 0.0 {
        return Err(AnalyticalError::NumericDegeneracy {
            message: format!("iteration ended at non-positive volatility {}", outcome.root),
        });
    }
    Ok(outcome)
}
