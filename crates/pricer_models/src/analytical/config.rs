//! Pricing configuration.

use std::fmt;
use std::str::FromStr;

use pricer_core::math::solvers::SolverConfig;

use super::error::AnalyticalError;

/// Which form of the theta and vega formulas the model uses.
///
/// - `Textbook`: theta and the solver's vega use the normal density φ(d1),
///   theta is type-aware, the solver discounts with `exp(-rT)` and keeps a
///   volatility bracket.
/// - `Legacy`: reproduces historical output. Theta and vega use the normal
///   CDF Φ(d1), one theta formula serves calls and puts, and the solver
///   reprices with `exp(+rT)` using unsafeguarded Newton steps.
///
/// Theoretical price, delta, d1 and d2 are identical under both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FormulaConvention {
    /// Standard Black-Scholes Greeks
    #[default]
    Textbook,
    /// Historical CDF-based theta/vega and inverted solver discounting
    Legacy,
}

impl FromStr for FormulaConvention {
    type Err = AnalyticalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "textbook" => Ok(FormulaConvention::Textbook),
            "legacy" => Ok(FormulaConvention::Legacy),
            other => Err(AnalyticalError::InvalidConfig {
                message: format!("unknown formula convention {:?}", other),
            }),
        }
    }
}

impl fmt::Display for FormulaConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormulaConvention::Textbook => write!(f, "textbook"),
            FormulaConvention::Legacy => write!(f, "legacy"),
        }
    }
}

/// Settings for [`PricingModel`](super::PricingModel) construction.
///
/// # Examples
/// ```
/// use pricer_models::analytical::{FormulaConvention, PricingConfig};
///
/// let config = PricingConfig::default().with_convention(FormulaConvention::Legacy);
/// assert_eq!(config.convention, FormulaConvention::Legacy);
/// assert_eq!(config.solver.max_iterations, 100);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingConfig {
    /// Theta/vega formula form
    pub convention: FormulaConvention,
    /// Implied-volatility iteration settings (default 1e-25, 100 iterations)
    pub solver: SolverConfig<f64>,
    /// Lowest volatility the textbook solver searches
    pub vol_lower_bound: f64,
    /// Highest volatility the textbook solver searches
    pub vol_upper_bound: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            convention: FormulaConvention::default(),
            solver: SolverConfig::implied_volatility(),
            vol_lower_bound: 1e-4,
            vol_upper_bound: 5.0,
        }
    }
}

impl PricingConfig {
    /// Returns a copy using `convention`.
    pub fn with_convention(mut self, convention: FormulaConvention) -> Self {
        self.convention = convention;
        self
    }

    /// Returns a copy using `solver` for the implied-volatility iteration.
    pub fn with_solver(mut self, solver: SolverConfig<f64>) -> Self {
        self.solver = solver;
        self
    }

    /// Checks solver settings and the volatility search bounds.
    ///
    /// # Errors
    /// `AnalyticalError::InvalidConfig` describing the first problem found.
    pub fn validate(&self) -> Result<(), AnalyticalError> {
        if !self.solver.is_valid() {
            return Err(AnalyticalError::InvalidConfig {
                message: format!(
                    "solver tolerance must be positive and max_iterations > 0 (got {:?})",
                    self.solver
                ),
            });
        }
        if !(self.vol_lower_bound > 0.0
            && self.vol_upper_bound.is_finite()
            && self.vol_lower_bound < self.vol_upper_bound)
        {
            return Err(AnalyticalError::InvalidConfig {
                message: format!(
                    "volatility bounds must satisfy 0 < lower < upper (got [{}, {}])",
                    self.vol_lower_bound, self.vol_upper_bound
                ),
            });
        }
        Ok(())
    }
}
