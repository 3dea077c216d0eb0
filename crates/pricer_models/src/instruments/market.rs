//! Market context shared by every option on a valuation.

use super::error::InstrumentError;

/// Market parameters that are not specific to an option or underlying.
///
/// The risk-free rate is annualised and continuously compounded; zero and
/// negative rates are accepted.
///
/// # Examples
/// ```
/// use pricer_models::instruments::MarketContext;
///
/// let market = MarketContext::new(-0.005).unwrap();
/// assert_eq!(market.risk_free_rate(), -0.005);
/// assert_eq!(MarketContext::default().risk_free_rate(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "MarketContextRaw"))]
pub struct MarketContext {
    risk_free_rate: f64,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct MarketContextRaw {
    risk_free_rate: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<MarketContextRaw> for MarketContext {
    type Error = InstrumentError;

    fn try_from(raw: MarketContextRaw) -> Result<Self, Self::Error> {
        Self::new(raw.risk_free_rate)
    }
}

impl MarketContext {
    /// Creates a market context.
    ///
    /// # Errors
    /// `InstrumentError::InvalidRate` if the rate is NaN or infinite.
    pub fn new(risk_free_rate: f64) -> Result<Self, InstrumentError> {
        if !risk_free_rate.is_finite() {
            return Err(InstrumentError::InvalidRate {
                rate: risk_free_rate,
            });
        }
        Ok(Self { risk_free_rate })
    }

    /// Returns the annualised risk-free rate.
    #[inline]
    pub fn risk_free_rate(&self) -> f64 {
        self.risk_free_rate
    }

    /// Discount factor `exp(-r·t)` for a horizon of `years`.
    #[inline]
    pub fn discount_factor(&self, years: f64) -> f64 {
        (-self.risk_free_rate * years).exp()
    }
}
