//! Underlying asset state.

use super::error::{is_positive, InstrumentError};

/// Underlying asset: symbol, spot price and annualised volatility.
///
/// The symbol is informational only and takes no part in pricing.
///
/// # Examples
/// ```
/// use pricer_models::instruments::Underlying;
///
/// let underlying = Underlying::new("SPY", 45.0, 0.30).unwrap();
/// assert_eq!(underlying.symbol(), "SPY");
/// assert_eq!(underlying.spot(), 45.0);
///
/// assert!(Underlying::new("SPY", 45.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "UnderlyingRaw"))]
pub struct Underlying {
    symbol: String,
    spot: f64,
    volatility: f64,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct UnderlyingRaw {
    symbol: String,
    spot: f64,
    volatility: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<UnderlyingRaw> for Underlying {
    type Error = InstrumentError;

    fn try_from(raw: UnderlyingRaw) -> Result<Self, Self::Error> {
        Self::new(raw.symbol, raw.spot, raw.volatility)
    }
}

impl Underlying {
    /// Creates a validated underlying.
    ///
    /// # Arguments
    /// * `symbol` - Identifier (informational)
    /// * `spot` - Spot price (must be positive)
    /// * `volatility` - Annualised volatility, e.g. 0.13 for 13% (must be positive)
    ///
    /// # Errors
    /// - `InstrumentError::InvalidSpot`
    /// - `InstrumentError::InvalidVolatility`
    pub fn new(
        symbol: impl Into<String>,
        spot: f64,
        volatility: f64,
    ) -> Result<Self, InstrumentError> {
        if !is_positive(spot) {
            return Err(InstrumentError::InvalidSpot { spot });
        }
        if !is_positive(volatility) {
            return Err(InstrumentError::InvalidVolatility { volatility });
        }

        Ok(Self {
            symbol: symbol.into(),
            spot,
            volatility,
        })
    }

    /// Returns the symbol.
    #[inline]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the annualised volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let u = Underlying::new(String::from("AAPL"), 150.0, 0.25).unwrap();
        assert_eq!(u.symbol(), "AAPL");
        assert_eq!(u.spot(), 150.0);
        assert_eq!(u.volatility(), 0.25);
    }

    #[test]
    fn test_empty_symbol_allowed() {
        assert!(Underlying::new("", 1.0, 0.1).is_ok());
    }

    #[test]
    fn test_invalid_spot() {
        assert_eq!(
            Underlying::new("X", 0.0, 0.2),
            Err(InstrumentError::InvalidSpot { spot: 0.0 })
        );
        assert!(Underlying::new("X", -10.0, 0.2).is_err());
    }

    #[test]
    fn test_invalid_volatility() {
        assert_eq!(
            Underlying::new("X", 100.0, -0.2),
            Err(InstrumentError::InvalidVolatility { volatility: -0.2 })
        );
        assert!(Underlying::new("X", 100.0, f64::NAN).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_validates() {
        let u: Underlying =
            serde_json::from_str(r#"{"symbol": "XYZ", "spot": 45.0, "volatility": 0.3}"#).unwrap();
        assert_eq!(u, Underlying::new("XYZ", 45.0, 0.3).unwrap());

        assert!(serde_json::from_str::<Underlying>(
            r#"{"symbol": "XYZ", "spot": -1.0, "volatility": 0.3}"#
        )
        .is_err());
        assert!(serde_json::from_str::<Underlying>(
            r#"{"symbol": "XYZ", "spot": 45.0, "volatility": 0.0}"#
        )
        .is_err());
    }
}
