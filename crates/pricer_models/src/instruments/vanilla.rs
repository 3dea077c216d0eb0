//! European vanilla option definition.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use super::error::{is_positive, InstrumentError};

/// Calendar days per year used to convert days to expiry into years.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Call or put.
///
/// Parsing is strict: only recognised spellings succeed, anything else is
/// an [`InstrumentError::UnknownOptionType`].
///
/// # Examples
/// ```
/// use pricer_models::instruments::OptionType;
///
/// assert_eq!("CALL".parse::<OptionType>().unwrap(), OptionType::Call);
/// assert_eq!("p".parse::<OptionType>().unwrap(), OptionType::Put);
/// assert!("straddle".parse::<OptionType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// Right to buy at the strike
    Call,
    /// Right to sell at the strike
    Put,
}

impl OptionType {
    /// `+1` for calls, `-1` for puts.
    #[inline]
    pub fn sign(&self) -> f64 {
        match self {
            OptionType::Call => 1.0,
            OptionType::Put => -1.0,
        }
    }

    /// Returns whether this is a call.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }
}

impl FromStr for OptionType {
    type Err = InstrumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            _ => Err(InstrumentError::UnknownOptionType {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "CALL"),
            OptionType::Put => write!(f, "PUT"),
        }
    }
}

/// European vanilla option.
///
/// Immutable once constructed; the constructor rejects non-positive or
/// non-finite strike and expiry. Deserialization goes through the same
/// checks.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{OptionType, VanillaOption};
///
/// let option = VanillaOption::new(50.0, 60.0, OptionType::Call).unwrap();
/// assert_eq!(option.strike(), 50.0);
/// assert!((option.time_to_expiry_years() - 60.0 / 365.0).abs() < 1e-15);
///
/// assert!(VanillaOption::new(0.0, 60.0, OptionType::Call).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "VanillaOptionRaw"))]
pub struct VanillaOption {
    strike: f64,
    days_to_expiry: f64,
    option_type: OptionType,
}

/// Unvalidated wire form of [`VanillaOption`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct VanillaOptionRaw {
    strike: f64,
    days_to_expiry: f64,
    option_type: OptionType,
}

#[cfg(feature = "serde")]
impl TryFrom<VanillaOptionRaw> for VanillaOption {
    type Error = InstrumentError;

    fn try_from(raw: VanillaOptionRaw) -> Result<Self, Self::Error> {
        Self::new(raw.strike, raw.days_to_expiry, raw.option_type)
    }
}

impl VanillaOption {
    /// Creates a validated option.
    ///
    /// # Arguments
    /// * `strike` - Strike price (must be positive)
    /// * `days_to_expiry` - Calendar days to expiry (must be positive)
    /// * `option_type` - Call or put
    ///
    /// # Errors
    /// - `InstrumentError::InvalidStrike`
    /// - `InstrumentError::InvalidExpiry`
    pub fn new(
        strike: f64,
        days_to_expiry: f64,
        option_type: OptionType,
    ) -> Result<Self, InstrumentError> {
        if !is_positive(strike) {
            return Err(InstrumentError::InvalidStrike { strike });
        }
        if !is_positive(days_to_expiry) {
            return Err(InstrumentError::InvalidExpiry {
                days: days_to_expiry,
            });
        }

        Ok(Self {
            strike,
            days_to_expiry,
            option_type,
        })
    }

    /// Creates an option expiring on `expiry`, valued on `valuation`.
    ///
    /// Days to expiry is the calendar-day difference between the two dates.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use pricer_models::instruments::{OptionType, VanillaOption};
    ///
    /// let valuation = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    /// let expiry = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    /// let option = VanillaOption::from_expiry_date(100.0, expiry, valuation, OptionType::Put).unwrap();
    /// assert_eq!(option.days_to_expiry(), 60.0);
    /// ```
    ///
    /// # Errors
    /// - `InstrumentError::InvalidExpiryDate` if `expiry <= valuation`
    /// - `InstrumentError::InvalidStrike`
    pub fn from_expiry_date(
        strike: f64,
        expiry: NaiveDate,
        valuation: NaiveDate,
        option_type: OptionType,
    ) -> Result<Self, InstrumentError> {
        let days = (expiry - valuation).num_days();
        if days <= 0 {
            return Err(InstrumentError::InvalidExpiryDate { expiry, valuation });
        }
        Self::new(strike, days as f64, option_type)
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the calendar days to expiry.
    #[inline]
    pub fn days_to_expiry(&self) -> f64 {
        self.days_to_expiry
    }

    /// Returns the option type.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Time to expiry in years (`days / 365`).
    #[inline]
    pub fn time_to_expiry_years(&self) -> f64 {
        self.days_to_expiry / DAYS_PER_YEAR
    }
}
