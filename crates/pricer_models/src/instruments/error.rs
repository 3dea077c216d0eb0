//! Instrument error types.
//!
//! This module provides structured error handling for option, underlying
//! and market-context construction.

use chrono::NaiveDate;
use pricer_core::types::PricingError;
use thiserror::Error;

/// Instrument-related errors.
///
/// Raised by the validating constructors before any pricing quantity is
/// derived, so a rejected input never yields a partially built model.
///
/// # Variants
/// - `InvalidStrike`: Strike price is non-positive or not finite
/// - `InvalidExpiry`: Days to expiry is non-positive or not finite
/// - `InvalidExpiryDate`: Expiry date is not after the valuation date
/// - `InvalidSpot`: Spot price is non-positive or not finite
/// - `InvalidVolatility`: Volatility is non-positive or not finite
/// - `InvalidRate`: Risk-free rate is not finite
/// - `UnknownOptionType`: Option type string is neither call nor put
///
/// # Examples
/// ```
/// use pricer_models::instruments::InstrumentError;
///
/// let err = InstrumentError::InvalidStrike { strike: -100.0 };
/// assert!(format!("{}", err).contains("-100"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InstrumentError {
    /// Invalid strike price.
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid days to expiry.
    #[error("Invalid expiry: {days} days")]
    InvalidExpiry {
        /// The invalid number of calendar days
        days: f64,
    },

    /// Expiry date on or before the valuation date.
    #[error("Invalid expiry date: {expiry} is not after valuation date {valuation}")]
    InvalidExpiryDate {
        /// Option expiry date
        expiry: NaiveDate,
        /// Valuation date
        valuation: NaiveDate,
    },

    /// Invalid spot price.
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot value
        spot: f64,
    },

    /// Invalid volatility.
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Invalid risk-free rate.
    #[error("Invalid risk-free rate: r = {rate}")]
    InvalidRate {
        /// The invalid rate value
        rate: f64,
    },

    /// Unrecognised option type.
    #[error("Unknown option type: {value:?} (expected CALL or PUT)")]
    UnknownOptionType {
        /// The unrecognised input
        value: String,
    },
}

impl From<InstrumentError> for PricingError {
    fn from(err: InstrumentError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}

/// Returns `true` for finite, strictly positive values.
#[inline]
pub(crate) fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
