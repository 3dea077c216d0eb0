//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors from pricing operations
//! - `SolverError`: Errors from root-finding solvers
//! - `StatisticsError`: Errors from price-history statistics

use std::fmt;
use thiserror::Error;

/// Categorised pricing errors.
///
/// Provides structured error handling for pricing operations with
/// descriptive context for each failure mode.
///
/// # Variants
/// - `InvalidInput`: Invalid option, underlying or market parameters
/// - `NumericDegeneracy`: A computation hit a zero divisor or produced a non-finite value
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("Negative spot price".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: Negative spot price");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Invalid input data or parameters
    InvalidInput(String),

    /// Division by zero or non-finite intermediate during computation
    NumericDegeneracy(String),
}

impl PricingError {
    /// Returns whether this error was caused by invalid caller input.
    #[inline]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, PricingError::InvalidInput(_))
    }

    /// Returns whether this error was caused by a numerically degenerate computation.
    #[inline]
    pub fn is_numeric_degeneracy(&self) -> bool {
        matches!(self, PricingError::NumericDegeneracy(_))
    }
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            PricingError::NumericDegeneracy(msg) => {
                write!(f, "Numeric degeneracy: {}", msg)
            }
        }
    }
}

impl std::error::Error for PricingError {}

/// Root-finding solver errors.
///
/// # Examples
/// ```
/// use pricer_core::types::SolverError;
///
/// let err = SolverError::NoBracket { a: 0.0, b: 1.0 };
/// assert!(format!("{}", err).contains("same sign"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverError {
    /// Derivative near zero (division by zero risk in Newton-Raphson).
    #[error("Derivative near zero at x = {x}")]
    DerivativeNearZero {
        /// The x value where derivative was near zero
        x: f64,
    },

    /// No valid bracket (function values at endpoints have same sign).
    #[error("No bracket: f({a}) and f({b}) have same sign")]
    NoBracket {
        /// Left bracket endpoint
        a: f64,
        /// Right bracket endpoint
        b: f64,
    },

    /// Numerical instability during computation.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),
}

impl From<SolverError> for PricingError {
    fn from(err: SolverError) -> Self {
        PricingError::NumericDegeneracy(err.to_string())
    }
}

/// Price-history statistics errors.
///
/// # Examples
/// ```
/// use pricer_core::types::StatisticsError;
///
/// let err = StatisticsError::WindowOutOfRange { days: 10, available: 5 };
/// assert_eq!(
///     format!("{}", err),
///     "Window of 10 points out of range for 5 available data points"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatisticsError {
    /// Window is empty or longer than the available history.
    #[error("Window of {days} points out of range for {available} available data points")]
    WindowOutOfRange {
        /// Requested window length
        days: usize,
        /// Number of data points supplied
        available: usize,
    },

    /// A price was zero, negative or not finite where a log return is required.
    #[error("Non-positive price {price} at index {index}")]
    NonPositivePrice {
        /// Position of the offending price
        index: usize,
        /// The offending price
        price: f64,
    },

    /// Annualisation factor must be positive.
    #[error("Invalid periods per year: {0}")]
    InvalidPeriods(u32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pricing_error_display() {
        let err = PricingError::InvalidInput("strike must be positive".to_string());
        assert_eq!(format!("{}", err), "Invalid input: strike must be positive");

        let err = PricingError::NumericDegeneracy("vega is zero".to_string());
        assert_eq!(format!("{}", err), "Numeric degeneracy: vega is zero");
    }

    #[test]
    fn test_pricing_error_predicates() {
        assert!(PricingError::InvalidInput(String::new()).is_invalid_input());
        assert!(!PricingError::InvalidInput(String::new()).is_numeric_degeneracy());
        assert!(PricingError::NumericDegeneracy(String::new()).is_numeric_degeneracy());
    }

    #[test]
    fn test_solver_error_to_pricing_error() {
        let err: PricingError = SolverError::DerivativeNearZero { x: 0.2 }.into();
        assert!(err.is_numeric_degeneracy());

        let err: PricingError = SolverError::NoBracket { a: 0.0, b: 1.0 }.into();
        assert!(err.is_numeric_degeneracy());
    }

    #[test]
    fn test_statistics_error_display() {
        let err = StatisticsError::NonPositivePrice {
            index: 3,
            price: -1.0,
        };
        assert_eq!(format!("{}", err), "Non-positive price -1 at index 3");
        assert_eq!(
            format!("{}", StatisticsError::InvalidPeriods(0)),
            "Invalid periods per year: 0"
        );
    }

    #[test]
    fn test_errors_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PricingError>();
        assert_send_sync::<SolverError>();
        assert_send_sync::<StatisticsError>();
    }
}
