//! Error types for analytical pricing operations.
//!
//! This module provides:
//! - `AnalyticalError`: Errors specific to the Black-Scholes model and its implied-volatility solve

use pricer_core::types::{PricingError, SolverError};
use thiserror::Error;

/// Analytical pricing errors.
///
/// # Variants
/// - `NumericDegeneracy`: A zero divisor or non-finite intermediate was hit
/// - `InvalidTargetPrice`: Implied-volatility target is not a positive finite price
/// - `InvalidConfig`: Pricing configuration is unusable
///
/// # Examples
/// ```
/// use pricer_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidTargetPrice { price: -1.0 };
/// assert!(format!("{}", err).contains("-1"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Division by zero or non-finite value during computation.
    #[error("Numeric degeneracy: {message}")]
    NumericDegeneracy {
        /// Description of the numerical issue
        message: String,
    },

    /// Implied-volatility target price is not positive and finite.
    #[error("Invalid target price: {price}")]
    InvalidTargetPrice {
        /// The rejected target
        price: f64,
    },

    /// Invalid pricing configuration.
    #[error("Invalid pricing configuration: {message}")]
    InvalidConfig {
        /// Description of the configuration problem
        message: String,
    },
}

impl From<SolverError> for AnalyticalError {
    fn from(err: SolverError) -> Self {
        AnalyticalError::NumericDegeneracy {
            message: err.to_string(),
        }
    }
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        match err {
            AnalyticalError::NumericDegeneracy { message } => {
                PricingError::NumericDegeneracy(message)
            }
            other @ (AnalyticalError::InvalidTargetPrice { .. }
            | AnalyticalError::InvalidConfig { .. }) => {
                PricingError::InvalidInput(other.to_string())
            }
        }
    }
}
