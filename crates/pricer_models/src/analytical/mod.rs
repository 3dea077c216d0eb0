//! Analytical Black-Scholes pricing for European options.
//!
//! This module provides:
//! - [`PricingModel`]: closed-form price, delta and theta plus a
//!   self-consistent implied volatility
//! - [`ImpliedVolSolver`]: price-to-volatility inversion for any target price
//! - [`FormulaConvention`]: textbook Greeks or the historical CDF-based forms
//! - Stateless standard normal CDF/PDF

pub mod black_scholes;
pub mod config;
pub mod distributions;
pub mod error;
pub mod implied_vol;

pub use black_scholes::PricingModel;
pub use config::{FormulaConvention, PricingConfig};
pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
pub use implied_vol::{initial_volatility_guess, ImpliedVolOutcome, ImpliedVolSolver};
