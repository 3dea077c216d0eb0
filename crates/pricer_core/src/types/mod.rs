//! Shared error types.
//!
//! This module provides:
//! - `error`: Structured error types for pricing, solver and statistics operations
//!
//! # Re-exports
//!
//! [`PricingError`], [`SolverError`], [`StatisticsError`] from `error`

pub mod error;

pub use error::{PricingError, SolverError, StatisticsError};
