//! Numerical building blocks.
//!
//! - [`solvers`]: Newton-Raphson root finding and its configuration
//! - [`statistics`]: Descriptive statistics over price histories

pub mod solvers;
pub mod statistics;
