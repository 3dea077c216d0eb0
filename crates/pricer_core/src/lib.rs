//! # pricer_core: Numerical Foundation for the Black-Scholes Pricer
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Root-finding solvers: `NewtonRaphsonSolver`, `SolverConfig` (`math::solvers`)
//! - Price-history statistics: `standard_deviation`, `historical_volatility` (`math::statistics`)
//! - Error types: `PricingError`, `SolverError`, `StatisticsError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//! - tracing: Solver diagnostics (no subscriber is installed here)
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
//! use pricer_core::math::statistics::standard_deviation;
//!
//! let solver = NewtonRaphsonSolver::new(SolverConfig::default());
//! let outcome = solver.iterate(|x: f64| x * x - 4.0, |x: f64| 2.0 * x, 1.0).unwrap();
//! assert!((outcome.root - 2.0).abs() < 1e-10);
//!
//! let sd = standard_deviation(3, &[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
//! assert!((sd - 0.8165).abs() < 1e-4);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for solver configuration and errors

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
