//! Root-finding solvers for numerical computation.
//!
//! Provides the Newton-Raphson solver used by the implied-volatility
//! calculation, in two flavours:
//!
//! - [`NewtonRaphsonSolver::iterate`]: best-effort, returns the last iterate
//!   together with a convergence flag
//! - [`NewtonRaphsonSolver::iterate_bracketed`]: safeguarded Newton that
//!   falls back to bisection inside a sign-change bracket
//!
//! ## Configuration
//!
//! Solvers use [`SolverConfig`] for configuring:
//! - `tolerance`: Convergence tolerance on `|f(x)|` (default: 1e-10)
//! - `max_iterations`: Maximum iteration count (default: 100)
//!
//! ## Examples
//!
//! ```
//! use pricer_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
//!
//! // Solve x² - 2 = 0 (find √2)
//! let config = SolverConfig::default();
//! let solver = NewtonRaphsonSolver::new(config);
//!
//! let f = |x: f64| x * x - 2.0;
//! let f_prime = |x: f64| 2.0 * x;
//!
//! let outcome = solver.iterate(f, f_prime, 1.0).unwrap();
//! assert!(outcome.converged);
//! assert!((outcome.root - std::f64::consts::SQRT_2).abs() < 1e-10);
//! ```

mod config;
mod newton_raphson;

pub use config::SolverConfig;
pub use newton_raphson::{NewtonOutcome, NewtonRaphsonSolver};
