//! Newton-Raphson root-finding solver.

use super::SolverConfig;
use crate::types::SolverError;
use num_traits::Float;
use tracing::trace;

/// Result of a best-effort Newton iteration.
///
/// `converged` is `false` when the iteration budget ran out before the
/// residual fell below tolerance; `root` is then the last iterate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonOutcome<T: Float> {
    /// Final iterate
    pub root: T,
    /// Number of Newton (or bisection) updates performed
    pub iterations: usize,
    /// `f(root)`
    pub residual: T,
    /// Whether the residual or step-size test was met
    pub converged: bool,
}

/// Newton-Raphson root finder.
///
/// Uses Newton's method: `x_{n+1} = x_n - f(x_n) / f'(x_n)` for fast
/// quadratic convergence on smooth functions.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Convergence
///
/// Newton-Raphson converges quadratically near a root, meaning the number
/// of correct digits approximately doubles each iteration. However, it may
/// fail if:
/// - The derivative is near zero
/// - The initial guess is far from the root
/// - The function has discontinuities
///
/// [`iterate_bracketed`](Self::iterate_bracketed) guards against the last two
/// by keeping a sign-change bracket and bisecting whenever a Newton step
/// would leave it.
///
/// # Example
///
/// ```
/// use pricer_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
///
/// // Solve x² - 2 = 0 (find √2)
/// let solver = NewtonRaphsonSolver::new(SolverConfig::default());
///
/// let f = |x: f64| x * x - 2.0;
/// let f_prime = |x: f64| 2.0 * x;
///
/// let outcome = solver.iterate(f, f_prime, 1.0).unwrap();
/// assert!(outcome.converged);
/// assert!((outcome.root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct NewtonRaphsonSolver<T: Float> {
    /// Solver configuration
    config: SolverConfig<T>,
}

impl<T: Float> NewtonRaphsonSolver<T> {
    /// Create a new Newton-Raphson solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Run plain Newton iterations and return the last iterate even when the
    /// iteration budget is exhausted.
    ///
    /// # Errors
    ///
    /// * `SolverError::DerivativeNearZero` - `|f'(x)|` underflowed or is not finite
    /// * `SolverError::NumericalInstability` - `f(x)` or the next iterate is not finite
    pub fn iterate<F, G>(&self, f: F, f_prime: G, x0: T) -> Result<NewtonOutcome<T>, SolverError>
    where
        F: Fn(T) -> T,
        G: Fn(T) -> T,
    {
        let mut x = x0;
        let epsilon = derivative_floor::<T>();

        for iteration in 0..self.config.max_iterations {
            let f_val = f(x);
            if !f_val.is_finite() {
                return Err(SolverError::NumericalInstability(
                    "Newton iteration produced non-finite function value".to_string(),
                ));
            }

            if f_val.abs() < self.config.tolerance {
                return Ok(NewtonOutcome {
                    root: x,
                    iterations: iteration,
                    residual: f_val,
                    converged: true,
                });
            }

            let f_prime_val = f_prime(x);

            // Negated comparison so NaN derivatives are caught too
            if !(f_prime_val.abs() >= epsilon) {
                return Err(SolverError::DerivativeNearZero {
                    x: x.to_f64().unwrap_or(f64::NAN),
                });
            }

            let next = x - f_val / f_prime_val;

            if !next.is_finite() {
                return Err(SolverError::NumericalInstability(
                    "Newton iteration produced non-finite value".to_string(),
                ));
            }

            if has_stalled(x, next) {
                return Ok(NewtonOutcome {
                    root: next,
                    iterations: iteration + 1,
                    residual: f(next),
                    converged: true,
                });
            }

            x = next;
        }

        Ok(NewtonOutcome {
            root: x,
            iterations: self.config.max_iterations,
            residual: f(x),
            converged: false,
        })
    }

    /// Safeguarded Newton iteration on `[lower, upper]`.
    ///
    /// `f(lower)` and `f(upper)` must have opposite signs. The bracket is
    /// tightened after every evaluation; a Newton step that would leave the
    /// bracket, or that has a zero or non-finite derivative, is replaced by a
    /// bisection step. An initial guess outside the bracket is clamped.
    ///
    /// # Errors
    ///
    /// * `SolverError::NoBracket` - endpoints do not straddle a root
    /// * `SolverError::NumericalInstability` - `f` returned a non-finite value
    ///
    /// # Example
    ///
    /// ```
    /// use pricer_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
    ///
    /// let solver = NewtonRaphsonSolver::new(SolverConfig::default());
    ///
    /// // arctan has a flat tail that sends plain Newton off to infinity from x0 = 10
    /// let outcome = solver
    ///     .iterate_bracketed(|x: f64| x.atan(), |x: f64| 1.0 / (1.0 + x * x), 10.0, -20.0, 20.0)
    ///     .unwrap();
    /// assert!(outcome.converged);
    /// assert!(outcome.root.abs() < 1e-10);
    /// ```
    pub fn iterate_bracketed<F, G>(
        &self,
        f: F,
        f_prime: G,
        x0: T,
        lower: T,
        upper: T,
    ) -> Result<NewtonOutcome<T>, SolverError>
    where
        F: Fn(T) -> T,
        G: Fn(T) -> T,
    {
        let bracket_error = || SolverError::NoBracket {
            a: lower.to_f64().unwrap_or(f64::NAN),
            b: upper.to_f64().unwrap_or(f64::NAN),
        };

        if !(lower < upper) {
            return Err(bracket_error());
        }

        let f_lower = f(lower);
        let f_upper = f(upper);
        if !f_lower.is_finite() || !f_upper.is_finite() {
            return Err(SolverError::NumericalInstability(
                "Function is not finite at bracket endpoints".to_string(),
            ));
        }

        for (endpoint, value) in [(lower, f_lower), (upper, f_upper)] {
            if value.abs() < self.config.tolerance {
                return Ok(NewtonOutcome {
                    root: endpoint,
                    iterations: 0,
                    residual: value,
                    converged: true,
                });
            }
        }

        if f_lower.signum() == f_upper.signum() {
            return Err(bracket_error());
        }

        // `negative` always holds the endpoint with f < 0
        let (mut negative, mut positive) = if f_lower < T::zero() {
            (lower, upper)
        } else {
            (upper, lower)
        };

        let two = T::one() + T::one();
        let epsilon = derivative_floor::<T>();
        let mut x = if x0.is_finite() {
            x0.max(lower).min(upper)
        } else {
            (lower + upper) / two
        };

        for iteration in 0..self.config.max_iterations {
            let f_val = f(x);
            if !f_val.is_finite() {
                return Err(SolverError::NumericalInstability(
                    "Bracketed Newton iteration produced non-finite function value".to_string(),
                ));
            }

            if f_val.abs() < self.config.tolerance {
                return Ok(NewtonOutcome {
                    root: x,
                    iterations: iteration,
                    residual: f_val,
                    converged: true,
                });
            }

            if f_val < T::zero() {
                negative = x;
            } else {
                positive = x;
            }

            let a = negative.min(positive);
            let b = negative.max(positive);
            let f_prime_val = f_prime(x);

            let newton = if f_prime_val.abs() >= epsilon && f_prime_val.is_finite() {
                Some(x - f_val / f_prime_val)
            } else {
                None
            };

            let next = match newton {
                Some(candidate) if candidate > a && candidate < b => candidate,
                _ => {
                    trace!(iteration, "Newton step rejected, bisecting bracket");
                    (negative + positive) / two
                }
            };

            if has_stalled(x, next) {
                return Ok(NewtonOutcome {
                    root: next,
                    iterations: iteration + 1,
                    residual: f(next),
                    converged: true,
                });
            }

            x = next;
        }

        Ok(NewtonOutcome {
            root: x,
            iterations: self.config.max_iterations,
            residual: f(x),
            converged: false,
        })
    }

}

/// Smallest derivative magnitude accepted as a Newton divisor.
#[inline]
fn derivative_floor<T: Float>() -> T {
    T::from(1e-30).unwrap_or_else(T::min_positive_value)
}

/// A step within a few ulps of the current iterate can no longer improve it.
#[inline]
fn has_stalled<T: Float>(x: T, next: T) -> bool {
    (next - x).abs() <= T::epsilon() * x.abs().max(T::one())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_iterate_cubic() {
        let solver = NewtonRaphsonSolver::new(SolverConfig::default());
        let f = |x: f64| x * x * x - x - 2.0;
        let outcome = solver.iterate(f, |x: f64| 3.0 * x * x - 1.0, 1.5).unwrap();
        assert!(outcome.converged);
        assert!(f(outcome.root).abs() < 1e-10);
    }

    #[test]
    fn test_zero_derivative_is_reported() {
        let solver = NewtonRaphsonSolver::new(SolverConfig::default());
        // f'(0) = 0 for x² - 1
        let result = solver.iterate(|x: f64| x * x - 1.0, |x: f64| 2.0 * x, 0.0);
        match result {
            Err(SolverError::DerivativeNearZero { x }) => assert_eq!(x, 0.0),
            other => panic!("Expected DerivativeNearZero, got {:?}", other),
        }
    }

    #[test]
    fn test_nan_derivative_is_reported() {
        let solver = NewtonRaphsonSolver::new(SolverConfig::default());
        let result = solver.iterate(|x: f64| x - 1.0, |_x: f64| f64::NAN, 0.0);
        assert!(matches!(result, Err(SolverError::DerivativeNearZero { .. })));
    }

    #[test]
    fn test_iterate_returns_best_effort_on_budget_exhaustion() {
        let config = SolverConfig {
            tolerance: 1e-30,
            max_iterations: 3,
        };
        let solver = NewtonRaphsonSolver::new(config);
        // Slowly converging: root of multiplicity 3 at x = 1
        let f = |x: f64| (x - 1.0).powi(3);
        let f_prime = |x: f64| 3.0 * (x - 1.0).powi(2);

        let outcome = solver.iterate(f, f_prime, 2.0).unwrap();
        assert!(!outcome.converged);
        assert_eq!(outcome.iterations, 3);
        assert!(outcome.root > 1.0 && outcome.root < 2.0);
        assert_relative_eq!(outcome.residual, f(outcome.root));
    }

    #[test]
    fn test_iterate_stops_on_stalled_step() {
        let config = SolverConfig {
            tolerance: 1e-300,
            max_iterations: 100,
        };
        let solver = NewtonRaphsonSolver::new(config);
        let outcome = solver
            .iterate(|x: f64| x * x - 2.0, |x: f64| 2.0 * x, 1.0)
            .unwrap();
        assert!(outcome.converged);
        assert!(outcome.iterations < 20);
        assert_relative_eq!(outcome.root, std::f64::consts::SQRT_2, epsilon = 1e-15);
    }

    #[test]
    fn test_bracketed_survives_flat_tail() {
        let solver = NewtonRaphsonSolver::new(SolverConfig::default());
        let outcome = solver
            .iterate_bracketed(
                |x: f64| x.atan(),
                |x: f64| 1.0 / (1.0 + x * x),
                10.0,
                -20.0,
                20.0,
            )
            .unwrap();
        assert!(outcome.converged);
        assert!(outcome.root.abs() < 1e-10);
    }

    #[test]
    fn test_bracketed_bisects_on_zero_derivative() {
        let solver = NewtonRaphsonSolver::new(SolverConfig::default());
        let outcome = solver
            .iterate_bracketed(|x: f64| x - 0.25, |_x: f64| 0.0, 0.9, 0.0, 1.0)
            .unwrap();
        assert!(outcome.converged);
        assert_relative_eq!(outcome.root, 0.25, epsilon = 1e-9);
    }

    #[test]
    fn test_bracketed_decreasing_function() {
        let solver = NewtonRaphsonSolver::new(SolverConfig::default());
        let outcome = solver
            .iterate_bracketed(|x: f64| 3.0 - x, |_x: f64| -1.0, 0.0, 0.0, 10.0)
            .unwrap();
        assert!(outcome.converged);
        assert_relative_eq!(outcome.root, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_bracketed_clamps_initial_guess() {
        let solver = NewtonRaphsonSolver::new(SolverConfig::default());
        let outcome = solver
            .iterate_bracketed(|x: f64| x * x - 2.0, |x: f64| 2.0 * x, -50.0, 0.0, 5.0)
            .unwrap();
        assert!(outcome.converged);
        assert_relative_eq!(outcome.root, std::f64::consts::SQRT_2, epsilon = 1e-10);
    }

    #[test]
    fn test_bracketed_no_bracket() {
        let solver = NewtonRaphsonSolver::new(SolverConfig::default());
        let result = solver.iterate_bracketed(|x: f64| x * x + 1.0, |x: f64| 2.0 * x, 0.5, 0.0, 1.0);
        assert_eq!(result, Err(SolverError::NoBracket { a: 0.0, b: 1.0 }));
    }

    #[test]
    fn test_bracketed_inverted_bounds() {
        let solver = NewtonRaphsonSolver::new(SolverConfig::default());
        let result = solver.iterate_bracketed(|x: f64| x, |_x: f64| 1.0, 0.5, 1.0, -1.0);
        assert!(matches!(result, Err(SolverError::NoBracket { .. })));
    }

    #[test]
    fn test_bracketed_root_at_endpoint() {
        let solver = NewtonRaphsonSolver::new(SolverConfig::default());
        let outcome = solver
            .iterate_bracketed(|x: f64| x - 1.0, |_x: f64| 1.0, 0.5, 1.0, 2.0)
            .unwrap();
        assert!(outcome.converged);
        assert_eq!(outcome.root, 1.0);
        assert_eq!(outcome.iterations, 0);
    }
}
