// src/optimize/mod.rs

//! Derivative-free minimization of a scalar function of one real parameter.

use tracing::debug;

/// Settings for the one-dimensional Nelder–Mead simplex search.
///
/// Defaults follow the common reference settings: an initial step of 5% of
/// `x0` (or `0.00025` when `x0` is zero), absolute tolerances of `1e-4` on
/// both `x` and `f`, and at most 200 iterations.
#[derive(Debug, Clone, PartialEq)]
pub struct NelderMead {
    /// Initial simplex step; `None` derives it from `x0`.
    pub initial_step: Option<f64>,
    /// Convergence threshold on the simplex width.
    pub x_tolerance: f64,
    /// Convergence threshold on the spread of function values.
    pub f_tolerance: f64,
    /// Iteration cap.
    pub max_iterations: usize,
}

impl Default for NelderMead {
    fn default() -> Self {
        Self {
            initial_step: None,
            x_tolerance: 1e-4,
            f_tolerance: 1e-4,
            max_iterations: 200,
        }
    }
}

/// Result of a minimization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Minimum {
    /// Approximate minimizer.
    pub x: f64,
    /// Function value at `x`.
    pub value: f64,
    /// Iterations performed.
    pub iterations: usize,
    /// Whether both tolerances were met before the iteration cap.
    pub converged: bool,
}

const REFLECT: f64 = 1.0;
const EXPAND: f64 = 2.0;
const CONTRACT: f64 = 0.5;
const SHRINK: f64 = 0.5;

impl NelderMead {
    /// Creates a minimizer with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Approximate minimizer of `f` starting from `x0`.
    ///
    /// Non-finite function values are treated as `+∞`.
    pub fn minimize<F>(&self, mut f: F, x0: f64) -> Minimum
    where
        F: FnMut(f64) -> f64,
    {
        let mut eval = |x: f64| {
            let y = f(x);
            if y.is_finite() { y } else { f64::INFINITY }
        };

        let step = self.initial_step.unwrap_or(if x0 != 0.0 { 0.05 * x0 } else { 0.00025 });
        // Simplex of two points: (best, worst) after each sort.
        let mut simplex = [(x0, eval(x0)), (x0 + step, eval(x0 + step))];
        let mut iterations = 0;
        let mut converged = false;

        while iterations < self.max_iterations {
            simplex.sort_by(|a, b| a.1.total_cmp(&b.1));
            let (best, worst) = (simplex[0], simplex[1]);

            if (worst.0 - best.0).abs() <= self.x_tolerance && (worst.1 - best.1).abs() <= self.f_tolerance {
                converged = true;
                break;
            }
            iterations += 1;

            let xr = best.0 + REFLECT * (best.0 - worst.0);
            let fr = eval(xr);

            if fr < best.1 {
                let xe = best.0 + EXPAND * (xr - best.0);
                let fe = eval(xe);
                simplex[1] = if fe < fr { (xe, fe) } else { (xr, fr) };
                continue;
            }

            if fr < worst.1 {
                let xc = best.0 + CONTRACT * (xr - best.0);
                let fc = eval(xc);
                if fc <= fr {
                    simplex[1] = (xc, fc);
                    continue;
                }
            } else {
                let xcc = best.0 + CONTRACT * (worst.0 - best.0);
                let fcc = eval(xcc);
                if fcc < worst.1 {
                    simplex[1] = (xcc, fcc);
                    continue;
                }
            }

            let xs = best.0 + SHRINK * (worst.0 - best.0);
            simplex[1] = (xs, eval(xs));
        }

        simplex.sort_by(|a, b| a.1.total_cmp(&b.1));
        debug!(x = simplex[0].0, value = simplex[0].1, iterations, converged, "nelder-mead finished");
        Minimum { x: simplex[0].0, value: simplex[0].1, iterations, converged }
    }
}

/// Minimizes `f` from `x0` with default settings.
pub fn minimize<F>(f: F, x0: f64) -> Minimum
where
    F: FnMut(f64) -> f64,
{
    NelderMead::default().minimize(f, x0)
}
