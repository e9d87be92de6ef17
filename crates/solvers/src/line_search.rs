//! Backtracking line search with a sufficient-decrease condition.
//!
//! # Algorithm
//!
//! Given a start point `x0`, its cost `f0`, and a search direction, the search
//! normalizes the direction to unit length and computes the directional
//! derivative `p = d · ∇f(x0)`. If `p` is not negative the direction does not
//! descend and the search fails with [`Error::NotDescent`].
//!
//! Otherwise it tries step lengths starting at `alpha = 1` and accepts the
//! first trial point satisfying the Armijo condition
//!
//! ```text
//! f(x0 + alpha d) < f0 + sigma * alpha * p
//! ```
//!
//! After the first failed trial the next `alpha` comes from the minimizer of
//! the quadratic through `f0`, `p`, and the trial cost, kept within
//! `[0.1, 0.5]` of the current `alpha`. Later failures shrink `alpha` by
//! `beta`.
//!
//! # Giving up
//!
//! When `alpha` drops below `min_alpha` (or the optional trial cap is hit),
//! the search returns the last trial point if it is no worse than `x0`, and
//! `x0` itself with `alpha = 0` otherwise. The returned point never costs
//! more than `f0`.

mod config;


pub use config::{Config, ConfigError};

use descent_core::{Bounds, ContinuousSolution, DimensionMismatch, Problem};
use thiserror::Error;

use crate::vector::{add_scaled, dot, norm};

/// Lower safeguard on the interpolated step, as a fraction of the current step.
const INTERPOLATION_MIN: f64 = 0.1;

/// Upper safeguard on the interpolated step, as a fraction of the current step.
const INTERPOLATION_MAX: f64 = 0.5;

/// Errors that can occur during a line search.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    /// The directional derivative is non-negative or `NaN`.
    #[error("not a descent direction (slope = {slope})")]
    NotDescent { slope: f64 },

    #[error(transparent)]
    DimensionMismatch(#[from] DimensionMismatch),
}

/// The outcome of a line search.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    /// The accepted point.
    pub x: Vec<f64>,

    /// Cost at the accepted point.
    pub cost: f64,

    /// Step length along the unit direction; zero if the search stayed at `x0`.
    pub alpha: f64,

    /// The unit direction that was searched.
    pub direction: Vec<f64>,

    /// Directional derivative at `x0` along the unit direction.
    pub slope: f64,

    /// Number of trial points evaluated.
    pub trials: usize,
}

impl Step {
    /// Returns true if the search left the start point.
    #[must_use]
    pub fn moved(&self) -> bool {
        self.alpha > 0.0
    }
}

/// Searches along `direction` from `x0`, computing the gradient at `x0`.
///
/// See the [module docs](self) for the algorithm.
///
/// # Errors
///
/// Returns [`Error::NotDescent`] if `direction` does not descend, and
/// [`Error::DimensionMismatch`] if the vectors and bounds disagree in length.
pub fn search<P: Problem>(
    problem: &P,
    bounds: &Bounds,
    x0: &[f64],
    f0: f64,
    direction: &[f64],
    config: &Config,
) -> Result<Step, Error> {
    bounds.check_dimension(x0)?;
    let gradient = problem.gradient(x0, bounds);
    search_with_gradient(problem, bounds, x0, f0, direction, &gradient, config)
}

/// Searches along `direction` from `x0` using a gradient the caller already has.
///
/// # Errors
///
/// Returns [`Error::NotDescent`] if `direction` does not descend, and
/// [`Error::DimensionMismatch`] if the vectors disagree in length.
pub fn search_with_gradient<P: Problem>(
    problem: &P,
    bounds: &Bounds,
    x0: &[f64],
    f0: f64,
    direction: &[f64],
    gradient: &[f64],
    config: &Config,
) -> Result<Step, Error> {
    DimensionMismatch::check(x0.len(), direction.len())?;
    DimensionMismatch::check(x0.len(), gradient.len())?;

    let length = norm(direction);
    let direction: Vec<f64> = if length > 0.0 {
        direction.iter().map(|d| d / length).collect()
    } else {
        direction.to_vec()
    };

    let slope = dot(&direction, gradient);
    if slope.is_nan() || slope >= 0.0 {
        return Err(Error::NotDescent { slope });
    }

    let mut alpha = 1.0;
    let mut trials = 0;
    loop {
        let x = add_scaled(x0, alpha, &direction);
        let cost = problem.evaluate(&x, bounds);
        trials += 1;

        if cost < f0 + config.sigma() * alpha * slope {
            tracing::trace!(alpha, cost, trials, "line search accepted step");
            return Ok(Step {
                x,
                cost,
                alpha,
                direction,
                slope,
                trials,
            });
        }

        let next_alpha = if trials == 1 {
            interpolate(alpha, slope, f0, cost, config.beta())
        } else {
            alpha * config.beta()
        };

        let exhausted = next_alpha < config.min_alpha()
            || config.max_trials().is_some_and(|max| trials >= max);
        if exhausted {
            tracing::trace!(alpha, cost, trials, "line search exhausted");
            return Ok(if cost <= f0 {
                Step {
                    x,
                    cost,
                    alpha,
                    direction,
                    slope,
                    trials,
                }
            } else {
                Step {
                    x: x0.to_vec(),
                    cost: f0,
                    alpha: 0.0,
                    direction,
                    slope,
                    trials,
                }
            });
        }

        alpha = next_alpha;
    }
}

/// Searches from `start` and keeps the step only if it left the start point.
///
/// Returns `None` when the direction does not descend or no trial was accepted.
pub(crate) fn descend<P: Problem>(
    problem: &P,
    bounds: &Bounds,
    start: &ContinuousSolution,
    gradient: &[f64],
    direction: &[f64],
    config: &Config,
) -> Option<Step> {
    let result = search_with_gradient(
        problem,
        bounds,
        start.values(),
        start.cost(),
        direction,
        gradient,
        config,
    );

    match result {
        Ok(step) if step.moved() => Some(step),
        Ok(_) => None,
        Err(err) => {
            tracing::trace!(%err, "line search rejected direction");
            None
        }
    }
}

/// Returns the minimizer of the quadratic through `f0`, `slope`, and the trial
/// cost at `alpha`, kept within the safeguard interval.
///
/// Falls back to `beta * alpha` when the model is degenerate.
fn interpolate(alpha: f64, slope: f64, f0: f64, cost: f64, beta: f64) -> f64 {
    let denominator = slope * alpha + f0 - cost;
    let candidate = 0.5 * slope * alpha * alpha / denominator;

    if candidate.is_finite() {
        candidate.clamp(INTERPOLATION_MIN * alpha, INTERPOLATION_MAX * alpha)
    } else {
        beta * alpha
    }
}
