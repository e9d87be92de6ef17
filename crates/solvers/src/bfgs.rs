//! The BFGS quasi-Newton method.
//!
//! # Algorithm
//!
//! BFGS keeps an approximation `B` of the Hessian, starting at the identity.
//! Each iteration:
//!
//! 1. Computes the direction `p` solving `B p = -grad f(x)`.
//! 2. Runs a [line search](crate::line_search) along `p`.
//! 3. Forms the step `s = x_new - x` and the gradient change
//!    `y = grad f(x_new) - grad f(x)`.
//! 4. Updates `B <- B + y y^T / (y . s) - (B s)(B s)^T / (s . B s)`.
//!
//! The inverse of `B` is maintained alongside it with the matching inverse
//! update, so step 1 costs a matrix-vector product rather than a solve.
//!
//! # Safeguards
//!
//! - A curvature pair with `y . s` or `s . B s` near zero is skipped, which
//!   keeps `B` positive definite.
//! - If the line search fails or makes no progress, the approximation is
//!   reset to the identity and the next iteration searches along steepest
//!   descent. If steepest descent fails too, the run ends with
//!   [`Status::Stalled`].

mod config;
mod hessian;


pub use config::{Config, ConfigError};
pub use hessian::{HessianApproximation, Update};

use descent_core::{
    Bounds, ContinuousSolution, CostFunction, MaxIters, Objective, Observer, Problem,
    Termination,
};

use crate::{
    Action, Error, Event, Solution, Status,
    line_search::descend,
    progress::{Progress, evaluate_start},
    vector::sub,
};

/// Minimizes `problem` from `x0` with BFGS.
///
/// The termination predicate is consulted before every iteration and the
/// observer receives the events described in [`Event`].
///
/// # Errors
///
/// Returns an error if `x0` is empty or its length differs from the bounds.
pub fn minimize<P, T, Obs>(
    problem: &P,
    bounds: &Bounds,
    x0: &[f64],
    config: &Config,
    termination: T,
    observer: Obs,
) -> Result<Solution, Error>
where
    P: Problem,
    T: Termination,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let mut current = evaluate_start(problem, bounds, x0)?;
    let mut progress = Progress::new(current.clone(), termination, observer);

    let mut approximation = HessianApproximation::identity(x0.len());
    let mut gradient = problem.gradient(current.values(), bounds);

    while !progress.should_terminate() {
        let direction = approximation.direction(&gradient);

        let Some(step) = descend(
            problem,
            bounds,
            &current,
            &gradient,
            &direction,
            config.line_search(),
        ) else {
            if approximation.is_identity() {
                tracing::debug!(iter = progress.iter(), "no descent direction left");
                return Ok(progress.finish(Status::Stalled));
            }

            tracing::debug!(
                iter = progress.iter(),
                "line search failed, resetting Hessian approximation"
            );
            approximation.reset();
            if progress.record(&current).is_break() {
                return Ok(progress.finish(Status::StoppedByObserver));
            }
            continue;
        };

        let next_gradient = problem.gradient(&step.x, bounds);
        let s = sub(&step.x, current.values());
        let y = sub(&next_gradient, &gradient);

        if approximation.update(&s, &y, config.curvature_tol()) == Update::Skipped {
            tracing::debug!(iter = progress.iter(), "skipped degenerate curvature update");
        }

        tracing::trace!(iter = progress.iter(), alpha = step.alpha, cost = step.cost, "step");
        gradient = next_gradient;
        current = ContinuousSolution::new(step.x, step.cost);

        if progress.record(&current).is_break() {
            return Ok(progress.finish(Status::StoppedByObserver));
        }
    }

    Ok(progress.finish(Status::Terminated))
}

/// Minimizes `problem` from `x0` without observer support.
///
/// # Errors
///
/// Returns an error if `x0` is empty or its length differs from the bounds.
pub fn minimize_unobserved<P, T>(
    problem: &P,
    bounds: &Bounds,
    x0: &[f64],
    config: &Config,
    termination: T,
) -> Result<Solution, Error>
where
    P: Problem,
    T: Termination,
{
    minimize(problem, bounds, x0, config, termination, ())
}

/// Minimizes a cost function within its own bounds for a fixed iteration count.
///
/// Runs iterations `0..=max_iters` unless the search stalls first.
///
/// # Errors
///
/// Returns an error if `x0` is empty or its length differs from the bounds.
pub fn minimize_cost_function<O, Obs>(
    cost_fn: &CostFunction<O>,
    x0: &[f64],
    config: &Config,
    max_iters: usize,
    observer: Obs,
) -> Result<Solution, Error>
where
    O: Objective,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    minimize(
        cost_fn,
        cost_fn.bounds(),
        x0,
        config,
        MaxIters(max_iters),
        observer,
    )
}
