//! Nonlinear conjugate gradient search.
//!
//! # Algorithm
//!
//! The first direction is steepest descent, `s = -grad f(x0)`. Every later
//! direction mixes the new steepest-descent vector with the previous
//! direction,
//!
//! ```text
//! s = -grad f(x) + beta * s_prev
//! ```
//!
//! where `beta` comes from the configured [`BetaFormula`]. Each iteration
//! runs a [line search](crate::line_search) along `s` and moves to the
//! accepted point.
//!
//! By default `s_prev` is the unit direction the line search searched, so
//! both the update above and the Polak-Ribiere denominator see a unit
//! vector. [`PreviousDirection::Full`] keeps `s_prev` at its computed length
//! instead.
//!
//! # Restarts
//!
//! The direction is reset to steepest descent when:
//!
//! - `restart_every` directions have been taken since the last reset, or
//! - the line search along `s` fails or makes no progress.
//!
//! If the line search along steepest descent also fails, no descent
//! direction remains and the run ends with [`Status::Stalled`].

mod beta;
mod config;


pub use beta::BetaFormula;
pub use config::{Config, ConfigError, PreviousDirection};

use descent_core::{
    Bounds, ContinuousSolution, CostFunction, MaxIters, Objective, Observer, Problem,
    Termination,
};

use crate::{
    Action, Error, Event, Solution, Status,
    line_search::descend,
    progress::{Progress, evaluate_start},
    vector::{add_scaled, negate},
};

/// Minimizes `problem` from `x0` by conjugate gradient search.
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

    let mut gradient = problem.gradient(current.values(), bounds);
    let mut steepest = negate(&gradient);
    let mut direction = steepest.clone();
    let mut along_steepest = true;
    let mut since_restart = 0;

    while !progress.should_terminate() {
        let step = match descend(
            problem,
            bounds,
            &current,
            &gradient,
            &direction,
            config.line_search(),
        ) {
            Some(step) => step,
            None if along_steepest => {
                tracing::debug!(iter = progress.iter(), "no descent direction left");
                return Ok(progress.finish(Status::Stalled));
            }
            None => {
                tracing::debug!(
                    iter = progress.iter(),
                    "line search failed, restarting along steepest descent"
                );
                direction.clone_from(&steepest);
                since_restart = 0;

                let Some(step) = descend(
                    problem,
                    bounds,
                    &current,
                    &gradient,
                    &direction,
                    config.line_search(),
                ) else {
                    tracing::debug!(iter = progress.iter(), "no descent direction left");
                    return Ok(progress.finish(Status::Stalled));
                };
                step
            }
        };

        tracing::trace!(iter = progress.iter(), alpha = step.alpha, cost = step.cost, "step");
        if config.previous_direction() == PreviousDirection::Unit {
            direction = step.direction;
        }
        current = ContinuousSolution::new(step.x, step.cost);
        if progress.record(&current).is_break() {
            return Ok(progress.finish(Status::StoppedByObserver));
        }

        gradient = problem.gradient(current.values(), bounds);
        let previous_steepest = std::mem::replace(&mut steepest, negate(&gradient));
        since_restart += 1;

        let beta = if config.restart_every().is_some_and(|n| since_restart >= n) {
            since_restart = 0;
            0.0
        } else {
            config.formula().beta(&steepest, &previous_steepest, &direction)
        };

        direction = add_scaled(&steepest, beta, &direction);
        along_steepest = beta == 0.0;
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
