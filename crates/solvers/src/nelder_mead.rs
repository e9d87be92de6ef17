//! The Nelder-Mead simplex method.
//!
//! # Algorithm
//!
//! The method keeps `n + 1` vertices, initially `x0` offset by
//! `initial_step` along each axis. Each iteration sorts the vertices by
//! cost, computes the centroid of all but the worst, and tries to replace
//! the worst vertex:
//!
//! - **Reflect** through the centroid. Accept if the reflected point is no
//!   better than the best but better than the second worst.
//! - **Expand** further if the reflected point beats the best, keeping the
//!   better of the two.
//! - **Contract** toward the centroid otherwise, accepting the contracted
//!   point if it beats the worst.
//! - **Reduce** the whole simplex toward the best vertex if contraction
//!   fails.
//!
//! The best vertex is the iteration's working solution. The method uses no
//! gradients, so it never stalls; it runs until the termination predicate
//! or an observer stops it.

mod config;
mod simplex;


pub use config::{Config, ConfigError};

use descent_core::{
    Bounds, ContinuousSolution, CostFunction, MaxIters, Objective, Observer, Problem,
    Termination,
};

use crate::{
    Action, Error, Event, Solution, Status,
    progress::{Progress, check_start},
};

use simplex::Simplex;

/// Minimizes `problem` from `x0` with the Nelder-Mead method.
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
    check_start(bounds, x0)?;

    let mut simplex = Simplex::around(problem, bounds, x0, config.initial_step());
    let mut progress = Progress::new(simplex.best().clone(), termination, observer);

    while !progress.should_terminate() {
        let centroid = simplex.centroid();
        let evaluate = |coefficient: f64, simplex: &Simplex| {
            let x = simplex.point_from_centroid(&centroid, coefficient);
            let cost = problem.evaluate(&x, bounds);
            ContinuousSolution::new(x, cost)
        };

        let reflected = evaluate(config.alpha(), &simplex);
        if simplex.best().cost() <= reflected.cost()
            && reflected.cost() < simplex.second_worst().cost()
        {
            tracing::trace!(iter = progress.iter(), "reflect");
            simplex.replace_worst(reflected);
        } else if reflected.cost() < simplex.best().cost() {
            let expanded = evaluate(config.gamma(), &simplex);
            tracing::trace!(iter = progress.iter(), "expand");
            if expanded.cost() < reflected.cost() {
                simplex.replace_worst(expanded);
            } else {
                simplex.replace_worst(reflected);
            }
        } else {
            let contracted = evaluate(config.rho(), &simplex);
            if contracted.cost() < simplex.worst().cost() {
                tracing::trace!(iter = progress.iter(), "contract");
                simplex.replace_worst(contracted);
            } else {
                simplex.reduce(problem, bounds, config.sigma());
                tracing::trace!(iter = progress.iter(), diameter = simplex.diameter(), "reduce");
            }
        }

        if progress.record(simplex.best()).is_break() {
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
/// Runs iterations `0..=max_iters`.
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
