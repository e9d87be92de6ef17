//! Steepest descent with a fixed learning rate.
//!
//! Each iteration moves the working point against the gradient,
//! `x <- x - learning_rate * grad f(x)`, and reports the new point. There is
//! no line search, so the learning rate alone decides whether the iteration
//! converges. Points that land outside the bounds are reported with the
//! infeasible cost and never replace the best solution.

use descent_core::{
    Bounds, ContinuousSolution, CostFunction, MaxIters, Objective, Observer, Problem,
    Termination,
};
use thiserror::Error;

use crate::{
    Action, Error, Event, Solution, Status,
    progress::{Progress, evaluate_start},
    vector::add_scaled,
};

/// Configuration for gradient descent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    learning_rate: f64,
}

/// Errors that can occur when validating a gradient descent config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("learning_rate must be finite and positive")]
    LearningRate,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            learning_rate: 1e-4,
        }
    }
}

impl Config {
    /// Creates a new config with a validated learning rate.
    ///
    /// # Errors
    ///
    /// Returns an error if `learning_rate` is not finite and positive.
    pub fn new(learning_rate: f64) -> Result<Self, ConfigError> {
        if !learning_rate.is_finite() || learning_rate <= 0.0 {
            return Err(ConfigError::LearningRate);
        }
        Ok(Self { learning_rate })
    }

    #[must_use]
    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }
}

/// Minimizes `problem` from `x0` by fixed-rate steepest descent.
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

    while !progress.should_terminate() {
        let gradient = problem.gradient(current.values(), bounds);
        let x = add_scaled(current.values(), -config.learning_rate(), &gradient);
        let cost = problem.evaluate(&x, bounds);
        current = ContinuousSolution::new(x, cost);

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
