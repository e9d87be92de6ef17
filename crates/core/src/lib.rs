//! Problem abstractions for continuous minimization.
//!
//! This crate defines the shared types that solvers and observers build on:
//!
//! - [`Bounds`]: typed box bounds passed alongside every evaluation
//! - [`Objective`] and [`CostFunction`]: a problem-specific objective with
//!   bounds clamping, an evaluation counter, and a finite-difference gradient
//!   fallback
//! - [`Problem`]: the evaluate/gradient contract consumed by solvers, with
//!   [`FnProblem`] and [`FiniteDifference`] closure adapters
//! - [`ContinuousSolution`]: a point and its cost, with monotonic updates
//! - [`Termination`]: the caller's stop predicate, with [`MaxIters`]
//! - [`Observer`]: receives solver events and optionally returns control actions

mod bounds;
mod cost_function;
mod error;
mod observer;
mod problem;
mod solution;
mod termination;

pub mod gradient;

pub use bounds::Bounds;
pub use cost_function::{CostFunction, INFEASIBLE_COST, Objective, is_infeasible};
pub use error::DimensionMismatch;
pub use observer::Observer;
pub use problem::{FiniteDifference, FnProblem, Problem};
pub use solution::{ContinuousSolution, UNKNOWN_COST};
pub use termination::{MaxIters, Termination};
