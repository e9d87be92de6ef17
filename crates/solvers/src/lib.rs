//! Local-search minimizers for continuous problems.
//!
//! Every solver works on a [`Problem`] within explicit [`Bounds`], starts from
//! a caller-supplied point, and runs until a [`Termination`] predicate or an
//! observer stops it:
//!
//! - [`gradient_descent`]: fixed learning-rate steepest descent
//! - [`conjugate_gradient`]: nonlinear conjugate gradient with selectable beta formulas
//! - [`bfgs`]: quasi-Newton search with an incrementally updated Hessian
//! - [`nelder_mead`]: derivative-free simplex search
//!
//! The gradient-based solvers share the backtracking [`line_search`].
//!
//! # Progress protocol
//!
//! All solvers report through the same [`Event`] type, so one observer can
//! watch any of them. Before each iteration the termination predicate sees
//! the previous iteration's improvement (if any) and the iteration index.
//! After each iteration the observer receives [`Event::SolutionUpdated`] if
//! the best solution strictly improved, then [`Event::Stepped`].
//!
//! [`Problem`]: descent_core::Problem
//! [`Bounds`]: descent_core::Bounds
//! [`Termination`]: descent_core::Termination

pub mod bfgs;
pub mod conjugate_gradient;
pub mod gradient_descent;
pub mod line_search;
pub mod nelder_mead;

mod error;
mod progress;
mod vector;

pub use error::Error;
pub use progress::{Action, Event, Solution, Status};
