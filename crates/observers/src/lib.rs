//! Reusable observers for the descent solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across every solver in `descent-solvers`.
//!
//! # Modules
//!
//! - [`traits`]: capability traits for cross-solver observers
//!   ([`HasCost`], [`HasIteration`], [`HasImprovement`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`History`]: records improvements and per-iteration costs
//! - [`CostBelow`]: stops a run once a cost falls below a threshold
//!
//! [`Observer`]: descent_core::Observer
//! [`HasCost`]: traits::HasCost
//! [`HasIteration`]: traits::HasIteration
//! [`HasImprovement`]: traits::HasImprovement
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod history;
mod stop;

pub use history::{History, Improvement};
pub use stop::CostBelow;
