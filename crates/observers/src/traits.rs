//! Capability traits for cross-solver observers.
//!
//! These traits abstract over event and action types, so an observer written
//! against them works with any solver whose types implement them.
//!
//! # Event traits
//!
//! - [`HasCost`]: events that carry a cost
//! - [`HasIteration`]: events tied to an iteration index
//! - [`HasImprovement`]: events that may report a strict improvement
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use descent_core::Observer;
//! use descent_observers::traits::{CanStopEarly, HasCost, HasIteration};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//!     min_iters: usize,
//! }
//!
//! impl<E: HasCost + HasIteration, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         if event.iter() >= self.min_iters && event.cost() < self.tolerance {
//!             return Some(A::stop_early());
//!         }
//!         None
//!     }
//! }
//! ```

use descent_solvers::{Action, Event};

/// An event that carries a cost.
pub trait HasCost {
    /// Returns the cost of the solution carried by this event.
    fn cost(&self) -> f64;
}

/// An event tied to a solver iteration.
pub trait HasIteration {
    /// Returns the 0-based iteration index.
    fn iter(&self) -> usize;
}

/// An event that may report a strict improvement of the best solution.
pub trait HasImprovement {
    /// Returns how much the best cost decreased, or `None` if this event does
    /// not report an improvement.
    fn improvement(&self) -> Option<f64>;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl HasCost for Event<'_> {
    fn cost(&self) -> f64 {
        self.solution().cost()
    }
}

impl HasIteration for Event<'_> {
    fn iter(&self) -> usize {
        Event::iter(self)
    }
}

impl HasImprovement for Event<'_> {
    fn improvement(&self) -> Option<f64> {
        match self {
            Event::SolutionUpdated { improvement, .. } => Some(*improvement),
            Event::Stepped { .. } => None,
        }
    }
}

impl CanStopEarly for Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use descent_core::ContinuousSolution;

    #[test]
    fn solver_events_expose_capabilities() {
        let best = ContinuousSolution::new(vec![1.0], 2.0);
        let updated = Event::SolutionUpdated {
            iter: 3,
            best: &best,
            improvement: 0.5,
        };
        let stepped = Event::Stepped {
            iter: 4,
            solution: &best,
        };

        assert_relative_eq!(HasCost::cost(&updated), 2.0);
        assert_eq!(HasIteration::iter(&updated), 3);
        assert_eq!(updated.improvement(), Some(0.5));
        assert_eq!(HasIteration::iter(&stepped), 4);
        assert_eq!(stepped.improvement(), None);
        assert_eq!(Action::stop_early(), Action::StopEarly);
    }
}
