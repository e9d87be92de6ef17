//! The iteration and progress protocol shared by every solver.
//!
//! Each solver drives its loop through a [`Progress`], which asks the
//! caller's [`Termination`] predicate before every iteration, funnels the
//! iteration's working solution through the best-so-far gate, and delivers
//! [`Event`]s to the observer.

use std::ops::ControlFlow;

use descent_core::{Bounds, ContinuousSolution, Observer, Problem, Termination};

use crate::Error;

/// Events emitted by the solvers, once or twice per iteration.
///
/// When an iteration improves the best solution, [`Event::SolutionUpdated`]
/// is delivered first, followed by [`Event::Stepped`]. Otherwise only
/// [`Event::Stepped`] is delivered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event<'a> {
    /// The best solution strictly improved.
    SolutionUpdated {
        /// 0-based iteration index.
        iter: usize,

        /// The new best solution.
        best: &'a ContinuousSolution,

        /// How much the best cost decreased.
        improvement: f64,
    },

    /// An iteration finished.
    Stepped {
        /// 0-based iteration index.
        iter: usize,

        /// The iteration's working solution, which may be worse than the best.
        solution: &'a ContinuousSolution,
    },
}

impl Event<'_> {
    /// Returns the iteration index.
    #[must_use]
    pub fn iter(&self) -> usize {
        match self {
            Self::SolutionUpdated { iter, .. } | Self::Stepped { iter, .. } => *iter,
        }
    }

    /// Returns the solution carried by the event.
    #[must_use]
    pub fn solution(&self) -> &ContinuousSolution {
        match self {
            Self::SolutionUpdated { best, .. } => best,
            Self::Stepped { solution, .. } => solution,
        }
    }
}

/// Actions an observer can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver and return the best solution found so far.
    StopEarly,
}

/// Why a solver returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The termination predicate fired.
    Terminated,

    /// An observer returned [`Action::StopEarly`].
    StoppedByObserver,

    /// No descent direction remained, even after falling back to steepest
    /// descent.
    Stalled,
}

/// The result of a solver run.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Best solution found.
    pub best: ContinuousSolution,

    /// Number of completed iterations.
    pub iters: usize,
}

impl Solution {
    /// Returns the best point.
    #[must_use]
    pub fn x(&self) -> &[f64] {
        self.best.values()
    }

    /// Returns the cost at the best point.
    #[must_use]
    pub fn cost(&self) -> f64 {
        self.best.cost()
    }
}

/// Checks that a start point is non-empty and matches the bounds.
pub(crate) fn check_start(bounds: &Bounds, x0: &[f64]) -> Result<(), Error> {
    if x0.is_empty() {
        return Err(Error::EmptyStart);
    }
    bounds.check_dimension(x0)?;
    Ok(())
}

/// Validates a start point against the bounds and evaluates it.
pub(crate) fn evaluate_start<P: Problem>(
    problem: &P,
    bounds: &Bounds,
    x0: &[f64],
) -> Result<ContinuousSolution, Error> {
    check_start(bounds, x0)?;

    let cost = problem.evaluate(x0, bounds);
    Ok(ContinuousSolution::new(x0.to_vec(), cost))
}

/// Drives a solver's loop: termination, best tracking, and events.
pub(crate) struct Progress<T, Obs> {
    termination: T,
    observer: Obs,
    best: ContinuousSolution,
    improvement: Option<f64>,
    iter: usize,
}

impl<T, Obs> Progress<T, Obs>
where
    T: Termination,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    /// Starts tracking with `best` as the initial best solution.
    pub(crate) fn new(best: ContinuousSolution, termination: T, observer: Obs) -> Self {
        Self {
            termination,
            observer,
            best,
            improvement: None,
            iter: 0,
        }
    }

    /// Asks the termination predicate whether to stop before the next iteration.
    pub(crate) fn should_terminate(&mut self) -> bool {
        self.termination.should_terminate(self.improvement, self.iter)
    }

    /// Returns the index of the iteration in progress.
    pub(crate) fn iter(&self) -> usize {
        self.iter
    }

    /// Completes the current iteration with its working solution.
    ///
    /// Offers `candidate` to the best solution, emits the events, and advances
    /// the iteration counter. Returns `Break` if the observer asked to stop.
    pub(crate) fn record(&mut self, candidate: &ContinuousSolution) -> ControlFlow<()> {
        let iter = self.iter;
        self.iter += 1;
        self.improvement = self.best.try_update(candidate.values(), candidate.cost());

        let mut stop = false;
        if let Some(improvement) = self.improvement {
            let event = Event::SolutionUpdated {
                iter,
                best: &self.best,
                improvement,
            };
            stop |= matches!(self.observer.observe(&event), Some(Action::StopEarly));
        }

        let event = Event::Stepped {
            iter,
            solution: candidate,
        };
        stop |= matches!(self.observer.observe(&event), Some(Action::StopEarly));

        if stop {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }

    /// Finishes the run.
    pub(crate) fn finish(self, status: Status) -> Solution {
        Solution {
            status,
            best: self.best,
            iters: self.iter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use descent_core::{FiniteDifference, MaxIters};

    fn point(x: f64, cost: f64) -> ContinuousSolution {
        ContinuousSolution::new(vec![x], cost)
    }

    #[test]
    fn start_requires_coordinates() {
        let problem = FiniteDifference::new(|_: &[f64], _: &Bounds| 0.0);
        let err = evaluate_start(&problem, &Bounds::unbounded(0), &[]).unwrap_err();
        assert_eq!(err, Error::EmptyStart);
    }

    #[test]
    fn start_checks_dimension() {
        let problem = FiniteDifference::new(|_: &[f64], _: &Bounds| 0.0);
        let err = evaluate_start(&problem, &Bounds::unbounded(2), &[1.0]).unwrap_err();
        assert!(matches!(err, Error::DimensionMismatch(_)));
    }

    #[test]
    fn record_emits_update_before_step() {
        let mut log = Vec::new();
        let observer = |event: &Event<'_>| {
            log.push(match event {
                Event::SolutionUpdated { iter, .. } => format!("updated {iter}"),
                Event::Stepped { iter, .. } => format!("stepped {iter}"),
            });
            None
        };

        let mut progress = Progress::new(point(0.0, 5.0), MaxIters(10), observer);
        let _ = progress.record(&point(1.0, 3.0));
        let _ = progress.record(&point(2.0, 4.0));
        let solution = progress.finish(Status::Terminated);

        assert_eq!(solution.iters, 2);
        assert_relative_eq!(solution.cost(), 3.0);
        assert_eq!(log, ["updated 0", "stepped 0", "stepped 1"]);
    }

    #[test]
    fn termination_sees_last_improvement() {
        let mut seen = Vec::new();
        let termination = |improvement: Option<f64>, iter: usize| {
            seen.push((improvement, iter));
            false
        };

        let mut progress = Progress::new(point(0.0, 5.0), termination, ());
        assert!(!progress.should_terminate());
        let _ = progress.record(&point(1.0, 3.0));
        assert!(!progress.should_terminate());
        let _ = progress.record(&point(1.0, 3.0));
        assert!(!progress.should_terminate());
        drop(progress);

        assert_eq!(seen, [(None, 0), (Some(2.0), 1), (None, 2)]);
    }

    #[test]
    fn observer_can_stop() {
        let observer = |_: &Event<'_>| Some(Action::StopEarly);
        let mut progress = Progress::new(point(0.0, 5.0), MaxIters(10), observer);

        assert!(progress.record(&point(1.0, 6.0)).is_break());
        assert_eq!(progress.iter(), 1);
    }
}
