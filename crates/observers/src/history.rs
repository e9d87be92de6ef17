use descent_core::Observer;

use crate::traits::{HasCost, HasImprovement, HasIteration};

/// Records the course of a run.
///
/// Keeps every improvement of the best solution and the working cost of
/// every iteration. Never asks the solver to stop.
///
/// Solvers take their observer by value, so pass `&mut history` and read the
/// record after the run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    improvements: Vec<Improvement>,
    costs: Vec<f64>,
}

/// One strict improvement of the best solution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Improvement {
    pub iter: usize,
    pub cost: f64,
    pub delta: f64,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded improvements in order.
    #[must_use]
    pub fn improvements(&self) -> &[Improvement] {
        &self.improvements
    }

    /// Returns the working cost of each iteration, indexed by iteration.
    #[must_use]
    pub fn costs(&self) -> &[f64] {
        &self.costs
    }

    /// Returns the best cost seen, if any iteration improved it.
    #[must_use]
    pub fn best_cost(&self) -> Option<f64> {
        self.improvements.last().map(|improvement| improvement.cost)
    }
}

impl<E, A> Observer<E, A> for &mut History
where
    E: HasCost + HasIteration + HasImprovement,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        match event.improvement() {
            Some(delta) => self.improvements.push(Improvement {
                iter: event.iter(),
                cost: event.cost(),
                delta,
            }),
            None => self.costs.push(event.cost()),
        }
        None
    }
}
