use std::cell::Cell;

use rand::Rng;

use crate::{Bounds, DimensionMismatch, gradient::estimate_gradient};

/// Cost reported for any point outside the bounds.
///
/// Infeasible points are never rejected; they compare as worse than every
/// feasible point so solvers steer away from them through ordinary
/// comparison.
pub const INFEASIBLE_COST: f64 = f64::MAX;

/// Returns true if `cost` is the infeasible sentinel or infinite.
#[must_use]
pub fn is_infeasible(cost: f64) -> bool {
    cost >= INFEASIBLE_COST || cost.is_infinite()
}

/// A problem-specific objective to be minimized.
///
/// Implement [`Objective::cost`] for the raw objective. Override
/// [`Objective::gradient`] when an analytic gradient is available; the
/// default returns `None`, and [`CostFunction`] falls back to finite
/// differences.
pub trait Objective {
    /// Computes the objective at `x`, ignoring bounds.
    fn cost(&self, x: &[f64]) -> f64;

    /// Computes the analytic gradient at `x`, if the objective has one.
    fn gradient(&self, _x: &[f64]) -> Option<Vec<f64>> {
        None
    }
}

impl<F> Objective for F
where
    F: Fn(&[f64]) -> f64,
{
    fn cost(&self, x: &[f64]) -> f64 {
        self(x)
    }
}

/// An [`Objective`] paired with box bounds and an evaluation counter.
///
/// The dimension is fixed at construction. Bounds may be adjusted between
/// runs, but always keep the same dimension.
///
/// The evaluation counter uses interior mutability, so a `CostFunction` is
/// not `Sync` and must not be shared by concurrently running solvers.
#[derive(Debug)]
pub struct CostFunction<O> {
    objective: O,
    bounds: Bounds,
    evaluations: Cell<usize>,
}

impl<O: Objective> CostFunction<O> {
    /// Creates a cost function over the given bounds.
    #[must_use]
    pub fn new(objective: O, bounds: Bounds) -> Self {
        Self {
            objective,
            bounds,
            evaluations: Cell::new(0),
        }
    }

    /// Creates a cost function with the same interval in every dimension.
    #[must_use]
    pub fn with_uniform_bounds(objective: O, dimension: usize, lower: f64, upper: f64) -> Self {
        Self::new(objective, Bounds::uniform(dimension, lower, upper))
    }

    #[must_use]
    pub fn dimension(&self) -> usize {
        self.bounds.dimension()
    }

    #[must_use]
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    #[must_use]
    pub fn objective(&self) -> &O {
        &self.objective
    }

    /// Replaces the bounds.
    ///
    /// # Errors
    ///
    /// Returns a [`DimensionMismatch`] if the new bounds have a different
    /// dimension.
    pub fn set_bounds(&mut self, bounds: Bounds) -> Result<(), DimensionMismatch> {
        DimensionMismatch::check(self.dimension(), bounds.dimension())?;
        self.bounds = bounds;
        Ok(())
    }

    /// Sets the lower bound of one dimension.
    ///
    /// # Panics
    ///
    /// Panics if `dimension` is out of range.
    pub fn set_lower_bound(&mut self, dimension: usize, value: f64) {
        self.bounds.set_lower(dimension, value);
    }

    /// Sets the upper bound of one dimension.
    ///
    /// # Panics
    ///
    /// Panics if `dimension` is out of range.
    pub fn set_upper_bound(&mut self, dimension: usize, value: f64) {
        self.bounds.set_upper(dimension, value);
    }

    /// Returns the number of objective evaluations performed so far.
    ///
    /// Finite-difference gradients count every evaluation they make.
    #[must_use]
    pub fn evaluations(&self) -> usize {
        self.evaluations.get()
    }

    /// Evaluates the objective, returning [`INFEASIBLE_COST`] outside the bounds.
    ///
    /// # Panics
    ///
    /// Panics if `x` does not have one coordinate per dimension.
    pub fn evaluate(&self, x: &[f64]) -> f64 {
        self.evaluate_within(x, &self.bounds)
    }

    /// Computes the gradient at `x`.
    ///
    /// Uses the objective's analytic gradient when it has one and forward
    /// differences otherwise.
    ///
    /// # Panics
    ///
    /// Panics if `x` does not have one coordinate per dimension.
    pub fn gradient(&self, x: &[f64]) -> Vec<f64> {
        self.gradient_within(x, &self.bounds)
    }

    /// Returns true if any coordinate of `x` lies outside the bounds.
    #[must_use]
    pub fn is_out_of_bounds(&self, x: &[f64]) -> bool {
        !self.bounds.contains(x)
    }

    /// Draws a point uniformly from the bounded box.
    ///
    /// # Panics
    ///
    /// Panics if any bound is infinite or a lower bound exceeds its upper bound.
    pub fn random_solution<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<f64> {
        self.bounds
            .lower()
            .iter()
            .zip(self.bounds.upper())
            .map(|(&lo, &hi)| rng.gen_range(lo..=hi))
            .collect()
    }

    pub(crate) fn evaluate_within(&self, x: &[f64], bounds: &Bounds) -> f64 {
        assert_eq!(
            x.len(),
            self.dimension(),
            "point has {} coordinates but the cost function has {} dimensions",
            x.len(),
            self.dimension(),
        );

        self.evaluations.set(self.evaluations.get() + 1);
        let cost = self.objective.cost(x);

        if bounds.contains(x) {
            cost
        } else {
            INFEASIBLE_COST
        }
    }

    pub(crate) fn gradient_within(&self, x: &[f64], bounds: &Bounds) -> Vec<f64> {
        match self.objective.gradient(x) {
            Some(grad) => grad,
            None => estimate_gradient(x, |probe| self.evaluate_within(probe, bounds)),
        }
    }
}
