//! Benchmark objectives shared by the integration tests.

#![allow(dead_code)]

use descent_core::{CostFunction, Objective};
use descent_solvers::{Action, Event};

/// The sum of squares, with its analytic gradient.
#[derive(Debug, Clone, Copy)]
pub struct Sphere;

impl Objective for Sphere {
    fn cost(&self, x: &[f64]) -> f64 {
        x.iter().map(|v| v * v).sum()
    }

    fn gradient(&self, x: &[f64]) -> Option<Vec<f64>> {
        Some(x.iter().map(|v| 2.0 * v).collect())
    }
}

/// The two-dimensional Rosenbrock valley, `100 (x0^2 - x1)^2 + (1 - x0)^2`.
///
/// The gradient is analytic unless `estimated` is set.
#[derive(Debug, Clone, Copy)]
pub struct Rosenbrock {
    pub estimated: bool,
}

impl Objective for Rosenbrock {
    fn cost(&self, x: &[f64]) -> f64 {
        let valley = x[0] * x[0] - x[1];
        100.0 * valley * valley + (1.0 - x[0]).powi(2)
    }

    fn gradient(&self, x: &[f64]) -> Option<Vec<f64>> {
        if self.estimated {
            return None;
        }
        let valley = x[0] * x[0] - x[1];
        Some(vec![
            400.0 * valley * x[0] - 2.0 * (1.0 - x[0]),
            -200.0 * valley,
        ])
    }
}

/// Sphere in three dimensions on `[-5.12, 5.12]`.
pub fn sphere() -> CostFunction<Sphere> {
    CostFunction::with_uniform_bounds(Sphere, 3, -5.12, 5.12)
}

/// Rosenbrock on `[-2.048, 2.048]` with the analytic gradient.
pub fn rosenbrock() -> CostFunction<Rosenbrock> {
    CostFunction::with_uniform_bounds(Rosenbrock { estimated: false }, 2, -2.048, 2.048)
}

/// Rosenbrock on `[-2.048, 2.048]` with finite-difference gradients.
pub fn rosenbrock_estimated() -> CostFunction<Rosenbrock> {
    CostFunction::with_uniform_bounds(Rosenbrock { estimated: true }, 2, -2.048, 2.048)
}

/// What an observer saw during a run.
#[derive(Debug, Default)]
pub struct Trace {
    /// `(best cost, improvement)` for each update.
    pub updates: Vec<(f64, f64)>,

    /// Working cost of each iteration.
    pub stepped: Vec<f64>,
}

impl Trace {
    /// Returns an observer closure that records into this trace.
    pub fn observer(&mut self) -> impl FnMut(&Event<'_>) -> Option<Action> + '_ {
        move |event| {
            match event {
                Event::SolutionUpdated {
                    best, improvement, ..
                } => self.updates.push((best.cost(), *improvement)),
                Event::Stepped { solution, .. } => self.stepped.push(solution.cost()),
            }
            None
        }
    }

    /// Asserts that every update strictly lowered the best cost by its reported improvement.
    pub fn assert_monotone(&self, start_cost: f64) {
        let mut previous = start_cost;
        for &(cost, improvement) in &self.updates {
            assert!(cost < previous, "best cost rose from {previous} to {cost}");
            assert!(improvement > 0.0);
            let expected = previous - cost;
            assert!(
                (improvement - expected).abs() <= 1e-12 * expected.abs().max(1.0),
                "improvement {improvement} does not match {expected}"
            );
            previous = cost;
        }
    }
}
