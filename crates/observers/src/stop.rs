use descent_core::Observer;

use crate::traits::{CanStopEarly, HasCost};

/// Stops a run as soon as any reported solution costs less than a threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostBelow {
    threshold: f64,
}

impl CostBelow {
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl<E: HasCost, A: CanStopEarly> Observer<E, A> for CostBelow {
    fn observe(&mut self, event: &E) -> Option<A> {
        (event.cost() < self.threshold).then(A::stop_early)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use descent_core::CostFunction;
    use descent_solvers::{Status, gradient_descent};

    #[test]
    fn stops_gradient_descent_below_threshold() {
        let f = CostFunction::with_uniform_bounds(
            |x: &[f64]| x.iter().map(|v| v * v).sum::<f64>(),
            3,
            -5.12,
            5.12,
        );
        let config = gradient_descent::Config::new(0.1).unwrap();

        let solution = gradient_descent::minimize_cost_function(
            &f,
            &[1.0, -2.0, 3.0],
            &config,
            1000,
            CostBelow::new(1e-4),
        )
        .unwrap();

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert!(solution.cost() < 1e-4);
        // Cost shrinks by 0.64 per iteration from 14, so about 27 iterations.
        assert!(solution.iters < 40);
    }

    #[test]
    fn runs_to_completion_above_threshold() {
        let f = CostFunction::with_uniform_bounds(|_: &[f64]| 2.0, 1, -1.0, 1.0);
        let config = gradient_descent::Config::default();

        let solution =
            gradient_descent::minimize_cost_function(&f, &[0.5], &config, 5, CostBelow::new(1.0))
                .unwrap();

        assert_eq!(solution.status, Status::Terminated);
        assert_eq!(solution.iters, 6);
    }
}
