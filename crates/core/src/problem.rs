use crate::{Bounds, CostFunction, Objective, gradient::estimate_gradient};

/// The evaluation contract consumed by the solvers.
///
/// Both methods receive the bounds the solver is working within, so a
/// problem never needs to smuggle them through side channels. Gradients are
/// returned as fresh vectors.
pub trait Problem {
    /// Evaluates the cost at `x`.
    fn evaluate(&self, x: &[f64], bounds: &Bounds) -> f64;

    /// Computes the gradient of the cost at `x`.
    fn gradient(&self, x: &[f64], bounds: &Bounds) -> Vec<f64>;
}

impl<P: Problem + ?Sized> Problem for &P {
    fn evaluate(&self, x: &[f64], bounds: &Bounds) -> f64 {
        (**self).evaluate(x, bounds)
    }

    fn gradient(&self, x: &[f64], bounds: &Bounds) -> Vec<f64> {
        (**self).gradient(x, bounds)
    }
}

/// A cost function answers for the bounds it is given.
///
/// Points outside `bounds` evaluate to [`INFEASIBLE_COST`], and
/// finite-difference gradients see the same clamping.
///
/// [`INFEASIBLE_COST`]: crate::INFEASIBLE_COST
impl<O: Objective> Problem for CostFunction<O> {
    fn evaluate(&self, x: &[f64], bounds: &Bounds) -> f64 {
        self.evaluate_within(x, bounds)
    }

    fn gradient(&self, x: &[f64], bounds: &Bounds) -> Vec<f64> {
        self.gradient_within(x, bounds)
    }
}

/// A [`Problem`] built from an evaluate closure and a gradient closure.
#[derive(Debug, Clone, Copy)]
pub struct FnProblem<E, G> {
    evaluate: E,
    gradient: G,
}

impl<E, G> FnProblem<E, G>
where
    E: Fn(&[f64], &Bounds) -> f64,
    G: Fn(&[f64], &Bounds) -> Vec<f64>,
{
    #[must_use]
    pub fn new(evaluate: E, gradient: G) -> Self {
        Self { evaluate, gradient }
    }
}

impl<E, G> Problem for FnProblem<E, G>
where
    E: Fn(&[f64], &Bounds) -> f64,
    G: Fn(&[f64], &Bounds) -> Vec<f64>,
{
    fn evaluate(&self, x: &[f64], bounds: &Bounds) -> f64 {
        (self.evaluate)(x, bounds)
    }

    fn gradient(&self, x: &[f64], bounds: &Bounds) -> Vec<f64> {
        (self.gradient)(x, bounds)
    }
}

/// A [`Problem`] from an evaluate closure alone, with forward-difference gradients.
#[derive(Debug, Clone, Copy)]
pub struct FiniteDifference<E> {
    evaluate: E,
}

impl<E> FiniteDifference<E>
where
    E: Fn(&[f64], &Bounds) -> f64,
{
    #[must_use]
    pub fn new(evaluate: E) -> Self {
        Self { evaluate }
    }
}

impl<E> Problem for FiniteDifference<E>
where
    E: Fn(&[f64], &Bounds) -> f64,
{
    fn evaluate(&self, x: &[f64], bounds: &Bounds) -> f64 {
        (self.evaluate)(x, bounds)
    }

    fn gradient(&self, x: &[f64], bounds: &Bounds) -> Vec<f64> {
        estimate_gradient(x, |probe| (self.evaluate)(probe, bounds))
    }
}
