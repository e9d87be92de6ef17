/// Decides when a solver's iteration loop ends.
///
/// Solvers ask before every iteration, passing the improvement recorded by
/// the previous iteration (`None` if the best solution did not change) and
/// the 0-based index of the iteration about to run. Returning `true` ends the
/// loop.
///
/// Any `FnMut(Option<f64>, usize) -> bool` closure is a termination
/// predicate, so wall-clock or external-signal cancellation can be encoded
/// directly in the closure.
pub trait Termination {
    fn should_terminate(&mut self, improvement: Option<f64>, iter: usize) -> bool;
}

impl<F> Termination for F
where
    F: FnMut(Option<f64>, usize) -> bool,
{
    fn should_terminate(&mut self, improvement: Option<f64>, iter: usize) -> bool {
        self(improvement, iter)
    }
}

/// Terminates once the iteration index exceeds a fixed count.
///
/// `MaxIters(n)` fires when `iter > n`, so iterations `0..=n` run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxIters(pub usize);

impl Termination for MaxIters {
    fn should_terminate(&mut self, _improvement: Option<f64>, iter: usize) -> bool {
        iter > self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_iters_runs_inclusive_count() {
        let mut max = MaxIters(2);

        assert!(!max.should_terminate(None, 0));
        assert!(!max.should_terminate(Some(1.0), 2));
        assert!(max.should_terminate(None, 3));
    }

    #[test]
    fn closures_see_improvement() {
        let mut stalled = 0;
        let mut patience = |improvement: Option<f64>, _iter: usize| {
            if improvement.is_some_and(|v| v > 1e-9) {
                stalled = 0;
            } else {
                stalled += 1;
            }
            stalled >= 2
        };

        assert!(!patience.should_terminate(Some(1.0), 0));
        assert!(!patience.should_terminate(None, 1));
        assert!(patience.should_terminate(Some(1e-12), 2));
    }
}
