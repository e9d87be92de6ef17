use crate::vector::{dot, sub};

/// Rule for the coefficient that mixes the previous direction into the next.
///
/// Each formula is written in terms of the steepest-descent vectors
/// `r = -grad f(x)` at the new point and `r_prev` at the previous point:
///
/// | Formula | `beta` |
/// |---------|--------|
/// | `FletcherReeves` | `(r · r) / (r_prev · r_prev)` |
/// | `HestenesStiefel` | `(r · (r - r_prev)) / (r_prev · r_prev)` |
/// | `PolakRibiere` | `(r · (r - r_prev)) / (s_prev · (r - r_prev))` |
///
/// where `s_prev` is the previous search direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BetaFormula {
    #[default]
    FletcherReeves,
    PolakRibiere,
    HestenesStiefel,
}

impl BetaFormula {
    /// Computes `beta`.
    ///
    /// A zero denominator or a non-finite quotient yields `0.0`, which turns
    /// the next direction into steepest descent.
    #[must_use]
    pub fn beta(
        self,
        steepest: &[f64],
        previous_steepest: &[f64],
        previous_direction: &[f64],
    ) -> f64 {
        let (numerator, denominator) = match self {
            Self::FletcherReeves => (
                dot(steepest, steepest),
                dot(previous_steepest, previous_steepest),
            ),
            Self::HestenesStiefel => {
                let change = sub(steepest, previous_steepest);
                (
                    dot(steepest, &change),
                    dot(previous_steepest, previous_steepest),
                )
            }
            Self::PolakRibiere => {
                let change = sub(steepest, previous_steepest);
                (dot(steepest, &change), dot(previous_direction, &change))
            }
        };

        if denominator == 0.0 {
            return 0.0;
        }
        let beta = numerator / denominator;
        if beta.is_finite() { beta } else { 0.0 }
    }
}
