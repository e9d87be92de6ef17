//! Forward-difference gradient estimation.
//!
//! Used when an objective has no analytic gradient. The step along each
//! coordinate is scaled by the square root of the machine precision, which is
//! found by probing the floating-point arithmetic rather than read from
//! [`f64::EPSILON`].

use std::{hint::black_box, sync::OnceLock};

use crate::cost_function::is_infeasible;

/// Returns the machine precision found by probing `f64` arithmetic.
///
/// The probe halves a trial increment until adding it to one no longer
/// changes the result, then scales the last increment back up. The value is
/// computed once and cached.
#[must_use]
pub fn machine_epsilon() -> f64 {
    static EPSILON: OnceLock<f64> = OnceLock::new();
    *EPSILON.get_or_init(probe_epsilon)
}

fn probe_epsilon() -> f64 {
    let one = black_box(1.0_f64);
    let two = black_box(2.0_f64);

    let mut increment = one;
    loop {
        increment /= two;
        let sum = black_box(increment * one + one);
        if sum <= one {
            break;
        }
    }
    increment * two * two
}

/// Returns the forward-difference step for a coordinate value.
///
/// The step is `sqrt(eps) * max(1, |xi|)`, negated when `xi` is negative so
/// the perturbation points away from the origin.
#[must_use]
pub fn step_size(xi: f64) -> f64 {
    let delta = machine_epsilon().sqrt() * xi.abs().max(1.0);
    if xi < 0.0 { -delta } else { delta }
}

/// Estimates the gradient of `evaluate` at `x` with forward differences.
///
/// Component `i` is `(f(x + delta_i e_i) - f(x)) / delta_i`. The base value
/// `f(x)` is evaluated once and shared, so the estimate costs `x.len() + 1`
/// evaluations. A component is zero when both evaluations are infeasible.
///
/// `x` is never modified: perturbations are applied to a private copy.
pub fn estimate_gradient<F>(x: &[f64], mut evaluate: F) -> Vec<f64>
where
    F: FnMut(&[f64]) -> f64,
{
    let base = evaluate(x);
    let mut probe = x.to_vec();

    x.iter()
        .enumerate()
        .map(|(i, &xi)| {
            let delta = step_size(xi);
            probe[i] = xi + delta;
            let perturbed = evaluate(&probe);
            probe[i] = xi;

            if is_infeasible(perturbed) && is_infeasible(base) {
                0.0
            } else {
                (perturbed - base) / delta
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::cost_function::INFEASIBLE_COST;

    #[test]
    fn probed_epsilon_matches_binary64() {
        // The probe stops one halving past the unit roundoff and scales by four.
        assert_relative_eq!(machine_epsilon(), 2.0 * f64::EPSILON);
    }

    #[test]
    fn step_follows_sign_and_magnitude() {
        let rteps = machine_epsilon().sqrt();

        assert_relative_eq!(step_size(0.0), rteps);
        assert_relative_eq!(step_size(0.5), rteps);
        assert_relative_eq!(step_size(-0.5), -rteps);
        assert_relative_eq!(step_size(100.0), 100.0 * rteps);
        assert_relative_eq!(step_size(-100.0), -100.0 * rteps);
    }

    #[test]
    fn estimates_quadratic_gradient() {
        let x = [1.0, -2.0, 3.0];
        let grad = estimate_gradient(&x, |x| x.iter().map(|v| v * v).sum());

        assert_relative_eq!(grad[0], 2.0, epsilon = 1e-6);
        assert_relative_eq!(grad[1], -4.0, epsilon = 1e-6);
        assert_relative_eq!(grad[2], 6.0, epsilon = 1e-6);
    }

    #[test]
    fn uses_one_evaluation_per_dimension_plus_base() {
        let mut calls = 0;
        let _ = estimate_gradient(&[0.0; 4], |_| {
            calls += 1;
            0.0
        });
        assert_eq!(calls, 5);
    }

    #[test]
    fn infeasible_everywhere_yields_zero() {
        let grad = estimate_gradient(&[10.0, 10.0], |_| INFEASIBLE_COST);
        assert_eq!(grad, vec![0.0, 0.0]);

        let grad = estimate_gradient(&[1.0], |_| f64::INFINITY);
        assert_eq!(grad, vec![0.0]);
    }

    #[test]
    fn leaves_input_untouched() {
        let x = vec![0.25, -0.75];
        let copy = x.clone();
        let _ = estimate_gradient(&x, |p| p[0] - p[1]);
        assert_eq!(x, copy);
    }
}
