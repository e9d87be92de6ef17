//! Slice arithmetic shared by the solvers.

pub(crate) fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

pub(crate) fn norm(v: &[f64]) -> f64 {
    dot(v, v).sqrt()
}

pub(crate) fn negate(v: &[f64]) -> Vec<f64> {
    v.iter().map(|x| -x).collect()
}

/// Returns `x + alpha * d`.
pub(crate) fn add_scaled(x: &[f64], alpha: f64, d: &[f64]) -> Vec<f64> {
    x.iter().zip(d).map(|(xi, di)| xi + alpha * di).collect()
}

/// Returns `a - b`.
pub(crate) fn sub(a: &[f64], b: &[f64]) -> Vec<f64> {
    a.iter().zip(b).map(|(x, y)| x - y).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn basic_operations() {
        let a = [1.0, 2.0, 2.0];
        let b = [0.5, -1.0, 4.0];

        assert_relative_eq!(dot(&a, &b), 6.5);
        assert_relative_eq!(norm(&a), 3.0);
        assert_eq!(negate(&a), vec![-1.0, -2.0, -2.0]);
        assert_eq!(add_scaled(&a, 2.0, &b), vec![2.0, 0.0, 10.0]);
        assert_eq!(sub(&a, &b), vec![0.5, 3.0, -2.0]);
    }
}
