use ndarray::{Array2, ArrayView1};

/// Whether a curvature pair changed the approximation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Update {
    Applied,

    /// The pair failed the curvature test and was ignored.
    Skipped,
}

/// A quasi-Newton approximation of the Hessian and its inverse.
///
/// `B` approximates the Hessian and `H` its inverse. Both start at the
/// identity and receive matching rank-two BFGS updates, so the descent
/// direction `-H g` never needs a linear solve.
#[derive(Debug, Clone, PartialEq)]
pub struct HessianApproximation {
    hessian: Array2<f64>,
    inverse: Array2<f64>,
    identity: bool,
}

impl HessianApproximation {
    /// Creates the identity approximation for `dimension` variables.
    #[must_use]
    pub fn identity(dimension: usize) -> Self {
        Self {
            hessian: Array2::eye(dimension),
            inverse: Array2::eye(dimension),
            identity: true,
        }
    }

    #[must_use]
    pub fn dimension(&self) -> usize {
        self.hessian.nrows()
    }

    /// Returns true if no update has been applied since creation or the last reset.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.identity
    }

    /// Returns the Hessian approximation `B`.
    #[must_use]
    pub fn matrix(&self) -> &Array2<f64> {
        &self.hessian
    }

    /// Returns the inverse approximation `H`.
    #[must_use]
    pub fn inverse(&self) -> &Array2<f64> {
        &self.inverse
    }

    /// Returns the quasi-Newton direction `p` solving `B p = -g`.
    #[must_use]
    pub fn direction(&self, gradient: &[f64]) -> Vec<f64> {
        self.inverse
            .dot(&ArrayView1::from(gradient))
            .iter()
            .map(|v| -v)
            .collect()
    }

    /// Applies the BFGS update for step `s` and gradient change `y`.
    ///
    /// The update is skipped unless `y · s > tol |y| |s|` and
    /// `s · B s > tol |s|^2`, which keeps both matrices symmetric positive
    /// definite.
    pub fn update(&mut self, s: &[f64], y: &[f64], tol: f64) -> Update {
        let s = ArrayView1::from(s);
        let y = ArrayView1::from(y);

        let ys = y.dot(&s);
        let bs = self.hessian.dot(&s);
        let sbs = s.dot(&bs);
        let s_norm = s.dot(&s).sqrt();
        let y_norm = y.dot(&y).sqrt();

        if !(ys > tol * y_norm * s_norm && sbs > tol * s_norm * s_norm) {
            return Update::Skipped;
        }

        // B' = B + y y^T / (y.s) - (B s)(B s)^T / (s.B s)
        self.hessian.scaled_add(1.0 / ys, &outer(y, y));
        self.hessian.scaled_add(-1.0 / sbs, &outer(bs.view(), bs.view()));

        // H' = (I - rho s y^T) H (I - rho y s^T) + rho s s^T, expanded.
        let rho = 1.0 / ys;
        let hy = self.inverse.dot(&y);
        let yhy = y.dot(&hy);
        self.inverse.scaled_add(-rho, &outer(hy.view(), s));
        self.inverse.scaled_add(-rho, &outer(s, hy.view()));
        self.inverse.scaled_add(rho * rho * yhy + rho, &outer(s, s));

        self.identity = false;
        Update::Applied
    }

    /// Discards all curvature information.
    pub fn reset(&mut self) {
        *self = Self::identity(self.dimension());
    }
}

fn outer(a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> Array2<f64> {
    Array2::from_shape_fn((a.len(), b.len()), |(i, j)| a[i] * b[j])
}
