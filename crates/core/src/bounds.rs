use crate::DimensionMismatch;

/// Box bounds `[lower_i, upper_i]` on each solver variable.
///
/// The lower and upper vectors always have the same length, which is the
/// problem dimension. A point is feasible when every coordinate lies within
/// its closed interval.
#[derive(Debug, Clone, PartialEq)]
pub struct Bounds {
    lower: Vec<f64>,
    upper: Vec<f64>,
}

impl Bounds {
    /// Creates bounds from explicit lower and upper vectors.
    ///
    /// # Errors
    ///
    /// Returns a [`DimensionMismatch`] if the vectors differ in length.
    pub fn new(lower: Vec<f64>, upper: Vec<f64>) -> Result<Self, DimensionMismatch> {
        DimensionMismatch::check(lower.len(), upper.len())?;
        Ok(Self { lower, upper })
    }

    /// Creates bounds with the same interval in every dimension.
    #[must_use]
    pub fn uniform(dimension: usize, lower: f64, upper: f64) -> Self {
        Self {
            lower: vec![lower; dimension],
            upper: vec![upper; dimension],
        }
    }

    /// Creates bounds that admit every finite point.
    #[must_use]
    pub fn unbounded(dimension: usize) -> Self {
        Self::uniform(dimension, f64::NEG_INFINITY, f64::INFINITY)
    }

    /// Returns the number of bounded dimensions.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.lower.len()
    }

    #[must_use]
    pub fn lower(&self) -> &[f64] {
        &self.lower
    }

    #[must_use]
    pub fn upper(&self) -> &[f64] {
        &self.upper
    }

    /// Sets the lower bound of a single dimension.
    ///
    /// # Panics
    ///
    /// Panics if `dimension` is out of range.
    pub fn set_lower(&mut self, dimension: usize, value: f64) {
        self.lower[dimension] = value;
    }

    /// Sets the upper bound of a single dimension.
    ///
    /// # Panics
    ///
    /// Panics if `dimension` is out of range.
    pub fn set_upper(&mut self, dimension: usize, value: f64) {
        self.upper[dimension] = value;
    }

    /// Replaces the whole lower-bound vector.
    ///
    /// # Errors
    ///
    /// Returns a [`DimensionMismatch`] if `lower` has the wrong length.
    pub fn set_lower_bounds(&mut self, lower: Vec<f64>) -> Result<(), DimensionMismatch> {
        DimensionMismatch::check(self.dimension(), lower.len())?;
        self.lower = lower;
        Ok(())
    }

    /// Replaces the whole upper-bound vector.
    ///
    /// # Errors
    ///
    /// Returns a [`DimensionMismatch`] if `upper` has the wrong length.
    pub fn set_upper_bounds(&mut self, upper: Vec<f64>) -> Result<(), DimensionMismatch> {
        DimensionMismatch::check(self.dimension(), upper.len())?;
        self.upper = upper;
        Ok(())
    }

    /// Checks that `x` has one coordinate per bounded dimension.
    ///
    /// # Errors
    ///
    /// Returns a [`DimensionMismatch`] if the lengths differ.
    pub fn check_dimension(&self, x: &[f64]) -> Result<(), DimensionMismatch> {
        DimensionMismatch::check(self.dimension(), x.len())
    }

    /// Returns true if every coordinate of `x` lies within its interval.
    ///
    /// A `NaN` coordinate is never contained. A point of the wrong length is
    /// not contained either.
    #[must_use]
    pub fn contains(&self, x: &[f64]) -> bool {
        x.len() == self.dimension()
            && x
                .iter()
                .zip(self.lower.iter().zip(&self.upper))
                .all(|(&xi, (&lo, &hi))| lo <= xi && xi <= hi)
    }
}
