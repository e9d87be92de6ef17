use crate::DimensionMismatch;

/// Cost held by a solution that has not been evaluated yet.
pub const UNKNOWN_COST: f64 = f64::MAX;

/// A candidate point and its cost.
///
/// The best solution of a run is only ever mutated through
/// [`ContinuousSolution::try_update`], which keeps its cost non-increasing.
#[derive(Debug, Clone, PartialEq)]
pub struct ContinuousSolution {
    values: Vec<f64>,
    cost: f64,
}

impl ContinuousSolution {
    /// Creates a solution with a known cost.
    #[must_use]
    pub fn new(values: Vec<f64>, cost: f64) -> Self {
        Self { values, cost }
    }

    /// Creates a solution whose cost is not yet known.
    #[must_use]
    pub fn unevaluated(values: Vec<f64>) -> Self {
        Self::new(values, UNKNOWN_COST)
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn cost(&self) -> f64 {
        self.cost
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    /// Replaces the held point if `cost` is strictly lower.
    ///
    /// Returns the improvement (`old_cost - cost`) when the update happens and
    /// `None` otherwise. A `NaN` cost never updates.
    pub fn try_update(&mut self, values: &[f64], cost: f64) -> Option<f64> {
        if cost < self.cost {
            let improvement = self.cost - cost;
            self.values.clear();
            self.values.extend_from_slice(values);
            self.cost = cost;
            Some(improvement)
        } else {
            None
        }
    }

    /// Returns the coordinate-wise sum, with an unknown cost.
    ///
    /// # Errors
    ///
    /// Returns a [`DimensionMismatch`] if the lengths differ.
    pub fn checked_add(&self, other: &Self) -> Result<Self, DimensionMismatch> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Returns the coordinate-wise difference, with an unknown cost.
    ///
    /// # Errors
    ///
    /// Returns a [`DimensionMismatch`] if the lengths differ.
    pub fn checked_sub(&self, other: &Self) -> Result<Self, DimensionMismatch> {
        self.zip_with(other, |a, b| a - b)
    }

    /// Returns the point scaled by `factor`, with an unknown cost.
    #[must_use]
    pub fn scale(&self, factor: f64) -> Self {
        Self::unevaluated(self.values.iter().map(|v| v * factor).collect())
    }

    /// Returns the point divided by `divisor`, with an unknown cost.
    #[must_use]
    pub fn divide(&self, divisor: f64) -> Self {
        Self::unevaluated(self.values.iter().map(|v| v / divisor).collect())
    }

    /// Returns the squared Euclidean distance to `other`.
    ///
    /// # Errors
    ///
    /// Returns a [`DimensionMismatch`] if the lengths differ.
    pub fn distance_sq(&self, other: &Self) -> Result<f64, DimensionMismatch> {
        DimensionMismatch::check(self.len(), other.len())?;
        Ok(self
            .values
            .iter()
            .zip(&other.values)
            .map(|(a, b)| (a - b).powi(2))
            .sum())
    }

    fn zip_with(
        &self,
        other: &Self,
        op: impl Fn(f64, f64) -> f64,
    ) -> Result<Self, DimensionMismatch> {
        DimensionMismatch::check(self.len(), other.len())?;
        let values = self
            .values
            .iter()
            .zip(&other.values)
            .map(|(&a, &b)| op(a, b))
            .collect();
        Ok(Self::unevaluated(values))
    }
}
