use thiserror::Error;

/// A vector had a different length than the problem dimension requires.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("dimension mismatch: expected {expected}, got {actual}")]
pub struct DimensionMismatch {
    /// The required length.
    pub expected: usize,

    /// The length that was supplied.
    pub actual: usize,
}

impl DimensionMismatch {
    /// Returns `Ok` if `actual == expected`.
    ///
    /// # Errors
    ///
    /// Returns a [`DimensionMismatch`] if the lengths differ.
    pub fn check(expected: usize, actual: usize) -> Result<(), Self> {
        if expected == actual {
            Ok(())
        } else {
            Err(Self { expected, actual })
        }
    }
}
