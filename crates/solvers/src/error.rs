use thiserror::Error;

use descent_core::DimensionMismatch;

/// Errors that can occur when starting a solver.
///
/// Only structural problems are errors. Numerical trouble during a run is
/// handled inside the solver and reported through [`Status`].
///
/// [`Status`]: crate::Status
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("starting point has no coordinates")]
    EmptyStart,

    #[error(transparent)]
    DimensionMismatch(#[from] DimensionMismatch),
}
