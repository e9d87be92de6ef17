use thiserror::Error;

use crate::line_search;

/// Configuration for BFGS.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    curvature_tol: f64,
    line_search: line_search::Config,
}

/// Errors that can occur when validating a BFGS config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("curvature_tol must be finite and non-negative")]
    CurvatureTol,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            curvature_tol: 1e-10,
            line_search: line_search::Config::default(),
        }
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// `curvature_tol` is the relative threshold below which a curvature pair
    /// is considered degenerate and the Hessian update is skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if `curvature_tol` is negative or non-finite.
    pub fn new(curvature_tol: f64, line_search: line_search::Config) -> Result<Self, ConfigError> {
        if !curvature_tol.is_finite() || curvature_tol < 0.0 {
            return Err(ConfigError::CurvatureTol);
        }

        Ok(Self {
            curvature_tol,
            line_search,
        })
    }

    /// Returns a copy using `line_search` for every step.
    #[must_use]
    pub fn with_line_search(self, line_search: line_search::Config) -> Self {
        Self {
            line_search,
            ..self
        }
    }

    #[must_use]
    pub fn curvature_tol(&self) -> f64 {
        self.curvature_tol
    }

    #[must_use]
    pub fn line_search(&self) -> &line_search::Config {
        &self.line_search
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_curvature_tol() {
        let ls = line_search::Config::default();
        assert_eq!(Config::new(-1.0, ls), Err(ConfigError::CurvatureTol));
        assert_eq!(Config::new(f64::NAN, ls), Err(ConfigError::CurvatureTol));
        assert_eq!(Config::new(1e-10, ls), Ok(Config::default()));
    }
}
