use thiserror::Error;

/// Configuration for the Nelder-Mead method.
///
/// Every trial point has the form `centroid + c * (centroid - worst)`, where
/// `c` is `alpha` for reflection, `gamma` for expansion, and `rho` for
/// contraction. `sigma` is the factor a reduction shrinks the simplex by.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    alpha: f64,
    gamma: f64,
    rho: f64,
    sigma: f64,
    initial_step: f64,
}

/// Errors that can occur when validating a Nelder-Mead config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("alpha must be finite and positive")]
    Alpha,

    #[error("gamma must be finite and greater than both 1 and alpha")]
    Gamma,

    #[error("rho must lie strictly between -1 and 0")]
    Rho,

    #[error("sigma must lie strictly between 0 and 1")]
    Sigma,

    #[error("initial_step must be finite and non-zero")]
    InitialStep,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            gamma: 2.0,
            rho: -0.5,
            sigma: 0.5,
            initial_step: 1.0,
        }
    }
}

impl Config {
    /// Creates a new config with validated coefficients.
    ///
    /// `initial_step` is the offset along each axis used to build the
    /// starting simplex around `x0`.
    ///
    /// # Errors
    ///
    /// Returns an error if a coefficient is out of range.
    pub fn new(
        alpha: f64,
        gamma: f64,
        rho: f64,
        sigma: f64,
        initial_step: f64,
    ) -> Result<Self, ConfigError> {
        if !alpha.is_finite() || alpha <= 0.0 {
            return Err(ConfigError::Alpha);
        }
        if !gamma.is_finite() || gamma <= 1.0 || gamma <= alpha {
            return Err(ConfigError::Gamma);
        }
        if !(rho > -1.0 && rho < 0.0) {
            return Err(ConfigError::Rho);
        }
        if !(sigma > 0.0 && sigma < 1.0) {
            return Err(ConfigError::Sigma);
        }
        if !initial_step.is_finite() || initial_step == 0.0 {
            return Err(ConfigError::InitialStep);
        }

        Ok(Self {
            alpha,
            gamma,
            rho,
            sigma,
            initial_step,
        })
    }

    /// Returns a copy with a different initial simplex size.
    ///
    /// # Errors
    ///
    /// Returns an error if `initial_step` is zero or non-finite.
    pub fn with_initial_step(self, initial_step: f64) -> Result<Self, ConfigError> {
        Self::new(self.alpha, self.gamma, self.rho, self.sigma, initial_step)
    }

    /// Returns the reflection coefficient.
    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Returns the expansion coefficient.
    #[must_use]
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Returns the contraction coefficient.
    #[must_use]
    pub fn rho(&self) -> f64 {
        self.rho
    }

    /// Returns the reduction factor.
    #[must_use]
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    #[must_use]
    pub fn initial_step(&self) -> f64 {
        self.initial_step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classical_defaults_are_valid() {
        assert_eq!(Config::new(1.0, 2.0, -0.5, 0.5, 1.0), Ok(Config::default()));
    }

    #[test]
    fn rejects_out_of_range_coefficients() {
        assert_eq!(Config::new(0.0, 2.0, -0.5, 0.5, 1.0), Err(ConfigError::Alpha));
        assert_eq!(Config::new(1.0, 1.0, -0.5, 0.5, 1.0), Err(ConfigError::Gamma));
        assert_eq!(Config::new(1.5, 1.2, -0.5, 0.5, 1.0), Err(ConfigError::Gamma));
        assert_eq!(Config::new(1.0, 2.0, 0.5, 0.5, 1.0), Err(ConfigError::Rho));
        assert_eq!(Config::new(1.0, 2.0, -0.5, 1.0, 1.0), Err(ConfigError::Sigma));
        assert_eq!(
            Config::default().with_initial_step(0.0),
            Err(ConfigError::InitialStep)
        );
    }
}
