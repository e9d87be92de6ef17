use thiserror::Error;

/// Configuration for the backtracking line search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    sigma: f64,
    beta: f64,
    min_alpha: f64,
    max_trials: Option<usize>,
}

/// Errors that can occur when validating a line search config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("sigma must lie strictly between 0 and 1")]
    Sigma,

    #[error("beta must lie strictly between 0 and 1")]
    Beta,

    #[error("min_alpha must be finite and positive")]
    MinAlpha,

    #[error("max_trials must be at least 1")]
    MaxTrials,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sigma: 1e-4,
            beta: 0.5,
            min_alpha: 1e-10,
            max_trials: None,
        }
    }
}

impl Config {
    /// Creates a new config with validated parameters.
    ///
    /// `max_trials` caps the number of trial points; `None` leaves the search
    /// bounded only by `min_alpha`.
    ///
    /// # Errors
    ///
    /// Returns an error if a parameter is out of range.
    pub fn new(
        sigma: f64,
        beta: f64,
        min_alpha: f64,
        max_trials: Option<usize>,
    ) -> Result<Self, ConfigError> {
        if !(sigma > 0.0 && sigma < 1.0) {
            return Err(ConfigError::Sigma);
        }
        if !(beta > 0.0 && beta < 1.0) {
            return Err(ConfigError::Beta);
        }
        if !min_alpha.is_finite() || min_alpha <= 0.0 {
            return Err(ConfigError::MinAlpha);
        }
        if max_trials == Some(0) {
            return Err(ConfigError::MaxTrials);
        }

        Ok(Self {
            sigma,
            beta,
            min_alpha,
            max_trials,
        })
    }

    /// Returns a copy with a trial cap.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_trials` is zero.
    pub fn with_max_trials(self, max_trials: usize) -> Result<Self, ConfigError> {
        Self::new(self.sigma, self.beta, self.min_alpha, Some(max_trials))
    }

    /// Returns the sufficient-decrease coefficient.
    #[must_use]
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Returns the backtracking shrink factor.
    #[must_use]
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Returns the step length below which the search gives up.
    #[must_use]
    pub fn min_alpha(&self) -> f64 {
        self.min_alpha
    }

    /// Returns the trial cap, if any.
    #[must_use]
    pub fn max_trials(&self) -> Option<usize> {
        self.max_trials
    }
}
