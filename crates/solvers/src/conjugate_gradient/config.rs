use thiserror::Error;

use crate::line_search;

use super::BetaFormula;

/// Which form of the previous direction feeds the next one.
///
/// `Unit` mixes in the unit direction the line search actually searched.
/// `Full` keeps the previous direction at the length it was computed with,
/// and converges much faster on curved valleys such as Rosenbrock's.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PreviousDirection {
    #[default]
    Unit,
    Full,
}

/// Configuration for conjugate gradient search.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Config {
    formula: BetaFormula,
    previous_direction: PreviousDirection,
    restart_every: Option<usize>,
    line_search: line_search::Config,
}

/// Errors that can occur when validating a conjugate gradient config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("restart_every must be at least 1")]
    RestartEvery,
}

impl Config {
    /// Creates a new config.
    ///
    /// With `restart_every = Some(n)` every `n`-th direction is steepest
    /// descent. With `None` the search restarts only when a line search fails.
    ///
    /// # Errors
    ///
    /// Returns an error if `restart_every` is `Some(0)`.
    pub fn new(
        formula: BetaFormula,
        restart_every: Option<usize>,
        line_search: line_search::Config,
    ) -> Result<Self, ConfigError> {
        if restart_every == Some(0) {
            return Err(ConfigError::RestartEvery);
        }

        Ok(Self {
            formula,
            previous_direction: PreviousDirection::default(),
            restart_every,
            line_search,
        })
    }

    /// Returns a copy using `formula`.
    #[must_use]
    pub fn with_formula(self, formula: BetaFormula) -> Self {
        Self { formula, ..self }
    }

    /// Returns a copy that restarts along steepest descent every `n` directions.
    ///
    /// # Errors
    ///
    /// Returns an error if `n` is zero.
    pub fn with_restart_every(self, n: usize) -> Result<Self, ConfigError> {
        if n == 0 {
            return Err(ConfigError::RestartEvery);
        }

        Ok(Self {
            restart_every: Some(n),
            ..self
        })
    }

    /// Returns a copy that carries the previous direction in the given form.
    #[must_use]
    pub fn with_previous_direction(self, previous_direction: PreviousDirection) -> Self {
        Self {
            previous_direction,
            ..self
        }
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
    pub fn formula(&self) -> BetaFormula {
        self.formula
    }

    #[must_use]
    pub fn previous_direction(&self) -> PreviousDirection {
        self.previous_direction
    }

    #[must_use]
    pub fn restart_every(&self) -> Option<usize> {
        self.restart_every
    }

    #[must_use]
    pub fn line_search(&self) -> &line_search::Config {
        &self.line_search
    }
}
