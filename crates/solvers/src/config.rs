use thiserror::Error;

use crate::criterion::{Criterion, Policy, Threshold};

/// Largest accepted decimal-precision hint.
pub const MAX_DECIMALS: u32 = 15;

/// Numerical parameters shared by the bisection and secant solvers.
///
/// `decimals` is a display hint for callers; only the secant solver uses it
/// in arithmetic (see [`secant`](crate::secant)).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Config {
    pub(crate) tolerance: f64,
    pub(crate) max_iters: usize,
    pub(crate) decimals: u32,
    pub(crate) criterion: Criterion,
}

/// Errors that can occur when validating a solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tolerance must be finite and positive")]
    Tolerance,

    #[error("max_iters must be positive")]
    MaxIters,

    #[error("decimals must be between 0 and {}", MAX_DECIMALS)]
    Decimals,

    #[error("divergence limit must be finite and positive")]
    DivergenceLimit,
}

impl ConfigError {
    /// Returns the name of the offending field.
    #[must_use]
    pub fn field(self) -> &'static str {
        match self {
            Self::Tolerance => "tolerance",
            Self::MaxIters => "max_iters",
            Self::Decimals => "decimals",
            Self::DivergenceLimit => "divergence_limit",
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: 1e-4,
            max_iters: 100,
            decimals: 4,
            criterion: Criterion::AbsoluteOnFunction,
        }
    }
}

impl Config {
    /// Creates a new validated config.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is not finite and positive,
    /// `max_iters` is zero, or `decimals` exceeds [`MAX_DECIMALS`].
    pub fn new(
        tolerance: f64,
        max_iters: usize,
        decimals: u32,
        criterion: Criterion,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            tolerance,
            max_iters,
            decimals,
            criterion,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks every field against its documented range.
    ///
    /// Solvers call this before iterating, so configs built through
    /// deserialization are checked too.
    ///
    /// # Errors
    ///
    /// Returns the first field that is out of range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(ConfigError::Tolerance);
        }
        if self.max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }
        if self.decimals > MAX_DECIMALS {
            return Err(ConfigError::Decimals);
        }
        Ok(())
    }

    /// Returns the stopping tolerance.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the iteration budget.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the decimal-precision hint.
    #[must_use]
    pub fn decimals(&self) -> u32 {
        self.decimals
    }

    /// Returns the stopping criterion.
    #[must_use]
    pub fn criterion(&self) -> Criterion {
        self.criterion
    }

    pub(crate) fn policy(&self, threshold: Threshold) -> Policy {
        Policy {
            criterion: self.criterion,
            tolerance: self.tolerance,
            max_iters: self.max_iters,
            threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(Config::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_tolerance() {
        for tolerance in [0.0, -1e-3, f64::NAN, f64::INFINITY] {
            let result = Config::new(tolerance, 10, 4, Criterion::AbsoluteOnFunction);
            assert_eq!(result, Err(ConfigError::Tolerance));
        }
    }

    #[test]
    fn rejects_zero_iterations() {
        let result = Config::new(1e-6, 0, 4, Criterion::RelativeOnIterate);
        assert_eq!(result, Err(ConfigError::MaxIters));
    }

    #[test]
    fn decimals_range_is_inclusive() {
        assert!(Config::new(1e-6, 10, 0, Criterion::AbsoluteOnFunction).is_ok());
        assert!(Config::new(1e-6, 10, 15, Criterion::AbsoluteOnFunction).is_ok());
        assert_eq!(
            Config::new(1e-6, 10, 16, Criterion::AbsoluteOnFunction),
            Err(ConfigError::Decimals)
        );
    }

    #[test]
    fn errors_name_their_field() {
        assert_eq!(ConfigError::Tolerance.field(), "tolerance");
        assert_eq!(ConfigError::MaxIters.field(), "max_iters");
        assert_eq!(ConfigError::Decimals.field(), "decimals");
        assert_eq!(ConfigError::DivergenceLimit.field(), "divergence_limit");
    }
}
