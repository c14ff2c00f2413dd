use std::error::Error as StdError;

use thiserror::Error;

use crate::config::ConfigError;

/// A parameter rejected before any iteration ran.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ParamError {
    #[error("{name} must be a finite number, got {value}")]
    NonFiniteSeed { name: &'static str, value: f64 },

    #[error("left bound {a} must be less than right bound {b}")]
    UnorderedBounds { a: f64, b: f64 },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ParamError {
    /// Returns the name of the offending field.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::NonFiniteSeed { name, .. } => *name,
            Self::UnorderedBounds { .. } => "bounds",
            Self::Config(err) => err.field(),
        }
    }

    /// Checks that a seed value is a finite number.
    pub(crate) fn check_seed(name: &'static str, value: f64) -> Result<f64, Self> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Self::NonFiniteSeed { name, value })
        }
    }
}

/// Errors that can occur while running a solver.
///
/// Every variant is fatal for the run: no partial result is returned.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid parameters: {0}")]
    InvalidParameters(#[from] ParamError),

    #[error(
        "Bolzano's theorem does not hold on [{a}, {b}]: f({a}) = {fa} and f({b}) = {fb} \
         do not have opposite signs; choose an interval where f changes sign"
    )]
    PreconditionFailed { a: f64, b: f64, fa: f64, fb: f64 },

    #[error("evaluation failed at x = {x}")]
    Evaluation {
        x: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("division by zero in secant step: f({x_prev}) = f({x_curr}) = {fx}")]
    DivisionByZero { x_prev: f64, x_curr: f64, fx: f64 },
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::InvalidParameters(err.into())
    }
}

impl Error {
    pub(crate) fn evaluation<E: StdError + Send + Sync + 'static>(x: f64, err: E) -> Self {
        Self::Evaluation {
            x,
            source: Box::new(err),
        }
    }

    /// Returns true if the run failed while evaluating the function.
    ///
    /// A secant [`Error::DivisionByZero`] counts as an evaluation failure.
    #[must_use]
    pub fn is_evaluation(&self) -> bool {
        matches!(self, Self::Evaluation { .. } | Self::DivisionByZero { .. })
    }

    /// Returns the point where evaluation failed, if any.
    #[must_use]
    pub fn point(&self) -> Option<f64> {
        match self {
            Self::Evaluation { x, .. } => Some(*x),
            Self::DivisionByZero { x_curr, .. } => Some(*x_curr),
            Self::InvalidParameters(_) | Self::PreconditionFailed { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_become_invalid_parameters() {
        let err = Error::from(ConfigError::Decimals);
        match err {
            Error::InvalidParameters(param) => assert_eq!(param.field(), "decimals"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn seed_check_names_field() {
        let err = ParamError::check_seed("xs", f64::NAN).expect_err("nan seed");
        assert_eq!(err.field(), "xs");
        assert_eq!(ParamError::check_seed("x0", 1.5), Ok(1.5));
    }

    #[test]
    fn evaluation_errors_keep_their_source() {
        let err = Error::evaluation(0.5, std::fmt::Error);
        assert!(err.is_evaluation());
        assert_eq!(err.point(), Some(0.5));
        assert!(StdError::source(&err).is_some());
    }

    #[test]
    fn precondition_message_is_actionable() {
        let err = Error::PreconditionFailed {
            a: 0.0,
            b: 1.0,
            fa: 1.0,
            fb: 2.0,
        };
        assert!(!err.is_evaluation());
        assert!(err.to_string().contains("choose an interval where f changes sign"));
    }
}
