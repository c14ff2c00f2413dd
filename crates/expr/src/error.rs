use evalexpr::EvalexprError;
use thiserror::Error;

/// Errors raised while parsing or evaluating an [`Expression`](crate::Expression).
#[derive(Debug, Error, PartialEq)]
pub enum ExprError {
    #[error("expression is empty")]
    Empty,

    #[error("cannot parse `{input}`: {source}")]
    Parse {
        input: String,
        #[source]
        source: EvalexprError,
    },

    #[error("unknown variable `{0}`, only `x`, `pi` and `e` are defined")]
    UnknownVariable(String),

    #[error("cannot evaluate at x = {x}: {source}")]
    Eval {
        x: f64,
        #[source]
        source: EvalexprError,
    },

    #[error("f({x}) is not a finite number: {value}")]
    NonFinite { x: f64, value: f64 },
}

impl ExprError {
    /// Returns the point at which evaluation failed, if any.
    #[must_use]
    pub fn point(&self) -> Option<f64> {
        match self {
            Self::Eval { x, .. } | Self::NonFinite { x, .. } => Some(*x),
            Self::Empty | Self::Parse { .. } | Self::UnknownVariable(_) => None,
        }
    }
}
