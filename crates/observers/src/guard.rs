use bolzano_core::Observer;
use bolzano_solvers::ConfigError;
use tracing::warn;

use crate::traits::{CanStopEarly, IterationEvent};

/// Stops a run once `|f(candidate)|` exceeds a limit or stops being finite.
///
/// The secant method needs no bracket and can walk away from the root; this
/// guard ends such runs early instead of spending the whole budget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DivergenceGuard {
    limit: f64,
}

impl DivergenceGuard {
    /// Creates a guard for the given limit on `|f|`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DivergenceLimit`] unless `limit` is finite and
    /// positive.
    pub fn new(limit: f64) -> Result<Self, ConfigError> {
        if limit.is_finite() && limit > 0.0 {
            Ok(Self { limit })
        } else {
            Err(ConfigError::DivergenceLimit)
        }
    }

    /// Returns the limit on `|f|`.
    #[must_use]
    pub fn limit(&self) -> f64 {
        self.limit
    }
}

impl<E: IterationEvent, A: CanStopEarly> Observer<E, A> for DivergenceGuard {
    fn observe(&mut self, event: &E) -> Option<A> {
        // A missing value ends the run on its own.
        let residual = event.residual()?;
        if residual.is_finite() && residual.abs() <= self.limit {
            return None;
        }

        warn!(
            iteration = event.iteration(),
            x = event.candidate(),
            fx = residual,
            limit = self.limit,
            "function value out of range, stopping"
        );
        Some(A::stop_early())
    }
}
