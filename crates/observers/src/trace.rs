use bolzano_core::Observer;
use tracing::{debug, info};

use crate::traits::IterationEvent;

/// Logs each iteration as a structured `tracing` event.
///
/// Iterations are emitted at `DEBUG`; the stopping iteration is also emitted
/// at `INFO`. The observer never changes the course of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceObserver {
    solver: &'static str,
}

impl TraceObserver {
    /// Creates an observer that tags every event with `solver`.
    #[must_use]
    pub fn new(solver: &'static str) -> Self {
        Self { solver }
    }

    /// Returns the solver name attached to events.
    #[must_use]
    pub fn solver(&self) -> &'static str {
        self.solver
    }
}

impl<E: IterationEvent, A> Observer<E, A> for TraceObserver {
    fn observe(&mut self, event: &E) -> Option<A> {
        debug!(
            solver = self.solver,
            iteration = event.iteration(),
            x = event.candidate(),
            fx = ?event.residual(),
            error = ?event.step_error(),
            "iteration"
        );

        if event.stops() {
            info!(
                solver = self.solver,
                iteration = event.iteration(),
                root = event.candidate(),
                "stopping criterion met"
            );
        }

        None
    }
}
