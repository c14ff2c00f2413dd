//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, so one
//! observer can watch either solver.
//!
//! # Example
//!
//! ```rust
//! use bolzano_core::Observer;
//! use bolzano_observers::traits::{CanStopEarly, IterationEvent};
//!
//! struct CloseEnough {
//!     tolerance: f64,
//! }
//!
//! impl<E: IterationEvent, A: CanStopEarly> Observer<E, A> for CloseEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         let close = event.residual().is_some_and(|fx| fx.abs() < self.tolerance);
//!         close.then(A::stop_early)
//!     }
//! }
//! ```

use bolzano_solvers::{bisection, secant};

/// An event describing one recorded iteration.
pub trait IterationEvent {
    /// Returns the iteration number, starting at 1.
    fn iteration(&self) -> usize;

    /// Returns the candidate root computed in this iteration.
    fn candidate(&self) -> f64;

    /// Returns the function value at the candidate, if it could be evaluated.
    fn residual(&self) -> Option<f64>;

    /// Returns the recorded step error, if any.
    fn step_error(&self) -> Option<f64>;

    /// Returns true if the solver stops after this iteration.
    fn stops(&self) -> bool;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl IterationEvent for bisection::Event<'_> {
    fn iteration(&self) -> usize {
        self.record.iteration
    }

    fn candidate(&self) -> f64 {
        self.record.xr
    }

    fn residual(&self) -> Option<f64> {
        Some(self.record.fxr)
    }

    fn step_error(&self) -> Option<f64> {
        self.record.error
    }

    fn stops(&self) -> bool {
        self.stops
    }
}

impl IterationEvent for secant::Event<'_> {
    fn iteration(&self) -> usize {
        self.record.iteration
    }

    fn candidate(&self) -> f64 {
        self.record.x_next
    }

    fn residual(&self) -> Option<f64> {
        self.record.f_next
    }

    fn step_error(&self) -> Option<f64> {
        self.record.error
    }

    fn stops(&self) -> bool {
        self.stops
    }
}

impl CanStopEarly for bisection::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for secant::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
