//! Reusable observers for the Bolzano root finders.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with both the bisection and the secant solver.
//!
//! # Modules
//!
//! - [`traits`]: capability traits for cross-solver observers
//!   ([`IterationEvent`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`TraceObserver`] logs every iteration through `tracing`
//! - [`DivergenceGuard`] stops a run whose function values blow up
//! - [`Chain`] runs two observers on the same events
//!
//! [`Observer`]: bolzano_core::Observer
//! [`IterationEvent`]: traits::IterationEvent
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod chain;
mod guard;
mod trace;

pub use chain::Chain;
pub use guard::DivergenceGuard;
pub use trace::TraceObserver;
