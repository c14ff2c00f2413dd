//! Core traits for the Bolzano root-finding engine.
//!
//! This crate defines the capabilities that the solvers consume and that
//! callers provide:
//!
//! - [`Function`]: a pure, fallible real function of one variable
//! - [`Fallible`]: adapts a `Fn(f64) -> Result<f64, E>` closure into a [`Function`]
//! - [`Observer`]: receives solver events and optionally returns control actions

mod function;
mod observer;

pub use function::{Fallible, Function};
pub use observer::Observer;
