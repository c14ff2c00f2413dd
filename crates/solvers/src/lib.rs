//! Bisection and secant root finders that record every iteration.
//!
//! Both solvers take a [`Function`] and a validated [`Config`], run a bounded
//! number of iterations and return a [`RunResult`] holding the full iteration
//! table, the root estimate and whether the stopping criterion was met.
//!
//! # Solvers
//!
//! - [`bisection`]: interval halving, gated by a sign-change check
//! - [`secant`]: two-point secant recurrence on precision-limited values
//!
//! # Shared pieces
//!
//! - [`criterion`]: stopping criteria and the step error they record
//! - [`precondition`]: Bolzano's sign-change check
//! - [`rounding`]: decimal rounding used for display and by the secant solver
//!
//! [`Function`]: bolzano_core::Function

mod config;
mod error;
mod evaluate;
mod run;

pub mod bisection;
pub mod criterion;
pub mod precondition;
pub mod rounding;
pub mod secant;

pub use config::{Config, ConfigError, MAX_DECIMALS};
pub use criterion::Criterion;
pub use error::{Error, ParamError};
pub use run::{RunResult, Status};
