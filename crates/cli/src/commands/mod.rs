//! CLI command implementations.
//!
//! Each submodule implements one subcommand.

pub mod bisect;
pub mod check;
pub mod run;
pub mod secant;
