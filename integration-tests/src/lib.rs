//! Shared fixtures for the Bolzano integration tests.

use bolzano_expr::Expression;
use bolzano_solvers::{Config, ConfigError, Criterion, secant};

/// `x³ − x − 2`, with a single real root near `1.5214`.
pub const CUBIC: &str = "x^3 - x - 2";

/// `x² − 2`, with roots at `±√2`.
pub const SQUARE_MINUS_TWO: &str = "x^2 - 2";

/// Parses a fixture expression.
///
/// # Panics
///
/// Panics if `text` is not a valid expression.
#[must_use]
pub fn expression(text: &str) -> Expression {
    Expression::parse(text).unwrap_or_else(|err| panic!("fixture `{text}` must parse: {err}"))
}

/// Builds a bisection config.
///
/// # Errors
///
/// Returns an error if any parameter is out of range.
pub fn config(
    tolerance: f64,
    max_iters: usize,
    decimals: u32,
    criterion: Criterion,
) -> Result<Config, ConfigError> {
    Config::new(tolerance, max_iters, decimals, criterion)
}

/// Builds a secant config with a fractional error scale.
///
/// # Errors
///
/// Returns an error if any parameter is out of range.
pub fn secant_config(
    tolerance: f64,
    max_iters: usize,
    decimals: u32,
    criterion: Criterion,
) -> Result<secant::Config, ConfigError> {
    config(tolerance, max_iters, decimals, criterion).map(secant::Config::from)
}
