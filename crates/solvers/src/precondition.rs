//! Bolzano's theorem as a precondition.
//!
//! If a continuous function takes values of opposite sign at the ends of an
//! interval, it has a root inside it. Bisection refuses to start unless the
//! initial interval passes this check.

use bolzano_core::Function;

use crate::{Error, ParamError, evaluate::evaluate};

/// Outcome of a standalone Bolzano check on `[a, b]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct BolzanoReport {
    pub a: f64,
    pub b: f64,
    pub fa: f64,
    pub fb: f64,
    /// True if `f(a)` and `f(b)` have strictly opposite signs.
    pub satisfied: bool,
}

/// Returns true if `f(a) · f(b) < 0`.
///
/// A zero endpoint does not satisfy the check.
///
/// # Errors
///
/// Returns [`Error::Evaluation`] if `f` cannot be evaluated at either point.
pub fn check_sign_change<F: Function>(f: &F, a: f64, b: f64) -> Result<bool, Error> {
    let fa = evaluate(f, a)?;
    let fb = evaluate(f, b)?;
    Ok(changes_sign(fa, fb))
}

/// Checks Bolzano's theorem on `[a, b]` and reports both endpoint values.
///
/// # Errors
///
/// Returns [`Error::InvalidParameters`] if `a` or `b` is not finite or
/// `a >= b`, and [`Error::Evaluation`] if `f` fails at either endpoint.
pub fn bolzano<F: Function>(f: &F, a: f64, b: f64) -> Result<BolzanoReport, Error> {
    let a = ParamError::check_seed("a", a)?;
    let b = ParamError::check_seed("b", b)?;
    if a >= b {
        return Err(ParamError::UnorderedBounds { a, b }.into());
    }

    let fa = evaluate(f, a)?;
    let fb = evaluate(f, b)?;

    Ok(BolzanoReport {
        a,
        b,
        fa,
        fb,
        satisfied: changes_sign(fa, fb),
    })
}

/// Fails with [`Error::PreconditionFailed`] unless `f` changes sign on `[a, b]`.
pub(crate) fn require_sign_change<F: Function>(f: &F, a: f64, b: f64) -> Result<(), Error> {
    let fa = evaluate(f, a)?;
    let fb = evaluate(f, b)?;
    if changes_sign(fa, fb) {
        Ok(())
    } else {
        Err(Error::PreconditionFailed { a, b, fa, fb })
    }
}

fn changes_sign(fa: f64, fb: f64) -> bool {
    fa * fb < 0.0
}
