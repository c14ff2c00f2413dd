//! Bisection method for roots of a single-variable function.
//!
//! # Algorithm
//!
//! Bisection starts from an interval `[xi, xs]` on which the function changes
//! sign and repeatedly evaluates the midpoint `xr = (xi + xs) / 2`. The half
//! of the interval on which the sign change persists is kept:
//!
//! - `f(xi) · f(xr) < 0` keeps `[xi, xr]`
//! - otherwise `[xr, xs]` is kept, including the case `f(xi) · f(xr) == 0`
//!
//! # Stopping
//!
//! After each midpoint the active [`Criterion`] decides whether to stop (see
//! [`criterion`](crate::criterion)). The step error compares the midpoint to
//! the previous one, so the first iteration has no error and is never flagged
//! as a root, although an exact root there still ends the run.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per recorded iteration. Observers can return
//! [`Action::StopEarly`] to end the run after that iteration.
//!
//! [`Criterion`]: crate::Criterion

mod action;
mod event;
mod record;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use event::Event;
pub use record::{Half, Record};

use bolzano_core::{Function, Observer};

use crate::{
    Config, Error, ParamError, RunResult, Status,
    criterion::Threshold,
    evaluate::evaluate,
    precondition::require_sign_change,
    run::PREALLOCATED_RECORDS,
};

/// Finds a root of `f` in `bracket = [xi, xs]` using bisection.
///
/// The observer receives an [`Event`] after each iteration is recorded.
///
/// # Errors
///
/// - [`Error::InvalidParameters`] if a bound is not finite or the config is invalid
/// - [`Error::PreconditionFailed`] if `f(xi) · f(xs)` is not negative
/// - [`Error::Evaluation`] if `f` fails at any evaluated point
pub fn solve<F, Obs>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<RunResult<Record>, Error>
where
    F: Function,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    config.validate()?;

    let [xi, xs] = bracket;
    let mut xi = ParamError::check_seed("xi", xi)?;
    let mut xs = ParamError::check_seed("xs", xs)?;

    require_sign_change(f, xi, xs)?;

    let policy = config.policy(Threshold::Strict);
    let mut iterations = Vec::with_capacity(config.max_iters().min(PREALLOCATED_RECORDS));
    let mut previous_xr = None;
    let (mut root, mut f_root) = (f64::NAN, None);

    for iteration in 1..=config.max_iters() {
        let xr = (xi + xs) / 2.0;
        let fxi = evaluate(f, xi)?;
        let fxs = evaluate(f, xs)?;
        let fxr = evaluate(f, xr)?;

        let error = previous_xr.map(|prev| config.criterion().step_error(xr, prev));
        let stops = policy.should_stop(error, fxr, iteration);

        let record = Record {
            iteration,
            xi,
            xs,
            xr,
            fxi,
            fxs,
            fxr,
            error,
            is_root: iteration > 1 && stops,
            retained: Half::select(fxi, fxr),
        };
        let action = observer.observe(&Event {
            record: &record,
            stops,
        });

        [xi, xs] = record.next_interval();
        (root, f_root) = (xr, Some(fxr));
        previous_xr = Some(xr);
        iterations.push(record);

        if stops {
            return Ok(finish(iterations, root, f_root, Status::Converged));
        }
        if let Some(Action::StopEarly) = action {
            return Ok(finish(iterations, root, f_root, Status::StoppedByObserver));
        }
    }

    Ok(finish(iterations, root, f_root, Status::MaxIters))
}

/// Runs bisection without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<F: Function>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
) -> Result<RunResult<Record>, Error> {
    solve(f, bracket, config, ())
}

fn finish(
    iterations: Vec<Record>,
    root: f64,
    f_root: Option<f64>,
    status: Status,
) -> RunResult<Record> {
    RunResult {
        status,
        root,
        f_root,
        iterations,
    }
}
