//! Secant method for roots of a single-variable function.
//!
//! # Algorithm
//!
//! Starting from two seeds `x0` and `x1`, each iteration draws the secant
//! through the two most recent points and takes its root as the next
//! candidate:
//!
//! ```text
//! x_next = (f_curr · x_prev − f_prev · x_curr) / (f_curr − f_prev)
//! ```
//!
//! No sign change is required, so the method can diverge or stall.
//!
//! # Precision
//!
//! Every function value, every candidate and every recorded error is rounded
//! to `decimals` fractional digits (see [`rounding`](crate::rounding)) before
//! it is used again. Results therefore depend on `decimals`, and a stalled
//! candidate can make both function values equal, which ends the run with
//! [`Error::DivisionByZero`].
//!
//! # Stopping
//!
//! The active [`Criterion`](crate::Criterion) is compared inclusively
//! (`error <= tolerance` stops). The step error compares each candidate to the
//! previous one, so the first iteration never carries an error. A candidate
//! where `f` cannot be evaluated never satisfies the absolute criterion.

mod action;
mod config;
mod event;
mod record;
mod window;


pub use action::Action;
pub use config::{Config, ErrorScale};
pub use event::Event;
pub use record::Record;

use bolzano_core::{Function, Observer};

use crate::{
    Error, ParamError, RunResult, Status,
    criterion::Threshold,
    evaluate::evaluate,
    rounding::round_to,
    run::PREALLOCATED_RECORDS,
};

use window::Window;

/// Finds a root of `f` starting from the seeds `[x0, x1]` using the secant method.
///
/// The observer receives an [`Event`] after each iteration is recorded.
///
/// # Errors
///
/// - [`Error::InvalidParameters`] if a seed is not finite or the config is invalid
/// - [`Error::Evaluation`] if `f` fails at a seed, or at a candidate the
///   window has to move onto
/// - [`Error::DivisionByZero`] if the two rounded function values of the window are equal
///
/// A failure at the final candidate does not discard the run: the last
/// record then has no `f_next` and the result has no `f_root`.
pub fn solve<F, Obs>(
    f: &F,
    seeds: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<RunResult<Record>, Error>
where
    F: Function,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    config.validate()?;

    let [x0, x1] = seeds;
    let x0 = ParamError::check_seed("x0", x0)?;
    let x1 = ParamError::check_seed("x1", x1)?;

    let decimals = config.decimals();
    let criterion = config.criterion();
    let policy = config.base().policy(Threshold::Inclusive);
    let eval = |x: f64| evaluate(f, x).map(|fx| round_to(fx, decimals));

    let mut window = Window {
        x_prev: x0,
        x_curr: x1,
        f_prev: eval(x0)?,
        f_curr: eval(x1)?,
    };
    let mut x_next = window.next_candidate(decimals)?;
    let mut f_next = eval(x_next);
    let mut error = None;

    let mut iterations = Vec::with_capacity(config.max_iters().min(PREALLOCATED_RECORDS));

    for iteration in 1..=config.max_iters() {
        if iteration > 1 {
            // The window moves onto the last candidate, so its value is needed now.
            let previous = x_next;
            window.shift(x_next, f_next?);
            x_next = window.next_candidate(decimals)?;
            f_next = eval(x_next);

            let step = config.scale().apply(criterion, criterion.step_error(x_next, previous));
            error = Some(round_to(step, decimals));
        }

        let fx = f_next.as_ref().ok().copied();
        // NaN satisfies neither the exact-root check nor the absolute criterion.
        let stops = policy.should_stop(error, fx.unwrap_or(f64::NAN), iteration);
        let record = Record {
            iteration,
            x_prev: window.x_prev,
            x_curr: window.x_curr,
            x_next,
            f_prev: window.f_prev,
            f_curr: window.f_curr,
            f_next: fx,
            error,
            is_root: iteration > 1 && stops,
        };
        let action = observer.observe(&Event {
            record: &record,
            stops,
        });
        iterations.push(record);

        if stops {
            return Ok(finish(iterations, x_next, fx, Status::Converged));
        }
        if let Some(Action::StopEarly) = action {
            return Ok(finish(iterations, x_next, fx, Status::StoppedByObserver));
        }
    }

    let f_root = f_next.ok();
    Ok(finish(iterations, x_next, f_root, Status::MaxIters))
}

/// Runs the secant method without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<F: Function>(
    f: &F,
    seeds: [f64; 2],
    config: &Config,
) -> Result<RunResult<Record>, Error> {
    solve(f, seeds, config, ())
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
