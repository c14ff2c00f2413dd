use std::fmt;

use approx::assert_relative_eq;
use bolzano_core::Fallible;

use crate::{Config, Criterion, Error, ParamError, Status};

use super::{Action, Event, Half, solve, solve_unobserved};

fn cubic(x: f64) -> f64 {
    x * x * x - x - 2.0
}

fn square_minus_two(x: f64) -> f64 {
    x * x - 2.0
}

fn config(tolerance: f64, max_iters: usize, criterion: Criterion) -> Config {
    Config::new(tolerance, max_iters, 6, criterion).expect("valid config")
}

#[derive(Debug)]
struct Undefined;

impl fmt::Display for Undefined {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("undefined")
    }
}

impl std::error::Error for Undefined {}

#[test]
fn finds_square_root_of_two() {
    let config = config(1e-6, 100, Criterion::AbsoluteOnFunction);

    let run = solve_unobserved(&square_minus_two, [0.0, 2.0], &config).expect("should solve");

    assert!(run.converged());
    assert!(run.f_root.expect("evaluated").abs() < 1e-6);
    assert_relative_eq!(run.root, 2.0_f64.sqrt(), epsilon = 1e-6);
    assert_eq!(run.iters(), 22);
}

#[test]
fn finds_cubic_root() {
    let config = config(1e-4, 100, Criterion::AbsoluteOnFunction);

    let run = solve_unobserved(&cubic, [-2.0, 2.0], &config).expect("should solve");

    assert_eq!(run.status, Status::Converged);
    assert_relative_eq!(run.root, 1.5214, epsilon = 1e-3);
    assert_eq!(run.iters(), 17);

    let last = run.iterations.last().expect("at least one iteration");
    assert_relative_eq!(run.root, last.xr);
    assert_eq!(run.f_root, Some(last.fxr));
    assert!(last.is_root);
}

#[test]
fn first_iteration_has_no_error() {
    let config = config(1e-4, 100, Criterion::AbsoluteOnFunction);

    let run = solve_unobserved(&cubic, [-2.0, 2.0], &config).expect("should solve");

    let first = &run.iterations[0];
    assert_eq!(first.iteration, 1);
    assert_eq!(first.error, None);
    assert!(!first.is_root);
    assert!(run.iterations[1..].iter().all(|record| record.error.is_some()));
}

#[test]
fn only_the_stopping_iteration_is_a_root() {
    let config = config(1e-4, 100, Criterion::AbsoluteOnFunction);

    let run = solve_unobserved(&cubic, [-2.0, 2.0], &config).expect("should solve");

    let (last, rest) = run.iterations.split_last().expect("at least one iteration");
    assert!(last.is_root);
    assert!(rest.iter().all(|record| !record.is_root));
}

#[test]
fn exact_root_on_first_iteration_stops_without_root_flag() {
    let f = |x: f64| x - 1.0;
    let config = config(1e-12, 50, Criterion::RelativeOnIterate);

    let run = solve_unobserved(&f, [0.0, 2.0], &config).expect("should solve");

    assert!(run.converged());
    assert_eq!(run.iters(), 1);
    assert!(!run.iterations[0].is_root);
    assert_relative_eq!(run.root, 1.0);
}

#[test]
fn interval_halves_each_iteration() {
    let config = config(1e-6, 20, Criterion::FixedIterationCount);

    let run = solve_unobserved(&square_minus_two, [0.0, 2.0], &config).expect("should solve");

    for (k, record) in run.iterations.iter().enumerate() {
        let expected = 2.0 / 2.0_f64.powi(i32::try_from(k).expect("small index"));
        assert_relative_eq!(record.width(), expected);
    }

    for pair in run.iterations.windows(2) {
        let [current, next] = pair else {
            unreachable!("windows of two")
        };
        assert!(next.xi >= current.xi && next.xs <= current.xs);
        assert_eq!([next.xi, next.xs], current.next_interval());
    }
}

#[test]
fn fixed_count_runs_exactly_max_iters() {
    let config = config(1e-6, 7, Criterion::FixedIterationCount);

    let run = solve_unobserved(&cubic, [-2.0, 2.0], &config).expect("should solve");

    assert_eq!(run.status, Status::Converged);
    assert_eq!(run.iters(), 7);
    assert!(run.iterations[6].is_root);
}

#[test]
fn relative_criterion_uses_midpoint_steps() {
    let config = config(1e-3, 100, Criterion::RelativeOnIterate);

    let run = solve_unobserved(&square_minus_two, [0.0, 2.0], &config).expect("should solve");

    assert!(run.converged());
    for pair in run.iterations.windows(2) {
        let [previous, current] = pair else {
            unreachable!("windows of two")
        };
        let expected = ((current.xr - previous.xr) / current.xr).abs();
        assert_relative_eq!(current.error.expect("not the first iteration"), expected);
    }

    let (last, rest) = run.iterations.split_last().expect("at least one iteration");
    assert!(last.error.expect("not the first iteration") < 1e-3);
    assert!(rest[1..].iter().all(|record| record.error.is_some_and(|e| e >= 1e-3)));
}

#[test]
fn absolute_criteria_record_absolute_steps() {
    let config = config(1e-6, 4, Criterion::AbsoluteOnFunction);

    let run = solve_unobserved(&square_minus_two, [0.0, 2.0], &config).expect("should run");

    let errors: Vec<f64> = run.iterations[1..]
        .iter()
        .map(|record| record.error.expect("not the first iteration"))
        .collect();
    assert_eq!(errors, vec![0.5, 0.25, 0.125]);
}

#[test]
fn exhausted_budget_returns_last_estimate() {
    let config = config(1e-12, 5, Criterion::AbsoluteOnFunction);

    let run = solve_unobserved(&cubic, [-2.0, 2.0], &config).expect("should run");

    assert_eq!(run.status, Status::MaxIters);
    assert!(!run.converged());
    assert_eq!(run.iters(), 5);

    let last = run.iterations.last().expect("at least one iteration");
    assert_relative_eq!(run.root, last.xr);
    assert_eq!(run.f_root, Some(last.fxr));
    assert!(run.iterations.iter().all(|record| !record.is_root));
}

#[test]
fn reversed_bracket_still_converges() {
    let config = config(1e-6, 100, Criterion::AbsoluteOnFunction);

    let run = solve_unobserved(&square_minus_two, [2.0, 0.0], &config).expect("should solve");

    assert!(run.converged());
    assert_relative_eq!(run.root, 2.0_f64.sqrt(), epsilon = 1e-6);
}

#[test]
fn zero_product_keeps_right_half() {
    // f(0) is the smallest subnormal, so f(xi) · f(xr) underflows to zero.
    let f = |x: f64| if x == 0.0 { f64::from_bits(1) } else { -x };
    let config = config(1e-6, 1, Criterion::AbsoluteOnFunction);

    let run = solve_unobserved(&f, [0.0, 1.0], &config).expect("sign changes");

    let record = &run.iterations[0];
    assert!(record.fxi * record.fxr == 0.0);
    assert_eq!(record.retained, Half::Right);
    assert_eq!(record.next_interval(), [0.5, 1.0]);
}

#[test]
fn errors_without_sign_change() {
    let f = |x: f64| x * x + 1.0;
    let result = solve_unobserved(&f, [-1.0, 1.0], &Config::default());
    assert!(matches!(result, Err(Error::PreconditionFailed { .. })));
}

#[test]
fn zero_endpoint_fails_precondition() {
    let f = |x: f64| x;
    let result = solve_unobserved(&f, [0.0, 1.0], &Config::default());
    assert!(matches!(result, Err(Error::PreconditionFailed { .. })));
}

#[test]
fn errors_on_non_finite_bounds() {
    let result = solve_unobserved(&cubic, [f64::NAN, 2.0], &Config::default());
    assert!(matches!(
        result,
        Err(Error::InvalidParameters(ParamError::NonFiniteSeed { name: "xi", .. }))
    ));

    let result = solve_unobserved(&cubic, [-2.0, f64::INFINITY], &Config::default());
    assert!(matches!(
        result,
        Err(Error::InvalidParameters(ParamError::NonFiniteSeed { name: "xs", .. }))
    ));
}

#[test]
fn errors_on_invalid_config() {
    let config = Config {
        tolerance: -1.0,
        ..Config::default()
    };
    let err = solve_unobserved(&cubic, [-2.0, 2.0], &config).expect_err("invalid tolerance");
    match err {
        Error::InvalidParameters(param) => assert_eq!(param.field(), "tolerance"),
        other => panic!("unexpected error: {other:?}"),
    }

    let config = Config {
        decimals: 16,
        ..Config::default()
    };
    let err = solve_unobserved(&cubic, [-2.0, 2.0], &config).expect_err("too many decimals");
    match err {
        Error::InvalidParameters(param) => assert_eq!(param.field(), "decimals"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn evaluation_failure_aborts_run() {
    let f = Fallible(|x: f64| if x == 0.75 { Err(Undefined) } else { Ok(x - 0.7) });
    let config = config(1e-9, 50, Criterion::AbsoluteOnFunction);

    let err = solve_unobserved(&f, [0.0, 1.0], &config).expect_err("fails at 0.75");

    assert!(matches!(err, Error::Evaluation { .. }));
    assert_eq!(err.point(), Some(0.75));
}

#[test]
fn observer_can_stop_iteration() {
    let config = config(1e-12, 100, Criterion::AbsoluteOnFunction);

    let mut calls = 0usize;
    let observer = |event: &Event<'_>| {
        calls += 1;
        (event.record.iteration >= 3).then_some(Action::StopEarly)
    };

    let run = solve(&cubic, [-2.0, 2.0], &config, observer).expect("should stop cleanly");

    assert_eq!(run.status, Status::StoppedByObserver);
    assert_eq!(run.iters(), 3);
    assert_eq!(calls, 3);
}

#[test]
fn observer_sees_every_record() {
    let config = config(1e-4, 100, Criterion::AbsoluteOnFunction);

    let mut seen = Vec::new();
    let mut stopping = Vec::new();
    let observer = |event: &Event<'_>| {
        seen.push(*event.record);
        stopping.push(event.stops);
        None::<Action>
    };

    let run = solve(&cubic, [-2.0, 2.0], &config, observer).expect("should solve");

    assert_eq!(seen, run.iterations);
    assert_eq!(stopping.iter().filter(|&&stops| stops).count(), 1);
    assert_eq!(stopping.last(), Some(&true));
}

#[test]
fn repeated_runs_are_identical() {
    let config = config(1e-5, 100, Criterion::RelativeOnIterate);

    let first = solve_unobserved(&cubic, [-2.0, 2.0], &config).expect("should solve");
    let second = solve_unobserved(&cubic, [-2.0, 2.0], &config).expect("should solve");

    assert_eq!(first, second);
}
