//! `bolzano secant`: secant method from two seeds.

use tracing::info;

use bolzano_expr::Expression;
use bolzano_observers::{Chain, DivergenceGuard, TraceObserver};
use bolzano_solvers::{
    RunResult,
    secant::{self, ErrorScale},
};

use crate::{
    Result,
    args::SecantArgs,
    render::{self, OutputFormat, Report},
};

/// Runs the secant command.
pub fn run(args: &SecantArgs) -> Result<()> {
    let function = Expression::parse(&args.solve.function)?;
    let defaults = secant::Config::default();
    let scale = if args.percent {
        ErrorScale::Percent
    } else {
        ErrorScale::Fraction
    };
    let config = secant::Config::new(args.solve.config(defaults.base())?, scale)?;

    let result = solve(&function, [args.x0, args.x1], &config, args.divergence_limit)?;
    print(&function, &config, &result, args.solve.format)
}

/// Solves with the secant method, tracing every iteration.
///
/// With a `divergence_limit`, the run stops once `|f|` exceeds it.
pub(crate) fn solve(
    function: &Expression,
    seeds: [f64; 2],
    config: &secant::Config,
    divergence_limit: Option<f64>,
) -> Result<RunResult<secant::Record>> {
    info!(%function, x0 = seeds[0], x1 = seeds[1], "starting secant");
    let trace = TraceObserver::new("secant");
    let result = match divergence_limit {
        Some(limit) => secant::solve(
            function,
            seeds,
            config,
            Chain::new(trace, DivergenceGuard::new(limit)?),
        )?,
        None => secant::solve(function, seeds, config, trace)?,
    };
    info!(status = ?result.status, root = result.root, iters = result.iters(), "secant finished");
    Ok(result)
}

pub(crate) fn print(
    function: &Expression,
    config: &secant::Config,
    result: &RunResult<secant::Record>,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Table => print!("{}", render::secant_table(result, config.decimals())),
        OutputFormat::Json => println!(
            "{}",
            render::json(&Report {
                function: function.source(),
                method: "secant",
                config,
                result,
            })?
        ),
    }
    Ok(())
}
