//! `bolzano bisect`: bisection on a sign-changing interval.

use tracing::info;

use bolzano_expr::Expression;
use bolzano_observers::TraceObserver;
use bolzano_solvers::{Config, RunResult, bisection};

use crate::{
    Result,
    args::BisectArgs,
    render::{self, OutputFormat, Report},
};

/// Runs the bisect command.
pub fn run(args: &BisectArgs) -> Result<()> {
    let function = Expression::parse(&args.solve.function)?;
    let config = args.solve.config(&Config::default())?;

    let result = solve(&function, [args.xi, args.xs], &config)?;
    print(&function, &config, &result, args.solve.format)
}

/// Solves with bisection, tracing every iteration.
pub(crate) fn solve(
    function: &Expression,
    bracket: [f64; 2],
    config: &Config,
) -> Result<RunResult<bisection::Record>> {
    info!(%function, xi = bracket[0], xs = bracket[1], "starting bisection");
    let result = bisection::solve(function, bracket, config, TraceObserver::new("bisection"))?;
    info!(status = ?result.status, root = result.root, iters = result.iters(), "bisection finished");
    Ok(result)
}

pub(crate) fn print(
    function: &Expression,
    config: &Config,
    result: &RunResult<bisection::Record>,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Table => print!("{}", render::bisection_table(result, config.decimals())),
        OutputFormat::Json => println!(
            "{}",
            render::json(&Report {
                function: function.source(),
                method: "bisection",
                config,
                result,
            })?
        ),
    }
    Ok(())
}
