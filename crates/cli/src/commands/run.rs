//! `bolzano run`: solve a problem described in a TOML file.

use tracing::info;

use bolzano_expr::Expression;

use crate::{Result, args::RunArgs, problem::Problem};

use super::{bisect, secant};

/// Runs the run command.
pub fn run(args: &RunArgs) -> Result<()> {
    let problem = Problem::load(&args.path)?;
    info!(path = %args.path.display(), "loaded problem");
    let function = Expression::parse(problem.function())?;

    match problem {
        Problem::Bisection {
            bracket, config, ..
        } => {
            let result = bisect::solve(&function, bracket, &config)?;
            bisect::print(&function, &config, &result, args.format)
        }
        Problem::Secant {
            seeds,
            config,
            divergence_limit,
            ..
        } => {
            let result = secant::solve(&function, seeds, &config, divergence_limit)?;
            secant::print(&function, &config, &result, args.format)
        }
    }
}
