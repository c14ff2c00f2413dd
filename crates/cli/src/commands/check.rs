//! `bolzano check`: Bolzano sign-change check on `[a, b]`.

use tracing::info;

use bolzano_expr::Expression;
use bolzano_solvers::precondition;

use crate::{
    Result,
    args::CheckArgs,
    render::{self, OutputFormat},
};

/// Runs the check command.
pub fn run(args: &CheckArgs) -> Result<()> {
    let decimals = args.decimals()?;
    let function = Expression::parse(&args.function)?;
    let report = precondition::bolzano(&function, args.a, args.b)?;
    info!(%function, satisfied = report.satisfied, "bolzano check");

    match args.format {
        OutputFormat::Table => print!("{}", render::bolzano(&report, decimals)),
        OutputFormat::Json => println!("{}", render::json(&report)?),
    }
    Ok(())
}
