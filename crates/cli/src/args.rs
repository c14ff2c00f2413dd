//! Command-line arguments shared by the solver commands.

use std::path::PathBuf;

use clap::{Args, ValueEnum};

use bolzano_solvers::{Config, ConfigError, Criterion, MAX_DECIMALS};

use crate::render::OutputFormat;

/// Stopping criterion as named on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CriterionArg {
    /// Stop when |f(x)| is below the tolerance
    Tolerance,
    /// Stop when the relative step is below the tolerance
    Relative,
    /// Run exactly --max-iters iterations
    Iterations,
}

impl From<CriterionArg> for Criterion {
    fn from(arg: CriterionArg) -> Self {
        match arg {
            CriterionArg::Tolerance => Self::AbsoluteOnFunction,
            CriterionArg::Relative => Self::RelativeOnIterate,
            CriterionArg::Iterations => Self::FixedIterationCount,
        }
    }
}

/// Parameters common to both solvers; unset values fall back to the solver's defaults.
#[derive(Debug, Clone, Args)]
pub struct SolveArgs {
    /// Function of x, e.g. "x^3 - x - 2"
    pub function: String,

    /// Stopping tolerance
    #[arg(short, long)]
    pub tolerance: Option<f64>,

    /// Maximum number of iterations
    #[arg(short = 'n', long)]
    pub max_iters: Option<usize>,

    /// Decimal places shown (and used in secant arithmetic)
    #[arg(short, long)]
    pub decimals: Option<u32>,

    /// Stopping criterion
    #[arg(short, long, value_enum)]
    pub criterion: Option<CriterionArg>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl SolveArgs {
    /// Builds a validated config, overriding `defaults` with the given values.
    pub fn config(&self, defaults: &Config) -> Result<Config, ConfigError> {
        Config::new(
            self.tolerance.unwrap_or(defaults.tolerance()),
            self.max_iters.unwrap_or(defaults.max_iters()),
            self.decimals.unwrap_or(defaults.decimals()),
            self.criterion.map_or(defaults.criterion(), Criterion::from),
        )
    }
}

#[derive(Debug, Clone, Args)]
pub struct BisectArgs {
    #[command(flatten)]
    pub solve: SolveArgs,

    /// Lower end of the interval
    #[arg(long, allow_negative_numbers = true)]
    pub xi: f64,

    /// Upper end of the interval
    #[arg(long, allow_negative_numbers = true)]
    pub xs: f64,
}

#[derive(Debug, Clone, Args)]
pub struct SecantArgs {
    #[command(flatten)]
    pub solve: SolveArgs,

    /// First seed
    #[arg(long, allow_negative_numbers = true)]
    pub x0: f64,

    /// Second seed
    #[arg(long, allow_negative_numbers = true)]
    pub x1: f64,

    /// Report the relative error in percent
    #[arg(long)]
    pub percent: bool,

    /// Stop once |f(x)| exceeds this value
    #[arg(long)]
    pub divergence_limit: Option<f64>,
}

#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    /// Function of x
    pub function: String,

    /// Left end of the interval
    #[arg(short, allow_negative_numbers = true)]
    pub a: f64,

    /// Right end of the interval
    #[arg(short, allow_negative_numbers = true)]
    pub b: f64,

    /// Decimal places shown
    #[arg(short, long, default_value_t = 4)]
    pub decimals: u32,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl CheckArgs {
    /// Returns the requested decimal places once they are in range.
    pub fn decimals(&self) -> Result<u32, ConfigError> {
        if self.decimals > MAX_DECIMALS {
            Err(ConfigError::Decimals)
        } else {
            Ok(self.decimals)
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct RunArgs {
    /// Path to the problem file
    pub path: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}
