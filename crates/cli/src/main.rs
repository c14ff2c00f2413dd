//! Bolzano CLI: root finding from the command line.
//!
//! # Commands
//!
//! - `bolzano bisect <f> --xi <a> --xs <b>`: bisection on a sign-changing interval
//! - `bolzano secant <f> --x0 <a> --x1 <b>`: secant method from two seeds
//! - `bolzano check <f> -a <a> -b <b>`: Bolzano sign-change check
//! - `bolzano run <problem.toml>`: solve a problem described in a TOML file
//!
//! Iteration tables go to stdout, as a table or as JSON. Logs go to stderr and
//! are filtered with `RUST_LOG`.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod args;
mod commands;
mod error;
mod problem;
mod render;

pub use error::{CliError, Result};

use args::{BisectArgs, CheckArgs, RunArgs, SecantArgs};

/// Bisection and secant root finding with step-by-step iteration tables.
#[derive(Parser)]
#[command(name = "bolzano")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log every iteration (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find a root by bisection
    Bisect(BisectArgs),

    /// Find a root with the secant method
    Secant(SecantArgs),

    /// Check whether f changes sign on [a, b]
    Check(CheckArgs),

    /// Solve a problem described in a TOML file
    Run(RunArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let outcome = match cli.command {
        Commands::Bisect(args) => commands::bisect::run(&args),
        Commands::Secant(args) => commands::secant::run(&args),
        Commands::Check(args) => commands::check::run(&args),
        Commands::Run(args) => commands::run::run(&args),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!(error = ?err, "command failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
