//! CLI error type.

use std::path::PathBuf;

use bolzano_expr::ExprError;
use bolzano_solvers::ConfigError;
use thiserror::Error;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid function: {0}")]
    Expression(#[from] ExprError),

    #[error(transparent)]
    Solver(#[from] bolzano_solvers::Error),

    #[error("invalid parameter `{field}`: {0}", field = .0.field())]
    Config(#[from] ConfigError),

    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid problem file: {0}")]
    Problem(#[from] toml::de::Error),

    #[error("cannot encode output: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;
