//! Problem files for `bolzano run`.
//!
//! ```toml
//! method = "secant"
//! function = "x^3 - x - 2"
//! seeds = [1.0, 2.0]
//!
//! [config]
//! tolerance = 1e-6
//! decimals = 9
//! scale = "percent"
//! ```
//!
//! Missing `config` fields take the solver's defaults.

use std::{fs, path::Path};

use serde::Deserialize;

use bolzano_solvers::{Config, secant};

use crate::{CliError, Result};

/// A root-finding problem read from TOML.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "method", rename_all = "kebab-case")]
pub enum Problem {
    Bisection {
        function: String,
        bracket: [f64; 2],
        #[serde(default)]
        config: Config,
    },
    Secant {
        function: String,
        seeds: [f64; 2],
        #[serde(default)]
        config: secant::Config,
        divergence_limit: Option<f64>,
    },
}

impl Problem {
    /// Reads and parses a problem file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Parses a problem from TOML text.
    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Returns the function text.
    pub fn function(&self) -> &str {
        match self {
            Self::Bisection { function, .. } | Self::Secant { function, .. } => function,
        }
    }
}
