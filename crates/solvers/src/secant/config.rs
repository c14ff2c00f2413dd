use crate::{Config as BaseConfig, ConfigError, Criterion};

/// Scale applied to the relative step error before it is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum ErrorScale {
    /// Record the relative error as a fraction, e.g. `0.05`.
    #[default]
    Fraction,

    /// Record the relative error as a percentage, e.g. `5.0`.
    ///
    /// The tolerance is then read in percent as well.
    Percent,
}

impl ErrorScale {
    /// Applies the scale to a step error measured under `criterion`.
    ///
    /// Absolute step errors are never scaled.
    #[must_use]
    pub fn apply(self, criterion: Criterion, error: f64) -> f64 {
        match (self, criterion) {
            (Self::Percent, Criterion::RelativeOnIterate) => error * 100.0,
            _ => error,
        }
    }
}

/// Configuration for the secant solver.
///
/// Wraps the shared [`Config`](crate::Config) with an [`ErrorScale`]. The
/// defaults differ from the shared ones: 50 iterations and the
/// [`Criterion::RelativeOnIterate`] criterion.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Fields")
)]
pub struct Config {
    #[cfg_attr(feature = "serde-derive", serde(flatten))]
    pub(crate) base: BaseConfig,
    pub(crate) scale: ErrorScale,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base: BaseConfig {
                tolerance: 1e-4,
                max_iters: 50,
                decimals: 4,
                criterion: Criterion::RelativeOnIterate,
            },
            scale: ErrorScale::Fraction,
        }
    }
}

/// Deserialized form: every field is optional and defaults to the secant defaults.
#[cfg(feature = "serde-derive")]
#[derive(serde::Deserialize)]
struct Fields {
    tolerance: Option<f64>,
    max_iters: Option<usize>,
    decimals: Option<u32>,
    criterion: Option<Criterion>,
    scale: Option<ErrorScale>,
}

#[cfg(feature = "serde-derive")]
impl From<Fields> for Config {
    fn from(fields: Fields) -> Self {
        let Self { base, scale } = Self::default();
        Self {
            base: BaseConfig {
                tolerance: fields.tolerance.unwrap_or(base.tolerance),
                max_iters: fields.max_iters.unwrap_or(base.max_iters),
                decimals: fields.decimals.unwrap_or(base.decimals),
                criterion: fields.criterion.unwrap_or(base.criterion),
            },
            scale: fields.scale.unwrap_or(scale),
        }
    }
}

impl From<BaseConfig> for Config {
    fn from(base: BaseConfig) -> Self {
        Self {
            base,
            scale: ErrorScale::default(),
        }
    }
}

impl Config {
    /// Creates a new validated config.
    ///
    /// # Errors
    ///
    /// Returns an error if any shared field is out of range.
    pub fn new(base: BaseConfig, scale: ErrorScale) -> Result<Self, ConfigError> {
        base.validate()?;
        Ok(Self { base, scale })
    }

    /// Returns a copy of this config using `scale`.
    #[must_use]
    pub fn with_scale(self, scale: ErrorScale) -> Self {
        Self { scale, ..self }
    }

    /// Checks the shared fields.
    ///
    /// # Errors
    ///
    /// Returns the first field that is out of range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.base.validate()
    }

    /// Returns the shared solver parameters.
    #[must_use]
    pub fn base(&self) -> &BaseConfig {
        &self.base
    }

    /// Returns the error scale.
    #[must_use]
    pub fn scale(&self) -> ErrorScale {
        self.scale
    }

    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.base.tolerance()
    }

    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.base.max_iters()
    }

    #[must_use]
    pub fn decimals(&self) -> u32 {
        self.base.decimals()
    }

    #[must_use]
    pub fn criterion(&self) -> Criterion {
        self.base.criterion()
    }
}
