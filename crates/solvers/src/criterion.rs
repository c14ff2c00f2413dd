//! Stopping criteria and the step error recorded with each iteration.
//!
//! A run stops when the active [`Criterion`] is satisfied or when the function
//! value at the candidate falls below [`EXACT_ROOT_TOL`], whichever comes
//! first. The exact-root override applies to every criterion.

use std::fmt;

/// Function values with magnitude below this are treated as exact roots.
pub const EXACT_ROOT_TOL: f64 = 1e-15;

/// Rule deciding when a solver stops iterating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Criterion {
    /// Stop when `|f(candidate)|` is below the tolerance.
    #[default]
    AbsoluteOnFunction,

    /// Stop when `|candidate - previous| / |candidate|` is below the tolerance.
    ///
    /// Never satisfied on the first iteration, which has no previous candidate.
    RelativeOnIterate,

    /// Stop once the iteration budget is used; the tolerance is ignored.
    FixedIterationCount,
}

impl Criterion {
    /// Returns the step error between two consecutive candidates.
    ///
    /// [`Criterion::RelativeOnIterate`] measures the relative difference,
    /// the other criteria the absolute difference.
    #[must_use]
    pub fn step_error(self, candidate: f64, previous: f64) -> f64 {
        match self {
            Self::RelativeOnIterate => ((candidate - previous) / candidate).abs(),
            Self::AbsoluteOnFunction | Self::FixedIterationCount => (candidate - previous).abs(),
        }
    }

    /// Returns true if the tolerance takes part in the stopping decision.
    #[must_use]
    pub fn uses_tolerance(self) -> bool {
        !matches!(self, Self::FixedIterationCount)
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::AbsoluteOnFunction => "Tolerance (value of f(x))",
            Self::RelativeOnIterate => "Relative error",
            Self::FixedIterationCount => "Number of iterations",
        };
        f.write_str(label)
    }
}

/// How a value is compared against the tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Threshold {
    /// `value < tolerance` satisfies the criterion.
    #[default]
    Strict,

    /// `value <= tolerance` satisfies the criterion.
    Inclusive,
}

impl Threshold {
    fn is_within(self, value: f64, tolerance: f64) -> bool {
        match self {
            Self::Strict => value < tolerance,
            Self::Inclusive => value <= tolerance,
        }
    }
}

/// Stopping policy for a single run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Policy {
    pub criterion: Criterion,
    pub tolerance: f64,
    pub max_iters: usize,
    pub threshold: Threshold,
}

impl Policy {
    /// Returns true if the run should stop at this iteration.
    ///
    /// `error` is `None` when no previous candidate exists.
    #[must_use]
    pub fn should_stop(&self, error: Option<f64>, f_candidate: f64, iteration: usize) -> bool {
        if f_candidate.abs() < EXACT_ROOT_TOL {
            return true;
        }

        match self.criterion {
            Criterion::AbsoluteOnFunction => {
                self.threshold.is_within(f_candidate.abs(), self.tolerance)
            }
            Criterion::RelativeOnIterate => {
                error.is_some_and(|error| self.threshold.is_within(error, self.tolerance))
            }
            Criterion::FixedIterationCount => iteration >= self.max_iters,
        }
    }
}

/// Returns true if a run using `criterion` should stop at this iteration.
///
/// Comparisons against the tolerance are strict.
#[must_use]
pub fn should_stop(
    criterion: Criterion,
    error: Option<f64>,
    f_candidate: f64,
    tolerance: f64,
    iteration: usize,
    max_iters: usize,
) -> bool {
    let policy = Policy {
        criterion,
        tolerance,
        max_iters,
        threshold: Threshold::Strict,
    };
    policy.should_stop(error, f_candidate, iteration)
}
