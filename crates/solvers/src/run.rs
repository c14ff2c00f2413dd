/// Indicates how a run finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Status {
    /// The stopping criterion was met.
    Converged,

    /// Reached the iteration limit without meeting the criterion.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a solver run.
///
/// `R` is the solver's iteration record type. The root estimate is always the
/// candidate computed by the last recorded iteration, whether or not the run
/// converged.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct RunResult<R> {
    /// Final solver status.
    pub status: Status,

    /// Root estimate from the last iteration.
    pub root: f64,

    /// Function value at the root estimate.
    ///
    /// `None` only for a secant run whose final candidate could not be evaluated.
    pub f_root: Option<f64>,

    /// Every recorded iteration, in order, starting at 1.
    pub iterations: Vec<R>,
}

impl<R> RunResult<R> {
    /// Returns true if the stopping criterion was met.
    #[must_use]
    pub fn converged(&self) -> bool {
        self.status == Status::Converged
    }

    /// Returns the number of recorded iterations.
    #[must_use]
    pub fn iters(&self) -> usize {
        self.iterations.len()
    }
}

/// Upper bound on the iteration history preallocated before a run.
pub(crate) const PREALLOCATED_RECORDS: usize = 256;
