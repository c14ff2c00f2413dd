/// One row of the secant iteration table.
///
/// Function values and `x_next` are rounded to the configured decimals. The
/// seeds appear unrounded in the first record.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Record {
    /// Iteration number, starting at 1.
    pub iteration: usize,
    pub x_prev: f64,
    pub x_curr: f64,
    /// New candidate from the secant through the two previous points.
    pub x_next: f64,
    pub f_prev: f64,
    pub f_curr: f64,
    /// `f(x_next)`; `None` if `f` failed there and the run ended with this record.
    pub f_next: Option<f64>,
    /// Step error between `x_next` and the previous candidate; `None` on the first iteration.
    pub error: Option<f64>,
    /// True if the candidate satisfies the stopping criterion.
    pub is_root: bool,
}
