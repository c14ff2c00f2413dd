/// Control actions supported by the secant solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop after the current iteration and return the history so far.
    StopEarly,
}
