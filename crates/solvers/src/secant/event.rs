use super::Record;

/// Event emitted by the secant solver after each recorded iteration.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    pub record: &'a Record,

    /// True if the stopping criterion is met and this is the last iteration.
    pub stops: bool,
}
