use bolzano_core::Observer;

/// Runs two observers on every event.
///
/// Both observers always see the event. If both return an action, the first
/// observer's action wins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chain<First, Second> {
    first: First,
    second: Second,
}

impl<First, Second> Chain<First, Second> {
    #[must_use]
    pub fn new(first: First, second: Second) -> Self {
        Self { first, second }
    }

    /// Returns both observers.
    pub fn into_inner(self) -> (First, Second) {
        (self.first, self.second)
    }
}

impl<E, A, First, Second> Observer<E, A> for Chain<First, Second>
where
    First: Observer<E, A>,
    Second: Observer<E, A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        let first = self.first.observe(event);
        let second = self.second.observe(event);
        first.or(second)
    }
}
