use std::convert::Infallible;

/// A real function of one variable that solvers can evaluate.
///
/// Implementations must be pure: calling with the same `x` must always give
/// the same result. Evaluation may fail (malformed expression, domain error,
/// division by zero), in which case the solver aborts the run and reports the
/// point where the failure happened.
///
/// Plain closures `Fn(f64) -> f64` implement `Function` and never fail.
/// Wrap a closure returning `Result` in [`Fallible`] to report failures.
pub trait Function {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the function at `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if the function is undefined at `x` or cannot be
    /// evaluated.
    fn call(&self, x: f64) -> Result<f64, Self::Error>;
}

impl<F> Function for F
where
    F: Fn(f64) -> f64,
{
    type Error = Infallible;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        Ok(self(x))
    }
}

/// Adapts a fallible closure into a [`Function`].
///
/// ```
/// use bolzano_core::{Fallible, Function};
///
/// #[derive(Debug)]
/// struct Negative;
///
/// impl std::fmt::Display for Negative {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         f.write_str("negative argument")
///     }
/// }
///
/// impl std::error::Error for Negative {}
///
/// let sqrt = Fallible(|x: f64| if x < 0.0 { Err(Negative) } else { Ok(x.sqrt()) });
///
/// assert_eq!(sqrt.call(4.0).ok(), Some(2.0));
/// assert!(sqrt.call(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Fallible<F>(pub F);

impl<F, E> Function for Fallible<F>
where
    F: Fn(f64) -> Result<f64, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        (self.0)(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fmt;

    use approx::assert_relative_eq;

    #[derive(Debug)]
    struct Undefined;

    impl fmt::Display for Undefined {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("undefined")
        }
    }

    impl std::error::Error for Undefined {}

    fn evaluate<F: Function>(f: &F, x: f64) -> Result<f64, F::Error> {
        f.call(x)
    }

    #[test]
    fn closures_are_functions() {
        let square = |x: f64| x * x - 2.0;
        let value = evaluate(&square, 3.0).expect("infallible");
        assert_relative_eq!(value, 7.0);
    }

    #[test]
    fn fallible_reports_errors() {
        let reciprocal = Fallible(|x: f64| if x == 0.0 { Err(Undefined) } else { Ok(1.0 / x) });

        assert_relative_eq!(evaluate(&reciprocal, 4.0).expect("defined"), 0.25);
        assert!(evaluate(&reciprocal, 0.0).is_err());
    }
}
