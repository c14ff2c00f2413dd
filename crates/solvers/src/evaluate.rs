use bolzano_core::Function;

use crate::Error;

/// Evaluates `f` at `x`, tagging any failure with the point.
pub(crate) fn evaluate<F: Function>(f: &F, x: f64) -> Result<f64, Error> {
    f.call(x).map_err(|err| Error::evaluation(x, err))
}
