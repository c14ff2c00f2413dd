/// The half of `[xi, xs]` kept for the next iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Half {
    /// `[xi, xr]`: the sign change lies left of the midpoint.
    Left,

    /// `[xr, xs]`: chosen whenever `f(xi) · f(xr)` is not negative.
    Right,
}

impl Half {
    /// Selects the half from the function values at `xi` and `xr`.
    ///
    /// A zero product keeps the right half.
    #[must_use]
    pub fn select(fxi: f64, fxr: f64) -> Self {
        if fxi * fxr < 0.0 {
            Self::Left
        } else {
            Self::Right
        }
    }
}

/// One row of the bisection iteration table.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Record {
    /// Iteration number, starting at 1.
    pub iteration: usize,
    /// Lower end of the interval at the start of the iteration.
    pub xi: f64,
    /// Upper end of the interval at the start of the iteration.
    pub xs: f64,
    /// Midpoint, the candidate root.
    pub xr: f64,
    pub fxi: f64,
    pub fxs: f64,
    pub fxr: f64,
    /// Step error against the previous midpoint; `None` on the first iteration.
    pub error: Option<f64>,
    /// True if the candidate satisfies the stopping criterion.
    pub is_root: bool,
    pub retained: Half,
}

impl Record {
    /// Returns the interval carried into the next iteration.
    #[must_use]
    pub fn next_interval(&self) -> [f64; 2] {
        match self.retained {
            Half::Left => [self.xi, self.xr],
            Half::Right => [self.xr, self.xs],
        }
    }

    /// Returns the width of the interval searched in this iteration.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.xs - self.xi
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn record(xi: f64, xs: f64, retained: Half) -> Record {
        let xr = 0.5 * (xi + xs);
        Record {
            iteration: 1,
            xi,
            xs,
            xr,
            fxi: 0.0,
            fxs: 0.0,
            fxr: 0.0,
            error: None,
            is_root: false,
            retained,
        }
    }

    #[test]
    fn negative_product_keeps_left() {
        assert_eq!(Half::select(-1.0, 0.5), Half::Left);
        assert_eq!(Half::select(2.0, -0.1), Half::Left);
    }

    #[test]
    fn positive_product_keeps_right() {
        assert_eq!(Half::select(-1.0, -0.5), Half::Right);
        assert_eq!(Half::select(3.0, 1.0), Half::Right);
    }

    #[test]
    fn zero_product_keeps_right() {
        assert_eq!(Half::select(0.0, 3.0), Half::Right);
        assert_eq!(Half::select(-2.0, 0.0), Half::Right);
        assert_eq!(Half::select(-0.0, 0.0), Half::Right);
    }

    #[test]
    fn next_interval_follows_retained_half() {
        let [lo, hi] = record(0.0, 2.0, Half::Left).next_interval();
        assert_relative_eq!(lo, 0.0);
        assert_relative_eq!(hi, 1.0);

        let [lo, hi] = record(0.0, 2.0, Half::Right).next_interval();
        assert_relative_eq!(lo, 1.0);
        assert_relative_eq!(hi, 2.0);
    }

    #[test]
    fn width_is_signed() {
        assert_relative_eq!(record(-1.0, 3.0, Half::Left).width(), 4.0);
        assert_relative_eq!(record(3.0, -1.0, Half::Left).width(), -4.0);
    }
}
