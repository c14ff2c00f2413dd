use crate::{Error, rounding::round_to};

/// The two points the next secant passes through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Window {
    pub(super) x_prev: f64,
    pub(super) x_curr: f64,
    pub(super) f_prev: f64,
    pub(super) f_curr: f64,
}

impl Window {
    /// Returns the rounded root of the secant line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] if both function values are equal.
    pub(super) fn next_candidate(&self, decimals: u32) -> Result<f64, Error> {
        let Self {
            x_prev,
            x_curr,
            f_prev,
            f_curr,
        } = *self;

        if f_curr == f_prev {
            return Err(Error::DivisionByZero {
                x_prev,
                x_curr,
                fx: f_curr,
            });
        }

        let x_next = (f_curr * x_prev - f_prev * x_curr) / (f_curr - f_prev);
        Ok(round_to(x_next, decimals))
    }

    /// Slides the window forward so `(x_next, f_next)` becomes the current point.
    pub(super) fn shift(&mut self, x_next: f64, f_next: f64) {
        self.x_prev = self.x_curr;
        self.f_prev = self.f_curr;
        self.x_curr = x_next;
        self.f_curr = f_next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn candidate_is_secant_root() {
        let window = Window {
            x_prev: 1.0,
            x_curr: 2.0,
            f_prev: -2.0,
            f_curr: 4.0,
        };
        assert_relative_eq!(window.next_candidate(4).expect("distinct values"), 1.3333);
    }

    #[test]
    fn equal_values_divide_by_zero() {
        let window = Window {
            x_prev: -1.0,
            x_curr: 1.0,
            f_prev: 1.0,
            f_curr: 1.0,
        };
        assert!(matches!(
            window.next_candidate(4),
            Err(Error::DivisionByZero { fx, .. }) if fx == 1.0
        ));
    }

    #[test]
    fn shift_drops_oldest_point() {
        let mut window = Window {
            x_prev: 1.0,
            x_curr: 2.0,
            f_prev: -2.0,
            f_curr: 4.0,
        };
        window.shift(1.3333, -0.9631);
        assert_eq!(
            window,
            Window {
                x_prev: 2.0,
                x_curr: 1.3333,
                f_prev: 4.0,
                f_curr: -0.9631,
            }
        );
    }
}
