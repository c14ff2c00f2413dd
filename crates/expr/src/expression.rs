use std::{fmt, str::FromStr};

use bolzano_core::Function;
use evalexpr::{HashMapContext, Node, build_operator_tree};

use crate::{
    ExprError,
    context::{AtPoint, VARIABLES, math_context},
    normalize::normalize,
};

/// A parsed expression in the variable `x`.
///
/// Parsing checks the syntax and the variable names; errors that depend on
/// `x`, such as `sqrt` of a negative number, surface on evaluation.
#[derive(Debug, Clone)]
pub struct Expression {
    source: String,
    tree: Node,
    context: HashMapContext,
}

impl Expression {
    /// Parses `input`.
    ///
    /// # Errors
    ///
    /// Returns [`ExprError::Empty`] for blank input, [`ExprError::Parse`] for
    /// invalid syntax and [`ExprError::UnknownVariable`] for names other than
    /// `x`, `pi` and `e`.
    pub fn parse(input: &str) -> Result<Self, ExprError> {
        let source = input.trim();
        if source.is_empty() {
            return Err(ExprError::Empty);
        }

        let tree = build_operator_tree(&normalize(source)).map_err(|source_err| {
            ExprError::Parse {
                input: source.to_owned(),
                source: source_err,
            }
        })?;

        if let Some(name) = tree
            .iter_variable_identifiers()
            .find(|name| !VARIABLES.contains(name))
        {
            return Err(ExprError::UnknownVariable(name.to_owned()));
        }

        let context = math_context().map_err(|err| ExprError::Parse {
            input: source.to_owned(),
            source: err,
        })?;

        Ok(Self {
            source: source.to_owned(),
            tree,
            context,
        })
    }

    /// Returns the expression as written, without surrounding whitespace.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Evaluates the expression at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`ExprError::Eval`] if evaluation fails and
    /// [`ExprError::NonFinite`] if the result is infinite or NaN.
    pub fn eval(&self, x: f64) -> Result<f64, ExprError> {
        let value = self
            .tree
            .eval_number_with_context(&AtPoint::new(&self.context, x))
            .map_err(|source| ExprError::Eval { x, source })?;

        if value.is_finite() {
            Ok(value)
        } else {
            Err(ExprError::NonFinite { x, value })
        }
    }
}

impl Function for Expression {
    type Error = ExprError;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        self.eval(x)
    }
}

impl FromStr for Expression {
    type Err = ExprError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn eval(input: &str, x: f64) -> f64 {
        Expression::parse(input)
            .expect("valid expression")
            .eval(x)
            .expect("finite value")
    }

    #[test]
    fn evaluates_polynomials() {
        assert_relative_eq!(eval("x^3 - x - 2", 2.0), 4.0);
        assert_relative_eq!(eval("x*x - 2", 0.5), -1.75);
    }

    #[test]
    fn integer_division_is_real() {
        assert_relative_eq!(eval("1/2", 0.0), 0.5);
        assert_relative_eq!(eval("x/4", 1.0), 0.25);
    }

    #[test]
    fn accepts_implicit_products() {
        assert_relative_eq!(eval("2x + 1", 3.0), 7.0);
        assert_relative_eq!(eval("3(x + 1)", 1.0), 6.0);
        assert_relative_eq!(eval("2pi", 0.0), 2.0 * std::f64::consts::PI);
        assert_relative_eq!(eval("x(x + 1)", 2.0), 6.0);
        assert_relative_eq!(eval("(x + 1)(x - 1)", 3.0), 8.0);
        assert_relative_eq!(eval("(x + 1)x", 2.0), 6.0);
        assert_relative_eq!(eval("sin(x)cos(x)", 0.0), 0.0);
    }

    #[test]
    fn powers_group_from_the_right() {
        assert_relative_eq!(eval("x^2^3", 2.0), 256.0);
        assert_relative_eq!(eval("(x^2)^3", 2.0), 64.0);
        assert_relative_eq!(eval("2^x^2", 3.0), 512.0);
        assert_relative_eq!(eval("-x^2", 3.0), -9.0);
    }

    #[test]
    fn evaluations_do_not_leak_between_points() {
        let f = Expression::parse("x^2 - 2").expect("valid expression");
        assert_relative_eq!(f.eval(3.0).expect("finite"), 7.0);
        assert_relative_eq!(f.eval(1.0).expect("finite"), -1.0);
        assert_relative_eq!(f.eval(3.0).expect("finite"), 7.0);
    }

    #[test]
    fn knows_math_functions() {
        assert_relative_eq!(eval("cos(x) - x", 0.0), 1.0);
        assert_relative_eq!(eval("exp(x) - e", 1.0), 0.0);
        assert_relative_eq!(eval("log10(x)", 1000.0), 3.0, epsilon = 1e-12);
        assert_relative_eq!(eval("abs(x) + cbrt(27)", -2.0), 5.0, epsilon = 1e-12);
        assert_relative_eq!(eval("x - 1e-3", 1.0), 0.999);
    }

    #[test]
    fn rejects_blank_input() {
        assert!(matches!(Expression::parse("   "), Err(ExprError::Empty)));
    }

    #[test]
    fn rejects_bad_syntax() {
        let err = Expression::parse("(x + 2").expect_err("bad syntax");
        assert!(matches!(err, ExprError::Parse { .. }));
        assert_eq!(err.point(), None);
    }

    #[test]
    fn rejects_other_variables() {
        let err = Expression::parse("x + y").expect_err("unknown variable");
        assert_eq!(err, ExprError::UnknownVariable("y".to_owned()));
    }

    #[test]
    fn non_finite_results_are_errors() {
        let f = Expression::parse("1/x").expect("valid expression");
        let err = f.eval(0.0).expect_err("division by zero");
        assert!(matches!(err, ExprError::NonFinite { .. }));
        assert_eq!(err.point(), Some(0.0));

        let f = Expression::parse("sqrt(x)").expect("valid expression");
        assert!(matches!(f.eval(-1.0), Err(ExprError::NonFinite { .. })));
    }

    #[test]
    fn unknown_functions_fail_on_evaluation() {
        let f = Expression::parse("gamma(x)").expect("syntax is valid");
        let err = f.call(1.0).expect_err("unknown function");
        assert!(matches!(err, ExprError::Eval { x, .. } if x == 1.0));
    }

    #[test]
    fn keeps_source_text() {
        let f: Expression = "  x^2 - 2 ".parse().expect("valid expression");
        assert_eq!(f.source(), "x^2 - 2");
        assert_eq!(f.to_string(), "x^2 - 2");
    }
}
