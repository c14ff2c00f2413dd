//! Text expressions in the variable `x`, evaluated with [`evalexpr`].
//!
//! An [`Expression`] is parsed once and then evaluated at any point. It
//! implements [`bolzano_core::Function`], so it can be handed directly to the
//! bisection and secant solvers.
//!
//! ```
//! use bolzano_core::Function;
//! use bolzano_expr::Expression;
//!
//! let f = Expression::parse("x^3 - x - 2").unwrap();
//! assert_eq!(f.call(2.0).unwrap(), 4.0);
//! ```
//!
//! # Syntax
//!
//! The grammar is `evalexpr`'s, with adjustments for hand-written math:
//!
//! - number literals are always real, so `1/2` is `0.5`
//! - a number directly followed by a name or `(` multiplies it: `2x`, `3(x + 1)`
//! - so does a variable followed by `(`, and a `)` followed by a name, number
//!   or `(`: `x(x + 1)`, `(x + 1)(x - 1)`
//! - chained powers group from the right, so `x^2^3` is `x^(2^3)`
//!
//! Available names are `x`, the constants `pi` and `e`, and the functions
//! `sin cos tan asin acos atan sinh cosh tanh sqrt cbrt exp ln log log10 log2
//! abs`. `log(x)` is the natural logarithm; `log(x, b)` uses base `b`.

mod context;
mod error;
mod expression;
mod normalize;

pub use error::ExprError;
pub use expression::Expression;
