use std::f64::consts;

use evalexpr::{
    Context, ContextWithMutableFunctions, ContextWithMutableVariables, EvalexprError,
    EvalexprResult, Function, HashMapContext, Value,
};

/// Names an expression may read besides its functions.
pub(crate) const VARIABLES: [&str; 3] = ["x", "pi", "e"];

const UNARY: [(&str, fn(f64) -> f64); 16] = [
    ("sin", f64::sin),
    ("cos", f64::cos),
    ("tan", f64::tan),
    ("asin", f64::asin),
    ("acos", f64::acos),
    ("atan", f64::atan),
    ("sinh", f64::sinh),
    ("cosh", f64::cosh),
    ("tanh", f64::tanh),
    ("sqrt", f64::sqrt),
    ("cbrt", f64::cbrt),
    ("exp", f64::exp),
    ("ln", f64::ln),
    ("log10", f64::log10),
    ("log2", f64::log2),
    ("abs", f64::abs),
];

/// Builds the evaluation context with constants and math functions.
///
/// The variable `x` is set per evaluation.
pub(crate) fn math_context() -> EvalexprResult<HashMapContext> {
    let mut context = HashMapContext::new();
    context.set_value("pi".into(), Value::Float(consts::PI))?;
    context.set_value("e".into(), Value::Float(consts::E))?;

    for (name, op) in UNARY {
        context.set_function(
            name.into(),
            Function::new(move |argument| Ok(Value::Float(op(argument.as_number()?)))),
        )?;
    }
    context.set_function("log".into(), Function::new(log))?;

    Ok(context)
}

/// The shared math context with `x` bound to one point.
///
/// Reads go through to `inner`, so evaluating never copies the context.
pub(crate) struct AtPoint<'a> {
    inner: &'a HashMapContext,
    x: Value,
}

impl<'a> AtPoint<'a> {
    pub(crate) fn new(inner: &'a HashMapContext, x: f64) -> Self {
        Self {
            inner,
            x: Value::Float(x),
        }
    }
}

impl Context for AtPoint<'_> {
    fn get_value(&self, identifier: &str) -> Option<&Value> {
        if identifier == "x" {
            Some(&self.x)
        } else {
            self.inner.get_value(identifier)
        }
    }

    fn call_function(&self, identifier: &str, argument: &Value) -> EvalexprResult<Value> {
        self.inner.call_function(identifier, argument)
    }

    fn are_builtin_functions_disabled(&self) -> bool {
        self.inner.are_builtin_functions_disabled()
    }

    fn set_builtin_functions_disabled(&mut self, _disabled: bool) -> EvalexprResult<()> {
        Err(EvalexprError::ContextNotMutable)
    }
}

/// Natural logarithm, or logarithm in base `b` for `log(x, b)`.
fn log(argument: &Value) -> EvalexprResult<Value> {
    match argument {
        Value::Tuple(args) => match args.as_slice() {
            [x, base] => Ok(Value::Float(x.as_number()?.log(base.as_number()?))),
            _ => Err(EvalexprError::CustomMessage(format!(
                "log takes 1 or 2 arguments, got {}",
                args.len()
            ))),
        },
        x => Ok(Value::Float(x.as_number()?.ln())),
    }
}
