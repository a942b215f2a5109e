use crate::context::{Arity, Function, MathContextBuilder};
use crate::error::{ExpressionError, ExpressionResult};

pub fn register(builder: &mut MathContextBuilder) {
    builder.set_function(Function::new("sum", Arity::Variadic, sum));
    builder.set_function(Function::new("max", Arity::Variadic, max));
    builder.set_function(Function::new("min", Arity::Variadic, min));
    builder.set_function(Function::new("log", Arity::Variadic, log));
    builder.set_function(Function::new("random", Arity::Variadic, random));
}

fn range_error(name: &str, expected: &str, args: &[f64]) -> ExpressionError {
    ExpressionError::ArgumentRange {
        name: name.to_string(),
        expected: expected.to_string(),
        actual: args.len(),
    }
}

pub fn sum(args: &[f64]) -> ExpressionResult<f64> {
    if args.is_empty() {
        return Err(range_error("sum", "at least 1", args));
    }
    Ok(args.iter().sum())
}

pub fn max(args: &[f64]) -> ExpressionResult<f64> {
    if args.is_empty() {
        return Err(range_error("max", "at least 1", args));
    }
    Ok(args.iter().copied().fold(f64::NEG_INFINITY, f64::max))
}

pub fn min(args: &[f64]) -> ExpressionResult<f64> {
    if args.is_empty() {
        return Err(range_error("min", "at least 1", args));
    }
    Ok(args.iter().copied().fold(f64::INFINITY, f64::min))
}

/// `log(x)` is the base-10 logarithm, `log(x, base)` uses the given base.
pub fn log(args: &[f64]) -> ExpressionResult<f64> {
    match args {
        [value] => Ok(value.log10()),
        [value, base] => Ok(value.log(*base)),
        _ => Err(range_error("log", "1 to 2", args)),
    }
}

/// Uniform sample from `[0, 1)`, `[0, upper)` or `[lower, upper)` depending on
/// how many bounds are given.
pub fn random(args: &[f64]) -> ExpressionResult<f64> {
    let sample: f64 = rand::random();
    match args {
        [] => Ok(sample),
        [upper] => Ok(sample * upper),
        [lower, upper] => Ok(lower + sample * (upper - lower)),
        _ => Err(range_error("random", "0 to 2", args)),
    }
}
