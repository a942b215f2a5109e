use crate::context::{Arity, Function, MathContextBuilder};
use crate::error::ExpressionResult;
use mathengine_macros::math_fn;

pub fn register(builder: &mut MathContextBuilder) {
    let functions: [(&str, fn(&[f64]) -> ExpressionResult<f64>); 24] = [
        ("sin", sin),
        ("cos", cos),
        ("tan", tan),
        ("csc", csc),
        ("sec", sec),
        ("cot", cot),
        ("sinh", sinh),
        ("cosh", cosh),
        ("tanh", tanh),
        ("csch", csch),
        ("sech", sech),
        ("coth", coth),
        ("asin", asin),
        ("acos", acos),
        ("atan", atan),
        ("acsc", acsc),
        ("asec", asec),
        ("acot", acot),
        ("asinh", asinh),
        ("acosh", acosh),
        ("atanh", atanh),
        ("acsch", acsch),
        ("asech", asech),
        ("acoth", acoth),
    ];

    for (name, call) in functions {
        builder.set_function(Function::new(name, Arity::Fixed(1), call));
    }
}

#[math_fn]
pub fn sin(x: f64) -> ExpressionResult<f64> {
    Ok(x.sin())
}

#[math_fn]
pub fn cos(x: f64) -> ExpressionResult<f64> {
    Ok(x.cos())
}

#[math_fn]
pub fn tan(x: f64) -> ExpressionResult<f64> {
    Ok(x.tan())
}

#[math_fn]
pub fn csc(x: f64) -> ExpressionResult<f64> {
    Ok(1.0 / x.sin())
}

#[math_fn]
pub fn sec(x: f64) -> ExpressionResult<f64> {
    Ok(1.0 / x.cos())
}

#[math_fn]
pub fn cot(x: f64) -> ExpressionResult<f64> {
    Ok(1.0 / x.tan())
}

#[math_fn]
pub fn sinh(x: f64) -> ExpressionResult<f64> {
    Ok(x.sinh())
}

#[math_fn]
pub fn cosh(x: f64) -> ExpressionResult<f64> {
    Ok(x.cosh())
}

#[math_fn]
pub fn tanh(x: f64) -> ExpressionResult<f64> {
    Ok(x.tanh())
}

#[math_fn]
pub fn csch(x: f64) -> ExpressionResult<f64> {
    Ok(1.0 / x.sinh())
}

#[math_fn]
pub fn sech(x: f64) -> ExpressionResult<f64> {
    Ok(1.0 / x.cosh())
}

#[math_fn]
pub fn coth(x: f64) -> ExpressionResult<f64> {
    Ok(1.0 / x.tanh())
}

#[math_fn]
pub fn asin(x: f64) -> ExpressionResult<f64> {
    Ok(x.asin())
}

#[math_fn]
pub fn acos(x: f64) -> ExpressionResult<f64> {
    Ok(x.acos())
}

#[math_fn]
pub fn atan(x: f64) -> ExpressionResult<f64> {
    Ok(x.atan())
}

// The reciprocal inverses map their argument through 1/x first.

#[math_fn]
pub fn acsc(x: f64) -> ExpressionResult<f64> {
    Ok((1.0 / x).asin())
}

#[math_fn]
pub fn asec(x: f64) -> ExpressionResult<f64> {
    Ok((1.0 / x).acos())
}

#[math_fn]
pub fn acot(x: f64) -> ExpressionResult<f64> {
    Ok((1.0 / x).atan())
}

#[math_fn]
pub fn asinh(x: f64) -> ExpressionResult<f64> {
    Ok(x.asinh())
}

#[math_fn]
pub fn acosh(x: f64) -> ExpressionResult<f64> {
    Ok(x.acosh())
}

#[math_fn]
pub fn atanh(x: f64) -> ExpressionResult<f64> {
    Ok(x.atanh())
}

#[math_fn]
pub fn acsch(x: f64) -> ExpressionResult<f64> {
    Ok((1.0 / x).asinh())
}

#[math_fn]
pub fn asech(x: f64) -> ExpressionResult<f64> {
    Ok((1.0 / x).acosh())
}

#[math_fn]
pub fn acoth(x: f64) -> ExpressionResult<f64> {
    Ok((1.0 / x).atanh())
}
