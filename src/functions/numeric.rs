use crate::context::{Arity, Function, MathContextBuilder};
use crate::error::ExpressionResult;
use mathengine_macros::math_fn;

pub fn register(builder: &mut MathContextBuilder) {
    let unary: [(&str, fn(&[f64]) -> ExpressionResult<f64>); 8] = [
        ("sqrt", sqrt),
        ("ln", ln),
        ("exp", exp),
        ("abs", abs),
        ("floor", floor),
        ("ceil", ceil),
        ("round", round),
        ("truncate", truncate),
    ];

    for (name, call) in unary {
        builder.set_function(Function::new(name, Arity::Fixed(1), call));
    }
}

#[math_fn]
pub fn sqrt(x: f64) -> ExpressionResult<f64> {
    Ok(x.sqrt())
}

#[math_fn]
pub fn ln(x: f64) -> ExpressionResult<f64> {
    Ok(x.ln())
}

#[math_fn]
pub fn exp(x: f64) -> ExpressionResult<f64> {
    Ok(x.exp())
}

#[math_fn]
pub fn abs(x: f64) -> ExpressionResult<f64> {
    Ok(x.abs())
}

#[math_fn]
pub fn floor(x: f64) -> ExpressionResult<f64> {
    Ok(x.floor())
}

#[math_fn]
pub fn ceil(x: f64) -> ExpressionResult<f64> {
    Ok(x.ceil())
}

/// Rounds half-way cases to the nearest even integer.
#[math_fn]
pub fn round(x: f64) -> ExpressionResult<f64> {
    Ok(x.round_ties_even())
}

#[math_fn]
pub fn truncate(x: f64) -> ExpressionResult<f64> {
    Ok(x.trunc())
}
